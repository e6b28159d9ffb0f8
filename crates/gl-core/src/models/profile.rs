use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use crate::ErrorLocation;
use serde::{Deserialize, Serialize};

/// User profile within a tenant.
///
/// Controls what a logged-in user may do; plain members only see their own
/// data, promoters manage their lists, staff manage everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Baseline profile assigned when an upsert omits one
    #[default]
    Member,
    /// Owns guest lists and invites members
    Promoter,
    /// Venue staff with full access inside the tenant
    Staff,
}

impl Profile {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Promoter => "promoter",
            Self::Staff => "staff",
        }
    }
}

impl FromStr for Profile {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "member" => Ok(Self::Member),
            "promoter" => Ok(Self::Promoter),
            "staff" => Ok(Self::Staff),
            _ => Err(CoreError::InvalidProfile {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
