//! User identity record, unique per (tenant, CPF).

use crate::{Gender, ListHistoryEntry, Penalty, Profile};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user inside one tenant's database.
///
/// The CPF is the natural key: lookups, upserts and login all address a user
/// by its normalized (digits-only) CPF. The `id` is the storage identifier
/// embedded in session tokens. Users are never physically deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Normalized CPF, unique within the tenant
    pub cpf: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub profile: Profile,
    /// Birthday guest on the next list they join
    pub anniversary: bool,
    /// Prepaid balance in the venue's currency
    pub cash: f64,
    /// bcrypt hash, or a legacy plaintext value awaiting migration on the
    /// next successful login. `None` means no password set (cannot log in).
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub penalties: Vec<Penalty>,
    pub history: Vec<ListHistoryEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with default values
    pub fn new(cpf: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            cpf,
            name,
            birth_date: None,
            phone: None,
            gender: None,
            profile: Profile::default(),
            anniversary: false,
            cash: 0.0,
            password: None,
            penalties: Vec::new(),
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the user can attempt a password login at all
    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    /// Whether any penalty is still in force at `at`
    pub fn is_penalized_at(&self, at: DateTime<Utc>) -> bool {
        self.penalties.iter().any(|p| p.is_active_at(at))
    }
}
