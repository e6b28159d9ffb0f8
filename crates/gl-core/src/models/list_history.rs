use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One guest-list membership recorded on a user.
/// `left_at` stays `None` while the user is still on the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListHistoryEntry {
    pub list_id: Uuid,
    pub joined_at: DateTime<Utc>,
    #[serde(default)]
    pub left_at: Option<DateTime<Utc>>,
}

impl ListHistoryEntry {
    pub fn joined_now(list_id: Uuid) -> Self {
        Self {
            list_id,
            joined_at: Utc::now(),
            left_at: None,
        }
    }
}
