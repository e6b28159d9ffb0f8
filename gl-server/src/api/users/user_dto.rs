use gl_core::{ListHistoryEntry, Penalty, User};

use serde::Serialize;

/// Wire representation of a user. The password column never leaves the
/// server; only its presence is reported.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub cpf: String,
    pub name: String,
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub profile: String,
    pub anniversary: bool,
    pub cash: f64,
    pub has_password: bool,
    pub penalties: Vec<Penalty>,
    pub history: Vec<ListHistoryEntry>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            cpf: user.cpf,
            name: user.name,
            birth_date: user.birth_date.map(|d| d.to_string()),
            phone: user.phone,
            gender: user.gender.map(|g| g.as_str().to_string()),
            profile: user.profile.as_str().to_string(),
            anniversary: user.anniversary,
            cash: user.cash,
            has_password: user.password.is_some(),
            penalties: user.penalties,
            history: user.history,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}
