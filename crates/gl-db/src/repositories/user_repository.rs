//! User repository: lookups, conditional upserts and the append-only
//! penalty / list-history columns.
//!
//! The CPF is the natural key. `upsert` is a single conditional statement so
//! concurrent writers for the same CPF merge field-wise instead of racing a
//! read-then-write; the UNIQUE constraint guarantees one row per CPF. The
//! password column is written only by `set_password`, never by `upsert`.

use crate::repositories::with_store;
use crate::{DbError, Result as DbErrorResult, TenantContext};

use gl_core::{Gender, Penalty, Profile, User};

use std::panic::Location;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use gl_core::{ErrorLocation, ListHistoryEntry};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Fields a caller may change through `upsert`. `None` leaves the stored
/// value untouched; on first insert the column defaults apply instead.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub profile: Option<Profile>,
    pub anniversary: Option<bool>,
    pub cash: Option<f64>,
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, cpf, name, birth_date, phone, gender, profile,
        anniversary, cash, password, penalties, history,
        created_at, updated_at
    FROM users
"#;

pub struct UserRepository {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl UserRepository {
    pub fn new(ctx: &TenantContext) -> Self {
        Self {
            pool: ctx.pool.clone(),
            query_timeout: ctx.query_timeout,
        }
    }

    pub async fn find_by_cpf(&self, cpf: &str) -> DbErrorResult<Option<User>> {
        let pool = &self.pool;
        let query = format!("{} WHERE cpf = ?", SELECT_COLUMNS);
        let query = query.as_str();

        with_store(self.query_timeout, || async move {
            let row = sqlx::query_as::<_, UserRow>(query)
                .bind(cpf)
                .fetch_optional(pool)
                .await?;

            row.map(UserRow::into_user).transpose()
        })
        .await
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let pool = &self.pool;
        let query = format!("{} ORDER BY name", SELECT_COLUMNS);
        let query = query.as_str();

        with_store(self.query_timeout, || async move {
            let rows = sqlx::query_as::<_, UserRow>(query).fetch_all(pool).await?;

            rows.into_iter().map(UserRow::into_user).collect()
        })
        .await
    }

    /// Create-or-update by CPF in one statement. Omitted patch fields keep
    /// the stored value (COALESCE), a missing row is created with defaults.
    /// Returns the row as stored after the write.
    pub async fn upsert(&self, cpf: &str, patch: &UserPatch) -> DbErrorResult<User> {
        let pool = &self.pool;

        let id = Uuid::new_v4().to_string();
        let id = id.as_str();
        let now = Utc::now().timestamp();
        let name = patch.name.as_deref();
        let birth_date = patch.birth_date.map(|d| d.to_string());
        let birth_date = birth_date.as_deref();
        let phone = patch.phone.as_deref();
        let gender = patch.gender.map(|g| g.as_str());
        let profile = patch.profile.map(|p| p.as_str());
        let anniversary = patch.anniversary;
        let cash = patch.cash;

        let select = format!("{} WHERE cpf = ?", SELECT_COLUMNS);
        let select = select.as_str();

        with_store(self.query_timeout, || async move {
            sqlx::query(
                r#"
                    INSERT INTO users (
                        id, cpf, name, birth_date, phone, gender, profile,
                        anniversary, cash, penalties, history, created_at, updated_at
                    ) VALUES (
                        ?, ?, COALESCE(?, ''), ?, ?, ?, COALESCE(?, 'member'),
                        COALESCE(?, 0), COALESCE(?, 0), '[]', '[]', ?, ?
                    )
                    ON CONFLICT(cpf) DO UPDATE SET
                        name = COALESCE(?, name),
                        birth_date = COALESCE(?, birth_date),
                        phone = COALESCE(?, phone),
                        gender = COALESCE(?, gender),
                        profile = COALESCE(?, profile),
                        anniversary = COALESCE(?, anniversary),
                        cash = COALESCE(?, cash),
                        updated_at = ?
                "#,
            )
            .bind(id)
            .bind(cpf)
            .bind(name)
            .bind(birth_date)
            .bind(phone)
            .bind(gender)
            .bind(profile)
            .bind(anniversary)
            .bind(cash)
            .bind(now)
            .bind(now)
            .bind(name)
            .bind(birth_date)
            .bind(phone)
            .bind(gender)
            .bind(profile)
            .bind(anniversary)
            .bind(cash)
            .bind(now)
            .execute(pool)
            .await?;

            let row = sqlx::query_as::<_, UserRow>(select)
                .bind(cpf)
                .fetch_one(pool)
                .await?;

            row.into_user()
        })
        .await
    }

    /// Append a penalty to the user's record. Append-only, insertion order,
    /// no deduplication.
    pub async fn append_penalty(&self, cpf: &str, penalty: &Penalty) -> DbErrorResult<User> {
        let payload = encode_json(penalty, "penalty")?;
        self.append_to_column("penalties", cpf, &payload).await
    }

    /// Append a list join/leave entry to the user's history.
    pub async fn append_history(&self, cpf: &str, entry: &ListHistoryEntry) -> DbErrorResult<User> {
        let payload = encode_json(entry, "history entry")?;
        self.append_to_column("history", cpf, &payload).await
    }

    async fn append_to_column(
        &self,
        column: &'static str,
        cpf: &str,
        payload: &str,
    ) -> DbErrorResult<User> {
        let pool = &self.pool;
        let now = Utc::now().timestamp();

        let update = format!(
            "UPDATE users SET {col} = json_insert({col}, '$[#]', json(?)), updated_at = ? WHERE cpf = ?",
            col = column
        );
        let update = update.as_str();
        let select = format!("{} WHERE cpf = ?", SELECT_COLUMNS);
        let select = select.as_str();

        with_store(self.query_timeout, || async move {
            let result = sqlx::query(update)
                .bind(payload)
                .bind(now)
                .bind(cpf)
                .execute(pool)
                .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::NotFound {
                    entity: "User",
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            let row = sqlx::query_as::<_, UserRow>(select)
                .bind(cpf)
                .fetch_one(pool)
                .await?;

            row.into_user()
        })
        .await
    }

    /// Replace the stored password value. This is the only write path for
    /// the password column; `upsert` never touches it.
    pub async fn set_password(&self, cpf: &str, stored: &str) -> DbErrorResult<()> {
        let pool = &self.pool;
        let now = Utc::now().timestamp();

        with_store(self.query_timeout, || async move {
            let result = sqlx::query("UPDATE users SET password = ?, updated_at = ? WHERE cpf = ?")
                .bind(stored)
                .bind(now)
                .bind(cpf)
                .execute(pool)
                .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::NotFound {
                    entity: "User",
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            Ok(())
        })
        .await
    }
}

fn encode_json<T: serde::Serialize>(value: &T, what: &str) -> DbErrorResult<String> {
    serde_json::to_string(value).map_err(|e| DbError::Decode {
        message: format!("Failed to encode {}: {}", what, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    cpf: String,
    name: String,
    birth_date: Option<String>,
    phone: Option<String>,
    gender: Option<String>,
    profile: String,
    anniversary: bool,
    cash: f64,
    password: Option<String>,
    penalties: String,
    history: String,
    created_at: i64,
    updated_at: i64,
}

impl UserRow {
    fn into_user(self) -> DbErrorResult<User> {
        Ok(User {
            id: Uuid::parse_str(&self.id).map_err(|e| DbError::Decode {
                message: format!("Invalid UUID in users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            cpf: self.cpf,
            name: self.name,
            birth_date: self
                .birth_date
                .map(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d"))
                .transpose()
                .map_err(|e| DbError::Decode {
                    message: format!("Invalid date in users.birth_date: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?,
            phone: self.phone,
            gender: self
                .gender
                .as_deref()
                .map(Gender::from_str)
                .transpose()
                .map_err(|e| DbError::Decode {
                    message: format!("Invalid gender in users.gender: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?,
            profile: Profile::from_str(&self.profile).map_err(|e| DbError::Decode {
                message: format!("Invalid profile in users.profile: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            anniversary: self.anniversary,
            cash: self.cash,
            password: self.password,
            penalties: serde_json::from_str(&self.penalties).map_err(|e| DbError::Decode {
                message: format!("Invalid JSON in users.penalties: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            history: serde_json::from_str(&self.history).map_err(|e| DbError::Decode {
                message: format!("Invalid JSON in users.history: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            created_at: DateTime::from_timestamp(self.created_at, 0).ok_or_else(|| {
                DbError::Decode {
                    message: "Invalid timestamp in users.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: DateTime::from_timestamp(self.updated_at, 0).ok_or_else(|| {
                DbError::Decode {
                    message: "Invalid timestamp in users.updated_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}
