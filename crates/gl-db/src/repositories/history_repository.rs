//! History repository for archived guest list snapshots.
//!
//! Histories are permanent records, so `delete` is a hard delete rather
//! than the soft delete used elsewhere. Attendees live in a JSON column;
//! `upsert_attendee` is a read-then-write because an existing entry is
//! replaced in place, not appended.

use crate::repositories::event_repository::decode_timestamp;
use crate::repositories::with_store;
use crate::{DbError, Result as DbErrorResult, TenantContext};

use gl_core::{ErrorLocation, History, HistoryAttendee};

use std::panic::Location;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

const SELECT_COLUMNS: &str = r#"
    SELECT id, list_id, name, event_name, list_date, joined_at, left_at,
        is_exam, exam_score, attendees, created_at, updated_at
    FROM histories
"#;

pub struct HistoryRepository {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl HistoryRepository {
    pub fn new(ctx: &TenantContext) -> Self {
        Self {
            pool: ctx.pool.clone(),
            query_timeout: ctx.query_timeout,
        }
    }

    pub async fn create(&self, history: &History) -> DbErrorResult<()> {
        let pool = &self.pool;

        let id = history.id.to_string();
        let id = id.as_str();
        let list_id = history.list_id.map(|l| l.to_string());
        let list_id = list_id.as_deref();
        let name = history.name.as_str();
        let event_name = history.event_name.as_deref();
        let list_date = history.list_date.timestamp();
        let joined_at = history.joined_at.timestamp();
        let left_at = history.left_at.map(|dt| dt.timestamp());
        let is_exam = history.is_exam;
        let exam_score = history.exam_score;
        let attendees = encode_attendees(&history.attendees)?;
        let attendees = attendees.as_str();
        let created_at = history.created_at.timestamp();
        let updated_at = history.updated_at.timestamp();

        with_store(self.query_timeout, || async move {
            sqlx::query(
                r#"
                    INSERT INTO histories (
                        id, list_id, name, event_name, list_date, joined_at, left_at,
                        is_exam, exam_score, attendees, created_at, updated_at
                    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(id)
            .bind(list_id)
            .bind(name)
            .bind(event_name)
            .bind(list_date)
            .bind(joined_at)
            .bind(left_at)
            .bind(is_exam)
            .bind(exam_score)
            .bind(attendees)
            .bind(created_at)
            .bind(updated_at)
            .execute(pool)
            .await?;

            Ok(())
        })
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<History>> {
        let pool = &self.pool;
        let id = id.to_string();
        let id = id.as_str();
        let query = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let query = query.as_str();

        with_store(self.query_timeout, || async move {
            let row = sqlx::query_as::<_, HistoryRow>(query)
                .bind(id)
                .fetch_optional(pool)
                .await?;

            row.map(HistoryRow::into_history).transpose()
        })
        .await
    }

    /// All histories, most recent list first.
    pub async fn find_all(&self) -> DbErrorResult<Vec<History>> {
        let pool = &self.pool;
        let query = format!("{} ORDER BY list_date DESC", SELECT_COLUMNS);
        let query = query.as_str();

        with_store(self.query_timeout, || async move {
            let rows = sqlx::query_as::<_, HistoryRow>(query)
                .fetch_all(pool)
                .await?;

            rows.into_iter().map(HistoryRow::into_history).collect()
        })
        .await
    }

    /// Hard delete. A missing history is `NotFound`.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<()> {
        let pool = &self.pool;
        let id = id.to_string();
        let id = id.as_str();

        with_store(self.query_timeout, || async move {
            let result = sqlx::query("DELETE FROM histories WHERE id = ?")
                .bind(id)
                .execute(pool)
                .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::NotFound {
                    entity: "History",
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            Ok(())
        })
        .await
    }

    /// Append an attendee to the archived list. Insertion order, no
    /// deduplication; use `upsert_attendee` to replace an existing entry.
    pub async fn add_attendee(
        &self,
        id: Uuid,
        attendee: &HistoryAttendee,
    ) -> DbErrorResult<History> {
        let pool = &self.pool;
        let id = id.to_string();
        let id = id.as_str();
        let payload = encode_json(attendee, "history attendee")?;
        let payload = payload.as_str();
        let now = Utc::now().timestamp();

        let select = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let select = select.as_str();

        with_store(self.query_timeout, || async move {
            let result = sqlx::query(
                r#"
                    UPDATE histories
                    SET attendees = json_insert(attendees, '$[#]', json(?)), updated_at = ?
                    WHERE id = ?
                "#,
            )
            .bind(payload)
            .bind(now)
            .bind(id)
            .execute(pool)
            .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::NotFound {
                    entity: "History",
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            let row = sqlx::query_as::<_, HistoryRow>(select)
                .bind(id)
                .fetch_one(pool)
                .await?;

            row.into_history()
        })
        .await
    }

    /// Replace the attendee with the same user id, or append when absent.
    /// `exam_score` overwrites the history's score when given.
    pub async fn upsert_attendee(
        &self,
        id: Uuid,
        attendee: &HistoryAttendee,
        exam_score: Option<f64>,
    ) -> DbErrorResult<History> {
        let pool = &self.pool;
        let id = id.to_string();
        let id = id.as_str();
        let now = Utc::now().timestamp();

        let select = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let select = select.as_str();

        with_store(self.query_timeout, || async move {
            let row = sqlx::query_as::<_, HistoryRow>(select)
                .bind(id)
                .fetch_optional(pool)
                .await?;

            let mut history = row
                .map(HistoryRow::into_history)
                .transpose()?
                .ok_or_else(|| DbError::NotFound {
                    entity: "History",
                    location: ErrorLocation::from(Location::caller()),
                })?;

            match history
                .attendees
                .iter_mut()
                .find(|a| a.user_id == attendee.user_id)
            {
                Some(existing) => *existing = attendee.clone(),
                None => history.attendees.push(attendee.clone()),
            }
            if exam_score.is_some() {
                history.exam_score = exam_score;
            }

            let attendees = encode_attendees(&history.attendees)?;
            let attendees = attendees.as_str();

            sqlx::query(
                "UPDATE histories SET attendees = ?, exam_score = ?, updated_at = ? WHERE id = ?",
            )
            .bind(attendees)
            .bind(history.exam_score)
            .bind(now)
            .bind(id)
            .execute(pool)
            .await?;

            history.updated_at = DateTime::from_timestamp(now, 0).unwrap_or(history.updated_at);

            Ok(history)
        })
        .await
    }
}

fn encode_attendees(attendees: &[HistoryAttendee]) -> DbErrorResult<String> {
    encode_json(&attendees, "history attendees")
}

fn encode_json<T: serde::Serialize>(value: &T, what: &str) -> DbErrorResult<String> {
    serde_json::to_string(value).map_err(|e| DbError::Decode {
        message: format!("Failed to encode {}: {}", what, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[derive(sqlx::FromRow)]
struct HistoryRow {
    id: String,
    list_id: Option<String>,
    name: String,
    event_name: Option<String>,
    list_date: i64,
    joined_at: i64,
    left_at: Option<i64>,
    is_exam: bool,
    exam_score: Option<f64>,
    attendees: String,
    created_at: i64,
    updated_at: i64,
}

impl HistoryRow {
    fn into_history(self) -> DbErrorResult<History> {
        Ok(History {
            id: Uuid::parse_str(&self.id).map_err(|e| DbError::Decode {
                message: format!("Invalid UUID in histories.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            list_id: self
                .list_id
                .as_deref()
                .map(Uuid::parse_str)
                .transpose()
                .map_err(|e| DbError::Decode {
                    message: format!("Invalid UUID in histories.list_id: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?,
            name: self.name,
            event_name: self.event_name,
            list_date: decode_timestamp(self.list_date, "histories.list_date")?,
            joined_at: decode_timestamp(self.joined_at, "histories.joined_at")?,
            left_at: self.left_at.and_then(|ts| DateTime::from_timestamp(ts, 0)),
            is_exam: self.is_exam,
            exam_score: self.exam_score,
            attendees: serde_json::from_str(&self.attendees).map_err(|e| DbError::Decode {
                message: format!("Invalid JSON in histories.attendees: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            created_at: decode_timestamp(self.created_at, "histories.created_at")?,
            updated_at: decode_timestamp(self.updated_at, "histories.updated_at")?,
        })
    }
}
