//! Guest list repository for CRUD operations on guest lists.
//!
//! Same soft-delete discipline as events. `find_by_event` serves the list
//! views scoped to one event.

use crate::repositories::event_repository::decode_timestamp;
use crate::repositories::with_store;
use crate::{DbError, Result as DbErrorResult, TenantContext};

use gl_core::{ErrorLocation, GuestList};

use std::panic::Location;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Fields a caller may change through `update`. `None` keeps the stored
/// value.
#[derive(Debug, Clone, Default)]
pub struct GuestListPatch {
    pub title: Option<String>,
    pub owner_id: Option<Uuid>,
    pub event_id: Option<Uuid>,
    pub event_name: Option<String>,
    pub is_exam: Option<bool>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, title, owner_id, event_id, event_name, is_exam,
        start_date, end_date, created_at, updated_at, deleted_at
    FROM guest_lists
"#;

pub struct GuestListRepository {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl GuestListRepository {
    pub fn new(ctx: &TenantContext) -> Self {
        Self {
            pool: ctx.pool.clone(),
            query_timeout: ctx.query_timeout,
        }
    }

    pub async fn create(&self, list: &GuestList) -> DbErrorResult<()> {
        let pool = &self.pool;

        let id = list.id.to_string();
        let id = id.as_str();
        let title = list.title.as_str();
        let owner_id = list.owner_id.map(|o| o.to_string());
        let owner_id = owner_id.as_deref();
        let event_id = list.event_id.map(|e| e.to_string());
        let event_id = event_id.as_deref();
        let event_name = list.event_name.as_deref();
        let is_exam = list.is_exam;
        let start_date = list.start_date.timestamp();
        let end_date = list.end_date.timestamp();
        let created_at = list.created_at.timestamp();
        let updated_at = list.updated_at.timestamp();
        let deleted_at = list.deleted_at.map(|dt| dt.timestamp());

        with_store(self.query_timeout, || async move {
            sqlx::query(
                r#"
                    INSERT INTO guest_lists (
                        id, title, owner_id, event_id, event_name, is_exam,
                        start_date, end_date, created_at, updated_at, deleted_at
                    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(id)
            .bind(title)
            .bind(owner_id)
            .bind(event_id)
            .bind(event_name)
            .bind(is_exam)
            .bind(start_date)
            .bind(end_date)
            .bind(created_at)
            .bind(updated_at)
            .bind(deleted_at)
            .execute(pool)
            .await?;

            Ok(())
        })
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<GuestList>> {
        let pool = &self.pool;
        let id = id.to_string();
        let id = id.as_str();
        let query = format!("{} WHERE id = ? AND deleted_at IS NULL", SELECT_COLUMNS);
        let query = query.as_str();

        with_store(self.query_timeout, || async move {
            let row = sqlx::query_as::<_, GuestListRow>(query)
                .bind(id)
                .fetch_optional(pool)
                .await?;

            row.map(GuestListRow::into_guest_list).transpose()
        })
        .await
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<GuestList>> {
        let pool = &self.pool;
        let query = format!(
            "{} WHERE deleted_at IS NULL ORDER BY start_date",
            SELECT_COLUMNS
        );
        let query = query.as_str();

        with_store(self.query_timeout, || async move {
            let rows = sqlx::query_as::<_, GuestListRow>(query)
                .fetch_all(pool)
                .await?;

            rows.into_iter().map(GuestListRow::into_guest_list).collect()
        })
        .await
    }

    pub async fn find_by_event(&self, event_id: Uuid) -> DbErrorResult<Vec<GuestList>> {
        let pool = &self.pool;
        let event_id = event_id.to_string();
        let event_id = event_id.as_str();
        let query = format!(
            "{} WHERE event_id = ? AND deleted_at IS NULL ORDER BY start_date",
            SELECT_COLUMNS
        );
        let query = query.as_str();

        with_store(self.query_timeout, || async move {
            let rows = sqlx::query_as::<_, GuestListRow>(query)
                .bind(event_id)
                .fetch_all(pool)
                .await?;

            rows.into_iter().map(GuestListRow::into_guest_list).collect()
        })
        .await
    }

    /// Partial update. A missing or soft-deleted list is `NotFound`.
    pub async fn update(&self, id: Uuid, patch: &GuestListPatch) -> DbErrorResult<GuestList> {
        let pool = &self.pool;

        let id = id.to_string();
        let id = id.as_str();
        let now = Utc::now().timestamp();
        let title = patch.title.as_deref();
        let owner_id = patch.owner_id.map(|o| o.to_string());
        let owner_id = owner_id.as_deref();
        let event_id = patch.event_id.map(|e| e.to_string());
        let event_id = event_id.as_deref();
        let event_name = patch.event_name.as_deref();
        let is_exam = patch.is_exam;
        let start_date = patch.start_date.map(|dt| dt.timestamp());
        let end_date = patch.end_date.map(|dt| dt.timestamp());

        let select = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let select = select.as_str();

        with_store(self.query_timeout, || async move {
            let result = sqlx::query(
                r#"
                    UPDATE guest_lists
                    SET title = COALESCE(?, title),
                        owner_id = COALESCE(?, owner_id),
                        event_id = COALESCE(?, event_id),
                        event_name = COALESCE(?, event_name),
                        is_exam = COALESCE(?, is_exam),
                        start_date = COALESCE(?, start_date),
                        end_date = COALESCE(?, end_date),
                        updated_at = ?
                    WHERE id = ? AND deleted_at IS NULL
                "#,
            )
            .bind(title)
            .bind(owner_id)
            .bind(event_id)
            .bind(event_name)
            .bind(is_exam)
            .bind(start_date)
            .bind(end_date)
            .bind(now)
            .bind(id)
            .execute(pool)
            .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::NotFound {
                    entity: "Guest list",
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            let row = sqlx::query_as::<_, GuestListRow>(select)
                .bind(id)
                .fetch_one(pool)
                .await?;

            row.into_guest_list()
        })
        .await
    }

    /// Soft delete. A missing or already-deleted list is `NotFound`.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<()> {
        let pool = &self.pool;
        let id = id.to_string();
        let id = id.as_str();
        let now = Utc::now().timestamp();

        with_store(self.query_timeout, || async move {
            let result = sqlx::query(
                "UPDATE guest_lists SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
            )
            .bind(now)
            .bind(id)
            .execute(pool)
            .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::NotFound {
                    entity: "Guest list",
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            Ok(())
        })
        .await
    }
}

#[derive(sqlx::FromRow)]
struct GuestListRow {
    id: String,
    title: String,
    owner_id: Option<String>,
    event_id: Option<String>,
    event_name: Option<String>,
    is_exam: bool,
    start_date: i64,
    end_date: i64,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl GuestListRow {
    fn into_guest_list(self) -> DbErrorResult<GuestList> {
        Ok(GuestList {
            id: Uuid::parse_str(&self.id).map_err(|e| DbError::Decode {
                message: format!("Invalid UUID in guest_lists.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            title: self.title,
            owner_id: self
                .owner_id
                .as_deref()
                .map(Uuid::parse_str)
                .transpose()
                .map_err(|e| DbError::Decode {
                    message: format!("Invalid UUID in guest_lists.owner_id: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?,
            event_id: self
                .event_id
                .as_deref()
                .map(Uuid::parse_str)
                .transpose()
                .map_err(|e| DbError::Decode {
                    message: format!("Invalid UUID in guest_lists.event_id: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?,
            event_name: self.event_name,
            is_exam: self.is_exam,
            start_date: decode_timestamp(self.start_date, "guest_lists.start_date")?,
            end_date: decode_timestamp(self.end_date, "guest_lists.end_date")?,
            created_at: decode_timestamp(self.created_at, "guest_lists.created_at")?,
            updated_at: decode_timestamp(self.updated_at, "guest_lists.updated_at")?,
            deleted_at: self.deleted_at.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }
}
