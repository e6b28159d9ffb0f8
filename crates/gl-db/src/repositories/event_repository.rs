//! Event repository for CRUD operations on events.
//!
//! Deletes are soft: `deleted_at` is set and the row becomes invisible to
//! every query, which makes a deleted event indistinguishable from one that
//! never existed.

use crate::repositories::with_store;
use crate::{DbError, Result as DbErrorResult, TenantContext};

use gl_core::{ErrorLocation, Event};

use std::panic::Location;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Fields a caller may change through `update`. `None` keeps the stored
/// value.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub owner_id: Option<Uuid>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub base_price: Option<f64>,
    pub female_base_price: Option<f64>,
    pub male_base_price: Option<f64>,
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, title, owner_id, start_date, end_date,
        base_price, female_base_price, male_base_price,
        created_at, updated_at, deleted_at
    FROM events
"#;

pub struct EventRepository {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl EventRepository {
    pub fn new(ctx: &TenantContext) -> Self {
        Self {
            pool: ctx.pool.clone(),
            query_timeout: ctx.query_timeout,
        }
    }

    pub async fn create(&self, event: &Event) -> DbErrorResult<()> {
        let pool = &self.pool;

        let id = event.id.to_string();
        let id = id.as_str();
        let title = event.title.as_str();
        let owner_id = event.owner_id.map(|o| o.to_string());
        let owner_id = owner_id.as_deref();
        let start_date = event.start_date.timestamp();
        let end_date = event.end_date.timestamp();
        let created_at = event.created_at.timestamp();
        let updated_at = event.updated_at.timestamp();
        let deleted_at = event.deleted_at.map(|dt| dt.timestamp());
        let base_price = event.base_price;
        let female_base_price = event.female_base_price;
        let male_base_price = event.male_base_price;

        with_store(self.query_timeout, || async move {
            sqlx::query(
                r#"
                    INSERT INTO events (
                        id, title, owner_id, start_date, end_date,
                        base_price, female_base_price, male_base_price,
                        created_at, updated_at, deleted_at
                    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(id)
            .bind(title)
            .bind(owner_id)
            .bind(start_date)
            .bind(end_date)
            .bind(base_price)
            .bind(female_base_price)
            .bind(male_base_price)
            .bind(created_at)
            .bind(updated_at)
            .bind(deleted_at)
            .execute(pool)
            .await?;

            Ok(())
        })
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Event>> {
        let pool = &self.pool;
        let id = id.to_string();
        let id = id.as_str();
        let query = format!("{} WHERE id = ? AND deleted_at IS NULL", SELECT_COLUMNS);
        let query = query.as_str();

        with_store(self.query_timeout, || async move {
            let row = sqlx::query_as::<_, EventRow>(query)
                .bind(id)
                .fetch_optional(pool)
                .await?;

            row.map(EventRow::into_event).transpose()
        })
        .await
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Event>> {
        let pool = &self.pool;
        let query = format!(
            "{} WHERE deleted_at IS NULL ORDER BY start_date",
            SELECT_COLUMNS
        );
        let query = query.as_str();

        with_store(self.query_timeout, || async move {
            let rows = sqlx::query_as::<_, EventRow>(query).fetch_all(pool).await?;

            rows.into_iter().map(EventRow::into_event).collect()
        })
        .await
    }

    /// Partial update. A missing or soft-deleted event is `NotFound`.
    pub async fn update(&self, id: Uuid, patch: &EventPatch) -> DbErrorResult<Event> {
        let pool = &self.pool;

        let id = id.to_string();
        let id = id.as_str();
        let now = Utc::now().timestamp();
        let title = patch.title.as_deref();
        let owner_id = patch.owner_id.map(|o| o.to_string());
        let owner_id = owner_id.as_deref();
        let start_date = patch.start_date.map(|dt| dt.timestamp());
        let end_date = patch.end_date.map(|dt| dt.timestamp());
        let base_price = patch.base_price;
        let female_base_price = patch.female_base_price;
        let male_base_price = patch.male_base_price;

        let select = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let select = select.as_str();

        with_store(self.query_timeout, || async move {
            let result = sqlx::query(
                r#"
                    UPDATE events
                    SET title = COALESCE(?, title),
                        owner_id = COALESCE(?, owner_id),
                        start_date = COALESCE(?, start_date),
                        end_date = COALESCE(?, end_date),
                        base_price = COALESCE(?, base_price),
                        female_base_price = COALESCE(?, female_base_price),
                        male_base_price = COALESCE(?, male_base_price),
                        updated_at = ?
                    WHERE id = ? AND deleted_at IS NULL
                "#,
            )
            .bind(title)
            .bind(owner_id)
            .bind(start_date)
            .bind(end_date)
            .bind(base_price)
            .bind(female_base_price)
            .bind(male_base_price)
            .bind(now)
            .bind(id)
            .execute(pool)
            .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::NotFound {
                    entity: "Event",
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            let row = sqlx::query_as::<_, EventRow>(select)
                .bind(id)
                .fetch_one(pool)
                .await?;

            row.into_event()
        })
        .await
    }

    /// Soft delete. A missing or already-deleted event is `NotFound`.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<()> {
        let pool = &self.pool;
        let id = id.to_string();
        let id = id.as_str();
        let now = Utc::now().timestamp();

        with_store(self.query_timeout, || async move {
            let result =
                sqlx::query("UPDATE events SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL")
                    .bind(now)
                    .bind(id)
                    .execute(pool)
                    .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::NotFound {
                    entity: "Event",
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            Ok(())
        })
        .await
    }
}

#[derive(sqlx::FromRow)]
struct EventRow {
    id: String,
    title: String,
    owner_id: Option<String>,
    start_date: i64,
    end_date: i64,
    base_price: f64,
    female_base_price: f64,
    male_base_price: f64,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl EventRow {
    fn into_event(self) -> DbErrorResult<Event> {
        Ok(Event {
            id: Uuid::parse_str(&self.id).map_err(|e| DbError::Decode {
                message: format!("Invalid UUID in events.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            title: self.title,
            owner_id: self
                .owner_id
                .as_deref()
                .map(Uuid::parse_str)
                .transpose()
                .map_err(|e| DbError::Decode {
                    message: format!("Invalid UUID in events.owner_id: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?,
            start_date: decode_timestamp(self.start_date, "events.start_date")?,
            end_date: decode_timestamp(self.end_date, "events.end_date")?,
            base_price: self.base_price,
            female_base_price: self.female_base_price,
            male_base_price: self.male_base_price,
            created_at: decode_timestamp(self.created_at, "events.created_at")?,
            updated_at: decode_timestamp(self.updated_at, "events.updated_at")?,
            deleted_at: self.deleted_at.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }
}

pub(crate) fn decode_timestamp(ts: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Decode {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
