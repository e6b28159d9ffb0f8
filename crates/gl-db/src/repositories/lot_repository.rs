//! Lot repository for CRUD operations on ticket lots.
//!
//! Same soft-delete discipline as events. Buyers live in a JSON column,
//! appended in purchase order; `remove_buyer` filters the array in SQL so
//! concurrent purchases never clobber each other.

use crate::repositories::event_repository::decode_timestamp;
use crate::repositories::with_store;
use crate::{DbError, Result as DbErrorResult, TenantContext};

use gl_core::{ErrorLocation, Lot};

use std::panic::Location;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Fields a caller may change through `update`. `None` keeps the stored
/// value. Buyers are changed only through `add_buyer` / `remove_buyer`.
#[derive(Debug, Clone, Default)]
pub struct LotPatch {
    pub title: Option<String>,
    pub event_id: Option<Uuid>,
    pub quantity: Option<i64>,
    pub value: Option<f64>,
    pub sold_out: Option<bool>,
    pub male_lot: Option<bool>,
    pub female_lot: Option<bool>,
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, title, event_id, quantity, value, sold_out,
        male_lot, female_lot, buyers, created_at, updated_at, deleted_at
    FROM lots
"#;

pub struct LotRepository {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl LotRepository {
    pub fn new(ctx: &TenantContext) -> Self {
        Self {
            pool: ctx.pool.clone(),
            query_timeout: ctx.query_timeout,
        }
    }

    pub async fn create(&self, lot: &Lot) -> DbErrorResult<()> {
        let pool = &self.pool;

        let id = lot.id.to_string();
        let id = id.as_str();
        let title = lot.title.as_str();
        let event_id = lot.event_id.map(|e| e.to_string());
        let event_id = event_id.as_deref();
        let quantity = lot.quantity;
        let value = lot.value;
        let sold_out = lot.sold_out;
        let male_lot = lot.male_lot;
        let female_lot = lot.female_lot;
        let buyers = encode_buyers(&lot.buyers)?;
        let buyers = buyers.as_str();
        let created_at = lot.created_at.timestamp();
        let updated_at = lot.updated_at.timestamp();
        let deleted_at = lot.deleted_at.map(|dt| dt.timestamp());

        with_store(self.query_timeout, || async move {
            sqlx::query(
                r#"
                    INSERT INTO lots (
                        id, title, event_id, quantity, value, sold_out,
                        male_lot, female_lot, buyers, created_at, updated_at, deleted_at
                    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(id)
            .bind(title)
            .bind(event_id)
            .bind(quantity)
            .bind(value)
            .bind(sold_out)
            .bind(male_lot)
            .bind(female_lot)
            .bind(buyers)
            .bind(created_at)
            .bind(updated_at)
            .bind(deleted_at)
            .execute(pool)
            .await?;

            Ok(())
        })
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Lot>> {
        let pool = &self.pool;
        let id = id.to_string();
        let id = id.as_str();
        let query = format!("{} WHERE id = ? AND deleted_at IS NULL", SELECT_COLUMNS);
        let query = query.as_str();

        with_store(self.query_timeout, || async move {
            let row = sqlx::query_as::<_, LotRow>(query)
                .bind(id)
                .fetch_optional(pool)
                .await?;

            row.map(LotRow::into_lot).transpose()
        })
        .await
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Lot>> {
        let pool = &self.pool;
        let query = format!(
            "{} WHERE deleted_at IS NULL ORDER BY created_at",
            SELECT_COLUMNS
        );
        let query = query.as_str();

        with_store(self.query_timeout, || async move {
            let rows = sqlx::query_as::<_, LotRow>(query).fetch_all(pool).await?;

            rows.into_iter().map(LotRow::into_lot).collect()
        })
        .await
    }

    pub async fn find_by_event(&self, event_id: Uuid) -> DbErrorResult<Vec<Lot>> {
        let pool = &self.pool;
        let event_id = event_id.to_string();
        let event_id = event_id.as_str();
        let query = format!(
            "{} WHERE event_id = ? AND deleted_at IS NULL ORDER BY created_at",
            SELECT_COLUMNS
        );
        let query = query.as_str();

        with_store(self.query_timeout, || async move {
            let rows = sqlx::query_as::<_, LotRow>(query)
                .bind(event_id)
                .fetch_all(pool)
                .await?;

            rows.into_iter().map(LotRow::into_lot).collect()
        })
        .await
    }

    /// Partial update. A missing or soft-deleted lot is `NotFound`.
    pub async fn update(&self, id: Uuid, patch: &LotPatch) -> DbErrorResult<Lot> {
        let pool = &self.pool;

        let id = id.to_string();
        let id = id.as_str();
        let now = Utc::now().timestamp();
        let title = patch.title.as_deref();
        let event_id = patch.event_id.map(|e| e.to_string());
        let event_id = event_id.as_deref();
        let quantity = patch.quantity;
        let value = patch.value;
        let sold_out = patch.sold_out;
        let male_lot = patch.male_lot;
        let female_lot = patch.female_lot;

        let select = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let select = select.as_str();

        with_store(self.query_timeout, || async move {
            let result = sqlx::query(
                r#"
                    UPDATE lots
                    SET title = COALESCE(?, title),
                        event_id = COALESCE(?, event_id),
                        quantity = COALESCE(?, quantity),
                        value = COALESCE(?, value),
                        sold_out = COALESCE(?, sold_out),
                        male_lot = COALESCE(?, male_lot),
                        female_lot = COALESCE(?, female_lot),
                        updated_at = ?
                    WHERE id = ? AND deleted_at IS NULL
                "#,
            )
            .bind(title)
            .bind(event_id)
            .bind(quantity)
            .bind(value)
            .bind(sold_out)
            .bind(male_lot)
            .bind(female_lot)
            .bind(now)
            .bind(id)
            .execute(pool)
            .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::NotFound {
                    entity: "Lot",
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            let row = sqlx::query_as::<_, LotRow>(select)
                .bind(id)
                .fetch_one(pool)
                .await?;

            row.into_lot()
        })
        .await
    }

    /// Soft delete. A missing or already-deleted lot is `NotFound`.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<()> {
        let pool = &self.pool;
        let id = id.to_string();
        let id = id.as_str();
        let now = Utc::now().timestamp();

        with_store(self.query_timeout, || async move {
            let result = sqlx::query(
                "UPDATE lots SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
            )
            .bind(now)
            .bind(id)
            .execute(pool)
            .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::NotFound {
                    entity: "Lot",
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            Ok(())
        })
        .await
    }

    /// Append a buyer to the lot. Purchase order, no deduplication.
    pub async fn add_buyer(&self, id: Uuid, user_id: Uuid) -> DbErrorResult<Lot> {
        let pool = &self.pool;
        let id = id.to_string();
        let id = id.as_str();
        let user_id = format!("\"{}\"", user_id);
        let user_id = user_id.as_str();
        let now = Utc::now().timestamp();

        let select = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let select = select.as_str();

        with_store(self.query_timeout, || async move {
            let result = sqlx::query(
                r#"
                    UPDATE lots
                    SET buyers = json_insert(buyers, '$[#]', json(?)), updated_at = ?
                    WHERE id = ? AND deleted_at IS NULL
                "#,
            )
            .bind(user_id)
            .bind(now)
            .bind(id)
            .execute(pool)
            .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::NotFound {
                    entity: "Lot",
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            let row = sqlx::query_as::<_, LotRow>(select)
                .bind(id)
                .fetch_one(pool)
                .await?;

            row.into_lot()
        })
        .await
    }

    /// Remove every occurrence of a buyer from the lot.
    pub async fn remove_buyer(&self, id: Uuid, user_id: Uuid) -> DbErrorResult<Lot> {
        let pool = &self.pool;
        let id = id.to_string();
        let id = id.as_str();
        let user_id = user_id.to_string();
        let user_id = user_id.as_str();
        let now = Utc::now().timestamp();

        let select = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let select = select.as_str();

        with_store(self.query_timeout, || async move {
            let result = sqlx::query(
                r#"
                    UPDATE lots
                    SET buyers = (
                            SELECT json_group_array(value)
                            FROM json_each(buyers)
                            WHERE value <> ?
                        ),
                        updated_at = ?
                    WHERE id = ? AND deleted_at IS NULL
                "#,
            )
            .bind(user_id)
            .bind(now)
            .bind(id)
            .execute(pool)
            .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::NotFound {
                    entity: "Lot",
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            let row = sqlx::query_as::<_, LotRow>(select)
                .bind(id)
                .fetch_one(pool)
                .await?;

            row.into_lot()
        })
        .await
    }
}

fn encode_buyers(buyers: &[Uuid]) -> DbErrorResult<String> {
    serde_json::to_string(buyers).map_err(|e| DbError::Decode {
        message: format!("Failed to encode lot buyers: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[derive(sqlx::FromRow)]
struct LotRow {
    id: String,
    title: String,
    event_id: Option<String>,
    quantity: i64,
    value: f64,
    sold_out: bool,
    male_lot: bool,
    female_lot: bool,
    buyers: String,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl LotRow {
    fn into_lot(self) -> DbErrorResult<Lot> {
        Ok(Lot {
            id: Uuid::parse_str(&self.id).map_err(|e| DbError::Decode {
                message: format!("Invalid UUID in lots.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            title: self.title,
            event_id: self
                .event_id
                .as_deref()
                .map(Uuid::parse_str)
                .transpose()
                .map_err(|e| DbError::Decode {
                    message: format!("Invalid UUID in lots.event_id: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?,
            quantity: self.quantity,
            value: self.value,
            sold_out: self.sold_out,
            male_lot: self.male_lot,
            female_lot: self.female_lot,
            buyers: serde_json::from_str(&self.buyers).map_err(|e| DbError::Decode {
                message: format!("Invalid JSON in lots.buyers: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            created_at: decode_timestamp(self.created_at, "lots.created_at")?,
            updated_at: decode_timestamp(self.updated_at, "lots.updated_at")?,
            deleted_at: self.deleted_at.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }
}
