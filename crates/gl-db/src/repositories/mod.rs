use crate::{DbError, Result as DbErrorResult};

use gl_core::ErrorLocation;

use std::future::Future;
use std::panic::Location;
use std::time::Duration;

use tokio::time::timeout;

pub mod event_repository;
pub mod guest_list_repository;
pub mod history_repository;
pub mod lot_repository;
pub mod user_repository;

/// Run one store operation under the per-query deadline.
///
/// Transient pool and IO failures get exactly one retry; a second failure
/// surfaces as `Unavailable`. The deadline applies to each attempt
/// separately and surfaces as `Timeout`.
pub(crate) async fn with_store<T, F, Fut>(deadline: Duration, op: F) -> DbErrorResult<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = DbErrorResult<T>>,
{
    match timeout(deadline, op()).await {
        Ok(Ok(value)) => return Ok(value),
        Ok(Err(e)) if !is_transient(&e) => return Err(e),
        Ok(Err(_)) => {}
        Err(_) => {
            return Err(DbError::Timeout {
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }

    match timeout(deadline, op()).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) if !is_transient(&e) => Err(e),
        Ok(Err(_)) => Err(DbError::Unavailable {
            location: ErrorLocation::from(Location::caller()),
        }),
        Err(_) => Err(DbError::Timeout {
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

fn is_transient(error: &DbError) -> bool {
    matches!(
        error,
        DbError::Sqlx {
            source: sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) | sqlx::Error::WorkerCrashed,
            ..
        }
    )
}
