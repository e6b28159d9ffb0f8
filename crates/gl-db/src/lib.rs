pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::tenant_connection_manager::{TenantConnectionManager, TenantContext};
pub use error::{DbError, Result};
pub use repositories::event_repository::{EventPatch, EventRepository};
pub use repositories::guest_list_repository::{GuestListPatch, GuestListRepository};
pub use repositories::history_repository::HistoryRepository;
pub use repositories::lot_repository::{LotPatch, LotRepository};
pub use repositories::user_repository::{UserPatch, UserRepository};
