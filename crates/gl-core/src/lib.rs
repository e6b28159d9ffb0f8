pub mod error;
pub mod models;

pub use error::error_location::ErrorLocation;
pub use error::{CoreError, Result};
pub use models::cpf::normalize_cpf;
pub use models::event::Event;
pub use models::gender::Gender;
pub use models::guest_list::GuestList;
pub use models::history::{History, HistoryAttendee, Ticket};
pub use models::list_history::ListHistoryEntry;
pub use models::lot::Lot;
pub use models::penalty::{Penalty, PenaltyDuration};
pub use models::profile::Profile;
pub use models::user::User;

#[cfg(test)]
mod tests;
