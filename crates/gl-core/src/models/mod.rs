pub mod cpf;
pub mod event;
pub mod gender;
pub mod guest_list;
pub mod history;
pub mod list_history;
pub mod lot;
pub mod penalty;
pub mod profile;
pub mod user;
