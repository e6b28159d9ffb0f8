mod cpf;
mod history;
mod lot;
mod penalty;
mod profile;
mod user;
