pub mod api;
pub mod book;
pub mod config;
pub mod error;
pub mod store;

pub use api::{AgendaApi, ContactListBody, ListOutcome};
pub use book::{ContactBook, LoadState};
pub use config::{load_settings, Settings};
pub use error::ClientError;
pub use store::{reduce, Action, AppState};

#[cfg(test)]
mod tests;
