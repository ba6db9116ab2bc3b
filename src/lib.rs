//! User Registry API
//!
//! A JSON CRUD service for user records backed by a key-value datastore:
//! - Repository layer with validation, key derivation and batch semantics
//! - Swappable datastore behind an async trait, with an in-memory engine
//! - HTTP API exposing create/find/update/delete/list under `/v1/users`

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::user::User;
use infrastructure::datastore::InMemoryDatastore;
use infrastructure::user::DatastoreUserRepository;
use tracing::info;

/// Create the application state with all services initialized
pub fn create_app_state() -> AppState {
    info!("Using in-memory datastore");

    let store = Arc::new(InMemoryDatastore::<User>::new());
    let users = Arc::new(DatastoreUserRepository::new(store));

    AppState::new(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_app_state_wires_empty_repository() {
        let state = create_app_state();

        let users = state.users.list().await.unwrap();
        assert!(users.is_empty());
    }
}
