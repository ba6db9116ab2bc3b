//! User infrastructure module
//!
//! Datastore-backed implementation of the user repository.

mod repository;

pub use repository::DatastoreUserRepository;
