//! Domain layer - Core business logic and entities

pub mod datastore;
pub mod error;
pub mod user;

pub use datastore::{Datastore, DatastoreEntity, Key};
pub use error::DomainError;
pub use user::{validate_user, validate_user_id, User, UserRepository, UserValidationError};
