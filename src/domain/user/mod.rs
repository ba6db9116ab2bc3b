//! User domain
//!
//! The user record, its validity rule, and the repository contract between
//! the API layer and the datastore.

mod entity;
mod repository;
mod validation;

pub use entity::User;
pub use repository::UserRepository;
pub use validation::{validate_user, validate_user_id, UserValidationError};
