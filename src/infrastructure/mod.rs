//! Infrastructure layer - External service implementations

pub mod datastore;
pub mod logging;
pub mod user;
