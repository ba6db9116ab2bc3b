//! Datastore domain - key-value storage abstraction

mod entity;
mod store;

pub use entity::{DatastoreEntity, Key};
pub use store::Datastore;

#[cfg(test)]
pub use store::mock;
