//! Datastore keys and the entity contract

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

/// A complete datastore key: a kind (namespace equal to the entity name)
/// plus the opaque identifier within that kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    kind: &'static str,
    id: String,
}

impl Key {
    pub fn new(kind: &'static str, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn kind(&self) -> &str {
        self.kind
    }

    /// The identifier portion of the key.
    ///
    /// Authoritative for record identity: readers set the returned record's
    /// `id` from here, never from the stored value blob.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

/// Trait for types that can be stored in a datastore
pub trait DatastoreEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    /// The kind (namespace) shared by every key of this entity
    const KIND: &'static str;

    /// Creation timestamp, used by ordered scans
    fn created_at(&self) -> DateTime<Utc>;

    /// Derive the key for an identifier of this kind
    fn key_for(id: impl Into<String>) -> Key {
        Key::new(Self::KIND, id)
    }
}
