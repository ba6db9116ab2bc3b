//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::datastore::DatastoreEntity;

/// A user record.
///
/// `id` is externally supplied, immutable once created, and the sole input
/// to key derivation. Timestamps are managed by the repository: freshly
/// constructed records carry the epoch default until `create` stamps them,
/// and `update` refreshes `updated_at` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a user record with unset (epoch) timestamps
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: DateTime::default(),
            updated_at: DateTime::default(),
        }
    }
}

impl DatastoreEntity for User {
    const KIND: &'static str = "User";

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
