//! Datastore-backed user repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::datastore::{Datastore, DatastoreEntity, Key};
use crate::domain::user::{validate_user, validate_user_id, User, UserRepository};
use crate::domain::DomainError;

/// Listing returns at most this many records, newest first. No cursor, no
/// offset; callers cannot page past the newest records.
const LIST_LIMIT: usize = 20;

/// Datastore-backed implementation of UserRepository.
///
/// Stateless: holds only the store reference. Validation always runs before
/// any write, keys are derived from `id` alone, and timestamps are stamped
/// on the caller's record immediately before the write that persists them.
#[derive(Debug)]
pub struct DatastoreUserRepository {
    store: Arc<dyn Datastore<User>>,
}

impl DatastoreUserRepository {
    /// Create a new datastore-backed repository
    pub fn new(store: Arc<dyn Datastore<User>>) -> Self {
        Self { store }
    }
}

/// Derive keys for a batch lookup; every id must be non-empty to form a
/// complete key.
fn keys_for_ids(ids: &[String]) -> Result<Vec<Key>, DomainError> {
    let mut keys = Vec::with_capacity(ids.len());

    for id in ids {
        validate_user_id(id)?;
        keys.push(User::key_for(id.as_str()));
    }

    Ok(keys)
}

#[async_trait]
impl UserRepository for DatastoreUserRepository {
    async fn create(&self, user: &mut User) -> Result<(), DomainError> {
        validate_user(user)?;

        info!(id = %user.id, name = %user.name, "Creating user");

        let now = Utc::now();
        user.created_at = now;
        user.updated_at = now;

        let key = User::key_for(user.id.as_str());
        self.store.put(&key, user).await
    }

    async fn create_multi(&self, users: &mut [User]) -> Result<(), DomainError> {
        if users.is_empty() {
            return Err(DomainError::EmptyBatch);
        }

        // Validate the whole batch before touching the store
        let mut keys = Vec::with_capacity(users.len());
        for user in users.iter() {
            validate_user(user)?;
            keys.push(User::key_for(user.id.as_str()));
        }

        info!(count = users.len(), "Creating user batch");

        let now = Utc::now();
        for user in users.iter_mut() {
            user.created_at = now;
            user.updated_at = now;
        }

        self.store.put_multi(&keys, users).await
    }

    async fn find(&self, id: &str) -> Result<User, DomainError> {
        let key = User::key_for(id);

        let mut user = self
            .store
            .get(&key)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        // The key is authoritative for identity; the stored blob's id may be
        // stale and is never trusted
        user.id = key.id().to_string();

        Ok(user)
    }

    async fn find_multi(&self, ids: &[String]) -> Result<Vec<User>, DomainError> {
        if ids.is_empty() {
            return Err(DomainError::EmptyBatch);
        }

        let keys = keys_for_ids(ids)?;

        self.store.get_multi(&keys).await
    }

    async fn update(&self, user: &mut User) -> Result<(), DomainError> {
        validate_user_id(&user.id)?;

        info!(id = %user.id, "Updating user");

        user.updated_at = Utc::now();

        let key = User::key_for(user.id.as_str());
        self.store.put(&key, user).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        // Existence check first: deleting an unknown id is an error
        self.find(id).await?;

        info!(id = %id, "Deleting user");

        let key = User::key_for(id);
        let removed = self.store.delete(&key).await?;

        if !removed {
            // Lost the race against a concurrent delete of the same id
            // between the existence check and this call
            return Err(DomainError::storage(format!(
                "User '{}' vanished before deletion",
                id
            )));
        }

        Ok(())
    }

    async fn delete_multi(&self, users: &[User]) -> Result<(), DomainError> {
        if users.is_empty() {
            return Err(DomainError::EmptyBatch);
        }

        // Full-record validation before key derivation, matching create,
        // even though only the id feeds the key
        let mut keys = Vec::with_capacity(users.len());
        for user in users {
            validate_user(user)?;
            keys.push(User::key_for(user.id.as_str()));
        }

        info!(count = keys.len(), "Deleting user batch");

        self.store.delete_multi(&keys).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows = self.store.scan(LIST_LIMIT).await?;

        let users = rows
            .into_iter()
            .map(|(key, mut user)| {
                user.id = key.id().to_string();
                user
            })
            .collect();

        Ok(users)
    }
}
