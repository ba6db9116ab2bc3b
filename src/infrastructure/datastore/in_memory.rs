//! In-memory datastore implementation

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::datastore::{Datastore, DatastoreEntity, Key};
use crate::domain::DomainError;

/// Thread-safe in-memory datastore.
///
/// One kind per instance, fixed by the type parameter; entries are keyed by
/// the id portion of each key. Useful for testing and development. Data is
/// lost when the process terminates.
///
/// Batch behavior matches what repositories assume of the real engine:
/// `get_multi` fails on the first missing key, `put_multi` applies every
/// entry under one write lock, and `delete_multi` skips missing keys.
#[derive(Debug)]
pub struct InMemoryDatastore<E>
where
    E: DatastoreEntity,
{
    entities: RwLock<HashMap<String, E>>,
}

impl<E> Default for InMemoryDatastore<E>
where
    E: DatastoreEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryDatastore<E>
where
    E: DatastoreEntity,
{
    /// Creates a new empty in-memory datastore
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a datastore pre-populated with keyed entries
    pub fn with_entries(entries: Vec<(Key, E)>) -> Self {
        let store = Self::new();
        {
            let mut map = store.entities.write().unwrap();

            for (key, entity) in entries {
                map.insert(key.id().to_string(), entity);
            }
        }
        store
    }
}

#[async_trait]
impl<E> Datastore<E> for InMemoryDatastore<E>
where
    E: DatastoreEntity + 'static,
{
    async fn get(&self, key: &Key) -> Result<Option<E>, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entities.get(key.id()).cloned())
    }

    async fn put(&self, key: &Key, entity: &E) -> Result<(), DomainError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        entities.insert(key.id().to_string(), entity.clone());
        Ok(())
    }

    async fn delete(&self, key: &Key) -> Result<bool, DomainError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(entities.remove(key.id()).is_some())
    }

    async fn get_multi(&self, keys: &[Key]) -> Result<Vec<E>, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        keys.iter()
            .map(|key| {
                entities
                    .get(key.id())
                    .cloned()
                    .ok_or_else(|| DomainError::storage(format!("No entity for key '{}'", key)))
            })
            .collect()
    }

    async fn put_multi(&self, keys: &[Key], values: &[E]) -> Result<(), DomainError> {
        if keys.len() != values.len() {
            return Err(DomainError::storage(format!(
                "Key and entity counts do not match: {} vs {}",
                keys.len(),
                values.len()
            )));
        }

        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        for (key, entity) in keys.iter().zip(values.iter()) {
            entities.insert(key.id().to_string(), entity.clone());
        }
        Ok(())
    }

    async fn delete_multi(&self, keys: &[Key]) -> Result<(), DomainError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        for key in keys {
            entities.remove(key.id());
        }
        Ok(())
    }

    async fn scan(&self, limit: usize) -> Result<Vec<(Key, E)>, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut rows: Vec<(Key, E)> = entities
            .iter()
            .map(|(id, entity)| (Key::new(E::KIND, id.clone()), entity.clone()))
            .collect();

        // Newest first; ids break creation-time ties so the order is stable
        rows.sort_by(|(a_key, a), (b_key, b)| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a_key.id().cmp(b_key.id()))
        });
        rows.truncate(limit);

        Ok(rows)
    }
}
