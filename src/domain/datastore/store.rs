//! Datastore trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::{DatastoreEntity, Key};

/// Key-value datastore capability required by repositories.
///
/// One kind per instance. Batch calls submit all keys together; whether the
/// engine applies them atomically is a property of the concrete
/// implementation and must be documented there.
#[async_trait]
pub trait Datastore<E>: Send + Sync + Debug
where
    E: DatastoreEntity + 'static,
{
    /// Retrieves the value at a key; a miss is `None`, not an error
    async fn get(&self, key: &Key) -> Result<Option<E>, DomainError>;

    /// Writes a value at a key, replacing any existing value
    async fn put(&self, key: &Key, entity: &E) -> Result<(), DomainError>;

    /// Removes a key, returning whether it existed
    async fn delete(&self, key: &Key) -> Result<bool, DomainError>;

    /// Batch lookup, all-or-nothing: any key without a value fails the whole
    /// call. On success the result is positional with `keys`.
    async fn get_multi(&self, keys: &[Key]) -> Result<Vec<E>, DomainError>;

    /// Batch write, positional with `keys`
    async fn put_multi(&self, keys: &[Key], entities: &[E]) -> Result<(), DomainError>;

    /// Batch delete; missing keys are skipped, not an error
    async fn delete_multi(&self, keys: &[Key]) -> Result<(), DomainError>;

    /// Scan the kind ordered by creation timestamp descending, capped at
    /// `limit`, returning keys alongside values
    async fn scan(&self, limit: usize) -> Result<Vec<(Key, E)>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock datastore for testing, with failure injection
    #[derive(Debug)]
    pub struct MockDatastore<E>
    where
        E: DatastoreEntity,
    {
        entities: Mutex<HashMap<String, E>>,
        error: Mutex<Option<String>>,
    }

    impl<E> Default for MockDatastore<E>
    where
        E: DatastoreEntity,
    {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<E> MockDatastore<E>
    where
        E: DatastoreEntity,
    {
        pub fn new() -> Self {
            Self {
                entities: Mutex::new(HashMap::new()),
                error: Mutex::new(None),
            }
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            *self.error.lock().unwrap() = Some(error.into());
            self
        }

        fn check_error(&self) -> Result<(), DomainError> {
            if let Some(error) = self.error.lock().unwrap().clone() {
                return Err(DomainError::storage(error));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl<E> Datastore<E> for MockDatastore<E>
    where
        E: DatastoreEntity + 'static,
    {
        async fn get(&self, key: &Key) -> Result<Option<E>, DomainError> {
            self.check_error()?;
            Ok(self.entities.lock().unwrap().get(key.id()).cloned())
        }

        async fn put(&self, key: &Key, entity: &E) -> Result<(), DomainError> {
            self.check_error()?;
            self.entities
                .lock()
                .unwrap()
                .insert(key.id().to_string(), entity.clone());
            Ok(())
        }

        async fn delete(&self, key: &Key) -> Result<bool, DomainError> {
            self.check_error()?;
            Ok(self.entities.lock().unwrap().remove(key.id()).is_some())
        }

        async fn get_multi(&self, keys: &[Key]) -> Result<Vec<E>, DomainError> {
            self.check_error()?;
            let entities = self.entities.lock().unwrap();
            keys.iter()
                .map(|key| {
                    entities
                        .get(key.id())
                        .cloned()
                        .ok_or_else(|| DomainError::storage(format!("No entity for key '{key}'")))
                })
                .collect()
        }

        async fn put_multi(&self, keys: &[Key], entities: &[E]) -> Result<(), DomainError> {
            self.check_error()?;
            let mut stored = self.entities.lock().unwrap();
            for (key, entity) in keys.iter().zip(entities.iter()) {
                stored.insert(key.id().to_string(), entity.clone());
            }
            Ok(())
        }

        async fn delete_multi(&self, keys: &[Key]) -> Result<(), DomainError> {
            self.check_error()?;
            let mut stored = self.entities.lock().unwrap();
            for key in keys {
                stored.remove(key.id());
            }
            Ok(())
        }

        async fn scan(&self, limit: usize) -> Result<Vec<(Key, E)>, DomainError> {
            self.check_error()?;
            let entities = self.entities.lock().unwrap();
            let mut rows: Vec<(Key, E)> = entities
                .iter()
                .map(|(id, entity)| (Key::new(E::KIND, id.clone()), entity.clone()))
                .collect();
            rows.sort_by(|(a_key, a), (b_key, b)| {
                b.created_at()
                    .cmp(&a.created_at())
                    .then_with(|| a_key.id().cmp(b_key.id()))
            });
            rows.truncate(limit);
            Ok(rows)
        }
    }
}
