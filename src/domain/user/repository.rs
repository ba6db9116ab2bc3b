//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

/// Repository contract for user records.
///
/// Operations validate before they mutate, derive store keys from `id`
/// alone, and stamp timestamps on the caller's record in place. Batch
/// operations are all-or-nothing from this layer's perspective: nothing is
/// submitted to the store unless every record passes validation. The
/// repository never retries; storage failures surface verbatim.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Store one record, stamping `created_at` and `updated_at` to now on
    /// the caller's record before writing.
    ///
    /// Upsert: an existing key is silently overwritten, no existence check.
    async fn create(&self, user: &mut User) -> Result<(), DomainError>;

    /// Store a non-empty batch in one submission, stamping timestamps only
    /// after the whole batch has validated
    async fn create_multi(&self, users: &mut [User]) -> Result<(), DomainError>;

    /// Retrieve one record; the returned `id` is taken from the store key,
    /// not from the stored value
    async fn find(&self, id: &str) -> Result<User, DomainError>;

    /// Retrieve a batch positionally; any missing key fails the whole call
    async fn find_multi(&self, ids: &[String]) -> Result<Vec<User>, DomainError>;

    /// Replace the stored record, stamping `updated_at` only.
    ///
    /// Upsert like `create`, but `created_at` is never reset here; the
    /// caller carries the original value forward.
    async fn update(&self, user: &mut User) -> Result<(), DomainError>;

    /// Remove one record. Deleting an id that does not exist is an error,
    /// not a no-op.
    async fn delete(&self, id: &str) -> Result<(), DomainError>;

    /// Remove a non-empty batch by keys derived from the given records,
    /// without an existence pre-check. Every record must be fully valid.
    async fn delete_multi(&self, users: &[User]) -> Result<(), DomainError>;

    /// The 20 most recently created records, newest first
    async fn list(&self) -> Result<Vec<User>, DomainError>;
}
