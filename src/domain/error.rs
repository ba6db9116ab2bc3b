use thiserror::Error;

use crate::domain::user::UserValidationError;

/// Core domain errors
///
/// The variant is part of the contract: callers rely on distinguishing
/// validation failures, empty batches, missing records and storage failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid user: {0}")]
    Validation(#[from] UserValidationError),

    #[error("Batch operation requires at least one record")]
    EmptyBatch,

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("User 'test-id' not found");
        assert_eq!(error.to_string(), "Not found: User 'test-id' not found");
    }

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("connection refused");
        assert_eq!(error.to_string(), "Storage error: connection refused");
    }

    #[test]
    fn test_empty_batch_error() {
        let error = DomainError::EmptyBatch;
        assert_eq!(
            error.to_string(),
            "Batch operation requires at least one record"
        );
    }

    #[test]
    fn test_validation_error_keeps_field() {
        let error = DomainError::from(UserValidationError::EmptyName);
        assert!(matches!(
            error,
            DomainError::Validation(UserValidationError::EmptyName)
        ));
        assert_eq!(error.to_string(), "Invalid user: User name cannot be empty");
    }
}
