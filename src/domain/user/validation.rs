//! User validation

use thiserror::Error;

use super::entity::User;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User name cannot be empty")]
    EmptyName,
}

/// Validate a user ID
pub fn validate_user_id(id: &str) -> Result<(), UserValidationError> {
    if id.is_empty() {
        return Err(UserValidationError::EmptyId);
    }

    Ok(())
}

/// Validate a full user record: non-empty ID and non-empty name.
///
/// Pure check, no I/O. The repository runs it before any write that stores
/// the record and before deriving keys for a batch delete.
pub fn validate_user(user: &User) -> Result<(), UserValidationError> {
    validate_user_id(&user.id)?;

    if user.name.is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user() {
        let user = User::new("user-1", "Alice");
        assert!(validate_user(&user).is_ok());
    }

    #[test]
    fn test_empty_user_id() {
        let user = User::new("", "Alice");
        assert_eq!(validate_user(&user), Err(UserValidationError::EmptyId));
    }

    #[test]
    fn test_empty_user_name() {
        let user = User::new("user-1", "");
        assert_eq!(validate_user(&user), Err(UserValidationError::EmptyName));
    }

    #[test]
    fn test_empty_id_checked_before_name() {
        let user = User::new("", "");
        assert_eq!(validate_user(&user), Err(UserValidationError::EmptyId));
    }

    #[test]
    fn test_validate_user_id() {
        assert!(validate_user_id("user-1").is_ok());
        assert_eq!(validate_user_id(""), Err(UserValidationError::EmptyId));
    }
}
