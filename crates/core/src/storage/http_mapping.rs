//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `AlreadyExists` -> 409 (Conflict)
/// - `Forbidden` -> 403 (Forbidden)
///
/// # Examples
///
/// ```
/// use almanac_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Event",
///     id: "abc-123".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::Forbidden { .. } => 403,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = RepositoryError::NotFound {
            entity_type: "Event",
            id: "evt-1".to_string(),
        };
        let forbidden = RepositoryError::Forbidden {
            entity_type: "Event",
            id: "evt-1".to_string(),
            user: "bob".to_string(),
        };
        let conflict = RepositoryError::AlreadyExists {
            entity_type: "User",
            id: "alice".to_string(),
        };

        assert_eq!(repository_error_to_status_code(&not_found), 404);
        assert_eq!(repository_error_to_status_code(&forbidden), 403);
        assert_eq!(repository_error_to_status_code(&conflict), 409);
    }
}
