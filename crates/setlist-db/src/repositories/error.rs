//! Error handling utilities for repositories

use setlist_core::error::DomainError;
use setlist_core::value_objects::StoredCode;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Map constraint violations on a write
///
/// `on_unique` receives the violated index or constraint name so tables
/// with several unique keys can report the right conflict. A foreign key
/// violation becomes `on_missing_parent`.
pub fn map_write_error<U, M>(e: SqlxError, on_unique: U, on_missing_parent: M) -> DomainError
where
    U: FnOnce(Option<&str>) -> DomainError,
    M: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
        if db_err.is_foreign_key_violation() {
            return on_missing_parent();
        }
    }
    map_db_error(e)
}

/// Decode a `SMALLINT` enum column
pub fn decode_code<T: StoredCode>(raw: i16) -> Result<T, DomainError> {
    T::from_code(raw).ok_or_else(|| {
        DomainError::DatabaseError(format!("unknown {} code {raw}", T::TYPE_NAME))
    })
}

#[cfg(test)]
mod tests {
    use setlist_core::SongRequestStatus;

    use super::*;

    #[test]
    fn test_decode_code() {
        let status: SongRequestStatus = decode_code(2).unwrap();
        assert_eq!(status, SongRequestStatus::Accepted);

        let err = decode_code::<SongRequestStatus>(42).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Database error: unknown song request status code 42"
        );
    }

    #[test]
    fn test_non_database_errors_pass_through() {
        let err = map_write_error(
            SqlxError::RowNotFound,
            |_| DomainError::DuplicateRequest,
            || DomainError::InternalError("parent".to_string()),
        );
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
