//! Mapping from pool and Diesel failures to [`BeerPersistenceError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::BeerPersistenceError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> BeerPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            BeerPersistenceError::connection(message)
        }
    }
}

/// Database messages are logged at debug level only; callers get a stable
/// description that does not leak SQL details.
pub(crate) fn map_diesel_error(error: DieselError) -> BeerPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => BeerPersistenceError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            BeerPersistenceError::connection("database connection closed")
        }
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation
            | DatabaseErrorKind::NotNullViolation
            | DatabaseErrorKind::CheckViolation,
            _,
        ) => BeerPersistenceError::query("beer violates a table constraint"),
        DieselError::DatabaseError(_, _) => BeerPersistenceError::query("database error"),
        _ => BeerPersistenceError::query("database query error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PoolError::checkout("timed out"))]
    #[case(PoolError::build("invalid url"))]
    fn pool_errors_are_connection_failures(#[case] error: PoolError) {
        let mapped = map_pool_error(error);
        assert!(matches!(mapped, BeerPersistenceError::Connection { .. }));
    }

    #[rstest]
    fn pool_error_message_is_preserved() {
        let mapped = map_pool_error(PoolError::checkout("connection refused"));
        assert!(mapped.to_string().contains("connection refused"));
    }

    #[rstest]
    fn not_found_is_a_query_failure() {
        let mapped = map_diesel_error(DieselError::NotFound);
        assert_eq!(mapped, BeerPersistenceError::query("record not found"));
    }

    #[rstest]
    fn rollback_errors_are_query_failures() {
        let mapped = map_diesel_error(DieselError::RollbackTransaction);
        assert!(matches!(mapped, BeerPersistenceError::Query { .. }));
    }
}
