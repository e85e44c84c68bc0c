// src/errors.rs
// DOCUMENTATION: Custom error types for the data access layer
// PURPOSE: Tell callers apart "store failed" from "nothing found"

use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every repository operation returns Result<_, BnbError>.
/// "Not found" is never an error: lookups return Ok(None), lists Ok(vec![])
#[derive(Error, Debug)]
pub enum BnbError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Classify sqlx failures into error kinds
/// DOCUMENTATION: SQLSTATE class 23 (integrity constraint violation) covers
/// unique, foreign key, not-null and check violations
impl From<sqlx::Error> for BnbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::WorkerCrashed => BnbError::ConnectionError(err.to_string()),
            sqlx::Error::Database(db_err) => {
                let is_constraint = db_err
                    .code()
                    .map(|code| code.starts_with("23"))
                    .unwrap_or(false);
                if is_constraint {
                    BnbError::ConstraintViolation(db_err.message().to_string())
                } else {
                    BnbError::DatabaseError(err.to_string())
                }
            }
            _ => BnbError::DatabaseError(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for BnbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        BnbError::MigrationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_pool_timeout_is_connection_error() {
        let err = BnbError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, BnbError::ConnectionError(_)));
    }

    #[test]
    fn test_refused_socket_is_connection_error() {
        let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        let err = BnbError::from(sqlx::Error::Io(io_err));

        match err {
            BnbError::ConnectionError(msg) => assert!(msg.contains("connection refused")),
            other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_row_not_found_is_plain_database_error() {
        let err = BnbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, BnbError::DatabaseError(_)));
    }

    #[test]
    fn test_display_names_the_kind() {
        let err = BnbError::ConstraintViolation("duplicate key".into());
        assert_eq!(err.to_string(), "Constraint violation: duplicate key");
    }
}
