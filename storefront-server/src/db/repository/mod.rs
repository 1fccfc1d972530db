//! Repository Module
//!
//! Function-style CRUD over the SQLite pool. Queries are runtime-checked
//! `query_as` against the migration schema; JSON columns deserialize
//! through `#[sqlx(json)]` on the models.

pub mod category;
pub mod delivery_zone;
pub mod order;
pub mod product;
pub mod store;

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            // 2067 = SQLITE_CONSTRAINT_UNIQUE, 1555 = primary key
            if db_err.code().as_deref() == Some("2067")
                || db_err.code().as_deref() == Some("1555")
            {
                return RepoError::Duplicate(db_err.message().to_string());
            }
        }
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
