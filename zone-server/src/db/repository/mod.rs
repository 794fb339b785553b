//! Repository layer
//!
//! Free functions over `&SqlitePool`, one module per table.

pub mod postcode;
pub mod zone;

use thiserror::Error;

/// Storage-layer error
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;
