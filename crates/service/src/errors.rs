use models::errors::ModelError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(DbErr),
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ServiceError::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        ServiceError::Conflict(msg.into())
    }

    /// Missing-row error carrying the entity name, rendered as
    /// "Task not found", "User not found" and so on.
    pub fn not_found(entity: &str) -> Self {
        ServiceError::NotFound(entity.to_string())
    }
}

/// Constraint violations from the driver become conflicts; everything
/// else stays a database error.
impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                ServiceError::Conflict(format!("unique constraint violated: {msg}"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                ServiceError::Conflict(format!("still referenced by another row: {msg}"))
            }
            _ => ServiceError::Db(err),
        }
    }
}
