//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Raw failure reported by the database driver.
pub type StorageError = Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("product name is required")]
    MissingRequiredData,

    #[error("field \"{field}\" must be {expected}")]
    InvalidFieldValue {
        field: &'static str,
        expected: &'static str,
    },

    #[error("no updatable fields")]
    NoUpdatableFields { rejected: Vec<String> },

    #[error("storage error: {0}")]
    Sql(#[source] StorageError),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            _ => Self::Sql(error),
        }
    }
}
