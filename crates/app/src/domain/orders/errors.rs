//! Orders service errors.

use cafe::{
    orders::{OrderError, ValidationError},
    status::InvalidStatus,
};
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<ValidationError> for OrdersServiceError {
    fn from(error: ValidationError) -> Self {
        Self::Order(error.into())
    }
}

impl From<InvalidStatus> for OrdersServiceError {
    fn from(error: InvalidStatus) -> Self {
        Self::Order(error.into())
    }
}
