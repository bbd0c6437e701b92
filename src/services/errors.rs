use thiserror::Error;

use crate::forms::categories::CategoryFormError;
use crate::forms::videos::VideoFormError;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found or is not in the required state.
    #[error("not found")]
    NotFound,
    /// The operation is blocked by a business rule.
    #[error("forbidden")]
    Forbidden,
    /// Inbound form data failed validation.
    #[error("{0}")]
    Form(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

impl From<CategoryFormError> for ServiceError {
    fn from(value: CategoryFormError) -> Self {
        Self::Form(value.to_string())
    }
}

impl From<VideoFormError> for ServiceError {
    fn from(value: VideoFormError) -> Self {
        Self::Form(value.to_string())
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
