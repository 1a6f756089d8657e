use thiserror::Error;

use crate::shared::constants::{FETCH_FAILURE_MESSAGE, VALIDATION_MESSAGE};

/// The two error kinds this page ever surfaces. Both render as plain text;
/// the fetch cause is carried only for diagnostics and never shown.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", VALIDATION_MESSAGE)]
    EmptyVrm,

    /// Network failure, non-2xx status, or a malformed response body: all
    /// collapsed into one generic user-facing message.
    #[error("{}", FETCH_FAILURE_MESSAGE)]
    Fetch(String),
}

impl AppError {
    /// The underlying cause, for logging.
    pub fn cause(&self) -> &str {
        match self {
            AppError::EmptyVrm => "empty VRM",
            AppError::Fetch(cause) => cause,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
