//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Backend returned status {0}")]
    BackendStatus(u16),

    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
