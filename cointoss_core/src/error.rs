//! Error types for the flip controller and its collaborators.

use thiserror::Error;

/// An outcome could not be obtained from the outcome service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlipError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body was not a valid flip response.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Statistics could not be written.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No backing storage (e.g. localStorage disabled).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend rejected the write.
    #[error("write rejected: {0}")]
    Write(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
