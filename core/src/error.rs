//! Errors returned by `TodoClient` parse methods.
//!
//! The server answers every failure with `{"error": "<message>"}`. That
//! message is surfaced as-is; bodies of any other shape are kept raw.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404: the todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// 400: the server rejected the id or the payload.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Any other unexpected status.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
