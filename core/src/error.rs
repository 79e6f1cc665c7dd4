//! Error types for the content client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the detail page renders a
//! "post not found" view for it, while transport failures render a generic
//! unavailable state. Any other non-2xx response lands in `Status` with the
//! raw code and body for debugging.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not complete (DNS, refused connection, timeout,
    /// truncated body).
    #[error("network error: {0}")]
    Network(String),

    /// The server returned 404 for the requested resource.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not parse as the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
