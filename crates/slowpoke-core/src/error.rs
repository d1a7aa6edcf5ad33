//! Shared error type across slowpoke crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// No route for the requested path.
    NotFound,
    /// Verb not supported or not implemented by the handler.
    MethodNotAllowed,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in responses and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// HTTP status code carried by this error class.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => 400,
            ClientCode::NotFound => 404,
            ClientCode::MethodNotAllowed => 405,
            ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SlowpokeError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum SlowpokeError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl SlowpokeError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SlowpokeError::BadRequest(_) => ClientCode::BadRequest,
            SlowpokeError::NotFound(_) => ClientCode::NotFound,
            SlowpokeError::MethodNotAllowed(_) => ClientCode::MethodNotAllowed,
            SlowpokeError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            SlowpokeError::Internal(_) => ClientCode::Internal,
        }
    }
}
