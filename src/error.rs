//! Error types for the computation service
//!
//! Provides unified error handling using thiserror.

use axum::http::StatusCode;
use thiserror::Error;

// == Parse Error Enum ==
/// Failures while extracting the operand pair from an inbound request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Content-Type header absent, empty, or not one we can decode
    #[error("{0}")]
    UnsupportedOrMissingContentType(String),

    /// Structured body could not be decoded into `{x, y}`
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// Form field missing or not a floating-point number
    #[error("invalid operand '{field}': {reason}")]
    InvalidOperand {
        /// Name of the offending field (`x` or `y`)
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },
}

impl ParseError {
    /// Builds the error for a request that declared no content type.
    pub fn missing_content_type() -> Self {
        Self::UnsupportedOrMissingContentType("no content-type specified".to_string())
    }

    /// Builds the error for a content type with no decoding strategy.
    pub fn unsupported_content_type(content_type: &str) -> Self {
        Self::UnsupportedOrMissingContentType(format!(
            "unsupported content-type: {content_type:?}"
        ))
    }
}

// == Service Error Enum ==
/// Unified error type for a single request's processing.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Operand extraction failed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Operation name is not in the registry
    #[error("unsupported operation request: {0:?}")]
    UnsupportedOperation(String),

    /// Response body could not be encoded
    #[error("response encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl ServiceError {
    /// HTTP status this error is surfaced with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Parse(_) | ServiceError::UnsupportedOperation(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for client-caused failures.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the computation service.
pub type Result<T> = std::result::Result<T, ServiceError>;
