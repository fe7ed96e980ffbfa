//! Response Builder
//!
//! Renders success and error envelopes into HTTP responses. Every path yields
//! a status code; when even the error envelope cannot be encoded the body is
//! left empty and the status is 500.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::error::ServiceError;
use crate::models::{ComputationResult, ErrorResponse};

// == Error Detail Policy ==
/// How much of an internal error message reaches the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorDetail {
    /// Pass the error text through unchanged
    #[default]
    Verbose,
    /// Replace it with a fixed message per status
    Generic,
}

// == Response Builder ==
/// Stateless renderer configured with an [`ErrorDetail`] policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseBuilder {
    detail: ErrorDetail,
}

impl ResponseBuilder {
    pub fn new(detail: ErrorDetail) -> Self {
        Self { detail }
    }

    pub fn detail(&self) -> ErrorDetail {
        self.detail
    }

    /// 200 with the computation envelope, or 500 if it cannot be encoded.
    pub fn build_success(&self, result: &ComputationResult) -> Response {
        self.encode(StatusCode::OK, result)
    }

    /// Error envelope for `err`, using its status and the verbosity policy.
    pub fn build_service_error(&self, err: &ServiceError) -> Response {
        self.build_error(err.status_code(), &err.to_string())
    }

    /// Error envelope `{"status", "error"}` with the given status.
    pub fn build_error(&self, status: StatusCode, message: &str) -> Response {
        let message = match self.detail {
            ErrorDetail::Verbose => message,
            ErrorDetail::Generic => generic_message(status),
        };
        let body = ErrorResponse::new(status.as_u16(), message);

        match serde_json::to_vec(&body) {
            Ok(bytes) => json_response(status, bytes),
            Err(e) => {
                error!("error response encoding failed: {e}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }

    /// Encodes `body` with `status`, degrading to a 500 envelope on failure.
    pub fn encode<T: Serialize>(&self, status: StatusCode, body: &T) -> Response {
        match serde_json::to_vec(body) {
            Ok(bytes) => json_response(status, bytes),
            Err(e) => {
                let err = ServiceError::from(e);
                error!("response encoding failed: {err}");
                self.build_service_error(&err)
            }
        }
    }
}

fn generic_message(status: StatusCode) -> &'static str {
    if status.is_client_error() {
        "bad request"
    } else {
        "internal server error"
    }
}

fn json_response(status: StatusCode, bytes: Vec<u8>) -> Response {
    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
