//! Request Handler
//!
//! Orchestrates one computation: parse, validate the operation, consult the
//! cache, compute on a miss, store, respond. Any failure short-circuits to an
//! error envelope; nothing escapes as a panic or transport error.

use std::sync::Arc;

use axum::response::Response;
use tracing::{debug, error, warn};

use crate::cache::{CacheKey, ResultCache};
use crate::error::{Result, ServiceError};
use crate::models::ComputationResult;
use crate::operations::OperationRegistry;
use crate::parser::{self, RawInput};
use crate::response::ResponseBuilder;

/// One inbound computation request, as handed over by the routing layer.
#[derive(Debug, Clone, Copy)]
pub struct InboundRequest<'a> {
    /// Operation name taken from the path
    pub operation: &'a str,
    /// Declared `Content-Type`, if any
    pub content_type: Option<&'a str>,
    /// Raw body and query string
    pub input: RawInput<'a>,
}

// == Request Handler ==
/// Shared, cheaply clonable computation pipeline.
#[derive(Debug, Clone)]
pub struct RequestHandler {
    registry: Arc<OperationRegistry>,
    cache: Arc<ResultCache>,
    responses: ResponseBuilder,
}

impl RequestHandler {
    pub fn new(
        registry: Arc<OperationRegistry>,
        cache: Arc<ResultCache>,
        responses: ResponseBuilder,
    ) -> Self {
        Self {
            registry,
            cache,
            responses,
        }
    }

    pub fn registry(&self) -> &Arc<OperationRegistry> {
        &self.registry
    }

    pub fn cache(&self) -> &Arc<ResultCache> {
        &self.cache
    }

    /// Runs the pipeline and renders the outcome, success or error.
    pub async fn handle(&self, request: InboundRequest<'_>) -> Response {
        match self.process(request).await {
            Ok(result) => self.responses.build_success(&result),
            Err(err) => {
                if err.is_client_error() {
                    warn!(operation = request.operation, "request rejected: {err}");
                } else {
                    error!(operation = request.operation, "request failed: {err}");
                }
                self.responses.build_service_error(&err)
            }
        }
    }

    /// Runs the pipeline up to, but not including, response rendering.
    ///
    /// The answer is stored on every successful request, hit or miss, so each
    /// request restarts the entry's TTL.
    pub async fn process(&self, request: InboundRequest<'_>) -> Result<ComputationResult> {
        let operands = parser::parse_request(request.content_type, request.input)?;

        let op = self
            .registry
            .lookup(request.operation)
            .ok_or_else(|| ServiceError::UnsupportedOperation(request.operation.to_string()))?;

        let key = CacheKey::new(request.operation, operands.x, operands.y);
        let (answer, was_cached) = match self.cache.get(&key).await {
            Some(answer) => (answer, true),
            None => (op(operands.x, operands.y), false),
        };
        debug!(key = %key, cached = was_cached, "computed answer");

        self.cache
            .put(key, answer, self.cache.default_ttl())
            .await;

        Ok(ComputationResult::new(
            request.operation,
            operands.x,
            operands.y,
            answer,
            was_cached,
        ))
    }
}
