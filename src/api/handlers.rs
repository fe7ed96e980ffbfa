//! API Handlers
//!
//! HTTP request handlers for each endpoint of the computation server.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap},
    response::Response,
    Json,
};

use crate::cache::ResultCache;
use crate::config::Config;
use crate::handler::{InboundRequest, RequestHandler};
use crate::models::{HealthResponse, StatsResponse};
use crate::operations::OperationRegistry;
use crate::parser::RawInput;
use crate::response::ResponseBuilder;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Computation pipeline, holding the shared cache
    pub handler: RequestHandler,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: ResultCache, responses: ResponseBuilder) -> Self {
        Self::with_shared_cache(Arc::new(cache), responses)
    }

    /// Creates a new AppState around an already shared cache.
    pub fn with_shared_cache(cache: Arc<ResultCache>, responses: ResponseBuilder) -> Self {
        Self {
            handler: RequestHandler::new(
                Arc::new(OperationRegistry::standard()),
                cache,
                responses,
            ),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ResultCache::new(config.cache_ttl()),
            ResponseBuilder::new(config.error_detail()),
        )
    }

    /// The shared result cache.
    pub fn cache(&self) -> Arc<ResultCache> {
        self.handler.cache().clone()
    }
}

/// Handler for ANY /:op
///
/// Parses `x` and `y` according to the request's content type, applies the
/// named operation and reports whether the answer was cached.
pub async fn math_handler(
    State(state): State<AppState>,
    Path(op): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    let request = InboundRequest {
        operation: &op,
        content_type,
        input: RawInput {
            body: &body,
            query: query.as_deref(),
        },
    };

    state.handler.handle(request).await
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.handler.cache().stats().await;
    Json(StatsResponse::new(&stats, state.handler.registry().names()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
