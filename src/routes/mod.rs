//! Router assembly.

pub mod common;
pub mod entity_type;

pub use common::common_routes_with_ready;
pub use entity_type::entity_type_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: common routes at the root and the entity type API under `/api`.
/// Bodies above `Settings::max_body_bytes` are rejected before reaching a handler.
pub fn app(state: AppState) -> Router {
    let max_body_bytes = state.settings.max_body_bytes;
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest("/api", entity_type_routes(state))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
