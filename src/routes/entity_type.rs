//! Entity type routes. GET lists, POST creates, any other method is rejected through `AppError`.

use crate::handlers::entity_type::{create, list, unsupported_method};
use crate::session::resolve_session;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

pub fn entity_type_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/entity_types",
            get(list).post(create).fallback(unsupported_method),
        )
        .layer(middleware::from_fn_with_state(state.clone(), resolve_session))
        .with_state(state)
}
