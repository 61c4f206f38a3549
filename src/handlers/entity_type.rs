//! Entity type handlers: list, create, and the rejection for every other method.

use crate::cors::cors_headers;
use crate::error::AppError;
use crate::extractors::CurrentSession;
use crate::model::NewEntityType;
use crate::permissions::{assert, assert_user_can, Criteria, READ_CONTENT_TYPES, WRITE_CONTENT_TYPES};
use crate::response::Envelope;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};

/// `GET /entity_types`: every record, sealed with a content hash. An empty list is still 200.
/// The GET route also answers HEAD; that is rejected before any permission or store call.
pub async fn list(
    method: Method,
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<impl IntoResponse, AppError> {
    if method != Method::GET {
        return Err(AppError::UnsupportedMethod(method.to_string()));
    }
    assert_user_can(state.permissions.as_ref(), READ_CONTENT_TYPES, &session).await?;

    let entity_types = state.store.all().await?;
    let output = Envelope::sealed(entity_types)?;
    let headers = cors_headers(state.settings.frontend_url.as_deref());
    Ok((StatusCode::OK, headers, Json(output)))
}

/// `POST /entity_types`: persist `{name, slug, icon}` and echo the submitted fields.
pub async fn create(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    body: Result<Json<NewEntityType>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    assert(Criteria { logged_in: true }, &session)?;
    assert_user_can(state.permissions.as_ref(), READ_CONTENT_TYPES, &session).await?;
    assert_user_can(state.permissions.as_ref(), WRITE_CONTENT_TYPES, &session).await?;

    let Json(fields) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    state.store.create(&fields).await?;
    tracing::info!(slug = ?fields.slug, user_id = ?session.user_id, "entity type created");

    let output = Envelope::sealed(fields)?;
    let headers = cors_headers(state.settings.frontend_url.as_deref());
    Ok((StatusCode::OK, headers, Json(output)))
}

/// Fallback for methods other than GET and POST.
pub async fn unsupported_method(method: Method) -> AppError {
    AppError::UnsupportedMethod(method.to_string())
}
