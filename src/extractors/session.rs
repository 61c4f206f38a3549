//! Extract the session resolved by `session::resolve_session`.

use crate::session::Session;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Session for the current request. Falls back to an anonymous session with no
/// capabilities when the resolving middleware is not installed.
#[derive(Clone, Debug)]
pub struct CurrentSession(pub Session);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts.extensions.get::<Session>().cloned().unwrap_or_default();
        Ok(CurrentSession(session))
    }
}
