//! Request sessions: token lookup, the resolving middleware, and the `Session` value handlers see.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashSet;

/// Session attached to every request. Anonymous sessions have no user and carry the guest capabilities.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<i64>,
    pub capabilities: HashSet<String>,
}

impl Session {
    pub fn anonymous(guest_capabilities: HashSet<String>) -> Self {
        Session {
            user_id: None,
            capabilities: guest_capabilities,
        }
    }

    pub fn signed_in(user_id: i64, capabilities: HashSet<String>) -> Self {
        Session {
            user_id: Some(user_id),
            capabilities,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }
}

/// A signed-in user as stored behind a session token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: i64,
    pub capabilities: HashSet<String>,
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Look up a token. Unknown and expired tokens yield `None`.
    async fn find(&self, token: &str) -> Result<Option<SessionUser>, AppError>;
}

#[derive(Clone)]
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        PgSessionStore { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn find(&self, token: &str) -> Result<Option<SessionUser>, AppError> {
        let row = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            "SELECT user_id, expires_at FROM sessions WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        let Some((user_id, expires_at)) = row else {
            return Ok(None);
        };
        if expires_at <= Utc::now() {
            tracing::debug!(user_id, "session expired");
            return Ok(None);
        }

        let capabilities = sqlx::query_as::<_, (String,)>(
            "SELECT capability FROM user_capabilities WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|(c,)| c)
        .collect();

        Ok(Some(SessionUser { user_id, capabilities }))
    }
}

/// Session token from the named cookie, falling back to `Authorization: Bearer <token>`.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(cookie_name) {
        let value = cookie.value().trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Middleware that resolves the request's session and stores it in the request extensions.
/// Signed-in users keep the guest capabilities in addition to their own.
pub async fn resolve_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let guest = state.settings.guest_capabilities.clone();
    let session = match session_token(req.headers(), &state.settings.session_cookie) {
        Some(token) => match state.sessions.find(&token).await? {
            Some(user) => {
                let mut capabilities = user.capabilities;
                capabilities.extend(guest);
                Session::signed_in(user.user_id, capabilities)
            }
            None => Session::anonymous(guest),
        },
        None => Session::anonymous(guest),
    };
    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}
