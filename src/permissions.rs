//! Capability checks against the request session.

use crate::error::AppError;
use crate::session::Session;
use async_trait::async_trait;

pub const READ_CONTENT_TYPES: &str = "readContentTypes";
pub const WRITE_CONTENT_TYPES: &str = "writeContentTypes";

/// Decides whether a session may perform a named action.
#[async_trait]
pub trait PermissionChecker: Send + Sync {
    async fn can(&self, session: &Session, action: &str) -> Result<bool, AppError>;
}

/// Grants an action when it is among the session's capabilities.
#[derive(Clone, Copy, Debug, Default)]
pub struct CapabilityChecker;

#[async_trait]
impl PermissionChecker for CapabilityChecker {
    async fn can(&self, session: &Session, action: &str) -> Result<bool, AppError> {
        Ok(session.capabilities.contains(action))
    }
}

/// Session requirements independent of any action.
#[derive(Clone, Copy, Debug, Default)]
pub struct Criteria {
    pub logged_in: bool,
}

pub fn assert(criteria: Criteria, session: &Session) -> Result<(), AppError> {
    if criteria.logged_in && !session.is_logged_in() {
        return Err(AppError::Unauthenticated);
    }
    Ok(())
}

/// Fails with `Unauthenticated` for anonymous sessions and `Forbidden` for signed-in users lacking the action.
pub async fn assert_user_can(
    checker: &dyn PermissionChecker,
    action: &str,
    session: &Session,
) -> Result<(), AppError> {
    if checker.can(session, action).await? {
        return Ok(());
    }
    match session.user_id {
        Some(user_id) => {
            tracing::warn!(user_id, action, "permission denied");
            Err(AppError::Forbidden(action.to_string()))
        }
        None => Err(AppError::Unauthenticated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn caps(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn logged_in_criteria_rejects_anonymous() {
        let anon = Session::anonymous(caps(&[READ_CONTENT_TYPES]));
        assert!(matches!(
            assert(Criteria { logged_in: true }, &anon),
            Err(AppError::Unauthenticated)
        ));
        assert!(assert(Criteria::default(), &anon).is_ok());
        assert!(assert(Criteria { logged_in: true }, &Session::signed_in(1, HashSet::new())).is_ok());
    }

    #[tokio::test]
    async fn grants_listed_capability() {
        let session = Session::signed_in(1, caps(&[READ_CONTENT_TYPES]));
        assert!(assert_user_can(&CapabilityChecker, READ_CONTENT_TYPES, &session).await.is_ok());
    }

    #[tokio::test]
    async fn signed_in_user_without_capability_is_forbidden() {
        let session = Session::signed_in(1, caps(&[READ_CONTENT_TYPES]));
        let err = assert_user_can(&CapabilityChecker, WRITE_CONTENT_TYPES, &session)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(action) if action == WRITE_CONTENT_TYPES));
    }

    #[tokio::test]
    async fn anonymous_without_capability_is_unauthenticated() {
        let session = Session::anonymous(HashSet::new());
        let err = assert_user_can(&CapabilityChecker, READ_CONTENT_TYPES, &session)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthenticated));
    }
}
