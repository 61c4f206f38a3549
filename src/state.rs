//! Shared application state for all routes.

use crate::config::Settings;
use crate::permissions::{CapabilityChecker, PermissionChecker};
use crate::session::SessionStore;
use crate::store::EntityTypeStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub store: Arc<dyn EntityTypeStore>,
    pub sessions: Arc<dyn SessionStore>,
    pub permissions: Arc<dyn PermissionChecker>,
}

impl AppState {
    /// State with the default capability-based permission checker.
    pub fn new(settings: Settings, store: Arc<dyn EntityTypeStore>, sessions: Arc<dyn SessionStore>) -> Self {
        AppState {
            settings: Arc::new(settings),
            store,
            sessions,
            permissions: Arc::new(CapabilityChecker),
        }
    }

    pub fn with_permissions(mut self, permissions: Arc<dyn PermissionChecker>) -> Self {
        self.permissions = permissions;
        self
    }
}
