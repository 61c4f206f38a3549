//! Entity types API: list and create content entity types behind session and capability checks.

pub mod config;
pub mod cors;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod hash;
pub mod migration;
pub mod model;
pub mod permissions;
pub mod response;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use hash::create_hash;
pub use migration::apply_migrations;
pub use model::{EntityType, NewEntityType};
pub use permissions::{CapabilityChecker, PermissionChecker, READ_CONTENT_TYPES, WRITE_CONTENT_TYPES};
pub use response::{Envelope, Metadata};
pub use routes::{app, common_routes_with_ready, entity_type_routes};
pub use session::{PgSessionStore, Session, SessionStore, SessionUser};
pub use state::AppState;
pub use store::{ensure_database_exists, EntityTypeStore, PgEntityTypeStore};
