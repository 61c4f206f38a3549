//! Process settings, read once at startup and passed around explicitly.

use crate::cors::is_valid_origin;
use crate::error::ConfigError;
use std::collections::HashSet;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/entity_types";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SESSION_COOKIE: &str = "session_token";
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    /// Allowed CORS origin. No CORS headers are sent when unset.
    pub frontend_url: Option<String>,
    pub bind_addr: String,
    /// Cookie carrying the session token; `Authorization: Bearer` is accepted too.
    pub session_cookie: String,
    /// Capabilities granted to requests without a signed-in user.
    pub guest_capabilities: HashSet<String>,
    pub max_body_bytes: usize,
    pub db_max_connections: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.into(),
            frontend_url: None,
            bind_addr: DEFAULT_BIND_ADDR.into(),
            session_cookie: DEFAULT_SESSION_COOKIE.into(),
            guest_capabilities: HashSet::new(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    }
}

impl Settings {
    /// Read settings from the process environment (call `dotenvy::dotenv()` first to pick up `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Settings::default();

        let guest_capabilities = get("GUEST_CAPABILITIES")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let frontend_url = get("FRONTEND_URL");
        if let Some(origin) = frontend_url.as_deref() {
            if !is_valid_origin(origin) {
                return Err(ConfigError::Invalid {
                    key: "FRONTEND_URL",
                    value: origin.to_string(),
                });
            }
        }

        Ok(Settings {
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            frontend_url,
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            session_cookie: get("SESSION_COOKIE").unwrap_or(defaults.session_cookie),
            guest_capabilities,
            max_body_bytes: parse_or(get("MAX_BODY_BYTES"), "MAX_BODY_BYTES", defaults.max_body_bytes)?,
            db_max_connections: parse_or(
                get("DB_MAX_CONNECTIONS"),
                "DB_MAX_CONNECTIONS",
                defaults.db_max_connections,
            )?,
        })
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
    }
}
