//! Idempotent DDL for the tables this service reads and writes.

use crate::error::AppError;
use sqlx::PgPool;

const ENTITY_TYPES_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS entity_types (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        icon TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const SESSIONS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS sessions (
        token TEXT PRIMARY KEY,
        user_id BIGINT NOT NULL,
        expires_at TIMESTAMPTZ NOT NULL
    )
"#;

const USER_CAPABILITIES_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS user_capabilities (
        user_id BIGINT NOT NULL,
        capability TEXT NOT NULL,
        PRIMARY KEY (user_id, capability)
    )
"#;

/// Create `entity_types`, `sessions` and `user_capabilities` when missing. Safe to run on every start.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for ddl in [ENTITY_TYPES_DDL, SESSIONS_DDL, USER_CAPABILITIES_DDL] {
        sqlx::query(ddl).execute(pool).await?;
    }
    sqlx::query("CREATE INDEX IF NOT EXISTS sessions_user_id_idx ON sessions (user_id)")
        .execute(pool)
        .await?;
    tracing::info!("migrations applied");
    Ok(())
}
