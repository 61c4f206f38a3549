//! EntityType persistence: the store trait the handlers depend on and its PostgreSQL implementation.

use crate::error::{AppError, ConfigError};
use crate::model::{EntityType, NewEntityType};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Persistence boundary for entity types. The store alone validates records
/// (required fields, unique slug).
#[async_trait]
pub trait EntityTypeStore: Send + Sync {
    /// All records, in store-defined order.
    async fn all(&self) -> Result<Vec<EntityType>, AppError>;

    /// Persist one record and return it as stored.
    async fn create(&self, fields: &NewEntityType) -> Result<EntityType, AppError>;

    /// Cheap liveness check used by the readiness route.
    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct PgEntityTypeStore {
    pool: PgPool,
}

impl PgEntityTypeStore {
    pub fn new(pool: PgPool) -> Self {
        PgEntityTypeStore { pool }
    }
}

#[async_trait]
impl EntityTypeStore for PgEntityTypeStore {
    async fn all(&self) -> Result<Vec<EntityType>, AppError> {
        let sql = "SELECT name, slug, icon FROM entity_types ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, EntityType>(sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn create(&self, fields: &NewEntityType) -> Result<EntityType, AppError> {
        let sql = "INSERT INTO entity_types (name, slug, icon) VALUES ($1, $2, $3) RETURNING name, slug, icon";
        tracing::debug!(sql = %sql, params = ?fields, "query");
        let row = sqlx::query_as::<_, EntityType>(sql)
            .bind(fields.name.as_deref())
            .bind(fields.slug.as_deref())
            .bind(fields.icon.as_deref())
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Connect to the server's `postgres` database and create the target database when it is missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await
        .map_err(AppError::Db)?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        let quoted = quote_ident(&db_name);
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url
        .get(scheme_end..)
        .and_then(|rest| rest.find('/'))
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| ConfigError::DatabaseUrl("no database path".into()))?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
