//! Entity types server: entity-types-api mounted on PostgreSQL.
//!
//! Run from repo root: `cargo run -p entity-types-server`
//! Or from this directory: `cargo run`

use entity_types_api::{
    app,
    apply_migrations,
    ensure_database_exists,
    AppState,
    PgEntityTypeStore,
    PgSessionStore,
    Settings,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("entity_types_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    if settings.frontend_url.is_none() {
        tracing::warn!("FRONTEND_URL not set; responses carry no CORS headers");
    }

    ensure_database_exists(&settings.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.db_max_connections)
        .connect(&settings.database_url)
        .await?;
    apply_migrations(&pool).await?;

    let bind_addr = settings.bind_addr.clone();
    let state = AppState::new(
        settings,
        Arc::new(PgEntityTypeStore::new(pool.clone())),
        Arc::new(PgSessionStore::new(pool)),
    );

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
