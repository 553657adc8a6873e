//! Server binary: loads configuration, prepares the database, and mounts the
//! common and catalog routes.

use std::sync::Arc;

use axum::Router;
use catalogo_auto::{
    catalog_routes, common_routes, ensure_catalog_schema, ensure_database_exists, AppConfig,
    AppState, AutoService, PgAutoRepository,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("catalogo_auto=info".parse()?))
        .init();

    let config = AppConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    ensure_catalog_schema(&pool).await?;

    let repo = Arc::new(PgAutoRepository::new(pool.clone()));
    let state = AppState::new(pool, AutoService::new(repo));

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(catalog_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
