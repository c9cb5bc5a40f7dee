#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
// easier to use when using the functions as callback of foreign functions
#![allow(clippy::needless_pass_by_value)]

use anyhow::Result;
use axum::Extension;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::prelude::*;

use crate::api::router;
use crate::config::Config;
use crate::database::Database;
use crate::database::DatabaseConfig;

mod api;
mod config;
mod database;
mod graceful_shutdown;
mod notes;
#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> Result<()> {
    config::load_environment();
    setup_tracing();

    let config = Config::from_env()?;

    let app = setup_app(DatabaseConfig::Connect(config.database_url)).await?;

    let listener = TcpListener::bind(config.address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(graceful_shutdown::handler())
        .await?;

    Ok(())
}

/// Create and setup the app with its dependencies
///
/// # Errors
///
/// Will return `Err` if the database can not be reached or migrated
pub async fn setup_app(database_config: DatabaseConfig) -> Result<Router> {
    let database = Database::from_config(database_config).await?;

    Ok(create_router(database))
}

/// Create the router with the database available to every handler
fn create_router(database: Database) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(Extension(database))
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;

    registry()
        .with(EnvFilter::new(config::log_filter()))
        .with(fmt::layer())
        .init();
}
