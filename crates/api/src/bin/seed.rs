//! Provision the database with sample planets, scientists and missions.
//!
//! Existing rows are removed first.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cosmos_api::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cosmos_seed=info,cosmos_db=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    let pool = cosmos_db::create_pool(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("Failed to connect to {}", config.database_url))?;

    cosmos_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let summary = cosmos_db::seed::run(&pool)
        .await
        .context("Failed to seed database")?;
    tracing::info!(
        planets = summary.planets,
        scientists = summary.scientists,
        missions = summary.missions,
        "Seeding complete"
    );

    pool.close().await;
    Ok(())
}
