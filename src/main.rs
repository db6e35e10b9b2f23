use anyhow::Result;
use tracing::info;

use fittrack::api::create_routes;
use fittrack::config::{run_migrations, AppConfig, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    let pool = db_config.create_pool().await?;
    run_migrations(&pool).await?;
    info!("Database connected and migrations applied");

    let app = create_routes(pool, &config)?;

    let address = config.server_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Listening on {address}");

    axum::serve(listener, app).await?;

    Ok(())
}
