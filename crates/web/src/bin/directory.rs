use anyhow::Context;
use storage::Database;
use web::{config::DirectoryConfig, middleware::auth::ApiKeys};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    web::init_tracing();

    tracing::info!("Starting hero and villain directory service");

    let config =
        DirectoryConfig::from_env().context("Failed to load directory service configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("API_KEYS is empty, create/update/delete will always be rejected");
    }

    let app = web::directory_app(db, api_keys);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
