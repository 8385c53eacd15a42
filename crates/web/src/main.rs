use std::sync::Arc;

use anyhow::Context;
use clients::{BroadcastNotifier, FightNotifier, HttpFighterDirectory, HttpNotifier};
use storage::{Database, models::FighterKind, repository::fight::FightRepository};
use web::{
    config::FightConfig,
    features::{
        fights::{FightService, FightTimeouts},
        statistics::services::{SharedWinners, spawn_collector},
    },
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    web::init_tracing();

    tracing::info!("Starting fight service");

    let config = FightConfig::from_env().context("Failed to load fight service configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let heroes = HttpFighterDirectory::new(
        &config.hero_service_url,
        FighterKind::Hero,
        config.client_timeout,
    )
    .context("Failed to build hero directory client")?;
    let villains = HttpFighterDirectory::new(
        &config.villain_service_url,
        FighterKind::Villain,
        config.client_timeout,
    )
    .context("Failed to build villain directory client")?;
    tracing::info!(
        "Heroes from {}, villains from {}",
        config.hero_service_url,
        config.villain_service_url
    );

    let winners = SharedWinners::default();
    let notifier: Arc<dyn FightNotifier> = match &config.statistics_url {
        Some(url) => {
            tracing::info!("Publishing fights to {}", url);
            Arc::new(
                HttpNotifier::new(url, config.notify_timeout)
                    .context("Failed to build statistics client")?,
            )
        }
        None => {
            tracing::info!("Publishing fights to the local statistics collector");
            let notifier = BroadcastNotifier::default();
            spawn_collector(notifier.subscribe(), Arc::clone(&winners));
            Arc::new(notifier)
        }
    };

    let service = FightService::new(
        Arc::new(FightRepository::new(db.pool().clone())),
        Arc::new(heroes),
        Arc::new(villains),
        notifier,
        FightTimeouts {
            fighters: config.fighters_timeout,
            notify: config.notify_timeout,
        },
    );

    let app = web::fight_app(AppState::new(service, winners));

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
