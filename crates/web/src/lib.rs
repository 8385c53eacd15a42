pub mod config;
pub mod docs;
pub mod error;
pub mod features;
pub mod middleware;
pub mod state;

use axum::Router;
use storage::{Database, models::FighterKind};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use docs::{DirectoryApiDoc, FightApiDoc};
use middleware::auth::ApiKeys;
use state::AppState;

/// Router of the fight service: `/api/fights`, `/api/stats` and the API docs.
pub fn fight_app(state: AppState) -> Router {
    Router::new()
        .nest("/api/fights", features::fights::routes::routes())
        .nest("/api/stats", features::statistics::routes::routes())
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", FightApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Router of the directory service: `/api/heroes`, `/api/villains` and the API docs.
pub fn directory_app(db: Database, api_keys: ApiKeys) -> Router {
    Router::new()
        .nest(
            "/api/heroes",
            features::directory::routes::routes(db.clone(), FighterKind::Hero, api_keys.clone()),
        )
        .nest(
            "/api/villains",
            features::directory::routes::routes(db, FighterKind::Villain, api_keys),
        )
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", DirectoryApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Installs the global tracing subscriber, `RUST_LOG` overriding the `info` default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}
