use axum::{Router, routing::get};

use super::handlers::{create_fight, get_all_fights, get_fight, get_random_fighters, hello};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_fights).post(create_fight))
        .route("/hello", get(hello))
        .route("/randomfighters", get(get_random_fighters))
        .route("/:id", get(get_fight))
}
