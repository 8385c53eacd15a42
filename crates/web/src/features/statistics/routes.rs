use axum::{Router, routing::get};

use super::handlers::get_top_winners;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/winners", get(get_top_winners))
}
