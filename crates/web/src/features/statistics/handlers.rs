use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::models::Score;

use super::services::TOP_WINNERS_LIMIT;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/stats/winners",
    responses(
        (status = 200, description = "Fighters with the most victories", body = Vec<Score>)
    ),
    tag = "statistics"
)]
pub async fn get_top_winners(State(state): State<AppState>) -> Response {
    let scores = state.winners.read().await.top(TOP_WINNERS_LIMIT);

    Json(scores).into_response()
}
