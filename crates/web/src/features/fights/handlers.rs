use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::models::{Fight, Fighters};

use crate::error::WebError;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/fights/randomfighters",
    responses(
        (status = 200, description = "Two random fighters", body = Fighters),
        (status = 502, description = "A fighter directory is unavailable"),
        (status = 504, description = "The fighters could not be fetched in time")
    ),
    tag = "fights"
)]
pub async fn get_random_fighters(State(state): State<AppState>) -> Result<Response, WebError> {
    let fighters = state.fights.get_random_fighters().await?;

    Ok(Json(fighters).into_response())
}

#[utoipa::path(
    get,
    path = "/api/fights",
    responses(
        (status = 200, description = "All the fights", body = Vec<Fight>),
        (status = 204, description = "No fights")
    ),
    tag = "fights"
)]
pub async fn get_all_fights(State(state): State<AppState>) -> Result<Response, WebError> {
    let fights = state.fights.get_all_fights().await?;
    tracing::debug!("Total number of fights {}", fights.len());

    if fights.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(Json(fights).into_response())
}

#[utoipa::path(
    get,
    path = "/api/fights/{id}",
    params(
        ("id" = i64, Path, description = "Fight identifier")
    ),
    responses(
        (status = 200, description = "Fight found", body = Fight),
        (status = 204, description = "No fight for this identifier")
    ),
    tag = "fights"
)]
pub async fn get_fight(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    match state.fights.get_fight(id).await? {
        Some(fight) => {
            tracing::debug!("Found fight {}", fight.id);
            Ok(Json(fight).into_response())
        }
        None => {
            tracing::debug!("No fight found with id {}", id);
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/fights",
    request_body = Fighters,
    responses(
        (status = 200, description = "The result of the fight", body = Fight),
        (status = 400, description = "Missing or invalid fighter")
    ),
    tag = "fights"
)]
pub async fn create_fight(
    State(state): State<AppState>,
    payload: Result<Json<Fighters>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(fighters) =
        payload.map_err(|rejection| WebError::BadRequest(rejection.body_text()))?;

    let fight = state.fights.trigger_fight(fighters).await?;

    Ok(Json(fight).into_response())
}

#[utoipa::path(
    get,
    path = "/api/fights/hello",
    responses(
        (status = 200, description = "Liveness probe", body = String, content_type = "text/plain")
    ),
    tag = "fights"
)]
pub async fn hello() -> &'static str {
    "hello"
}
