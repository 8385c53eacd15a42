use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use storage::{
    dto::character::{CreateCharacterRequest, UpdateCharacterRequest},
    models::Character,
};
use validator::Validate;

use super::{DirectoryState, services};
use crate::error::WebError;

#[utoipa::path(
    get,
    path = "/api/{collection}/random",
    params(
        ("collection" = String, Path, description = "`heroes` or `villains`")
    ),
    responses(
        (status = 200, description = "A random character", body = Character),
        (status = 204, description = "The directory is empty")
    ),
    tag = "directory"
)]
pub async fn get_random_character(
    State(state): State<DirectoryState>,
) -> Result<Response, WebError> {
    match services::find_random(state.db.pool(), state.kind).await? {
        Some(character) => {
            tracing::debug!("Found random {} {}", state.kind, character.name);
            Ok(Json(character).into_response())
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/{collection}",
    params(
        ("collection" = String, Path, description = "`heroes` or `villains`")
    ),
    responses(
        (status = 200, description = "All the characters", body = Vec<Character>),
        (status = 204, description = "No characters")
    ),
    tag = "directory"
)]
pub async fn list_characters(State(state): State<DirectoryState>) -> Result<Response, WebError> {
    let characters = services::list_characters(state.db.pool(), state.kind).await?;
    tracing::debug!("Total number of {} {}", state.kind.collection(), characters.len());

    if characters.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(Json(characters).into_response())
}

#[utoipa::path(
    get,
    path = "/api/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "`heroes` or `villains`"),
        ("id" = i64, Path, description = "Character identifier")
    ),
    responses(
        (status = 200, description = "Character found", body = Character),
        (status = 204, description = "No character for this identifier")
    ),
    tag = "directory"
)]
pub async fn get_character(
    State(state): State<DirectoryState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    match services::get_character(state.db.pool(), state.kind, id).await? {
        Some(character) => Ok(Json(character).into_response()),
        None => {
            tracing::debug!("No {} found with id {}", state.kind, id);
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/{collection}",
    params(
        ("collection" = String, Path, description = "`heroes` or `villains`")
    ),
    request_body = CreateCharacterRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Character created successfully", body = Character),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "A character with this name already exists")
    ),
    tag = "directory"
)]
pub async fn create_character(
    State(state): State<DirectoryState>,
    payload: Result<Json<CreateCharacterRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload.map_err(|rejection| WebError::BadRequest(rejection.body_text()))?;
    req.validate()?;

    let character = services::create_character(state.db.pool(), state.kind, &req).await?;
    let location = format!("/api/{}/{}", state.kind.collection(), character.id);
    tracing::debug!("New {} created at {}", state.kind, location);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(character)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "`heroes` or `villains`"),
        ("id" = i64, Path, description = "Character identifier")
    ),
    request_body = UpdateCharacterRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Character updated successfully", body = Character),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Character not found")
    ),
    tag = "directory"
)]
pub async fn update_character(
    State(state): State<DirectoryState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateCharacterRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(update_req) =
        payload.map_err(|rejection| WebError::BadRequest(rejection.body_text()))?;
    update_req.validate()?;

    let updated = services::update_character(state.db.pool(), state.kind, id, &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "`heroes` or `villains`"),
        ("id" = i64, Path, description = "Character identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Character deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Character not found")
    ),
    tag = "directory"
)]
pub async fn delete_character(
    State(state): State<DirectoryState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_character(state.db.pool(), state.kind, id).await?;
    tracing::debug!("{} {} deleted", state.kind, id);

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/{collection}/hello",
    params(
        ("collection" = String, Path, description = "`heroes` or `villains`")
    ),
    responses(
        (status = 200, description = "Liveness probe", body = String, content_type = "text/plain")
    ),
    tag = "directory"
)]
pub async fn hello() -> &'static str {
    "hello"
}
