use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::{Database, models::FighterKind};

use super::DirectoryState;
use super::handlers::{
    create_character, delete_character, get_character, get_random_character, hello,
    list_characters, update_character,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(db: Database, kind: FighterKind, api_keys: ApiKeys) -> Router {
    let protected = Router::new()
        .route("/", post(create_character))
        .route("/:id", put(update_character).delete(delete_character))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_characters))
        .route("/hello", get(hello))
        .route("/random", get(get_random_character))
        .route("/:id", get(get_character))
        .merge(protected)
        .with_state(DirectoryState { db, kind })
}
