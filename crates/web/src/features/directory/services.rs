use sqlx::PgPool;
use storage::{
    dto::character::{CreateCharacterRequest, UpdateCharacterRequest},
    error::Result,
    models::{Character, FighterKind},
    repository::character::CharacterRepository,
};

/// Pick a random character
pub async fn find_random(pool: &PgPool, kind: FighterKind) -> Result<Option<Character>> {
    let repo = CharacterRepository::new(pool, kind);
    repo.find_random().await
}

/// List all characters
pub async fn list_characters(pool: &PgPool, kind: FighterKind) -> Result<Vec<Character>> {
    let repo = CharacterRepository::new(pool, kind);
    repo.list().await
}

/// Get character by id
pub async fn get_character(pool: &PgPool, kind: FighterKind, id: i64) -> Result<Option<Character>> {
    let repo = CharacterRepository::new(pool, kind);
    repo.find_by_id(id).await
}

/// Create a new character
pub async fn create_character(
    pool: &PgPool,
    kind: FighterKind,
    request: &CreateCharacterRequest,
) -> Result<Character> {
    let repo = CharacterRepository::new(pool, kind);
    repo.create(request).await
}

/// Update a character
pub async fn update_character(
    pool: &PgPool,
    kind: FighterKind,
    id: i64,
    request: &UpdateCharacterRequest,
) -> Result<Character> {
    let repo = CharacterRepository::new(pool, kind);
    repo.update(id, request).await
}

/// Delete a character
pub async fn delete_character(pool: &PgPool, kind: FighterKind, id: i64) -> Result<()> {
    let repo = CharacterRepository::new(pool, kind);
    repo.delete(id).await
}
