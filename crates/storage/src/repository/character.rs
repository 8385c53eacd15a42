use sqlx::PgPool;

use crate::dto::character::{CreateCharacterRequest, UpdateCharacterRequest};
use crate::error::{Result, StorageError};
use crate::models::{Character, FighterKind};

const CHARACTER_COLUMNS: &str = "id, name, other_name, level, picture, powers";

/// Hero or villain directory, depending on `kind`.
pub struct CharacterRepository<'a> {
    pool: &'a PgPool,
    kind: FighterKind,
}

impl<'a> CharacterRepository<'a> {
    pub fn new(pool: &'a PgPool, kind: FighterKind) -> Self {
        Self { pool, kind }
    }

    /// List all characters
    pub async fn list(&self) -> Result<Vec<Character>> {
        let characters = sqlx::query_as::<_, Character>(&format!(
            "SELECT {CHARACTER_COLUMNS} FROM {} ORDER BY id",
            self.kind.table()
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(characters)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Character>> {
        let character = sqlx::query_as::<_, Character>(&format!(
            "SELECT {CHARACTER_COLUMNS} FROM {} WHERE id = $1",
            self.kind.table()
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(character)
    }

    /// Picks one character uniformly at random, `None` if the directory is empty
    pub async fn find_random(&self) -> Result<Option<Character>> {
        let character = sqlx::query_as::<_, Character>(&format!(
            "SELECT {CHARACTER_COLUMNS} FROM {} ORDER BY random() LIMIT 1",
            self.kind.table()
        ))
        .fetch_optional(self.pool)
        .await?;

        Ok(character)
    }

    pub async fn create(&self, req: &CreateCharacterRequest) -> Result<Character> {
        let character = sqlx::query_as::<_, Character>(&format!(
            r#"
            INSERT INTO {} (name, other_name, level, picture, powers)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CHARACTER_COLUMNS}
            "#,
            self.kind.table()
        ))
        .bind(&req.name)
        .bind(&req.other_name)
        .bind(req.level)
        .bind(&req.picture)
        .bind(&req.powers)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_unique_violation() {
                StorageError::ConstraintViolation(format!(
                    "A {} named '{}' already exists",
                    self.kind, req.name
                ))
            } else {
                e
            }
        })?;

        Ok(character)
    }

    /// Update an existing character, keeping fields absent from the request
    pub async fn update(&self, id: i64, req: &UpdateCharacterRequest) -> Result<Character> {
        let existing = self.find_by_id(id).await?.ok_or(StorageError::NotFound)?;

        let name = req.name.as_ref().unwrap_or(&existing.name);
        let other_name = req.other_name.as_ref().or(existing.other_name.as_ref());
        let level = req.level.unwrap_or(existing.level);
        let picture = req.picture.as_ref().unwrap_or(&existing.picture);
        let powers = req.powers.as_ref().or(existing.powers.as_ref());

        let character = sqlx::query_as::<_, Character>(&format!(
            r#"
            UPDATE {}
            SET name = $2,
                other_name = $3,
                level = $4,
                picture = $5,
                powers = $6
            WHERE id = $1
            RETURNING {CHARACTER_COLUMNS}
            "#,
            self.kind.table()
        ))
        .bind(id)
        .bind(name)
        .bind(other_name)
        .bind(level)
        .bind(picture)
        .bind(powers)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(character)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", self.kind.table()))
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
