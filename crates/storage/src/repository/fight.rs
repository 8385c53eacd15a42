use async_trait::async_trait;
use sqlx::PgPool;

use super::FightStore;
use crate::error::Result;
use crate::models::{Fight, NewFight};

const FIGHT_COLUMNS: &str = "id, fight_date, winner_name, winner_picture, winner_level, \
                             loser_name, loser_picture, loser_level";

/// Postgres-backed fight store. Ids come from the `fights_id_seq` sequence.
#[derive(Clone)]
pub struct FightRepository {
    pool: PgPool,
}

impl FightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FightStore for FightRepository {
    async fn save(&self, fight: NewFight) -> Result<Fight> {
        fight.ensure_complete()?;

        let saved = sqlx::query_as::<_, Fight>(&format!(
            r#"
            INSERT INTO fights (fight_date, winner_name, winner_picture, winner_level,
                                loser_name, loser_picture, loser_level)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {FIGHT_COLUMNS}
            "#
        ))
        .bind(fight.fight_date)
        .bind(&fight.winner_name)
        .bind(&fight.winner_picture)
        .bind(fight.winner_level)
        .bind(&fight.loser_name)
        .bind(&fight.loser_picture)
        .bind(fight.loser_level)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Fight>> {
        let fight = sqlx::query_as::<_, Fight>(&format!(
            "SELECT {FIGHT_COLUMNS} FROM fights WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(fight)
    }

    async fn find_all(&self) -> Result<Vec<Fight>> {
        let fights = sqlx::query_as::<_, Fight>(&format!(
            "SELECT {FIGHT_COLUMNS} FROM fights ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(fights)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM fights")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
