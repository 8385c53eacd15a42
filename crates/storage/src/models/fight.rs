use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{Result, StorageError};

/// A resolved fight that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewFight {
    pub fight_date: DateTime<Utc>,
    pub winner_name: String,
    pub winner_picture: String,
    pub winner_level: i32,
    pub loser_name: String,
    pub loser_picture: String,
    pub loser_level: i32,
}

impl NewFight {
    /// Checks that both sides of the fight are populated before it is stored.
    pub fn ensure_complete(&self) -> Result<()> {
        if self.winner_name.trim().is_empty() || self.winner_level < 1 {
            return Err(StorageError::IncompleteFight(
                "winner data is missing".to_string(),
            ));
        }
        if self.loser_name.trim().is_empty() || self.loser_level < 1 {
            return Err(StorageError::IncompleteFight(
                "loser data is missing".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_id(self, id: i64) -> Fight {
        Fight {
            id,
            fight_date: self.fight_date,
            winner_name: self.winner_name,
            winner_picture: self.winner_picture,
            winner_level: self.winner_level,
            loser_name: self.loser_name,
            loser_picture: self.loser_picture,
            loser_level: self.loser_level,
        }
    }
}

/// A persisted fight. Never updated once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Fight {
    pub id: i64,
    pub fight_date: DateTime<Utc>,
    pub winner_name: String,
    pub winner_picture: String,
    pub winner_level: i32,
    pub loser_name: String,
    pub loser_picture: String,
    pub loser_level: i32,
}
