use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Fighter;

/// Which directory a character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FighterKind {
    Hero,
    Villain,
}

impl FighterKind {
    pub fn table(&self) -> &'static str {
        match self {
            FighterKind::Hero => "heroes",
            FighterKind::Villain => "villains",
        }
    }

    /// Path segment under `/api` where the directory is mounted.
    pub fn collection(&self) -> &'static str {
        self.table()
    }
}

impl fmt::Display for FighterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FighterKind::Hero => write!(f, "hero"),
            FighterKind::Villain => write!(f, "villain"),
        }
    }
}

/// A hero or villain as stored by its directory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub other_name: Option<String>,
    pub level: i32,
    pub picture: String,
    pub powers: Option<String>,
}

impl Character {
    pub fn to_fighter(&self) -> Fighter {
        Fighter {
            name: self.name.clone(),
            picture: self.picture.clone(),
            level: self.level,
        }
    }
}
