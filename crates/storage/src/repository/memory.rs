use async_trait::async_trait;
use tokio::sync::RwLock;

use super::FightStore;
use crate::error::Result;
use crate::models::{Fight, NewFight};

/// In-process fight store for tests and local development.
///
/// Ids are assigned under the write lock, so concurrent saves never share one.
#[derive(Debug, Default)]
pub struct InMemoryFightStore {
    fights: RwLock<Vec<Fight>>,
}

impl InMemoryFightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store already holding `fights`, ids assigned from 1.
    pub fn with_fights(fights: impl IntoIterator<Item = NewFight>) -> Self {
        let fights = fights
            .into_iter()
            .enumerate()
            .map(|(idx, fight)| fight.with_id(idx as i64 + 1))
            .collect();

        Self {
            fights: RwLock::new(fights),
        }
    }
}

#[async_trait]
impl FightStore for InMemoryFightStore {
    async fn save(&self, fight: NewFight) -> Result<Fight> {
        fight.ensure_complete()?;

        let mut fights = self.fights.write().await;
        let id = fights.last().map_or(1, |last| last.id + 1);
        let saved = fight.with_id(id);
        fights.push(saved.clone());

        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Fight>> {
        let fights = self.fights.read().await;
        Ok(fights.iter().find(|fight| fight.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Fight>> {
        Ok(self.fights.read().await.clone())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.fights.read().await.len() as i64)
    }
}
