pub mod character;
pub mod fight;
pub mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Fight, NewFight};

/// Durable store of resolved fights.
///
/// Implementations must hand out a distinct id to every saved fight, even
/// under concurrent callers, and list fights in a stable order.
#[async_trait]
pub trait FightStore: Send + Sync {
    /// Persists a fight and returns it with its assigned id.
    async fn save(&self, fight: NewFight) -> Result<Fight>;

    /// Returns `None` when no fight has this id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Fight>>;

    /// All fights in insertion order.
    async fn find_all(&self) -> Result<Vec<Fight>>;

    async fn count(&self) -> Result<i64> {
        Ok(self.find_all().await?.len() as i64)
    }
}
