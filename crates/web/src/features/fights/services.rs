use std::sync::Arc;
use std::time::Duration;

use clients::{ClientError, FightNotifier, FighterDirectory};
use storage::{
    error::StorageError,
    models::{Fight, Fighter, FighterKind, Fighters},
    repository::FightStore,
    services::fight_resolver,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FightError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("The {kind} directory is unavailable: {source}")]
    FighterUnavailable {
        kind: FighterKind,
        #[source]
        source: ClientError,
    },

    #[error("Random fighters not fetched within {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Copy)]
pub struct FightTimeouts {
    /// Deadline for fetching both random fighters
    pub fighters: Duration,
    /// Budget of a single notification
    pub notify: Duration,
}

impl Default for FightTimeouts {
    fn default() -> Self {
        Self {
            fighters: Duration::from_millis(250),
            notify: Duration::from_millis(500),
        }
    }
}

/// Fetches fighters, resolves fights, stores them and announces the outcome.
pub struct FightService {
    store: Arc<dyn FightStore>,
    heroes: Arc<dyn FighterDirectory>,
    villains: Arc<dyn FighterDirectory>,
    notifier: Arc<dyn FightNotifier>,
    timeouts: FightTimeouts,
}

impl FightService {
    pub fn new(
        store: Arc<dyn FightStore>,
        heroes: Arc<dyn FighterDirectory>,
        villains: Arc<dyn FighterDirectory>,
        notifier: Arc<dyn FightNotifier>,
        timeouts: FightTimeouts,
    ) -> Self {
        Self {
            store,
            heroes,
            villains,
            notifier,
            timeouts,
        }
    }

    /// Fetch one random hero and one random villain.
    ///
    /// Both calls run concurrently and must succeed before the deadline. When
    /// the deadline passes, the in-flight calls are dropped.
    pub async fn get_random_fighters(&self) -> Result<Fighters, FightError> {
        let fetch = async {
            tokio::try_join!(
                fetch_random(self.heroes.as_ref()),
                fetch_random(self.villains.as_ref())
            )
        };

        let (hero, villain) = tokio::time::timeout(self.timeouts.fighters, fetch)
            .await
            .map_err(|_| FightError::Timeout(self.timeouts.fighters))??;

        tracing::debug!("Got random fighters {} vs {}", hero.name, villain.name);
        Ok(Fighters::new(hero, villain))
    }

    /// Resolve and store a fight between the given fighters.
    pub async fn trigger_fight(&self, fighters: Fighters) -> Result<Fight, FightError> {
        let (hero, villain) = match (fighters.hero.as_ref(), fighters.villain.as_ref()) {
            (Some(hero), Some(villain)) => (hero, villain),
            (None, None) => {
                return Err(FightError::InvalidRequest(
                    "hero and villain are required".to_string(),
                ));
            }
            (None, _) => return Err(FightError::InvalidRequest("hero is required".to_string())),
            (_, None) => {
                return Err(FightError::InvalidRequest(
                    "villain is required".to_string(),
                ));
            }
        };

        let new_fight = fight_resolver::resolve_now(hero, villain)?;
        let fight = self.store.save(new_fight).await?;

        tracing::info!(
            "Fight {} won by {} (level {}) against {} (level {})",
            fight.id,
            fight.winner_name,
            fight.winner_level,
            fight.loser_name,
            fight.loser_level
        );

        self.dispatch_notification(fight.clone());

        Ok(fight)
    }

    pub async fn get_fight(&self, id: i64) -> Result<Option<Fight>, FightError> {
        Ok(self.store.find_by_id(id).await?)
    }

    pub async fn get_all_fights(&self) -> Result<Vec<Fight>, FightError> {
        Ok(self.store.find_all().await?)
    }

    /// Publishes in the background. Failures are logged and never reach the caller.
    fn dispatch_notification(&self, fight: Fight) {
        let notifier = Arc::clone(&self.notifier);
        let budget = self.timeouts.notify;

        tokio::spawn(async move {
            match tokio::time::timeout(budget, notifier.publish(&fight)).await {
                Ok(Ok(())) => {
                    tracing::debug!("Fight {} published via {}", fight.id, notifier.name());
                }
                Ok(Err(e)) => {
                    tracing::warn!(
                        "Failed to publish fight {} via {}: {}",
                        fight.id,
                        notifier.name(),
                        e
                    );
                }
                Err(_) => {
                    tracing::warn!(
                        "Publishing fight {} via {} took more than {:?}",
                        fight.id,
                        notifier.name(),
                        budget
                    );
                }
            }
        });
    }
}

async fn fetch_random(directory: &dyn FighterDirectory) -> Result<Fighter, FightError> {
    directory.fetch_random().await.map_err(|source| {
        if source.is_timeout() {
            tracing::warn!("Random {} request timed out", directory.kind());
        } else {
            tracing::warn!("Random {} request failed: {}", directory.kind(), source);
        }
        FightError::FighterUnavailable {
            kind: directory.kind(),
            source,
        }
    })
}
