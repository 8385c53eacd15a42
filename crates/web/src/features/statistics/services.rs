use std::sync::Arc;

use storage::{models::Fight, services::statistics::TopWinners};
use tokio::{
    sync::{RwLock, broadcast},
    task::JoinHandle,
};

pub type SharedWinners = Arc<RwLock<TopWinners>>;

/// Size of the leaderboard served by `/api/stats/winners`
pub const TOP_WINNERS_LIMIT: usize = 10;

/// Feeds every fight received on `receiver` into `winners` until the channel closes.
pub fn spawn_collector(
    mut receiver: broadcast::Receiver<Fight>,
    winners: SharedWinners,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(fight) => winners.write().await.record(&fight),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("Statistics collector skipped {} fights", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        tracing::info!("Statistics collector stopped");
    })
}
