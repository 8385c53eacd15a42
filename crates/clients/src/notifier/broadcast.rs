use storage::models::Fight;
use tokio::sync::broadcast;

use super::FightNotifier;
use crate::error::{ClientError, Result};

/// In-process fan-out of fights to any number of subscribers.
#[derive(Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<Fight>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Fight> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(256)
    }
}

#[async_trait::async_trait]
impl FightNotifier for BroadcastNotifier {
    async fn publish(&self, fight: &Fight) -> Result<()> {
        let receivers = self.sender.send(fight.clone()).map_err(|_| {
            ClientError::NotificationError(format!("no subscriber for fight {}", fight.id))
        })?;
        tracing::debug!("Fight {} sent to {} subscriber(s)", fight.id, receivers);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "broadcast"
    }
}
