//! Outbound publication of fight outcomes for statistics consumers.

mod broadcast;
mod http;

pub use broadcast::BroadcastNotifier;
pub use http::HttpNotifier;

use storage::models::Fight;

use crate::Result;

/// Publishes a stored fight to an event channel.
///
/// Failures are returned to the caller, which decides whether to surface or
/// swallow them.
#[async_trait::async_trait]
pub trait FightNotifier: Send + Sync {
    async fn publish(&self, fight: &Fight) -> Result<()>;

    fn name(&self) -> &'static str;
}
