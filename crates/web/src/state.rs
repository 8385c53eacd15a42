use std::sync::Arc;

use crate::features::fights::FightService;
use crate::features::statistics::services::SharedWinners;

/// State shared by the fight service handlers.
#[derive(Clone)]
pub struct AppState {
    pub fights: Arc<FightService>,
    pub winners: SharedWinners,
}

impl AppState {
    pub fn new(fights: FightService, winners: SharedWinners) -> Self {
        Self {
            fights: Arc::new(fights),
            winners,
        }
    }
}
