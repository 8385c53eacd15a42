pub mod directory;
pub mod error;
pub mod notifier;

pub use directory::{FighterDirectory, HttpFighterDirectory};
pub use error::{ClientError, Result};
pub use notifier::{BroadcastNotifier, FightNotifier, HttpNotifier};
