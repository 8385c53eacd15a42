//! Hero and villain directories. The same handlers serve both, the mounted
//! [`FighterKind`](storage::models::FighterKind) selects the table.

pub mod handlers;
pub mod routes;
pub mod services;

use storage::{Database, models::FighterKind};

#[derive(Clone)]
pub struct DirectoryState {
    pub db: Database,
    pub kind: FighterKind,
}
