use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of fights won by a fighter, as shown by the statistics endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Score {
    pub name: String,
    pub score: u32,
}

impl Score {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}
