use std::collections::HashMap;

use crate::models::{Fight, Score};

/// Running count of victories per fighter name.
#[derive(Debug, Clone, Default)]
pub struct TopWinners {
    scores: HashMap<String, u32>,
}

impl TopWinners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, fight: &Fight) {
        *self.scores.entry(fight.winner_name.clone()).or_insert(0) += 1;
    }

    /// Highest scores first, ties ordered by name.
    pub fn top(&self, limit: usize) -> Vec<Score> {
        let mut scores: Vec<Score> = self
            .scores
            .iter()
            .map(|(name, score)| Score::new(name.clone(), *score))
            .collect();

        scores.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        scores.truncate(limit);
        scores
    }
}
