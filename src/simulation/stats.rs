//! Aggregation of trial results per hand size.

use crate::game::state::GameError;
use crate::simulation::engine::GameResult;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of all trials for one starting hand size
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrialSummary {
    pub hand_size: usize,
    /// Games that assembled Tron
    pub games: usize,
    /// Games aborted because the library ran out; excluded from the statistics
    pub exhausted: usize,
    /// Tron turn of every completed game, in trial order
    #[serde(skip)]
    pub turns: Vec<u32>,
    pub turn_distribution: BTreeMap<u32, usize>,
    pub mean_turn: Option<f64>,
    pub std_dev: Option<f64>,
}

impl TrialSummary {
    pub fn from_results(hand_size: usize, results: &[Result<GameResult, GameError>]) -> Self {
        let mut summary = TrialSummary {
            hand_size,
            ..TrialSummary::default()
        };

        for result in results {
            match result {
                Ok(game) => {
                    summary.turns.push(game.tron_turn);
                    *summary.turn_distribution.entry(game.tron_turn).or_insert(0) += 1;
                }
                Err(GameError::DeckExhausted { .. }) => summary.exhausted += 1,
                Err(GameError::InvalidHandSize(_)) => {}
            }
        }

        summary.games = summary.turns.len();
        summary.mean_turn = summary.mean_turn();
        summary.std_dev = summary.std_dev();
        summary
    }

    pub fn mean_turn(&self) -> Option<f64> {
        if self.turns.is_empty() {
            return None;
        }
        Some(self.turns.iter().map(|&t| t as f64).sum::<f64>() / self.turns.len() as f64)
    }

    /// Population standard deviation
    pub fn std_dev(&self) -> Option<f64> {
        let mean = self.mean_turn()?;
        let variance = self
            .turns
            .iter()
            .map(|&t| (t as f64 - mean).powi(2))
            .sum::<f64>()
            / self.turns.len() as f64;
        Some(variance.sqrt())
    }

    /// Fraction of completed games that assembled Tron exactly on `turn`
    pub fn fraction_on(&self, turn: u32) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.turn_distribution.get(&turn).copied().unwrap_or(0) as f64 / self.games as f64
    }

    /// Fraction of completed games that assembled Tron on or before `turn`
    pub fn fraction_by(&self, turn: u32) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let count: usize = self.turn_distribution.range(..=turn).map(|(_, c)| c).sum();
        count as f64 / self.games as f64
    }
}
