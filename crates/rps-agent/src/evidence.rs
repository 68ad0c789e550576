//! Evidence accumulation over archetype predictions
//!
//! Each round the previous round's predictions are scored against the
//! opponent's actual move. The reward is asymmetric: a hit is worth far
//! more than a miss costs, so an archetype that is right even moderately
//! often trends upward quickly.

use serde::{Deserialize, Serialize};

use crate::archetype::{Archetype, ARCHETYPES};
use crate::symbol::Symbol;

/// Score added when an archetype's prediction matches the observed move
pub const HIT_REWARD: f64 = 1.0;
/// Score removed when it does not
pub const MISS_PENALTY: f64 = 0.35;

/// Running evidence score per archetype
///
/// Scores are signed, unbounded accumulators starting at zero. No
/// normalization is applied; only differences between scores matter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBoard {
    scores: [f64; 4],
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score for one archetype
    pub fn get(&self, archetype: Archetype) -> f64 {
        self.scores[archetype.index()]
    }

    /// Largest current score
    pub fn max(&self) -> f64 {
        self.scores.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Score last round's predictions against the opponent's actual move
    pub fn record(&mut self, predictions: &[Symbol; 4], actual: Symbol) {
        for a in ARCHETYPES {
            if predictions[a.index()] == actual {
                self.scores[a.index()] += HIT_REWARD;
            } else {
                self.scores[a.index()] -= MISS_PENALTY;
            }
        }
    }

    /// Top-scoring archetype and its lead over the runner-up
    ///
    /// Ties resolve in the fixed `ARCHETYPES` order.
    pub fn leader(&self) -> (Archetype, f64) {
        let mut leader = Archetype::Cyclic;
        for a in ARCHETYPES {
            if self.scores[a.index()] > self.scores[leader.index()] {
                leader = a;
            }
        }
        let runner_up = ARCHETYPES
            .iter()
            .filter(|a| **a != leader)
            .map(|a| self.scores[a.index()])
            .fold(f64::NEG_INFINITY, f64::max);
        (leader, self.scores[leader.index()] - runner_up)
    }

    /// Zero all scores
    pub fn reset(&mut self) {
        self.scores = [0.0; 4];
    }
}
