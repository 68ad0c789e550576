//! Adaptive agent for iterated Rock-Paper-Scissors
//!
//! The agent simulates four fixed opponent archetypes in parallel,
//! accumulates evidence for whichever one matches the opponent's actual
//! play, and switches from a hedged mixture policy to exploiting the
//! best-matching archetype once the evidence gap is wide enough.
//!
//! This crate is compiled to:
//! - Native (for harnesses and tests)
//! - WASM (for browser-side match replay, behind the `wasm` feature)

mod agent;
mod archetype;
mod evidence;
mod game;
mod policy;
mod random;
mod symbol;

#[cfg(feature = "wasm")]
mod wasm;

use serde::{Deserialize, Serialize};

pub use agent::Agent;
pub use archetype::{predict, predict_all, Archetype, ARCHETYPES};
pub use evidence::{ScoreBoard, HIT_REWARD, MISS_PENALTY};
pub use game::{run_match, MatchSummary, RoundRecord};
pub use policy::{choose_from_mass, prediction_mass, CONFIDENCE_GAP, MIN_EXPLOIT_ROUND};
pub use random::SeededRng;
pub use symbol::{Symbol, SYMBOLS};

/// Result of one round, from the first player's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

/// Score one round under cyclic dominance
///
/// `a` is the agent's move, `b` the opponent's.
pub fn outcome(a: Symbol, b: Symbol) -> Outcome {
    if a == b {
        Outcome::Draw
    } else if a.defeats() == b {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}
