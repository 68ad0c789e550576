//! Per-match agent state and the round decision entry point

use crate::archetype::predict_all;
use crate::evidence::ScoreBoard;
use crate::policy::select_move;
use crate::random::SeededRng;
use crate::symbol::Symbol;

/// Adaptive agent for one iterated RPS match
///
/// Holds everything that persists between rounds: round counter, both
/// move histories, the evidence scores and the predictions awaiting
/// scoring. Each match gets its own instance; instances never share
/// state, so concurrent matches are just independent agents.
#[derive(Clone, Debug)]
pub struct Agent {
    round: u32,
    own: Vec<Symbol>,
    opponent: Vec<Symbol>,
    scores: ScoreBoard,
    pending: Option<[Symbol; 4]>,
    rng: SeededRng,
}

impl Agent {
    /// Create an agent with an explicit random source
    pub fn new(rng: SeededRng) -> Self {
        Self {
            round: 0,
            own: Vec::new(),
            opponent: Vec::new(),
            scores: ScoreBoard::new(),
            pending: None,
            rng,
        }
    }

    /// Create an agent seeded directly; `stream` separates concurrent
    /// matches sharing one seed
    pub fn from_seed(seed: &[u8; 32], stream: u32) -> Self {
        Self::new(SeededRng::new(seed, stream))
    }

    /// Decide the agent's move for the next round
    ///
    /// `opponent_last` is the opponent's move from the previous round, or
    /// `None` on the first call of a match. A `None` arriving after rounds
    /// have already been played signals a new match: all state is wiped
    /// before the call is processed as round 1.
    pub fn decide(&mut self, opponent_last: Option<Symbol>) -> Symbol {
        match opponent_last {
            None if self.round > 0 => self.reset(),
            Some(observed) if self.round > 0 => {
                self.opponent.push(observed);
                if let Some(pending) = &self.pending {
                    self.scores.record(pending, observed);
                }
            }
            // First call of a fresh match; a stray Some before round 1
            // has nothing to be scored against and is ignored.
            _ => {}
        }

        self.round += 1;
        let predictions = predict_all(&self.own, self.round);
        self.pending = Some(predictions);

        let chosen = select_move(self.round, &predictions, &self.scores, &mut self.rng);
        self.own.push(chosen);
        chosen
    }

    /// Wipe all match-scoped state, as if freshly constructed
    pub fn reset(&mut self) {
        self.round = 0;
        self.own.clear();
        self.opponent.clear();
        self.scores.reset();
        self.pending = None;
    }

    /// Rounds completed so far (the last returned move belongs to this round)
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The agent's own past moves, oldest first
    pub fn own_history(&self) -> &[Symbol] {
        &self.own
    }

    /// The opponent's observed past moves, oldest first
    pub fn opponent_history(&self) -> &[Symbol] {
        &self.opponent
    }

    /// Current evidence scores
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }
}
