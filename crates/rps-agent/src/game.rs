//! Match execution against a simulated archetype bot
//!
//! The archetype predictors are exact simulations of the target bots, so
//! the same functions drive the live opponent here. Both sides move
//! simultaneously: the bot reads the agent's history up to the previous
//! round, never the move being decided.

use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::archetype::{predict, Archetype};
use crate::symbol::Symbol;
use crate::{outcome, Outcome};

/// One round of a completed match, from the agent's perspective
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub agent_move: Symbol,
    pub bot_move: Symbol,
    pub outcome: Outcome,
    pub cumulative_wins: u32,
    pub cumulative_losses: u32,
}

/// Result of a complete match against one archetype bot
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchSummary {
    pub bot: Archetype,
    pub rounds: Vec<RoundRecord>,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchSummary {
    /// Fraction of rounds won; draws count against the rate
    pub fn win_rate(&self) -> f64 {
        let total = self.rounds.len();
        if total == 0 {
            return 0.0;
        }
        self.wins as f64 / total as f64
    }
}

/// Run a fixed-length match of the agent against one archetype bot
///
/// # Arguments
/// * `bot` - The archetype the opponent actually plays
/// * `rounds` - Number of rounds in the match
/// * `seed` - Seed for the agent's fallback randomness
/// * `stream` - Stream index separating matches that share a seed
pub fn run_match(bot: Archetype, rounds: u32, seed: &[u8; 32], stream: u32) -> MatchSummary {
    let mut agent = Agent::from_seed(seed, stream);
    let mut records = Vec::with_capacity(rounds as usize);
    let mut prev: Option<Symbol> = None;
    let (mut wins, mut losses, mut draws) = (0u32, 0u32, 0u32);

    for round in 1..=rounds {
        // Bot and agent commit simultaneously; the bot sees only the
        // agent's history through the previous round.
        let bot_move = predict(bot, agent.own_history(), round);
        let agent_move = agent.decide(prev);

        let result = outcome(agent_move, bot_move);
        match result {
            Outcome::Win => wins += 1,
            Outcome::Loss => losses += 1,
            Outcome::Draw => draws += 1,
        }

        records.push(RoundRecord {
            round,
            agent_move,
            bot_move,
            outcome: result,
            cumulative_wins: wins,
            cumulative_losses: losses,
        });

        prev = Some(bot_move);
    }

    MatchSummary {
        bot,
        rounds: records,
        wins,
        losses,
        draws,
    }
}
