//! Opponent archetypes and their move predictors
//!
//! Each archetype simulates one known opponent strategy. A predictor is a
//! pure function of the agent's own past moves and the 1-indexed round
//! number; it never sees the opponent's move for the round being predicted.
//! The same functions double as live bot implementations in the match
//! runner, which is what makes the simulation exact.

use serde::{Deserialize, Serialize};

use crate::symbol::{Symbol, SYMBOLS};

/// Fixed period-5 sequence played by the cyclic archetype
const CYCLE: [Symbol; 5] = [
    Symbol::Rock,
    Symbol::Rock,
    Symbol::Paper,
    Symbol::Paper,
    Symbol::Scissors,
];

/// Window length for the frequency-counter archetype
const FREQUENCY_WINDOW: usize = 10;

/// One of the four simulated opponent strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Archetype {
    /// Plays a fixed period-5 cycle, ignoring all history.
    Cyclic,
    /// Counters the agent's previous move.
    LastMoveCounter,
    /// Counters the agent's most frequent recent move.
    FrequencyCounter,
    /// Markov-predicts the agent's next move from own-move transitions,
    /// then counters it.
    TransitionModel,
}

/// Fixed archetype order used for score tables and tie-breaks
pub const ARCHETYPES: [Archetype; 4] = [
    Archetype::Cyclic,
    Archetype::LastMoveCounter,
    Archetype::FrequencyCounter,
    Archetype::TransitionModel,
];

impl Archetype {
    /// Dense index matching the `ARCHETYPES` order
    pub fn index(self) -> usize {
        match self {
            Archetype::Cyclic => 0,
            Archetype::LastMoveCounter => 1,
            Archetype::FrequencyCounter => 2,
            Archetype::TransitionModel => 3,
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Archetype::Cyclic => "Cyclic",
            Archetype::LastMoveCounter => "Last-Move Counter",
            Archetype::FrequencyCounter => "Frequency Counter",
            Archetype::TransitionModel => "Transition Model",
        }
    }

    /// Human-readable description of the simulated strategy
    pub fn describe(self) -> &'static str {
        match self {
            Archetype::Cyclic => "Plays a fixed five-move cycle regardless of history.",
            Archetype::LastMoveCounter => "Plays whatever beats the agent's previous move.",
            Archetype::FrequencyCounter => {
                "Plays whatever beats the agent's most frequent move in the last ten rounds."
            }
            Archetype::TransitionModel => {
                "Predicts the agent's next move from past move transitions, then counters it."
            }
        }
    }
}

/// Predict the opponent's move at 1-indexed `round`
///
/// # Arguments
/// * `archetype` - The simulated strategy
/// * `own_history` - The agent's past moves, oldest first, not including
///   the move for `round` (which has not been chosen yet)
/// * `round` - Current round number (1-indexed)
pub fn predict(archetype: Archetype, own_history: &[Symbol], round: u32) -> Symbol {
    match archetype {
        Archetype::Cyclic => predict_cyclic(round),
        Archetype::LastMoveCounter => predict_last_move_counter(own_history),
        Archetype::FrequencyCounter => predict_frequency_counter(own_history),
        Archetype::TransitionModel => predict_transition_model(own_history),
    }
}

/// Run all four predictors; result is indexed by `Archetype::index`
pub fn predict_all(own_history: &[Symbol], round: u32) -> [Symbol; 4] {
    let mut predictions = [Symbol::Rock; 4];
    for a in ARCHETYPES {
        predictions[a.index()] = predict(a, own_history, round);
    }
    predictions
}

fn predict_cyclic(round: u32) -> Symbol {
    CYCLE[(round % 5) as usize]
}

fn predict_last_move_counter(own_history: &[Symbol]) -> Symbol {
    // Empty history is treated as a previous Rock.
    own_history
        .last()
        .copied()
        .unwrap_or(Symbol::Rock)
        .beaten_by()
}

fn predict_frequency_counter(own_history: &[Symbol]) -> Symbol {
    // The bot's view of our history starts with one placeholder entry, so
    // on round 1 the window is exactly that placeholder. Once the agent has
    // played FREQUENCY_WINDOW or more moves the placeholder falls out.
    let (placeholder_count, window) = if own_history.len() < FREQUENCY_WINDOW {
        (1usize, own_history)
    } else {
        (0usize, &own_history[own_history.len() - FREQUENCY_WINDOW..])
    };

    let mut counts = [0usize; 3];
    for &m in window {
        counts[m.index()] += 1;
    }

    // Mode of the window; a modal placeholder stands in for Scissors.
    // Tie-break: placeholder first, then Rock, Paper, Scissors.
    let mut mode = Symbol::Scissors;
    let mut mode_count = placeholder_count;
    for s in SYMBOLS {
        if counts[s.index()] > mode_count {
            mode = s;
            mode_count = counts[s.index()];
        }
    }

    mode.beaten_by()
}

fn predict_transition_model(own_history: &[Symbol]) -> Symbol {
    // Order-1 Markov model over the agent's own moves, with a synthetic
    // leading Rock so the table is never consulted on an empty sequence.
    let mut counts = [[0u32; 3]; 3];
    let mut prev = Symbol::Rock;
    for &m in own_history {
        counts[prev.index()][m.index()] += 1;
        prev = m;
    }

    // Most likely next agent move from prev's row; ties resolve in the
    // fixed Rock, Paper, Scissors order.
    let row = counts[prev.index()];
    let mut next = Symbol::Rock;
    for s in SYMBOLS {
        if row[s.index()] > row[next.index()] {
            next = s;
        }
    }

    next.beaten_by()
}
