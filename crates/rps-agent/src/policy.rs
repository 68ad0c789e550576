//! Exploit/hedge move selection
//!
//! With enough evidence behind a single archetype the agent plays the
//! exact counter to that archetype's prediction. Until then it hedges:
//! predictions are blended by softmax weight into a per-symbol mass, and
//! the move with the best win-to-decisive-outcome ratio is played.

use crate::archetype::ARCHETYPES;
use crate::evidence::ScoreBoard;
use crate::random::SeededRng;
use crate::symbol::{Symbol, SYMBOLS};

/// Earliest round at which exploit mode may trigger
pub const MIN_EXPLOIT_ROUND: u32 = 6;
/// Evidence lead over the runner-up required to exploit
pub const CONFIDENCE_GAP: f64 = 2.5;

/// Softmax temperature for hedge weights
const TEMPERATURE: f64 = 2.0;
/// Tolerance when comparing candidate win ratios
const RATIO_EPSILON: f64 = 1e-12;

/// Choose the move for 1-indexed `round` from fresh predictions and the
/// current evidence scores
pub fn select_move(
    round: u32,
    predictions: &[Symbol; 4],
    scores: &ScoreBoard,
    rng: &mut SeededRng,
) -> Symbol {
    let (leader, gap) = scores.leader();
    if round >= MIN_EXPLOIT_ROUND && gap >= CONFIDENCE_GAP {
        // Exploit: counter the single most-trusted archetype
        predictions[leader.index()].beaten_by()
    } else {
        choose_from_mass(&prediction_mass(predictions, scores), rng)
    }
}

/// Blend predictions into per-symbol mass, weighting each archetype by
/// softmax of its evidence score
///
/// The max score is subtracted before exponentiation for numerical
/// stability; weights are left unnormalized.
pub fn prediction_mass(predictions: &[Symbol; 4], scores: &ScoreBoard) -> [f64; 3] {
    let max = scores.max();
    let mut mass = [0.0; 3];
    for a in ARCHETYPES {
        let weight = ((scores.get(a) - max) / TEMPERATURE).exp();
        mass[predictions[a.index()].index()] += weight;
    }
    mass
}

/// Pick the move maximizing `win / (win + lose)` under the normalized mass
///
/// `win` is the probability of the symbol the candidate defeats, `lose`
/// the probability of the symbol that defeats it; a 0/0 ratio counts as
/// 0.5. Ties within `RATIO_EPSILON` go to the candidate with the higher
/// absolute win probability, scanning in the fixed `SYMBOLS` order. Zero
/// total mass falls back to a uniform random symbol.
pub fn choose_from_mass(mass: &[f64; 3], rng: &mut SeededRng) -> Symbol {
    let total: f64 = mass.iter().sum();
    if total <= 0.0 {
        return SYMBOLS[rng.next_range(3) as usize];
    }

    let mut best_move = Symbol::Rock;
    let mut best_ratio = -1.0;
    let mut best_win = -1.0;

    for candidate in SYMBOLS {
        let win = mass[candidate.defeats().index()] / total;
        let lose = mass[candidate.beaten_by().index()] / total;
        let denom = win + lose;
        let ratio = if denom > 0.0 { win / denom } else { 0.5 };

        if ratio > best_ratio + RATIO_EPSILON
            || ((ratio - best_ratio).abs() <= RATIO_EPSILON && win > best_win)
        {
            best_move = candidate;
            best_ratio = ratio;
            best_win = win;
        }
    }

    best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::Archetype;
    use Symbol::{Paper, Rock, Scissors};

    fn make_rng() -> SeededRng {
        SeededRng::new(&[42u8; 32], 0)
    }

    /// Board where archetype `i` scored `hits[i]` hits and misses for the
    /// remaining rounds, out of `max(hits)` recorded rounds
    fn board_with_hits(hits: [u32; 4]) -> ScoreBoard {
        let mut board = ScoreBoard::new();
        let max = *hits.iter().max().unwrap();
        for i in 0..max {
            let predictions = [
                if i < hits[0] { Rock } else { Paper },
                if i < hits[1] { Rock } else { Paper },
                if i < hits[2] { Rock } else { Paper },
                if i < hits[3] { Rock } else { Paper },
            ];
            board.record(&predictions, Rock);
        }
        board
    }

    #[test]
    fn test_hedge_picks_best_win_ratio() {
        // mass R:0.7 P:0.2 S:0.1
        // Rock:     win = p(S) = 0.1, lose = p(P) = 0.2 -> 1/3
        // Paper:    win = p(R) = 0.7, lose = p(S) = 0.1 -> 0.875
        // Scissors: win = p(P) = 0.2, lose = p(R) = 0.7 -> 0.222
        let mass = [0.7, 0.2, 0.1];
        assert_eq!(choose_from_mass(&mass, &mut make_rng()), Paper);
    }

    #[test]
    fn test_hedge_zero_zero_ratio_counts_half() {
        // All mass on Rock. Rock's own ratio is the 0/0 -> 0.5 case, but
        // Paper wins outright (win 1.0, lose 0.0 -> ratio 1.0).
        let mass = [1.0, 0.0, 0.0];
        assert_eq!(choose_from_mass(&mass, &mut make_rng()), Paper);
    }

    #[test]
    fn test_hedge_uniform_mass_ties_to_rock() {
        // Every candidate scores ratio 0.5 with equal win probability; the
        // first one in symbol order wins the tie
        let mass = [1.0, 1.0, 1.0];
        assert_eq!(choose_from_mass(&mass, &mut make_rng()), Rock);
    }

    #[test]
    fn test_hedge_tie_prefers_higher_win_probability() {
        // p = (4/7, 1/7, 2/7)
        // Rock:     win = p(S) = 2/7, lose = p(P) = 1/7 -> 2/3
        // Paper:    win = p(R) = 4/7, lose = p(S) = 2/7 -> 2/3
        // Scissors: win = p(P) = 1/7, lose = p(R) = 4/7 -> 1/5
        // Rock and Paper tie on ratio; Paper has the higher win probability
        let mass = [4.0, 1.0, 2.0];
        assert_eq!(choose_from_mass(&mass, &mut make_rng()), Paper);
    }

    #[test]
    fn test_zero_mass_falls_back_to_rng() {
        let mass = [0.0, 0.0, 0.0];
        let mut seen = [false; 3];
        for stream in 0..64 {
            let mut rng = SeededRng::new(&[7u8; 32], stream);
            seen[choose_from_mass(&mass, &mut rng).index()] = true;
        }
        assert_eq!(seen, [true; 3], "uniform fallback should reach all symbols");
    }

    #[test]
    fn test_uniform_scores_give_uniform_weights() {
        let board = ScoreBoard::new();
        let mass = prediction_mass(&[Rock, Rock, Paper, Scissors], &board);
        assert!((mass[Rock.index()] - 2.0).abs() < 1e-12);
        assert!((mass[Paper.index()] - 1.0).abs() < 1e-12);
        assert!((mass[Scissors.index()] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weights_concentrate_on_leader() {
        // Leader 5 hits ahead: its weight is exp(0) = 1, trailing weight
        // exp(-(5 + 5 * 0.35) / 2)
        let board = board_with_hits([5, 0, 0, 0]);
        let mass = prediction_mass(&[Rock, Paper, Paper, Paper], &board);
        let trailing = (-(5.0 + 5.0 * 0.35) / 2.0f64).exp();
        assert!((mass[Rock.index()] - 1.0).abs() < 1e-9);
        assert!((mass[Paper.index()] - 3.0 * trailing).abs() < 1e-9);
    }

    #[test]
    fn test_exploit_requires_round_and_gap() {
        let mut rng = make_rng();
        // Gap = 2 hits + 2 misses = 2.7 > 2.5
        let board = board_with_hits([2, 0, 0, 0]);
        let predictions = [Scissors, Rock, Rock, Rock];

        // Round 6 with sufficient gap: counter the leader's prediction
        assert_eq!(select_move(6, &predictions, &board, &mut rng), Rock);

        // Round 5: still hedging regardless of gap
        let hedged = choose_from_mass(&prediction_mass(&predictions, &board), &mut make_rng());
        assert_eq!(select_move(5, &predictions, &board, &mut make_rng()), hedged);
    }

    #[test]
    fn test_gap_below_threshold_stays_hedged() {
        // One hit + one miss = gap 1.35 < 2.5
        let board = board_with_hits([1, 0, 0, 0]);
        let predictions = [Scissors, Rock, Rock, Rock];
        let hedged = choose_from_mass(&prediction_mass(&predictions, &board), &mut make_rng());
        assert_eq!(select_move(10, &predictions, &board, &mut make_rng()), hedged);
        assert_eq!(board.leader().0, Archetype::Cyclic);
    }
}
