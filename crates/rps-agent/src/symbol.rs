//! Move symbols and the cyclic dominance relation

use serde::{Deserialize, Serialize};

/// A move in Rock-Paper-Scissors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    Rock,
    Paper,
    Scissors,
}

/// Fixed scan order for per-symbol tables and deterministic tie-breaks
pub const SYMBOLS: [Symbol; 3] = [Symbol::Rock, Symbol::Paper, Symbol::Scissors];

impl Symbol {
    /// The symbol that defeats `self`
    pub fn beaten_by(self) -> Symbol {
        match self {
            Symbol::Rock => Symbol::Paper,
            Symbol::Paper => Symbol::Scissors,
            Symbol::Scissors => Symbol::Rock,
        }
    }

    /// The symbol `self` defeats
    pub fn defeats(self) -> Symbol {
        match self {
            Symbol::Rock => Symbol::Scissors,
            Symbol::Paper => Symbol::Rock,
            Symbol::Scissors => Symbol::Paper,
        }
    }

    /// Dense index matching the `SYMBOLS` order
    pub fn index(self) -> usize {
        match self {
            Symbol::Rock => 0,
            Symbol::Paper => 1,
            Symbol::Scissors => 2,
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Rock => "Rock",
            Symbol::Paper => "Paper",
            Symbol::Scissors => "Scissors",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominance_is_cyclic() {
        for s in SYMBOLS {
            // x is defeated by exactly the symbol that claims to defeat it
            assert_eq!(s.beaten_by().defeats(), s);
            assert_eq!(s.defeats().beaten_by(), s);
            // no symbol beats or loses to itself
            assert_ne!(s.beaten_by(), s);
            assert_ne!(s.defeats(), s);
        }
    }

    #[test]
    fn test_dominance_table() {
        assert_eq!(Symbol::Rock.beaten_by(), Symbol::Paper);
        assert_eq!(Symbol::Paper.beaten_by(), Symbol::Scissors);
        assert_eq!(Symbol::Scissors.beaten_by(), Symbol::Rock);
        assert_eq!(Symbol::Rock.defeats(), Symbol::Scissors);
        assert_eq!(Symbol::Paper.defeats(), Symbol::Rock);
        assert_eq!(Symbol::Scissors.defeats(), Symbol::Paper);
    }

    #[test]
    fn test_index_matches_symbols_order() {
        for (i, s) in SYMBOLS.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Symbol::Rock).unwrap(), "\"Rock\"");
        let s: Symbol = serde_json::from_str("\"Scissors\"").unwrap();
        assert_eq!(s, Symbol::Scissors);
    }
}
