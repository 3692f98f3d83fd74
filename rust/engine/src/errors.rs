use thiserror::Error;

use crate::deck::Card;

/// Configuration and operator errors. Bad configuration is rejected when a
/// shuffler is constructed; `DeckTooSmall` can only surface at shuffle time
/// because the deck arrives per call.
#[derive(Debug, Error, PartialEq)]
pub enum ShuffleError {
    #[error("pile count must be at least 1, got {0}")]
    InvalidPileCount(usize),
    #[error("cut proportion must lie inside (0, 1), got {0}")]
    InvalidProportion(f64),
    #[error("intro proportion must lie inside (0, 1), got {0}")]
    InvalidIntroProportion(f64),
    #[error("cut period must be at least 1, got {0}")]
    InvalidCutPeriod(u32),
    #[error("run-length mean must be positive and finite, got {0}")]
    InvalidRunMean(f64),
    #[error("deck must hold at least 2 cards to cut, got {0}")]
    DeckTooSmall(usize),
}

/// Errors surfaced by the simulation driver. Invariant violations carry the
/// trial and round so the misbehaving operator can be diagnosed.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("n_sims must be >= 1")]
    NoTrials,
    #[error("n_shuffles must be >= 1")]
    NoRounds,
    #[error("marked card {card} missing after shuffle (trial {trial}, round {round}); an operator violated the permutation invariant")]
    InvalidMarkedCard { card: Card, trial: usize, round: u32 },
    #[error("shuffle failed at trial {trial}, round {round}: {source}")]
    Shuffle {
        trial: usize,
        round: u32,
        source: ShuffleError,
    },
}

/// Errors from the statistics module.
#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("deck must hold at least 2 cards for a separation distribution, got {0}")]
    DegenerateDeck(usize),
    #[error("no observations fall inside the histogram support")]
    EmptyHistogram,
    #[error("distribution supports differ ({p} vs {q} points)")]
    SupportMismatch { p: usize, q: usize },
    #[error("simulation result holds no rounds")]
    EmptyResult,
}
