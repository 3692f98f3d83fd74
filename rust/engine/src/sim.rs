//! Simulation driver: repeatedly applies a shuffler to a deck across many
//! independent trials, recording the separation distance between two marked
//! cards after every shuffle round.

use std::collections::BTreeMap;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::deck::{Card, Deck};
use crate::errors::SimError;
use crate::shuffle::Shuffler;

/// Parameters for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimParams {
    /// Number of independent trials.
    pub n_sims: usize,
    /// Number of shuffle rounds per trial.
    pub n_shuffles: u32,
    /// The pair of marked cards whose separation is tracked.
    pub marked: (Card, Card),
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            n_sims: 1000,
            n_shuffles: 30,
            marked: (0, 1),
        }
    }
}

/// Per-round trial observations: round number (1..=n_shuffles) mapped to the
/// separation distance recorded by each trial, in trial order. Built
/// incrementally by [`simulate`] and read-only afterwards; the external
/// visualization collaborator consumes it as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimResult {
    rounds: BTreeMap<u32, Vec<u32>>,
}

impl SimResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a result from already-collected per-round distances, mainly for
    /// fixtures and for consumers reconstructing a serialized run.
    pub fn from_rounds(rounds: BTreeMap<u32, Vec<u32>>) -> Self {
        Self { rounds }
    }

    pub(crate) fn record(&mut self, round: u32, distance: u32) {
        self.rounds.entry(round).or_default().push(distance);
    }

    /// Iterate rounds in ascending round order.
    pub fn rounds(&self) -> impl Iterator<Item = (u32, &[u32])> {
        self.rounds.iter().map(|(&round, d)| (round, d.as_slice()))
    }

    pub fn distances(&self, round: u32) -> Option<&[u32]> {
        self.rounds.get(&round).map(Vec::as_slice)
    }

    pub fn n_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

/// Run `n_sims` independent trials of `n_shuffles` rounds each.
///
/// Every trial starts from a clone of `starting_deck` and a fresh shuffler
/// from the factory, so no deck or shuffler state leaks across trials. The
/// RNG stream is the one shared resource and is injected once by the caller.
///
/// After each round the positions of the two marked cards are located and
/// the absolute difference recorded into that round's sequence. A marked
/// card going missing means some operator violated the permutation
/// invariant; that is surfaced as [`SimError::InvalidMarkedCard`] with the
/// trial and round, never silently dropped.
pub fn simulate<S, F, R>(
    starting_deck: &Deck,
    mut make_shuffler: F,
    params: &SimParams,
    rng: &mut R,
) -> Result<SimResult, SimError>
where
    S: Shuffler,
    F: FnMut() -> S,
    R: RngCore,
{
    if params.n_sims == 0 {
        return Err(SimError::NoTrials);
    }
    if params.n_shuffles == 0 {
        return Err(SimError::NoRounds);
    }

    let (a, b) = params.marked;
    let mut result = SimResult::new();

    for trial in 0..params.n_sims {
        let mut deck = starting_deck.clone();
        let mut shuffler = make_shuffler();

        for round in 1..=params.n_shuffles {
            deck = shuffler
                .shuffle(&deck, rng)
                .map_err(|source| SimError::Shuffle {
                    trial,
                    round,
                    source,
                })?;

            let pos_a = deck
                .position_of(a)
                .ok_or(SimError::InvalidMarkedCard { card: a, trial, round })?;
            let pos_b = deck
                .position_of(b)
                .ok_or(SimError::InvalidMarkedCard { card: b, trial, round })?;

            result.record(round, pos_a.abs_diff(pos_b) as u32);
        }
    }

    Ok(result)
}
