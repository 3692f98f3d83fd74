use std::fmt;

use rand::RngCore;

use crate::deck::Deck;
use crate::errors::ShuffleError;
use crate::rng::RunLengths;

use super::cut::CutShuffler;
use super::pile::RandomPilePileShuffler;
use super::riffle::RiffleShuffler;
use super::Shuffler;

/// Default period for [`RiffleCutShuffler`]: every third call is a cut.
pub const DEFAULT_CUT_PERIOD: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Opening,
    Steady,
}

/// Pile-shuffle once to break up the starting order, then riffle on every
/// later call. A two-phase state machine: `Opening` transitions to `Steady`
/// after the first shuffle and never returns.
pub struct PileThenRiffleShuffler {
    phase: Phase,
    pile: RandomPilePileShuffler,
    riffle: RiffleShuffler,
}

impl PileThenRiffleShuffler {
    pub fn new() -> Self {
        Self {
            phase: Phase::Opening,
            pile: RandomPilePileShuffler::default(),
            riffle: RiffleShuffler::new(),
        }
    }
}

impl Default for PileThenRiffleShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PileThenRiffleShuffler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PileThenRiffleShuffler")
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl Shuffler for PileThenRiffleShuffler {
    fn shuffle(&mut self, deck: &Deck, rng: &mut dyn RngCore) -> Result<Deck, ShuffleError> {
        match self.phase {
            Phase::Opening => {
                self.phase = Phase::Steady;
                self.pile.shuffle(deck, rng)
            }
            Phase::Steady => self.riffle.shuffle(deck, rng),
        }
    }
}

/// Riffle on most calls, substitute a cut every `cut_every_n`-th call.
/// Owns a call counter incremented once per shuffle; the counter is the
/// whole of its state.
pub struct RiffleCutShuffler {
    calls: u32,
    cut_every_n: u32,
    riffle: RiffleShuffler,
    cut: CutShuffler,
}

impl RiffleCutShuffler {
    pub fn new(cut_every_n: u32) -> Result<Self, ShuffleError> {
        if cut_every_n < 1 {
            return Err(ShuffleError::InvalidCutPeriod(cut_every_n));
        }
        Ok(Self {
            calls: 0,
            cut_every_n,
            riffle: RiffleShuffler::new(),
            cut: CutShuffler::new(),
        })
    }

    /// Replace the riffle run-length distribution.
    pub fn with_runs(mut self, runs: Box<dyn RunLengths>) -> Self {
        self.riffle = self.riffle.with_runs(runs);
        self
    }
}

impl Default for RiffleCutShuffler {
    fn default() -> Self {
        Self {
            calls: 0,
            cut_every_n: DEFAULT_CUT_PERIOD,
            riffle: RiffleShuffler::new(),
            cut: CutShuffler::new(),
        }
    }
}

impl fmt::Debug for RiffleCutShuffler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiffleCutShuffler")
            .field("calls", &self.calls)
            .field("cut_every_n", &self.cut_every_n)
            .finish_non_exhaustive()
    }
}

impl Shuffler for RiffleCutShuffler {
    fn shuffle(&mut self, deck: &Deck, rng: &mut dyn RngCore) -> Result<Deck, ShuffleError> {
        self.calls += 1;
        if self.calls % self.cut_every_n == 0 {
            self.cut.shuffle(deck, rng)
        } else {
            self.riffle.shuffle(deck, rng)
        }
    }
}
