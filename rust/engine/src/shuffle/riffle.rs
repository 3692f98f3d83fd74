use std::fmt;

use rand::{Rng, RngCore};

use crate::deck::{Card, Deck};
use crate::errors::ShuffleError;
use crate::rng::{PoissonRuns, RunLengths};

use super::cut::cut_deck;
use super::Shuffler;

/// Fraction of the leading half that may be placed down before any
/// interleaving begins.
pub const DEFAULT_INTRO_PROPORTION: f64 = 0.1;

/// Which half of the cut deck is dropped first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    fn index(self) -> usize {
        match self {
            Half::Top => 0,
            Half::Bottom => 1,
        }
    }

    pub fn other(self) -> Half {
        match self {
            Half::Top => Half::Bottom,
            Half::Bottom => Half::Top,
        }
    }
}

/// Models riffle shuffling: cut the deck near the middle, then interleave
/// the halves in alternating runs of random length.
///
/// The run length is drawn from a configurable [`RunLengths`] distribution
/// (default Poisson(0.05) + 1, a card or small clump at a time). The leading
/// half is uniform-random per call unless forced with [`lead_with`] or set to
/// alternate across calls with [`alternating`]; alternation is the one piece
/// of state this shuffler owns.
///
/// [`lead_with`]: RiffleShuffler::lead_with
/// [`alternating`]: RiffleShuffler::alternating
pub struct RiffleShuffler {
    runs: Box<dyn RunLengths>,
    lead: Option<Half>,
    swap_halves: bool,
    intro_proportion: f64,
}

impl RiffleShuffler {
    pub fn new() -> Self {
        Self {
            runs: Box::new(PoissonRuns::default()),
            lead: None,
            swap_halves: false,
            intro_proportion: DEFAULT_INTRO_PROPORTION,
        }
    }

    /// Replace the run-length distribution, e.g. with
    /// [`FixedRuns`](crate::rng::FixedRuns) for deterministic interleaving.
    pub fn with_runs(mut self, runs: Box<dyn RunLengths>) -> Self {
        self.runs = runs;
        self
    }

    /// Force `half` to be dropped first on every call.
    pub fn lead_with(mut self, half: Half) -> Self {
        self.lead = Some(half);
        self
    }

    /// Alternate the leading half across calls. The first call picks it
    /// uniformly at random, each later call flips it.
    pub fn alternating(mut self) -> Self {
        self.swap_halves = true;
        self
    }

    pub fn with_intro_proportion(mut self, proportion: f64) -> Result<Self, ShuffleError> {
        if !(proportion > 0.0 && proportion < 1.0) {
            return Err(ShuffleError::InvalidIntroProportion(proportion));
        }
        self.intro_proportion = proportion;
        Ok(self)
    }
}

impl Default for RiffleShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RiffleShuffler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiffleShuffler")
            .field("lead", &self.lead)
            .field("swap_halves", &self.swap_halves)
            .field("intro_proportion", &self.intro_proportion)
            .finish_non_exhaustive()
    }
}

impl Shuffler for RiffleShuffler {
    fn shuffle(&mut self, deck: &Deck, rng: &mut dyn RngCore) -> Result<Deck, ShuffleError> {
        let (first, second) = cut_deck(deck, 0.5, rng)?;
        let halves: [&[Card]; 2] = [first.as_slice(), second.as_slice()];

        let lead = match self.lead {
            Some(half) => half,
            None => {
                if rng.random_range(0..2) == 0 {
                    Half::Top
                } else {
                    Half::Bottom
                }
            }
        };
        if self.swap_halves {
            self.lead = Some(lead.other());
        }

        // Introduction run: offset uniform in [1, floor(len * proportion)),
        // pinned to 1 when the bound collapses. Cut halves are non-empty so
        // the offset always stays inside the leading half.
        let bound = (halves[lead.index()].len() as f64 * self.intro_proportion) as usize;
        let offset = if bound > 1 {
            rng.random_range(1..bound)
        } else {
            1
        };

        let mut out: Vec<Card> = Vec::with_capacity(deck.len());
        out.extend_from_slice(&halves[lead.index()][..offset]);

        let mut taken = [0usize; 2];
        taken[lead.index()] = offset;
        let mut current = lead;

        // Alternate runs until one half is exhausted.
        while taken[0] < halves[0].len() && taken[1] < halves[1].len() {
            current = current.other();
            let run = self.runs.next_run(rng).max(1);
            let i = current.index();
            let stop = (taken[i] + run).min(halves[i].len());
            out.extend_from_slice(&halves[i][taken[i]..stop]);
            taken[i] = stop;
        }

        // Whatever remains of the other half drops as one block.
        for (i, half) in halves.iter().enumerate() {
            if taken[i] < half.len() {
                out.extend_from_slice(&half[taken[i]..]);
            }
        }

        Ok(out.into())
    }
}
