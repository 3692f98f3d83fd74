//! Random source construction and run-length distributions.
//!
//! Every operator in this crate draws from an injected [`RngCore`] rather
//! than a process-wide generator, so a fixed seed reproduces a full
//! simulation run. [`seeded`] builds the ChaCha20 generator used throughout
//! the tests.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, Poisson};

use crate::errors::ShuffleError;

/// Mean of the default Poisson run-length distribution: most riffle steps
/// drop a single card, the occasional step drops a small clump.
pub const DEFAULT_RUN_MEAN: f64 = 0.05;

/// Deterministic generator from a seed.
pub fn seeded(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Source of riffle run lengths: how many cards a thumb releases from one
/// half before the other half takes over. Every draw must be >= 1.
pub trait RunLengths {
    fn next_run(&mut self, rng: &mut dyn RngCore) -> usize;
}

/// Poisson-distributed run length plus one, modeling a card or small clump
/// dropped at a time.
#[derive(Debug, Clone, Copy)]
pub struct PoissonRuns {
    dist: Poisson<f64>,
}

impl PoissonRuns {
    pub fn new(mean: f64) -> Result<Self, ShuffleError> {
        let dist = Poisson::new(mean).map_err(|_| ShuffleError::InvalidRunMean(mean))?;
        Ok(Self { dist })
    }
}

impl Default for PoissonRuns {
    fn default() -> Self {
        // DEFAULT_RUN_MEAN is positive and finite, so construction cannot fail.
        Self {
            dist: Poisson::new(DEFAULT_RUN_MEAN).expect("default run mean is valid"),
        }
    }
}

impl RunLengths for PoissonRuns {
    fn next_run(&mut self, rng: &mut dyn RngCore) -> usize {
        self.dist.sample(rng) as usize + 1
    }
}

/// Constant run length, for deterministic interleaving in tests and for
/// modeling a perfectly even riffle.
#[derive(Debug, Clone, Copy)]
pub struct FixedRuns(pub usize);

impl RunLengths for FixedRuns {
    fn next_run(&mut self, _rng: &mut dyn RngCore) -> usize {
        self.0.max(1)
    }
}
