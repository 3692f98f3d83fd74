//! # shufflesim-engine: Card Shuffling Simulation Core
//!
//! Models physical card-shuffling techniques as discrete permutation
//! operators, runs repeated randomized trials to estimate how quickly a deck
//! approaches statistical randomness, and compares empirical results against
//! a closed-form "ideal shuffle" reference distribution.
//!
//! ## Core Modules
//!
//! - [`deck`] - Card identifiers and the `Deck` value type
//! - [`rng`] - Seeded random source construction and run-length distributions
//! - [`shuffle`] - Shuffle operators and stateful/composite shufflers
//! - [`sim`] - Simulation driver tracking marked-card separation per round
//! - [`stats`] - Ideal/empirical distributions, summaries, KL divergence
//! - [`errors`] - Error types for configuration and invariant violations
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use shufflesim_engine::deck::Deck;
//! use shufflesim_engine::shuffle::RiffleShuffler;
//! use shufflesim_engine::sim::{simulate, SimParams};
//! use shufflesim_engine::stats::{ideal_distro, kl_divergences};
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let deck = Deck::sequential(60);
//!
//! let params = SimParams { n_sims: 50, n_shuffles: 10, ..SimParams::default() };
//! let result = simulate(&deck, RiffleShuffler::new, &params, &mut rng).unwrap();
//!
//! let ideal = ideal_distro(deck.len()).unwrap();
//! let divergences = kl_divergences(&result, &ideal).unwrap();
//! assert_eq!(divergences.len(), 10);
//! ```
//!
//! ## Deterministic Shuffling
//!
//! All randomness is drawn from an injected [`rand::RngCore`]; the same seed
//! reproduces the same shuffle sequence:
//!
//! ```rust
//! use shufflesim_engine::deck::Deck;
//! use shufflesim_engine::rng::seeded;
//! use shufflesim_engine::shuffle::{IdealShuffler, Shuffler};
//!
//! let deck = Deck::sequential(52);
//! let a = IdealShuffler.shuffle(&deck, &mut seeded(7)).unwrap();
//! let b = IdealShuffler.shuffle(&deck, &mut seeded(7)).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod deck;
pub mod errors;
pub mod rng;
pub mod shuffle;
pub mod sim;
pub mod stats;
