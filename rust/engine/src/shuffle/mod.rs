//! Shuffle operators modeling physical shuffling techniques.
//!
//! Every operator maps a borrowed [`Deck`] to a new deck that is a
//! permutation of the input; nothing is duplicated, dropped, or invented.
//! Randomness comes from the injected [`RngCore`], never from a global
//! generator. Stateful shufflers (riffle half alternation, the composites in
//! [`composite`]) own their phase state and mutate it only inside their own
//! `shuffle` calls.

mod composite;
mod cut;
mod pile;
mod riffle;

pub use composite::{PileThenRiffleShuffler, RiffleCutShuffler, DEFAULT_CUT_PERIOD};
pub use cut::{cut_deck, CutShuffler, TriCutShuffler};
pub use pile::{PileShuffler, RandomPickupPileShuffler, RandomPilePileShuffler, DEFAULT_PILES};
pub use riffle::{Half, RiffleShuffler, DEFAULT_INTRO_PROPORTION};

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::deck::Deck;
use crate::errors::ShuffleError;

/// A shuffling technique: maps a deck to a permuted deck.
///
/// `&mut self` accommodates the stateful variants; the stateless operators
/// simply ignore it.
pub trait Shuffler {
    fn shuffle(&mut self, deck: &Deck, rng: &mut dyn RngCore) -> Result<Deck, ShuffleError>;
}

/// The reference "perfectly random" operator: a uniformly random
/// permutation. Used both as a shuffler and as statistical ground truth.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdealShuffler;

impl Shuffler for IdealShuffler {
    fn shuffle(&mut self, deck: &Deck, rng: &mut dyn RngCore) -> Result<Deck, ShuffleError> {
        let mut cards = deck.as_slice().to_vec();
        cards.shuffle(rng);
        Ok(cards.into())
    }
}
