use rand::{Rng, RngCore};

use crate::deck::Deck;
use crate::errors::ShuffleError;

use super::Shuffler;

/// Split a deck into two contiguous halves at a point chosen uniformly at
/// random within a bounded window around `proportion` of the deck.
///
/// For a deck of `N` cards with ideal cut `floor(N * proportion)`, the window
/// is `[floor(0.8 * ideal), floor(ideal + (N - ideal) * 0.2)]` inclusive.
/// Both bounds are clamped into `[1, N-1]` so neither half can come back
/// empty, even for small decks or extreme proportions. Returns the halves in
/// original order `(first, second)`.
pub fn cut_deck(
    deck: &Deck,
    proportion: f64,
    rng: &mut dyn RngCore,
) -> Result<(Deck, Deck), ShuffleError> {
    if !(proportion > 0.0 && proportion < 1.0) {
        return Err(ShuffleError::InvalidProportion(proportion));
    }
    let n = deck.len();
    if n < 2 {
        return Err(ShuffleError::DeckTooSmall(n));
    }

    let ideal = (n as f64 * proportion) as usize;
    let min = ((ideal as f64 * 0.8) as usize).clamp(1, n - 1);
    // min <= ideal <= max before clamping, so the window is never inverted
    let max = ((ideal as f64 + (n - ideal) as f64 * 0.2) as usize).clamp(1, n - 1);

    let cut = rng.random_range(min..=max);
    let (first, second) = deck.as_slice().split_at(cut);
    Ok((first.to_vec().into(), second.to_vec().into()))
}

/// Cut the deck once near the middle, then swap the two halves.
#[derive(Debug, Clone, Copy)]
pub struct CutShuffler {
    proportion: f64,
}

impl CutShuffler {
    pub fn new() -> Self {
        Self { proportion: 0.5 }
    }

    pub fn with_proportion(proportion: f64) -> Result<Self, ShuffleError> {
        if !(proportion > 0.0 && proportion < 1.0) {
            return Err(ShuffleError::InvalidProportion(proportion));
        }
        Ok(Self { proportion })
    }
}

impl Default for CutShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler for CutShuffler {
    fn shuffle(&mut self, deck: &Deck, rng: &mut dyn RngCore) -> Result<Deck, ShuffleError> {
        let (first, second) = cut_deck(deck, self.proportion, rng)?;
        let mut cards = second.as_slice().to_vec();
        cards.extend_from_slice(first.as_slice());
        Ok(cards.into())
    }
}

/// Cut the deck into three unequal parts (~33%, remainder split ~50/50) and
/// reassemble in reverse part order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriCutShuffler;

impl Shuffler for TriCutShuffler {
    fn shuffle(&mut self, deck: &Deck, rng: &mut dyn RngCore) -> Result<Deck, ShuffleError> {
        let (first, rest) = cut_deck(deck, 0.33, rng)?;
        let (second, third) = cut_deck(&rest, 0.5, rng)?;

        let mut cards = third.as_slice().to_vec();
        cards.extend_from_slice(second.as_slice());
        cards.extend_from_slice(first.as_slice());
        Ok(cards.into())
    }
}
