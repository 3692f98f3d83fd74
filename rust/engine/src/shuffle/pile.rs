use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::deck::{Card, Deck};
use crate::errors::ShuffleError;

use super::Shuffler;

/// Default pile count for the pile-shuffle family.
pub const DEFAULT_PILES: usize = 7;

/// Deal cards round-robin: card `i` goes to pile `i mod n_piles`.
fn deal_round_robin(deck: &Deck, n_piles: usize) -> Vec<Vec<Card>> {
    let mut piles: Vec<Vec<Card>> = vec![Vec::new(); n_piles];
    for (i, &card) in deck.as_slice().iter().enumerate() {
        piles[i % n_piles].push(card);
    }
    piles
}

/// Deal cards with each card independently assigned a uniformly random pile.
fn deal_random(deck: &Deck, n_piles: usize, rng: &mut dyn RngCore) -> Vec<Vec<Card>> {
    let mut piles: Vec<Vec<Card>> = vec![Vec::new(); n_piles];
    for &card in deck.as_slice() {
        piles[rng.random_range(0..n_piles)].push(card);
    }
    piles
}

fn pick_up(piles: Vec<Vec<Card>>, capacity: usize) -> Deck {
    let mut cards = Vec::with_capacity(capacity);
    for pile in piles {
        cards.extend(pile);
    }
    cards.into()
}

fn check_piles(n_piles: usize) -> Result<usize, ShuffleError> {
    if n_piles < 1 {
        return Err(ShuffleError::InvalidPileCount(n_piles));
    }
    Ok(n_piles)
}

/// Deterministic deal: round-robin into `n_piles`, piles picked up in order.
#[derive(Debug, Clone, Copy)]
pub struct PileShuffler {
    n_piles: usize,
}

impl PileShuffler {
    pub fn new(n_piles: usize) -> Result<Self, ShuffleError> {
        Ok(Self {
            n_piles: check_piles(n_piles)?,
        })
    }
}

impl Default for PileShuffler {
    fn default() -> Self {
        Self {
            n_piles: DEFAULT_PILES,
        }
    }
}

impl Shuffler for PileShuffler {
    fn shuffle(&mut self, deck: &Deck, _rng: &mut dyn RngCore) -> Result<Deck, ShuffleError> {
        Ok(pick_up(deal_round_robin(deck, self.n_piles), deck.len()))
    }
}

/// Random deal into piles, piles picked up in a uniformly random order.
#[derive(Debug, Clone, Copy)]
pub struct RandomPilePileShuffler {
    n_piles: usize,
}

impl RandomPilePileShuffler {
    pub fn new(n_piles: usize) -> Result<Self, ShuffleError> {
        Ok(Self {
            n_piles: check_piles(n_piles)?,
        })
    }
}

impl Default for RandomPilePileShuffler {
    fn default() -> Self {
        Self {
            n_piles: DEFAULT_PILES,
        }
    }
}

impl Shuffler for RandomPilePileShuffler {
    fn shuffle(&mut self, deck: &Deck, rng: &mut dyn RngCore) -> Result<Deck, ShuffleError> {
        let mut piles = deal_random(deck, self.n_piles, rng);
        piles.shuffle(rng);
        Ok(pick_up(piles, deck.len()))
    }
}

/// Deterministic round-robin deal, piles picked up in a uniformly random
/// order.
#[derive(Debug, Clone, Copy)]
pub struct RandomPickupPileShuffler {
    n_piles: usize,
}

impl RandomPickupPileShuffler {
    pub fn new(n_piles: usize) -> Result<Self, ShuffleError> {
        Ok(Self {
            n_piles: check_piles(n_piles)?,
        })
    }
}

impl Default for RandomPickupPileShuffler {
    fn default() -> Self {
        Self {
            n_piles: DEFAULT_PILES,
        }
    }
}

impl Shuffler for RandomPickupPileShuffler {
    fn shuffle(&mut self, deck: &Deck, rng: &mut dyn RngCore) -> Result<Deck, ShuffleError> {
        let mut piles = deal_round_robin(deck, self.n_piles);
        piles.shuffle(rng);
        Ok(pick_up(piles, deck.len()))
    }
}
