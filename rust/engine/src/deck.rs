use serde::{Deserialize, Serialize};

/// Card identifier, unique within a deck, in the range `[0, N)`.
pub type Card = u32;

/// An ordered sequence of distinct cards; the value that shuffle operators
/// transform. Operators never mutate a deck in place, they return a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a fresh deck of `n` cards in sequential order `0..n`.
    pub fn sequential(n: usize) -> Self {
        Self {
            cards: (0..n as Card).collect(),
        }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Position of `card` in the deck, if present.
    pub fn position_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// True when `other` holds exactly the same multiset of cards.
    pub fn is_permutation_of(&self, other: &Deck) -> bool {
        if self.cards.len() != other.cards.len() {
            return false;
        }
        let mut a = self.cards.clone();
        let mut b = other.cards.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl AsRef<[Card]> for Deck {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}
