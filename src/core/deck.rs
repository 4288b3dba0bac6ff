//! Player decks.
//!
//! A `Deck` is an ordered sequence of cards where the front is the next card
//! to be played and won cards go to the back.
//!
//! Decks are backed by `im::Vector`, so cloning a deck is O(1) and copying the
//! top `n` cards for a sub-game is O(log n). Copies share structure but never
//! observe each other's mutations.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// An ordered deck of cards (front = next card to play).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Peek at the next card to be played.
    #[must_use]
    pub fn front(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    /// Remove and return the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Place a card at the bottom of the deck.
    pub fn push_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Copy of the first `count` cards, for seeding a sub-game.
    ///
    /// Takes the whole deck if `count` exceeds its length.
    #[must_use]
    pub fn top(&self, count: usize) -> Deck {
        Self {
            cards: self.cards.take(count.min(self.cards.len())),
        }
    }

    /// Iterate cards front to back.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Cards front to back as a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.iter().collect()
    }

    /// The highest card in the deck.
    #[must_use]
    pub fn max_card(&self) -> Option<Card> {
        self.iter().max()
    }

    /// Weighted score of the deck.
    ///
    /// The bottom card is worth its value times 1, the card above it its
    /// value times 2, and so on up to the front card.
    ///
    /// ```
    /// use crab_combat::core::Deck;
    ///
    /// let deck = Deck::from([3, 2, 10, 6, 8, 5, 9, 4, 7, 1]);
    /// assert_eq!(deck.score(), 306);
    /// ```
    #[must_use]
    pub fn score(&self) -> u64 {
        let len = self.len() as u64;
        self.iter()
            .enumerate()
            .map(|(i, card)| (len - i as u64) * u64::from(card.value()))
            .sum()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl From<&[u32]> for Deck {
    fn from(values: &[u32]) -> Self {
        values.iter().copied().map(Card::new).collect()
    }
}

impl<const N: usize> From<[u32; N]> for Deck {
    fn from(values: [u32; N]) -> Self {
        values.into_iter().map(Card::new).collect()
    }
}

impl From<Vec<u32>> for Deck {
    fn from(values: Vec<u32>) -> Self {
        values.into_iter().map(Card::new).collect()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
