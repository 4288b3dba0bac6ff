//! Deterministic dealing of Combat decks.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed deals identical decks
//! - **Forkable**: Derive independent dealers for batches of games
//! - **Always playable**: Dealt decks are non-empty and share no values
//!
//! ```
//! use crab_combat::core::{GameRng, PlayerId};
//!
//! let mut rng = GameRng::new(42);
//! let decks = rng.deal(50);
//!
//! assert_eq!(decks[PlayerId::ONE].len(), 25);
//! assert_eq!(decks[PlayerId::TWO].len(), 25);
//!
//! // Same seed, same deal
//! assert_eq!(GameRng::new(42).deal(50), decks);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::card::Card;
use super::deck::Deck;
use super::player::PlayerMap;

/// Deterministic RNG for dealing decks.
///
/// Uses ChaCha8 so dealt games are reproducible across platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent dealer.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Shuffle cards `1..=card_count` and split them evenly.
    ///
    /// Player one gets the first half; with an odd count player two gets the
    /// extra card. Panics if `card_count < 2`.
    pub fn deal(&mut self, card_count: u32) -> PlayerMap<Deck> {
        self.deal_split(card_count, card_count as usize / 2)
    }

    /// Shuffle cards `1..=card_count` and split them at a random point.
    ///
    /// Both players receive at least one card. Panics if `card_count < 2`.
    pub fn deal_uneven(&mut self, card_count: u32) -> PlayerMap<Deck> {
        assert!(card_count >= 2, "Need at least 2 cards to deal");
        let split = self.gen_range_usize(1..card_count as usize);
        self.deal_split(card_count, split)
    }

    fn deal_split(&mut self, card_count: u32, split: usize) -> PlayerMap<Deck> {
        assert!(card_count >= 2, "Need at least 2 cards to deal");

        let mut cards: Vec<Card> = (1..=card_count).map(Card::new).collect();
        self.shuffle(&mut cards);

        let two = cards.split_off(split);
        PlayerMap::from_pair(cards.into_iter().collect(), two.into_iter().collect())
    }
}
