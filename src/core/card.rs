//! Card values.

use serde::{Deserialize, Serialize};

/// A single card, identified by its face value.
///
/// Values are unique across both decks of a game. Comparing two cards
/// compares their values, which is how a plain round is decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(pub u32);

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the face value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Face value as a count, for comparing against deck lengths.
    #[must_use]
    pub const fn as_count(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Card {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
