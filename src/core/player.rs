//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Combat is strictly a two-player game: `PlayerId::ONE` and `PlayerId::TWO`.
//!
//! ## PlayerMap
//!
//! Fixed per-player storage backed by a `[T; 2]` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier.
///
/// Indices are 0-based internally, but players display 1-based to match
/// the `Player 1:` / `Player 2:` labels of the puzzle input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player. Wins every repeated-state shortcut.
    pub const ONE: PlayerId = PlayerId(0);

    /// The second player.
    pub const TWO: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Iterate over both player IDs, player one first.
    ///
    /// ```
    /// use crab_combat::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::ONE, PlayerId::TWO]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::ONE, PlayerId::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use crab_combat::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(0);
/// wins[PlayerId::TWO] += 1;
///
/// assert_eq!(wins[PlayerId::ONE], 0);
/// assert_eq!(wins[PlayerId::TWO], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a PlayerMap from player one's and player two's values.
    pub const fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self::from_pair(factory(PlayerId::ONE), factory(PlayerId::TWO))
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Apply a function to each entry, keeping the player association.
    pub fn map<U>(self, mut f: impl FnMut(PlayerId, T) -> U) -> PlayerMap<U> {
        let [one, two] = self.data;
        PlayerMap::from_pair(f(PlayerId::ONE, one), f(PlayerId::TWO, two))
    }

    /// Split into player one's and player two's values.
    pub fn into_pair(self) -> (T, T) {
        let [one, two] = self.data;
        (one, two)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
