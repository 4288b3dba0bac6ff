//! Simulation statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected while playing one top-level game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimStats {
    /// Game instances played, including the top-level game.
    pub games: u32,

    /// Rounds that asked for a sub-game.
    pub sub_games: u32,

    /// Sub-games settled without being played.
    pub skipped_sub_games: u32,

    /// Rounds completed across all game instances.
    pub rounds: u64,

    /// Deepest sub-game nesting reached (0 = no sub-games).
    pub max_depth: u32,

    /// Games ended by the repeated-state rule.
    pub repeated_states: u32,
}

impl SimStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Average rounds per game instance played.
    #[must_use]
    pub fn rounds_per_game(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.rounds as f64 / self.games as f64
        }
    }
}

impl std::fmt::Display for SimStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games, {} rounds, {} sub-games ({} skipped), depth {}, {} repeats",
            self.games,
            self.rounds,
            self.sub_games,
            self.skipped_sub_games,
            self.max_depth,
            self.repeated_states
        )
    }
}
