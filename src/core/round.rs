//! Round records for game history.
//!
//! When history is enabled, the simulator stores one `RoundRecord` per
//! completed round, across the top-level game and every sub-game.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::player::{PlayerId, PlayerMap};

/// How a round's winner was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// The higher card won.
    HigherCard,
    /// The winner of a sub-game took the round.
    SubGame,
}

/// Record of one completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Game instance the round belongs to (1 = top-level game).
    pub game: u32,

    /// Sub-game nesting depth (0 = top-level game).
    pub depth: u32,

    /// Round number within its game, starting at 1.
    pub round: u32,

    /// Cards drawn by each player.
    pub drawn: PlayerMap<Card>,

    /// Who took both cards.
    pub winner: PlayerId,

    /// How the winner was decided.
    pub resolution: Resolution,
}

impl std::fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let how = match self.resolution {
            Resolution::HigherCard => "higher card",
            Resolution::SubGame => "sub-game",
        };
        write!(
            f,
            "game {} round {}: {} vs {}, {} wins by {}",
            self.game,
            self.round,
            self.drawn[PlayerId::ONE],
            self.drawn[PlayerId::TWO],
            self.winner,
            how
        )
    }
}
