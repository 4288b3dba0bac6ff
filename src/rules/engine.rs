//! Rules engine trait for Combat rule sets.
//!
//! Rule sets implement `RulesEngine` to define:
//! - Whether a round is settled by a sub-game
//! - How a plain round is won
//! - When a game is over

use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::config::RuleSet;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::CombatState;

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Termination {
    /// The loser ran out of cards.
    DeckEmptied,
    /// A round started from a state already seen in this game.
    /// Player one wins.
    RepeatedState,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    /// Player holding all the cards (or player one on a repeat).
    pub winner: PlayerId,
    /// How the game ended.
    pub termination: Termination,
}

impl GameResult {
    /// A game won by emptying the opponent's deck.
    #[must_use]
    pub const fn emptied(winner: PlayerId) -> Self {
        Self {
            winner,
            termination: Termination::DeckEmptied,
        }
    }

    /// A game stopped by the repeated-state rule.
    #[must_use]
    pub const fn repeated() -> Self {
        Self {
            winner: PlayerId::ONE,
            termination: Termination::RepeatedState,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// The simulator owns the round loop, repeat detection and the sub-game
/// stack; a rules engine only answers questions about a single round.
///
/// ## Implementation Notes
///
/// - `sub_game` is called after both cards are drawn
/// - `round_winner` must be deterministic
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Which rule set this engine plays.
    fn rule_set(&self) -> RuleSet;

    /// Starting state of the sub-game that decides this round, if any.
    ///
    /// `state` no longer contains the `drawn` cards.
    fn sub_game(&self, state: &CombatState, drawn: &PlayerMap<Card>) -> Option<CombatState>;

    /// Winner of a round not settled by a sub-game.
    ///
    /// Default: the higher card wins. Values are distinct, so there are no ties.
    fn round_winner(&self, drawn: &PlayerMap<Card>) -> PlayerId {
        if drawn[PlayerId::ONE] > drawn[PlayerId::TWO] {
            PlayerId::ONE
        } else {
            PlayerId::TWO
        }
    }

    /// Winner of a sub-game that can be settled without playing it.
    ///
    /// Default: every sub-game is played out.
    fn decided_winner(&self, _sub_game: &CombatState) -> Option<PlayerId> {
        None
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` once a player has no cards, `None` otherwise.
    fn is_terminal(&self, state: &CombatState) -> Option<GameResult> {
        if state.deck(PlayerId::TWO).is_empty() {
            Some(GameResult::emptied(PlayerId::ONE))
        } else if state.deck(PlayerId::ONE).is_empty() {
            Some(GameResult::emptied(PlayerId::TWO))
        } else {
            None
        }
    }
}
