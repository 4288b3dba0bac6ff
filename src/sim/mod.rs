//! Game simulation.
//!
//! ## Key Components
//!
//! - [`Simulator`]: Plays a game and its sub-games on an explicit stack
//! - [`GameOutcome`]: Winner, final decks, stats and optional history
//! - [`SimStats`]: Counters for games, rounds, nesting and repeats
//! - [`play`]: One-call entry point taking a `recursive` flag
//!
//! ## Example
//!
//! ```
//! use crab_combat::core::Deck;
//! use crab_combat::sim::play;
//!
//! let (deck1, deck2) =
//!     play(Deck::from([9, 2, 6, 3, 1]), Deck::from([5, 8, 4, 7, 10]), false).unwrap();
//!
//! assert!(deck1.is_empty());
//! assert_eq!(deck2.score(), 306);
//! ```

mod simulator;
mod stats;

pub use simulator::{GameOutcome, Simulator};
pub use stats::SimStats;

use crate::core::{CombatConfig, CombatError, Deck, RuleSet};

/// Play a game and return the final decks as (player 1, player 2).
///
/// Exactly one returned deck is non-empty: the winner's. Decks are
/// validated first.
pub fn play(deck1: Deck, deck2: Deck, recursive: bool) -> Result<(Deck, Deck), CombatError> {
    let config = CombatConfig::new(RuleSet::from_recursive(recursive));
    let outcome = Simulator::new(config).play(deck1, deck2)?;
    Ok(outcome.into_decks())
}
