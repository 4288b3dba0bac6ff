//! # crab-combat
//!
//! A simulator for Combat, the two-player card comparison game, under both
//! the classic and the recursive rule sets.
//!
//! ## Rules
//!
//! 1. **Rounds**: Both players draw their front card. The round winner puts
//!    their own card, then the opponent's, at the bottom of their deck.
//!
//! 2. **Classic**: The higher card wins the round.
//!
//! 3. **Recursive**: If each player holds at least as many cards as the value
//!    they drew, a sub-game on copies of their top cards decides the round.
//!    Otherwise the higher card wins.
//!
//! 4. **Repeats**: A game that starts a round from a state it has already
//!    seen ends immediately, won by player 1.
//!
//! ## Architecture
//!
//! - **Explicit Stack**: Sub-games are frames on a `GameStack`, never call-stack
//!   recursion, so nesting depth is not limited by thread stack size.
//!
//! - **Persistent Decks**: Decks are `im::Vector`s; sub-games get O(log n)
//!   prefix copies that cannot alias the parent's cards.
//!
//! - **Exact Fingerprints**: Repeat detection hashes the full ordered contents
//!   of both decks, per game instance.
//!
//! ## Modules
//!
//! - `core`: Cards, players, decks, state, fingerprints, configuration, errors
//! - `rules`: RulesEngine trait and game results
//! - `games`: Classic and recursive rule sets
//! - `stack`: Explicit stack of nested games
//! - `sim`: Simulator, outcomes and statistics
//! - `input`: Puzzle text parsing

pub mod core;
pub mod rules;
pub mod games;
pub mod stack;
pub mod sim;
pub mod input;

// Re-export commonly used types
pub use crate::core::{
    Card, PlayerId, PlayerMap, Deck, CombatState,
    Fingerprint, SeenStates,
    Resolution, RoundRecord,
    CombatConfig, RuleSet,
    GameRng, CombatError,
};

pub use crate::rules::{GameResult, RulesEngine, Termination};

pub use crate::games::{engine_for, ClassicCombat, RecursiveCombat};

pub use crate::stack::{Frame, GameStack, Step};

pub use crate::sim::{play, GameOutcome, SimStats, Simulator};

pub use crate::input::parse_decks;
