//! Rules engine trait for Combat rule sets.
//!
//! Rule sets implement `RulesEngine` to define:
//! - Whether a round recurses into a sub-game
//! - Who wins a plain round
//! - When a game is over
//!
//! The simulator calls into `RulesEngine` but never interprets
//! rule-specific concepts directly.

pub mod engine;

pub use engine::{GameResult, RulesEngine, Termination};
