//! Combat: a two-player card comparison game.
//!
//! Each round both players reveal their front card and the winner puts both
//! cards at the bottom of their deck, own card first:
//! - Classic rules: the higher card wins
//! - Recursive rules: when both players hold at least as many cards as the
//!   value they drew, a sub-game on copies of their top cards decides the round
//!
//! A game that reaches a state it has already seen ends with a win for player 1.

mod game;

pub use game::{engine_for, ClassicCombat, RecursiveCombat};
