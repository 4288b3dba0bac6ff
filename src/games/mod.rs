//! Combat rule sets.

pub mod combat;

pub use combat::{engine_for, ClassicCombat, RecursiveCombat};
