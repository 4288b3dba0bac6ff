//! Core value types: cards, players, decks, state, fingerprints, configuration.
//!
//! Everything here is independent of which rule set is being played.

pub mod card;
pub mod player;
pub mod deck;
pub mod state;
pub mod fingerprint;
pub mod round;
pub mod config;
pub mod rng;
pub mod error;

pub use card::Card;
pub use player::{PlayerId, PlayerMap};
pub use deck::Deck;
pub use state::CombatState;
pub use fingerprint::{Fingerprint, SeenStates};
pub use round::{Resolution, RoundRecord};
pub use config::{CombatConfig, RuleSet};
pub use rng::GameRng;
pub use error::CombatError;
