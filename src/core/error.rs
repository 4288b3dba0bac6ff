//! Errors raised while reading or validating decks.
//!
//! A well-formed game has no failure modes once it starts; every error here
//! is detected before the first round is played.

use super::card::Card;
use super::player::PlayerId;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    /// A player starts with no cards.
    #[error("{0} has an empty deck")]
    EmptyDeck(PlayerId),

    /// Card values must be positive.
    #[error("{0} holds a card with value 0")]
    ZeroCard(PlayerId),

    /// The same value appears twice across both decks.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    /// Input did not contain exactly two decks.
    #[error("expected 2 decks, found {0}")]
    DeckCount(usize),

    /// A deck line that is not a card value.
    #[error("line {line}: invalid card {text:?}")]
    InvalidCard { line: usize, text: String },
}
