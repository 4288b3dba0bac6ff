//! Puzzle input parsing.
//!
//! The input holds two blocks separated by a blank line. The first line of
//! each block is a label (`Player 1:`) and is skipped; every other line is
//! one card value, front of the deck first.
//!
//! ```
//! use crab_combat::core::{Deck, PlayerId};
//! use crab_combat::input::parse_decks;
//!
//! let decks = parse_decks("Player 1:\n9\n2\n\nPlayer 2:\n5\n8\n").unwrap();
//! assert_eq!(decks[PlayerId::ONE], Deck::from([9, 2]));
//! assert_eq!(decks[PlayerId::TWO], Deck::from([5, 8]));
//! ```

use crate::core::{Card, CombatError, Deck, PlayerMap};

/// Parse both players' decks.
///
/// Decks are not validated here; an empty block yields an empty deck.
pub fn parse_decks(input: &str) -> Result<PlayerMap<Deck>, CombatError> {
    let mut blocks: Vec<Vec<Card>> = Vec::new();
    let mut current: Option<Vec<Card>> = None;

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();

        if line.is_empty() {
            blocks.extend(current.take());
            continue;
        }

        match current.as_mut() {
            // Label line opens a block
            None => current = Some(Vec::new()),
            Some(cards) => {
                let value = line.parse::<u32>().map_err(|_| CombatError::InvalidCard {
                    line: index + 1,
                    text: line.to_string(),
                })?;
                cards.push(Card::new(value));
            }
        }
    }
    blocks.extend(current.take());

    match <[Vec<Card>; 2]>::try_from(blocks) {
        Ok([one, two]) => Ok(PlayerMap::from_pair(
            one.into_iter().collect(),
            two.into_iter().collect(),
        )),
        Err(blocks) => Err(CombatError::DeckCount(blocks.len())),
    }
}
