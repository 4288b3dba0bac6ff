//! Game state for a single Combat game instance.
//!
//! ## CombatState
//!
//! Both decks plus the number of rounds played so far. Sub-games get their
//! own `CombatState` built from prefix copies of the parent decks, so a
//! sub-game can never disturb the cards its parent still holds.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::deck::Deck;
use super::error::CombatError;
use super::player::{PlayerId, PlayerMap};

/// Full state of one game instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    /// One deck per player.
    pub decks: PlayerMap<Deck>,

    /// Rounds completed in this game instance.
    pub round: u32,
}

impl CombatState {
    /// Create a state from player one's and player two's starting decks.
    #[must_use]
    pub fn new(deck1: Deck, deck2: Deck) -> Self {
        Self {
            decks: PlayerMap::from_pair(deck1, deck2),
            round: 0,
        }
    }

    /// Get a player's deck.
    #[must_use]
    pub fn deck(&self, player: PlayerId) -> &Deck {
        &self.decks[player]
    }

    /// Check that both players still hold cards.
    #[must_use]
    pub fn both_have_cards(&self) -> bool {
        PlayerId::all().all(|p| !self.decks[p].is_empty())
    }

    /// Total cards held by both players.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.decks.iter().map(|(_, deck)| deck.len()).sum()
    }

    /// Draw the front card of each deck.
    ///
    /// Returns `None` without touching either deck unless both players can draw.
    pub fn draw(&mut self) -> Option<PlayerMap<Card>> {
        if !self.both_have_cards() {
            return None;
        }
        let one = self.decks[PlayerId::ONE].draw()?;
        let two = self.decks[PlayerId::TWO].draw()?;
        Some(PlayerMap::from_pair(one, two))
    }

    /// Give a round's cards to its winner.
    ///
    /// The winner's own card goes to the bottom first, then the opponent's.
    pub fn award(&mut self, winner: PlayerId, drawn: &PlayerMap<Card>) {
        let deck = &mut self.decks[winner];
        deck.push_bottom(drawn[winner]);
        deck.push_bottom(drawn[winner.opponent()]);
        self.round += 1;
    }

    /// Whether each player holds at least as many cards as the value they drew.
    ///
    /// Call after `draw`: the drawn cards are no longer in the decks.
    #[must_use]
    pub fn can_recurse(&self, drawn: &PlayerMap<Card>) -> bool {
        PlayerId::all().all(|p| self.decks[p].len() >= drawn[p].as_count())
    }

    /// Starting state of the sub-game for this round's drawn cards.
    ///
    /// Each player brings a copy of their top `drawn` cards.
    #[must_use]
    pub fn sub_game(&self, drawn: &PlayerMap<Card>) -> CombatState {
        Self {
            decks: PlayerMap::new(|p| self.decks[p].top(drawn[p].as_count())),
            round: 0,
        }
    }

    /// Check the starting decks are playable.
    ///
    /// Both decks must be non-empty, hold only positive values, and share no
    /// value with each other or themselves.
    pub fn validate(&self) -> Result<(), CombatError> {
        let mut seen = FxHashSet::default();

        for (player, deck) in self.decks.iter() {
            if deck.is_empty() {
                return Err(CombatError::EmptyDeck(player));
            }
            for card in deck.iter() {
                if card.value() == 0 {
                    return Err(CombatError::ZeroCard(player));
                }
                if !seen.insert(card) {
                    return Err(CombatError::DuplicateCard(card));
                }
            }
        }

        Ok(())
    }
}
