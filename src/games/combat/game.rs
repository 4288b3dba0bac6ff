//! Combat rule set implementations.

use crate::core::{Card, CombatConfig, CombatState, PlayerId, PlayerMap, RuleSet};
use crate::rules::RulesEngine;

/// Classic Combat: every round goes to the higher card.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassicCombat;

impl ClassicCombat {
    pub fn new() -> Self {
        Self
    }
}

impl RulesEngine for ClassicCombat {
    fn rule_set(&self) -> RuleSet {
        RuleSet::Classic
    }

    fn sub_game(&self, _state: &CombatState, _drawn: &PlayerMap<Card>) -> Option<CombatState> {
        None
    }
}

/// Recursive Combat: rounds may be settled by a sub-game.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecursiveCombat {
    skip_decided: bool,
}

impl RecursiveCombat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settle sub-games where player 1 holds the highest card without playing them.
    pub fn skip_decided_sub_games(mut self, skip: bool) -> Self {
        self.skip_decided = skip;
        self
    }
}

impl RulesEngine for RecursiveCombat {
    fn rule_set(&self) -> RuleSet {
        RuleSet::Recursive
    }

    fn sub_game(&self, state: &CombatState, drawn: &PlayerMap<Card>) -> Option<CombatState> {
        if state.can_recurse(drawn) {
            Some(state.sub_game(drawn))
        } else {
            None
        }
    }

    fn decided_winner(&self, sub_game: &CombatState) -> Option<PlayerId> {
        if !self.skip_decided {
            return None;
        }

        // The highest card is at least the number of cards in play, so its
        // holder can never recurse with it and never loses it. Player 1 then
        // either empties player 2's deck or wins on a repeated state.
        let one = sub_game.deck(PlayerId::ONE).max_card()?;
        let two = sub_game.deck(PlayerId::TWO).max_card()?;
        (one > two).then_some(PlayerId::ONE)
    }
}

/// Build the rules engine a configuration asks for.
pub fn engine_for(config: &CombatConfig) -> Box<dyn RulesEngine> {
    match config.rules {
        RuleSet::Classic => Box::new(ClassicCombat::new()),
        RuleSet::Recursive => Box::new(
            RecursiveCombat::new().skip_decided_sub_games(config.skip_decided_sub_games),
        ),
    }
}
