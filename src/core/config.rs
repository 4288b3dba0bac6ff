//! Simulation configuration.

use serde::{Deserialize, Serialize};

/// Which rule set decides rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleSet {
    /// Higher card always wins.
    #[default]
    Classic,
    /// Rounds may be decided by a sub-game on copies of the top cards.
    Recursive,
}

impl RuleSet {
    /// Pick a rule set from a `recursive` flag.
    #[must_use]
    pub const fn from_recursive(recursive: bool) -> Self {
        if recursive {
            RuleSet::Recursive
        } else {
            RuleSet::Classic
        }
    }

    #[must_use]
    pub const fn is_recursive(self) -> bool {
        matches!(self, RuleSet::Recursive)
    }
}

/// Simulator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatConfig {
    /// Rule set for every game, including sub-games.
    pub rules: RuleSet,

    /// Reject empty decks, zero cards and duplicate values before playing.
    pub validate: bool,

    /// Keep a `RoundRecord` for every round played.
    pub record_history: bool,

    /// Settle a sub-game without playing it when player one holds its highest
    /// card. That card can never be lost, so player one cannot lose the
    /// sub-game. Results are unchanged; only stats and history differ.
    pub skip_decided_sub_games: bool,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::Classic,
            validate: true,
            record_history: false,
            skip_decided_sub_games: false,
        }
    }
}

impl CombatConfig {
    /// Default configuration for the given rule set.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Set the rule set.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Enable or disable deck validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Enable or disable round history.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Enable or disable the decided sub-game shortcut.
    pub fn with_sub_game_shortcut(mut self, skip: bool) -> Self {
        self.skip_decided_sub_games = skip;
        self
    }
}
