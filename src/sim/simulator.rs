//! Simulator driving a game and its sub-games to completion.

use serde::{Deserialize, Serialize};

use crate::core::{CombatConfig, CombatError, CombatState, Deck, PlayerId, PlayerMap, RoundRecord};
use crate::games::engine_for;
use crate::rules::{GameResult, RulesEngine, Termination};
use crate::stack::{GameStack, Step};

use super::stats::SimStats;

/// Final result of a top-level game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Winner and how the game ended.
    pub result: GameResult,

    /// Final decks. The loser's deck is always empty; after a repeated state
    /// player 2's remaining cards are discarded.
    pub decks: PlayerMap<Deck>,

    /// Statistics across the game and its sub-games.
    pub stats: SimStats,

    /// Every round played, in order. Empty unless history is enabled.
    pub history: Vec<RoundRecord>,
}

impl GameOutcome {
    /// The winning player.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        self.result.winner
    }

    /// The winning player's final deck.
    #[must_use]
    pub fn winning_deck(&self) -> &Deck {
        &self.decks[self.result.winner]
    }

    /// Weighted score of the winning deck.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.winning_deck().score()
    }

    /// Final decks as (player 1, player 2).
    pub fn into_decks(self) -> (Deck, Deck) {
        self.decks.into_pair()
    }
}

/// Plays Combat games under a fixed configuration.
///
/// ## Usage
///
/// ```
/// use crab_combat::core::{CombatConfig, Deck, PlayerId, RuleSet};
/// use crab_combat::sim::Simulator;
///
/// let sim = Simulator::new(CombatConfig::new(RuleSet::Recursive));
/// let outcome = sim
///     .play(Deck::from([9, 2, 6, 3, 1]), Deck::from([5, 8, 4, 7, 10]))
///     .unwrap();
///
/// assert_eq!(outcome.winner(), PlayerId::TWO);
/// assert_eq!(outcome.score(), 291);
/// ```
pub struct Simulator {
    config: CombatConfig,
    rules: Box<dyn RulesEngine>,
}

impl Simulator {
    /// Create a simulator with the rule set named by the configuration.
    pub fn new(config: CombatConfig) -> Self {
        let rules = engine_for(&config);
        Self { config, rules }
    }

    /// Create a simulator with a custom rules engine.
    ///
    /// `config.rules` is ignored in favour of `rules`.
    pub fn with_rules(config: CombatConfig, rules: Box<dyn RulesEngine>) -> Self {
        Self { config, rules }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Get the rules engine.
    #[must_use]
    pub fn rules(&self) -> &dyn RulesEngine {
        self.rules.as_ref()
    }

    /// Play a game from player 1's and player 2's starting decks.
    ///
    /// Validates the decks first when configured to. Without validation,
    /// a game that starts with an empty deck is won by the other player.
    pub fn play(&self, deck1: Deck, deck2: Deck) -> Result<GameOutcome, CombatError> {
        let root = CombatState::new(deck1, deck2);
        if self.config.validate {
            root.validate()?;
        }

        let rules = self.rules.as_ref();
        let mut tally = Tally::new(self.config.record_history);
        let mut stack = GameStack::new(root);

        while let Some(frame) = stack.top_mut() {
            match frame.step(rules) {
                Step::Round(record) => tally.round(record),
                Step::Recurse(sub_game) => {
                    tally.stats.sub_games += 1;

                    if let Some(winner) = rules.decided_winner(&sub_game) {
                        tally.stats.skipped_sub_games += 1;
                        if let Some(record) = frame.resolve(winner) {
                            tally.round(record);
                        }
                        continue;
                    }

                    let game = stack.push(sub_game);
                    let depth = stack.depth() as u32 - 1;
                    tally.stats.max_depth = tally.stats.max_depth.max(depth);
                    log::trace!("starting game {} at depth {}", game, depth);
                }
                Step::Finished(result) => {
                    let Some(done) = stack.pop() else { break };

                    if result.termination == Termination::RepeatedState {
                        tally.stats.repeated_states += 1;
                        log::trace!(
                            "game {} repeated a state after {} rounds",
                            done.game,
                            done.state.round
                        );
                    }

                    if let Some(parent) = stack.top_mut() {
                        if let Some(record) = parent.resolve(result.winner) {
                            tally.round(record);
                        }
                        continue;
                    }

                    tally.stats.games = stack.games_started();
                    let outcome = tally.finish(result, done.state);
                    log::debug!(
                        "{} wins with score {} ({:?}): {}",
                        outcome.winner(),
                        outcome.score(),
                        outcome.result.termination,
                        outcome.stats
                    );
                    return Ok(outcome);
                }
            }
        }

        unreachable!("the top-level game always finishes before the stack empties")
    }
}

/// Stats and history gathered while the stack runs.
struct Tally {
    stats: SimStats,
    history: Vec<RoundRecord>,
    record_history: bool,
}

impl Tally {
    fn new(record_history: bool) -> Self {
        Self {
            stats: SimStats::new(),
            history: Vec::new(),
            record_history,
        }
    }

    fn round(&mut self, record: RoundRecord) {
        self.stats.rounds += 1;
        if self.record_history {
            self.history.push(record);
        }
    }

    fn finish(self, result: GameResult, state: CombatState) -> GameOutcome {
        let mut decks = state.decks;
        decks[result.winner.opponent()] = Deck::new();

        GameOutcome {
            result,
            decks,
            stats: self.stats,
            history: self.history,
        }
    }
}
