//! A single game instance on the sub-game stack.

use crate::core::{
    Card, CombatState, Fingerprint, PlayerId, PlayerMap, Resolution, RoundRecord, SeenStates,
};
use crate::rules::{GameResult, RulesEngine};

use super::Step;

/// One game instance: its decks, its own seen states, and the round (if any)
/// that is waiting on a sub-game.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Current decks.
    pub state: CombatState,

    /// Game number, counting the top-level game as 1.
    pub game: u32,

    /// Nesting depth (0 = top-level game).
    pub depth: u32,

    /// States seen at the start of each round of this game.
    seen: SeenStates,

    /// Cards of the round suspended on a sub-game.
    pending: Option<PlayerMap<Card>>,
}

impl Frame {
    /// Create a frame for a fresh game instance.
    #[must_use]
    pub fn new(state: CombatState, game: u32, depth: u32) -> Self {
        Self {
            state,
            game,
            depth,
            seen: SeenStates::new(),
            pending: None,
        }
    }

    /// Check if this game is suspended on a sub-game.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Distinct states this game has visited.
    #[must_use]
    pub fn states_seen(&self) -> usize {
        self.seen.len()
    }

    /// Advance this game by one round, or until it needs a sub-game.
    ///
    /// Panics if called while waiting on a sub-game.
    pub fn step(&mut self, rules: &dyn RulesEngine) -> Step {
        assert!(self.pending.is_none(), "Frame is waiting on a sub-game");

        if let Some(result) = rules.is_terminal(&self.state) {
            return Step::Finished(result);
        }

        if !self.seen.insert(Fingerprint::of(&self.state)) {
            return Step::Finished(GameResult::repeated());
        }

        let Some(drawn) = self.state.draw() else {
            // is_terminal already covers empty decks; a custom engine may not
            return Step::Finished(GameResult::emptied(self.leader()));
        };

        if let Some(sub_game) = rules.sub_game(&self.state, &drawn) {
            self.pending = Some(drawn);
            return Step::Recurse(sub_game);
        }

        let winner = rules.round_winner(&drawn);
        Step::Round(self.finish_round(winner, drawn, Resolution::HigherCard))
    }

    /// Complete the suspended round with the sub-game's winner.
    ///
    /// Returns `None` if no round was waiting.
    pub fn resolve(&mut self, winner: PlayerId) -> Option<RoundRecord> {
        let drawn = self.pending.take()?;
        Some(self.finish_round(winner, drawn, Resolution::SubGame))
    }

    fn finish_round(
        &mut self,
        winner: PlayerId,
        drawn: PlayerMap<Card>,
        resolution: Resolution,
    ) -> RoundRecord {
        self.state.award(winner, &drawn);
        RoundRecord {
            game: self.game,
            depth: self.depth,
            round: self.state.round,
            drawn,
            winner,
            resolution,
        }
    }

    fn leader(&self) -> PlayerId {
        if self.state.deck(PlayerId::ONE).is_empty() {
            PlayerId::TWO
        } else {
            PlayerId::ONE
        }
    }
}
