//! Explicit stack of nested games.
//!
//! Recursive Combat nests sub-games inside rounds. Instead of recursing on the
//! call stack, each game instance is a [`Frame`] on a [`GameStack`]:
//!
//! - Only the top frame runs
//! - A round that needs a sub-game suspends its frame and pushes a child
//! - A finished child is popped and its winner resolves the parent's round
//!
//! Nesting depth is therefore bounded by memory rather than thread stack size.
//!
//! ## Example Usage
//!
//! ```
//! use crab_combat::core::{CombatState, Deck, PlayerId};
//! use crab_combat::games::ClassicCombat;
//! use crab_combat::stack::{GameStack, Step};
//!
//! let mut stack = GameStack::new(CombatState::new(Deck::from([3]), Deck::from([1])));
//! let rules = ClassicCombat::new();
//!
//! let step = stack.top_mut().unwrap().step(&rules);
//! assert!(matches!(step, Step::Round(_)));
//!
//! let step = stack.top_mut().unwrap().step(&rules);
//! assert!(matches!(step, Step::Finished(result) if result.is_winner(PlayerId::ONE)));
//! ```

mod frame;

pub use frame::Frame;

use crate::core::{CombatState, RoundRecord};
use crate::rules::GameResult;

/// Outcome of stepping a frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// A round was played and decided on the spot.
    Round(RoundRecord),

    /// The round needs a sub-game starting from this state.
    Recurse(CombatState),

    /// The game is over.
    Finished(GameResult),
}

/// LIFO stack of game instances (index 0 = top-level game).
#[derive(Clone, Debug)]
pub struct GameStack {
    frames: Vec<Frame>,

    /// Game number handed to the next pushed frame.
    next_game: u32,
}

impl GameStack {
    /// Create a stack holding the top-level game.
    #[must_use]
    pub fn new(root: CombatState) -> Self {
        Self {
            frames: vec![Frame::new(root, 1, 0)],
            next_game: 2,
        }
    }

    /// Number of game instances on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The running game.
    #[must_use]
    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// The running game, mutably.
    pub fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Start a sub-game on top of the running game.
    ///
    /// Returns the new frame's game number.
    pub fn push(&mut self, state: CombatState) -> u32 {
        let game = self.next_game;
        self.next_game += 1;

        let depth = self.frames.len() as u32;
        self.frames.push(Frame::new(state, game, depth));
        game
    }

    /// Remove the running game.
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Total game instances created so far, including finished ones.
    #[must_use]
    pub fn games_started(&self) -> u32 {
        self.next_game - 1
    }
}
