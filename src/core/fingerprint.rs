//! Exact state fingerprints for repeat detection.
//!
//! A `Fingerprint` encodes both decks as `[len(deck1), deck1..., deck2...]`.
//! The leading length splits the two decks unambiguously, so two states share
//! a fingerprint iff both decks match card for card.
//!
//! `SeenStates` holds the fingerprints of one game instance. Every sub-game
//! starts with its own empty set.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::player::PlayerId;
use super::state::CombatState;

/// Inline capacity covers a standard 50-card game plus the length word.
const INLINE_WORDS: usize = 64;

/// Exact encoding of both decks at the start of a round.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint(SmallVec<[u32; INLINE_WORDS]>);

impl Fingerprint {
    /// Fingerprint a state.
    #[must_use]
    pub fn of(state: &CombatState) -> Self {
        let one = state.deck(PlayerId::ONE);
        let two = state.deck(PlayerId::TWO);

        let mut words = SmallVec::with_capacity(1 + one.len() + two.len());
        words.push(one.len() as u32);
        words.extend(one.iter().map(|c| c.value()));
        words.extend(two.iter().map(|c| c.value()));

        Self(words)
    }

    /// Raw encoded words.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

/// States already visited by one game instance.
#[derive(Clone, Debug, Default)]
pub struct SeenStates {
    states: FxHashSet<Fingerprint>,
}

impl SeenStates {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fingerprint.
    ///
    /// Returns `true` if it was not seen before.
    pub fn insert(&mut self, fingerprint: Fingerprint) -> bool {
        self.states.insert(fingerprint)
    }

    /// Number of distinct states visited.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
