//! Property tests over randomly dealt games.
//!
//! Decks are dealt by `GameRng::deal_uneven`: a shuffle of `1..=n` split at a
//! random point, so every generated game is well-formed.

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;

use crab_combat::core::{CombatConfig, CombatState, Deck, Fingerprint, GameRng, PlayerId, RuleSet};
use crab_combat::games::engine_for;
use crab_combat::rules::{GameResult, Termination};
use crab_combat::sim::Simulator;
use crab_combat::stack::{GameStack, Step};

/// Two disjoint, non-empty decks holding `1..=n` between them.
fn decks(max_cards: u32) -> impl Strategy<Value = (Deck, Deck)> {
    (2..=max_cards, any::<u64>())
        .prop_map(|(n, seed)| GameRng::new(seed).deal_uneven(n).into_pair())
}

fn rule_sets() -> impl Strategy<Value = RuleSet> {
    prop_oneof![Just(RuleSet::Classic), Just(RuleSet::Recursive)]
}

fn values(deck: &Deck) -> VecDeque<u32> {
    deck.iter().map(|c| c.value()).collect()
}

/// Straightforward round-by-round classic game on `VecDeque`s.
fn naive_classic(deck1: &Deck, deck2: &Deck) -> (PlayerId, Vec<u32>) {
    let mut one = values(deck1);
    let mut two = values(deck2);
    let mut seen = HashSet::new();

    while !one.is_empty() && !two.is_empty() {
        if !seen.insert((one.clone(), two.clone())) {
            return (PlayerId::ONE, one.into_iter().collect());
        }
        let a = one.pop_front().unwrap();
        let b = two.pop_front().unwrap();
        if a > b {
            one.push_back(a);
            one.push_back(b);
        } else {
            two.push_back(b);
            two.push_back(a);
        }
    }

    if one.is_empty() {
        (PlayerId::TWO, two.into_iter().collect())
    } else {
        (PlayerId::ONE, one.into_iter().collect())
    }
}

/// Recursive game played with plain recursion; each call keeps its own seen set.
fn naive_recursive(mut one: VecDeque<u32>, mut two: VecDeque<u32>) -> (PlayerId, Vec<u32>) {
    let mut seen = HashSet::new();

    while !one.is_empty() && !two.is_empty() {
        if !seen.insert((one.clone(), two.clone())) {
            return (PlayerId::ONE, one.into_iter().collect());
        }
        let a = one.pop_front().unwrap();
        let b = two.pop_front().unwrap();

        let winner = if one.len() >= a as usize && two.len() >= b as usize {
            let sub_one = one.iter().take(a as usize).copied().collect();
            let sub_two = two.iter().take(b as usize).copied().collect();
            naive_recursive(sub_one, sub_two).0
        } else if a > b {
            PlayerId::ONE
        } else {
            PlayerId::TWO
        };

        if winner == PlayerId::ONE {
            one.push_back(a);
            one.push_back(b);
        } else {
            two.push_back(b);
            two.push_back(a);
        }
    }

    if one.is_empty() {
        (PlayerId::TWO, two.into_iter().collect())
    } else {
        (PlayerId::ONE, one.into_iter().collect())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every round of every game instance keeps that game's card count.
    #[test]
    fn prop_rounds_conserve_cards((deck1, deck2) in decks(14), rules in rule_sets()) {
        let engine = engine_for(&CombatConfig::new(rules));
        let mut stack = GameStack::new(CombatState::new(deck1, deck2));
        let mut totals = vec![stack.top().unwrap().state.total_cards()];

        while let Some(frame) = stack.top_mut() {
            match frame.step(engine.as_ref()) {
                Step::Round(_) => {
                    prop_assert_eq!(frame.state.total_cards(), *totals.last().unwrap());
                }
                Step::Recurse(sub_game) => {
                    totals.push(sub_game.total_cards());
                    stack.push(sub_game);
                }
                Step::Finished(result) => {
                    stack.pop();
                    totals.pop();
                    if let Some(parent) = stack.top_mut() {
                        parent.resolve(result.winner);
                        prop_assert_eq!(parent.state.total_cards(), *totals.last().unwrap());
                    }
                }
            }
        }
    }

    /// Both rule sets always finish with exactly one non-empty deck.
    #[test]
    fn prop_games_terminate((deck1, deck2) in decks(20), rules in rule_sets()) {
        let total = deck1.len() + deck2.len();
        let outcome = Simulator::new(CombatConfig::new(rules)).play(deck1, deck2).unwrap();

        let loser = outcome.winner().opponent();
        prop_assert!(outcome.decks[loser].is_empty());
        prop_assert!(!outcome.winning_deck().is_empty());
        if outcome.result.termination == Termination::DeckEmptied {
            prop_assert_eq!(outcome.winning_deck().len(), total);
        }
    }

    /// Classic rules match a plain round-by-round simulation.
    #[test]
    fn prop_classic_matches_naive((deck1, deck2) in decks(20)) {
        let (winner, cards) = naive_classic(&deck1, &deck2);
        let outcome = Simulator::new(CombatConfig::new(RuleSet::Classic))
            .play(deck1, deck2)
            .unwrap();

        prop_assert_eq!(outcome.winner(), winner);
        let final_cards: Vec<u32> = outcome.winning_deck().iter().map(|c| c.value()).collect();
        prop_assert_eq!(final_cards, cards);
    }

    /// Recursive rules match a plainly recursive simulation, repeats in
    /// sub-games included.
    #[test]
    fn prop_recursive_matches_naive((deck1, deck2) in decks(20)) {
        let (winner, cards) = naive_recursive(values(&deck1), values(&deck2));
        let outcome = Simulator::new(CombatConfig::new(RuleSet::Recursive))
            .play(deck1, deck2)
            .unwrap();

        prop_assert_eq!(outcome.winner(), winner);
        let final_cards: Vec<u32> = outcome.winning_deck().iter().map(|c| c.value()).collect();
        prop_assert_eq!(final_cards, cards);
    }

    /// A repeated state always goes to player one.
    #[test]
    fn prop_repeats_favor_player_one((deck1, deck2) in decks(16), rules in rule_sets()) {
        let outcome = Simulator::new(CombatConfig::new(rules)).play(deck1, deck2).unwrap();
        if outcome.result.termination == Termination::RepeatedState {
            prop_assert_eq!(outcome.result, GameResult::repeated());
            prop_assert!(outcome.stats.repeated_states >= 1);
        }
    }

    /// Skipping decided sub-games never changes who wins or the final decks.
    #[test]
    fn prop_sub_game_shortcut_is_sound((deck1, deck2) in decks(20)) {
        let played = Simulator::new(CombatConfig::new(RuleSet::Recursive))
            .play(deck1.clone(), deck2.clone())
            .unwrap();
        let shortcut = CombatConfig::new(RuleSet::Recursive).with_sub_game_shortcut(true);
        let skipped = Simulator::new(shortcut).play(deck1, deck2).unwrap();

        prop_assert_eq!(played.result, skipped.result);
        prop_assert_eq!(played.decks, skipped.decks);
    }

    /// Identical inputs give identical outcomes.
    #[test]
    fn prop_deterministic((deck1, deck2) in decks(16), rules in rule_sets()) {
        let config = CombatConfig::new(rules).with_history(true);
        let first = Simulator::new(config.clone()).play(deck1.clone(), deck2.clone()).unwrap();
        let second = Simulator::new(config).play(deck1, deck2).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Fingerprints are equal exactly when the decks are.
    #[test]
    fn prop_fingerprint_is_exact((a1, a2) in decks(8), (b1, b2) in decks(8)) {
        let a = CombatState::new(a1, a2);
        let b = CombatState::new(b1, b2);
        prop_assert_eq!(Fingerprint::of(&a) == Fingerprint::of(&b), a.decks == b.decks);
    }
}
