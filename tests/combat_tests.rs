//! End-to-end Combat games.
//!
//! These tests play whole games through the public API: parsing puzzle
//! text, both rule sets, repeat detection and custom rules engines.

use crab_combat::core::{
    Card, CombatConfig, CombatState, Deck, GameRng, PlayerId, PlayerMap, RuleSet,
};
use crab_combat::input::parse_decks;
use crab_combat::rules::{GameResult, RulesEngine, Termination};
use crab_combat::sim::{play, Simulator};

const EXAMPLE: &str = "\
Player 1:
9
2
6
3
1

Player 2:
5
8
4
7
10
";

fn example_decks() -> (Deck, Deck) {
    parse_decks(EXAMPLE).unwrap().into_pair()
}

// =============================================================================
// Puzzle Scenarios
// =============================================================================

/// Classic rules on the example decks score 306.
#[test]
fn test_classic_example_score() {
    let (deck1, deck2) = example_decks();
    let (final1, final2) = play(deck1, deck2, false).unwrap();

    assert!(final1.is_empty());
    assert_eq!(final2.score(), 306);
}

/// Recursive rules on the example decks score 291.
#[test]
fn test_recursive_example_score() {
    let (deck1, deck2) = example_decks();
    let (final1, final2) = play(deck1, deck2, true).unwrap();

    assert!(final1.is_empty());
    assert_eq!(final2.score(), 291);
}

/// Puzzle text goes straight into a simulator.
#[test]
fn test_parse_then_simulate() {
    let decks = parse_decks(EXAMPLE).unwrap();
    let (deck1, deck2) = decks.into_pair();

    let outcome = Simulator::new(CombatConfig::new(RuleSet::Recursive))
        .play(deck1, deck2)
        .unwrap();

    assert!(outcome.result.is_winner(PlayerId::TWO));
    assert_eq!(outcome.result.termination, Termination::DeckEmptied);
}

// =============================================================================
// Repeat Detection
// =============================================================================

/// These decks loop forever without the repeat rule.
#[test]
fn test_infinite_game_ends_for_player_one() {
    for rules in [RuleSet::Classic, RuleSet::Recursive] {
        let outcome = Simulator::new(CombatConfig::new(rules))
            .play(Deck::from([43, 19]), Deck::from([2, 29, 14]))
            .unwrap();

        assert_eq!(outcome.result, GameResult::repeated(), "{:?}", rules);
        assert_eq!(outcome.stats.rounds, 6);
    }
}

/// A repeated state ends the game before any further round is played.
#[test]
fn test_repeat_stops_immediately() {
    let config = CombatConfig::new(RuleSet::Classic).with_history(true);
    let outcome = Simulator::new(config)
        .play(Deck::from([43, 19]), Deck::from([2, 29, 14]))
        .unwrap();

    // Six rounds bring the decks back to the start; no seventh round is played
    assert_eq!(outcome.history.len(), 6);
    assert_eq!(outcome.history.last().unwrap().round, 6);
    assert_eq!(outcome.winning_deck(), &Deck::from([43, 19]));
}

// =============================================================================
// Custom Rules Engines
// =============================================================================

/// Lower card wins; never recurses.
struct LowerCardWins;

impl RulesEngine for LowerCardWins {
    fn rule_set(&self) -> RuleSet {
        RuleSet::Classic
    }

    fn sub_game(&self, _: &CombatState, _: &PlayerMap<Card>) -> Option<CombatState> {
        None
    }

    fn round_winner(&self, drawn: &PlayerMap<Card>) -> PlayerId {
        if drawn[PlayerId::ONE] < drawn[PlayerId::TWO] {
            PlayerId::ONE
        } else {
            PlayerId::TWO
        }
    }
}

/// The simulator defers round decisions to the rules engine.
#[test]
fn test_custom_rules_engine() {
    let sim = Simulator::with_rules(CombatConfig::default(), Box::new(LowerCardWins));
    let outcome = sim.play(Deck::from([1]), Deck::from([2])).unwrap();

    assert_eq!(outcome.winner(), PlayerId::ONE);
    assert_eq!(outcome.winning_deck(), &Deck::from([1, 2]));
}

// =============================================================================
// Larger Games
// =============================================================================

/// Full-size dealt games finish under both rule sets and conserve cards.
#[test]
fn test_dealt_games_finish() {
    let mut rng = GameRng::new(2020);

    for _ in 0..3 {
        let (deck1, deck2) = rng.fork().deal(50).into_pair();

        for rules in [RuleSet::Classic, RuleSet::Recursive] {
            let config = CombatConfig::new(rules).with_sub_game_shortcut(true);
            let outcome = Simulator::new(config).play(deck1.clone(), deck2.clone()).unwrap();

            if outcome.result.termination == Termination::DeckEmptied {
                assert_eq!(outcome.winning_deck().len(), 50);
            }
            assert!(outcome.decks[outcome.winner().opponent()].is_empty());
        }
    }
}

/// Same input, same outcome, same statistics.
#[test]
fn test_deterministic_replay() {
    let (deck1, deck2) = GameRng::new(12345).deal(30).into_pair();
    let config = CombatConfig::new(RuleSet::Recursive).with_history(true);

    let first = Simulator::new(config.clone()).play(deck1.clone(), deck2.clone()).unwrap();
    let second = Simulator::new(config).play(deck1, deck2).unwrap();

    assert_eq!(first, second);
}

/// Outcomes serialize for offline inspection.
#[test]
fn test_outcome_serialization() {
    let (deck1, deck2) = example_decks();
    let config = CombatConfig::new(RuleSet::Recursive).with_history(true);
    let outcome = Simulator::new(config).play(deck1, deck2).unwrap();

    let json = serde_json::to_string(&outcome).unwrap();
    let restored: crab_combat::GameOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(outcome, restored);
}
