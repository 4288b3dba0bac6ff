use clap::Parser;
use crab_combat::{parse_decks, CombatConfig, PlayerId, RuleSet, Simulator};
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "combat", about = "Play both Combat rule sets and print the winning scores")]
struct Args {
    /// Puzzle input with both decks; read from stdin when omitted
    input: Option<PathBuf>,
}

fn log() -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e)),
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log()?;

    let text = read_input(args.input.as_ref())?;
    let decks = parse_decks(&text)?;
    log::info!(
        "{:<24}{} vs {} cards",
        "loaded decks",
        decks[PlayerId::ONE].len(),
        decks[PlayerId::TWO].len()
    );

    for rules in [RuleSet::Classic, RuleSet::Recursive] {
        let sim = Simulator::new(CombatConfig::new(rules).with_sub_game_shortcut(true));
        let (deck1, deck2) = decks.clone().into_pair();
        let outcome = sim.play(deck1, deck2)?;

        log::info!(
            "{:<24}{} wins, {}, {:.1} rounds per game",
            format!("{:?}", rules),
            outcome.winner(),
            outcome.stats,
            outcome.stats.rounds_per_game()
        );
        println!("{}", outcome.score());
    }

    Ok(())
}
