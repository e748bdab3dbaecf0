//! Fight Night - command line entry point
//!
//! Runs seasons, builds single cards and simulates fights. Everything is
//! written to stdout as JSON except the season summary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use fight_night::core::config::SimulationConfig;
use fight_night::core::error::Result;
use fight_night::core::types::{Corner, Gender};
use fight_night::event::simulate_season;
use fight_night::fight::{resolve_fight, MethodCategory};
use fight_night::matchmaking::build_card;
use fight_night::roster::{generate_fighter, generate_roster};

/// MMA promotion simulator
#[derive(Parser, Debug)]
#[command(name = "fight-night")]
#[command(about = "Simulate MMA fights, cards and whole seasons")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a full season of events
    Season {
        /// TOML config file; defaults are used for missing keys
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured seed
        #[arg(long)]
        seed: Option<u64>,

        /// Override the configured number of events
        #[arg(long)]
        events: Option<u32>,

        /// Write the full JSON output here
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Generate a roster and print the card for one event
    Card {
        #[arg(long, default_value_t = 12345)]
        seed: u64,

        /// Title fights are only booked from event 3
        #[arg(long, default_value_t = 1)]
        event_number: u32,

        #[arg(long, default_value_t = 10)]
        fighters_per_division: u32,
    },

    /// Simulate one fight between two generated lightweights
    Fight {
        #[arg(long, default_value_t = 12345)]
        seed: u64,

        /// Five rounds instead of three
        #[arg(long)]
        title: bool,
    },

    /// Simulate many independent fights between the same pair and tally outcomes
    Sample {
        #[arg(long, default_value_t = 12345)]
        seed: u64,

        #[arg(long, default_value_t = 1000)]
        fights: u64,

        #[arg(long)]
        title: bool,
    },
}

#[derive(Serialize, Debug, Default)]
struct SampleReport {
    fights: u64,
    first_wins: u64,
    second_wins: u64,
    knockouts: u64,
    submissions: u64,
    decisions: u64,
    average_round: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fight_night=info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Season { config, seed, events, output } => {
            let mut config = match config {
                Some(path) => SimulationConfig::load(&path)?,
                None => SimulationConfig::default(),
            };
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(events) = events {
                config.events = events;
            }

            let result = simulate_season(&config)?;
            println!("{}", result.summary());
            if let Some(path) = output {
                std::fs::write(&path, result.to_json())?;
                println!("\nFull output written to {}", path.display());
            }
        }

        Command::Card { seed, event_number, fighters_per_division } => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let roster = generate_roster(fighters_per_division, &mut rng)?;
            let card = build_card(&roster, event_number, &mut rng);
            println!("{}", serde_json::to_string_pretty(&card)?);
        }

        Command::Fight { seed, title } => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let first = generate_fighter(Gender::Men, 70, 1, &mut rng);
            let second = generate_fighter(Gender::Men, 70, 2, &mut rng);
            let result = resolve_fight(&first, &second, title, &mut rng);
            tracing::info!(
                "{} def. {} by {} (R{} {})",
                if result.winner == first.id { &first.name } else { &second.name },
                if result.loser == first.id { &first.name } else { &second.name },
                result.method,
                result.round,
                result.time
            );
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Command::Sample { seed, fights, title } => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let first = generate_fighter(Gender::Men, 70, 1, &mut rng);
            let second = generate_fighter(Gender::Men, 70, 2, &mut rng);

            // One generator per fight so the tally is independent of thread count
            let outcomes: Vec<(Corner, MethodCategory, u32)> = (0..fights)
                .into_par_iter()
                .map(|i| {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(i + 1));
                    let result = resolve_fight(&first, &second, title, &mut rng);
                    (result.winning_corner, result.method.category(), result.round)
                })
                .collect();

            let mut report = SampleReport { fights, ..SampleReport::default() };
            let mut rounds = 0u64;
            for (corner, category, round) in outcomes {
                match corner {
                    Corner::First => report.first_wins += 1,
                    Corner::Second => report.second_wins += 1,
                }
                match category {
                    MethodCategory::Knockout => report.knockouts += 1,
                    MethodCategory::Submission => report.submissions += 1,
                    MethodCategory::Decision => report.decisions += 1,
                }
                rounds += u64::from(round);
            }
            if fights > 0 {
                report.average_round = rounds as f64 / fights as f64;
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
