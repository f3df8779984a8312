// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ultimate Hold'em advisor CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use std::{io, path::PathBuf};

use ultimate_core::{
    session::Session,
    stats::STATS_KEY,
    strategy::{Advisor, StrategyTable, Variant},
};
use ultimate_eval::{Card, Hand};

pub mod db;
pub mod terminal;

#[derive(Debug, Parser)]
#[clap(name = "ultimate", about = "Ultimate Texas Hold'em advisor")]
struct Cli {
    /// The built-in strategy variant.
    #[clap(long, default_value = "standard")]
    variant: Variant,
    /// Load the strategy table from a JSON file instead of a variant.
    #[clap(long)]
    strategy: Option<PathBuf>,
    /// The stats database path.
    #[clap(long)]
    db: Option<PathBuf>,
    /// Log which rule made each decision.
    #[clap(long, short)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the best hand for 2 to 7 cards.
    Classify {
        /// The cards, e.g. AS KD 10H.
        #[clap(required = true)]
        cards: Vec<Card>,
    },
    /// Recommend an action for 2, 5 or 7 cards, hole cards first.
    Advise {
        /// The cards, e.g. AS KD 10H.
        #[clap(required = true)]
        cards: Vec<Card>,
    },
    /// Play hands interactively.
    Play,
    /// Print the saved stats.
    Stats {
        /// Clear the saved stats.
        #[clap(long)]
        reset: bool,
    },
    /// Print the strategy table as JSON.
    Strategy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let table = match &cli.strategy {
        Some(path) => StrategyTable::load(path)?,
        None => cli.variant.table(),
    };
    let advisor = Advisor::new(table);

    match cli.command {
        Command::Classify { cards } => {
            let hand = Hand::new(cards)?;
            println!("{}", hand.category());
        }
        Command::Advise { cards } => {
            let hand = Hand::new(cards)?;
            let rec = advisor.advise(hand.cards())?;
            println!("{rec}");
            println!("Hand: {}", hand.category());
        }
        Command::Play => {
            let db = db::Db::open(db_path(cli.db)?)?;
            let stdin = io::stdin();
            let stats = terminal::run(Session::new(advisor), &db, stdin.lock(), &mut io::stdout())?;
            info!("Session ended {stats}");
        }
        Command::Stats { reset } => {
            let db = db::Db::open(db_path(cli.db)?)?;
            let mut stats = db.load(STATS_KEY)?;
            if reset {
                stats = stats.reset();
                db.save(STATS_KEY, &stats)?;
            }
            println!("{stats}");
        }
        Command::Strategy => println!("{}", advisor.table().to_json()?),
    }

    Ok(())
}

/// The database path, defaults to the platform data directory.
fn db_path(path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }

    let Some(dirs) = directories::ProjectDirs::from("", "", "ultimate") else {
        bail!("Cannot find a data directory, use --db");
    };

    let dir = dirs.data_dir();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create directory {}", dir.display()))?;

    Ok(dir.join("stats.db"))
}
