// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O for an interactive session.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, Stylize},
};
use log::info;
use std::io;

use ultimate_core::{
    session::{Session, Stage},
    stats::{Outcome, STATS_KEY, SessionStats},
    strategy::Recommendation,
};
use ultimate_eval::Card;

use crate::db::Db;

const HELP: &str = "Enter cards (e.g. AS KD), undo, win, loss, reset, stats, reset-stats, cards, help, quit";

/// Runs the terminal loop until the input ends or the player quits.
///
/// Returns the stats at the end of the session.
pub fn run(
    mut session: Session,
    db: &Db,
    input: impl io::BufRead,
    w: &mut impl io::Write,
) -> Result<SessionStats> {
    let mut stats = db.load(STATS_KEY)?;
    info!("Loaded stats {stats}");

    writeln!(w, "{HELP}")?;
    print_stats(w, &stats)?;
    print_prompt(w, &session)?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "q" | "quit" => break,
            "h" | "help" => writeln!(w, "{HELP}")?,
            "w" | "win" => {
                stats = stats.record(Outcome::Win);
                db.save(STATS_KEY, &stats)?;
                print_stats(w, &stats)?;
            }
            "l" | "loss" => {
                stats = stats.record(Outcome::Loss);
                db.save(STATS_KEY, &stats)?;
                print_stats(w, &stats)?;
            }
            "s" | "stats" => print_stats(w, &stats)?,
            "reset-stats" => {
                stats = stats.reset();
                db.save(STATS_KEY, &stats)?;
                print_stats(w, &stats)?;
            }
            "r" | "reset" => session.reset(),
            "u" | "undo" => match session.undo() {
                Ok(Some(rec)) => print_recommendation(w, &rec)?,
                Ok(None) => {}
                Err(e) => print_error(w, &e.to_string())?,
            },
            "c" | "cards" => {
                let cards = session
                    .available()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>();
                writeln!(w, "{}", cards.join(" "))?;
            }
            cards => select_cards(w, &mut session, cards)?,
        }

        print_prompt(w, &session)?;
    }

    Ok(stats)
}

fn select_cards(w: &mut impl io::Write, session: &mut Session, cards: &str) -> Result<()> {
    for token in cards.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }

        let card = match token.parse::<Card>() {
            Ok(card) => card,
            Err(e) => {
                print_error(w, &format!("{token}: {e}"))?;
                return Ok(());
            }
        };

        match session.select(card) {
            Ok(Some(rec)) => print_recommendation(w, &rec)?,
            Ok(None) => {}
            Err(e) => {
                print_error(w, &e.to_string())?;
                return Ok(());
            }
        }
    }

    Ok(())
}

fn print_prompt(w: &mut impl io::Write, session: &Session) -> Result<()> {
    let slots = |slots: &[Option<Card>]| {
        slots
            .iter()
            .map(|c| c.map_or("??".to_string(), |c| c.to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let stage = match session.stage() {
        Stage::Waiting => "Select hole cards",
        Stage::Initial => "Initial",
        Stage::Flop => "Flop",
        Stage::Final => "Final",
    };

    let hand = session
        .current_category()
        .map(|c| c.to_string())
        .unwrap_or_default();

    let text = format!(
        "[{stage}] {} | {} {hand}",
        slots(session.hole()),
        slots(session.board())
    );

    queue!(
        w,
        style::PrintStyledContent(text.as_str().dark_green()),
        style::Print("\n> ")
    )?;
    w.flush()?;

    Ok(())
}

fn print_recommendation(w: &mut impl io::Write, rec: &Recommendation) -> Result<()> {
    let text = rec.to_string();
    let styled = if rec.raise().is_some() {
        text.as_str().green().bold()
    } else {
        text.as_str().yellow().bold()
    };

    queue!(
        w,
        style::Print("Recommendation: "),
        style::PrintStyledContent(styled),
        style::Print("\n")
    )?;

    Ok(())
}

fn print_stats(w: &mut impl io::Write, stats: &SessionStats) -> Result<()> {
    queue!(
        w,
        style::PrintStyledContent(stats.to_string().as_str().cyan()),
        style::Print("\n")
    )?;

    Ok(())
}

fn print_error(w: &mut impl io::Write, msg: &str) -> Result<()> {
    queue!(
        w,
        style::PrintStyledContent(msg.red()),
        style::Print("\n")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lines(db: &Db, lines: &str) -> (SessionStats, String) {
        let mut out = Vec::new();
        let stats = run(Session::default(), db, lines.as_bytes(), &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn play_hand() {
        let db = Db::open_in_memory().unwrap();
        let (_, out) = run_lines(&db, "7S 7H\n2C 9D KD\n7C 2D\nquit\n");

        assert!(out.contains("Raise 4X"));
        assert!(out.contains("Raise 2X"));
        assert!(out.contains("Raise 1X (Full House)"));
        assert!(out.contains("[Final] 7S 7H | 2C 9D KD 7C 2D Full House"));
    }

    #[test]
    fn invalid_cards() {
        let db = Db::open_in_memory().unwrap();
        let (_, out) = run_lines(&db, "7S XX\n7S\n");

        assert!(out.contains("XX: invalid rank 'X'"));
        assert!(out.contains("card 7S already selected"));
    }

    #[test]
    fn record_stats() {
        let db = Db::open_in_memory().unwrap();
        let (stats, out) = run_lines(&db, "win\nwin\nloss\nwin\n");
        assert_eq!(stats.hands_played, 4);
        assert_eq!(stats.hands_won, 3);
        assert!(out.contains("Win Rate: 75.0%"));

        // Stats are saved after each update.
        assert_eq!(db.load(STATS_KEY).unwrap(), stats);

        let (stats, _) = run_lines(&db, "reset-stats\n");
        assert_eq!(stats, SessionStats::default());
        assert_eq!(db.load(STATS_KEY).unwrap(), SessionStats::default());
    }

    #[test]
    fn undo_card() {
        let db = Db::open_in_memory().unwrap();
        let (_, out) = run_lines(&db, "AS KS 2C\nundo\nundo\n");
        assert_eq!(out.matches("Raise 4X").count(), 2);
        assert!(out.contains("[Initial] AS KS | ?? ?? ?? ?? ?? High Card"));
        assert!(out.contains("[Select hole cards] AS ?? | ?? ?? ?? ?? ??"));
    }

    #[test]
    fn reset_hand() {
        let db = Db::open_in_memory().unwrap();
        let (_, out) = run_lines(&db, "AS KS\nreset\nAS KS\n");
        assert_eq!(out.matches("Raise 4X").count(), 2);
    }
}
