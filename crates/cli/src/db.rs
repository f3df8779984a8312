// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Database for persisting session statistics.
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

use ultimate_core::stats::SessionStats;

/// Database for persisting session stats.
#[derive(Debug)]
pub struct Db {
    conn: Connection,
}

impl Db {
    /// Open a database.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::create(conn)
    }

    /// Open a database in memory.
    pub fn open_in_memory() -> Result<Self> {
        Self::create(Connection::open_in_memory()?)
    }

    fn create(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS stats (
               key TEXT PRIMARY KEY,
               hands_played INTEGER NOT NULL,
               hands_won INTEGER NOT NULL,
               current_streak INTEGER NOT NULL,
               last_update DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            (),
        )?;

        Ok(Db { conn })
    }

    /// Loads the stats stored under a key, or the default stats.
    pub fn load(&self, key: &str) -> Result<SessionStats> {
        let stats = self
            .conn
            .query_row(
                "SELECT hands_played, hands_won, current_streak
                 FROM stats
                 WHERE key = ?1",
                params![key],
                |row| {
                    Ok(SessionStats {
                        hands_played: row.get(0)?,
                        hands_won: row.get(1)?,
                        current_streak: row.get(2)?,
                    })
                },
            )
            .optional()?;

        Ok(stats.unwrap_or_default())
    }

    /// Stores the stats under a key.
    pub fn save(&self, key: &str, stats: &SessionStats) -> Result<()> {
        self.conn.execute(
            "INSERT INTO stats (key, hands_played, hands_won, current_streak, last_update)
             VALUES (?1, ?2, ?3, ?4, CURRENT_TIMESTAMP)
             ON CONFLICT(key) DO UPDATE SET
               hands_played = excluded.hands_played,
               hands_won = excluded.hands_won,
               current_streak = excluded.current_streak,
               last_update = CURRENT_TIMESTAMP",
            params![
                key,
                stats.hands_played,
                stats.hands_won,
                stats.current_streak
            ],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ultimate_core::stats::{Outcome, STATS_KEY};

    #[test]
    fn load_missing_key() {
        let db = Db::open_in_memory().unwrap();
        assert_eq!(db.load(STATS_KEY).unwrap(), SessionStats::default());
    }

    #[test]
    fn save_and_load() {
        let db = Db::open_in_memory().unwrap();

        let stats = SessionStats::default()
            .record(Outcome::Win)
            .record(Outcome::Loss)
            .record(Outcome::Win);
        db.save(STATS_KEY, &stats).unwrap();
        assert_eq!(db.load(STATS_KEY).unwrap(), stats);

        // Saving again replaces the row.
        let stats = stats.record(Outcome::Win);
        db.save(STATS_KEY, &stats).unwrap();
        assert_eq!(db.load(STATS_KEY).unwrap(), stats);

        // Keys are independent.
        assert_eq!(db.load("other").unwrap(), SessionStats::default());
    }
}
