// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Session win and loss statistics.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The key the statistics are stored under.
pub const STATS_KEY: &str = "holdemStats";

/// The outcome of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The player won the hand.
    Win,
    /// The player lost the hand.
    Loss,
}

/// Hands played and won in a session.
///
/// Updates return a new value, the caller decides when to store it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Number of hands played.
    pub hands_played: u32,
    /// Number of hands won.
    pub hands_won: u32,
    /// Number of consecutive wins.
    pub current_streak: u32,
}

impl SessionStats {
    /// Returns these stats updated with a hand outcome.
    #[must_use]
    pub fn record(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Self {
                hands_played: self.hands_played.saturating_add(1),
                hands_won: self.hands_won.saturating_add(1),
                current_streak: self.current_streak.saturating_add(1),
            },
            Outcome::Loss => Self {
                hands_played: self.hands_played.saturating_add(1),
                current_streak: 0,
                ..self
            },
        }
    }

    /// Returns cleared stats.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::default()
    }

    /// Number of hands lost.
    pub fn losses(&self) -> u32 {
        self.hands_played.saturating_sub(self.hands_won)
    }

    /// Percentage of hands won, zero if no hands have been played.
    pub fn win_rate(&self) -> f64 {
        if self.hands_played == 0 {
            0.0
        } else {
            self.hands_won as f64 * 100.0 / self.hands_played as f64
        }
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hands Played: {}  Won: {}  Lost: {}  Win Rate: {:.1}%  Streak: {}",
            self.hands_played,
            self.hands_won,
            self.losses(),
            self.win_rate(),
            self.current_streak
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_outcomes() {
        let stats = SessionStats::default()
            .record(Outcome::Win)
            .record(Outcome::Win)
            .record(Outcome::Loss)
            .record(Outcome::Win);

        assert_eq!(
            stats,
            SessionStats {
                hands_played: 4,
                hands_won: 3,
                current_streak: 1,
            }
        );
        assert_eq!(stats.losses(), 1);
        assert_eq!(stats.win_rate(), 75.0);
        assert_eq!(stats.reset(), SessionStats::default());
    }

    #[test]
    fn record_saturates() {
        let stats = SessionStats {
            hands_played: u32::MAX,
            hands_won: u32::MAX,
            current_streak: u32::MAX,
        };
        assert_eq!(stats.record(Outcome::Win), stats);

        let stats = stats.record(Outcome::Loss);
        assert_eq!(stats.hands_played, u32::MAX);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn stats_formatting() {
        assert_eq!(
            SessionStats::default().to_string(),
            "Hands Played: 0  Won: 0  Lost: 0  Win Rate: 0.0%  Streak: 0"
        );

        let stats = (0..7).fold(SessionStats::default(), |s, n| {
            s.record(if n % 7 < 4 { Outcome::Win } else { Outcome::Loss })
        });
        assert_eq!(
            stats.to_string(),
            "Hands Played: 7  Won: 4  Lost: 3  Win Rate: 57.1%  Streak: 0"
        );
    }
}
