// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Strategy tables.
//!
//! The thresholds used by the decision rules are data, a table can be one of
//! the built-in [Variant]s or loaded from a JSON file:
//!
//! ```
//! # use ultimate_core::strategy::{StrategyTable, Variant};
//! let json = StrategyTable::tiered().to_json().unwrap();
//! let table = StrategyTable::from_json(&json).unwrap();
//! assert_eq!(table, Variant::Tiered.table());
//! ```
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::Path, str::FromStr};

use ultimate_eval::{HandCategory, Rank};

/// A raise size as a multiple of the ante.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bet {
    /// Raise 1 times the ante, the final street raise.
    X1 = 1,
    /// Raise 2 times the ante, the post-flop raise.
    X2 = 2,
    /// Raise 3 times the ante.
    X3 = 3,
    /// Raise 4 times the ante.
    X4 = 4,
}

impl Bet {
    /// The ante multiplier.
    pub fn multiplier(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}X", self.multiplier())
    }
}

/// A pocket pair tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairTier {
    /// The lowest pair rank in this tier.
    pub min_rank: Rank,
    /// The raise for pairs in this tier.
    pub bet: Bet,
}

/// Kicker thresholds for a high card without a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighCardRule {
    /// The high card this rule applies to.
    pub high: Rank,
    /// The minimum kicker when the hole cards are suited, `None` never raises.
    pub suited: Option<Rank>,
    /// The minimum kicker when the hole cards are offsuit, `None` never raises.
    pub offsuit: Option<Rank>,
    /// The raise when the kicker qualifies.
    pub bet: Bet,
}

/// Pre-flop thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreFlopTable {
    /// Pocket pair tiers, a pair raises with the highest tier it reaches and
    /// checks if it reaches none.
    pub pairs: Vec<PairTier>,
    /// The raise for any hand with an ace.
    pub ace: Bet,
    /// Kicker thresholds by high card.
    pub high_cards: Vec<HighCardRule>,
}

impl PreFlopTable {
    /// The raise for a pocket pair of the given rank.
    pub fn pair_bet(&self, rank: Rank) -> Option<Bet> {
        self.pairs
            .iter()
            .filter(|tier| rank >= tier.min_rank)
            .max_by_key(|tier| tier.min_rank)
            .map(|tier| tier.bet)
    }

    /// The rule for a high card.
    pub fn high_card(&self, high: Rank) -> Option<&HighCardRule> {
        self.high_cards.iter().find(|rule| rule.high == high)
    }
}

/// Post-flop thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFlopTable {
    /// Raise with this hand or better using all the cards, board pairs
    /// included.
    pub min_category: Option<HandCategory>,
    /// Pocket pairs up to this rank do not raise into a higher board pair.
    pub small_pair_max: Option<Rank>,
    /// On a suited board a hidden pair raises only with a flush draw or with a
    /// hole card at least as high as the board.
    pub suited_board_guard: bool,
    /// Raise on a paired board holding a hole card of at least this rank.
    pub paired_board_kicker: Option<Rank>,
    /// Raise with an open ended straight draw whose lowest rank is at least
    /// this rank.
    pub min_draw_low: Option<Rank>,
    /// Raise with four cards of the same suit.
    pub flush_draw: bool,
}

/// Final street thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalTable {
    /// Raise with this hand or better using all the cards.
    pub min_category: Option<HandCategory>,
    /// Raise when the board alone is a straight or a flush.
    pub board_made_hand: bool,
    /// Raise on a paired board holding a hole card of at least this rank.
    pub paired_board_kicker: Option<Rank>,
}

/// The thresholds for all three decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyTable {
    /// The pre-flop thresholds.
    pub pre_flop: PreFlopTable,
    /// The post-flop thresholds.
    pub post_flop: PostFlopTable,
    /// The final street thresholds.
    #[serde(rename = "final")]
    pub final_street: FinalTable,
}

impl StrategyTable {
    /// The standard strategy.
    ///
    /// Every pair from treys raises 4X, jack high raises offsuit with a ten,
    /// and all post-flop and final refinements are on.
    pub fn standard() -> Self {
        Self {
            pre_flop: PreFlopTable {
                pairs: vec![PairTier {
                    min_rank: Rank::Trey,
                    bet: Bet::X4,
                }],
                ace: Bet::X4,
                high_cards: vec![
                    high_card(Rank::King, Some(Rank::Deuce), Some(Rank::Five)),
                    high_card(Rank::Queen, Some(Rank::Six), Some(Rank::Eight)),
                    high_card(Rank::Jack, Some(Rank::Eight), Some(Rank::Ten)),
                ],
            },
            post_flop: PostFlopTable {
                min_category: None,
                small_pair_max: Some(Rank::Four),
                suited_board_guard: true,
                paired_board_kicker: Some(Rank::Ace),
                min_draw_low: Some(Rank::Eight),
                flush_draw: true,
            },
            final_street: FinalTable {
                min_category: None,
                board_made_hand: true,
                paired_board_kicker: Some(Rank::King),
            },
        }
    }

    /// The tiered strategy.
    ///
    /// Pairs from treys to tens raise 3X, jacks or better 4X, offsuit jack
    /// high never raises. After the flop and on the final street any pair or
    /// better raises, including a pair on the board.
    pub fn tiered() -> Self {
        Self {
            pre_flop: PreFlopTable {
                pairs: vec![
                    PairTier {
                        min_rank: Rank::Trey,
                        bet: Bet::X3,
                    },
                    PairTier {
                        min_rank: Rank::Jack,
                        bet: Bet::X4,
                    },
                ],
                ace: Bet::X4,
                high_cards: vec![
                    high_card(Rank::King, Some(Rank::Deuce), Some(Rank::Five)),
                    high_card(Rank::Queen, Some(Rank::Six), Some(Rank::Eight)),
                    high_card(Rank::Jack, Some(Rank::Eight), Some(Rank::Jack)),
                ],
            },
            post_flop: PostFlopTable {
                min_category: Some(HandCategory::Pair),
                small_pair_max: None,
                suited_board_guard: false,
                paired_board_kicker: None,
                min_draw_low: None,
                flush_draw: false,
            },
            final_street: FinalTable {
                min_category: Some(HandCategory::Pair),
                board_made_hand: false,
                paired_board_kicker: None,
            },
        }
    }

    /// Parses and validates a JSON table.
    pub fn from_json(json: &str) -> Result<Self> {
        let table = serde_json::from_str::<Self>(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Loads and validates a JSON table file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read strategy file {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Invalid strategy file {}", path.display()))
    }

    /// Serializes this table to pretty printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the pre-flop raises are 3X or 4X.
    pub fn validate(&self) -> Result<()> {
        let pre_flop = &self.pre_flop;
        let bets = pre_flop
            .pairs
            .iter()
            .map(|tier| tier.bet)
            .chain(pre_flop.high_cards.iter().map(|rule| rule.bet))
            .chain([pre_flop.ace]);

        for bet in bets {
            if bet < Bet::X3 {
                bail!("Pre-flop raise must be 3X or 4X, got {bet}");
            }
        }

        Ok(())
    }
}

impl Default for StrategyTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn high_card(high: Rank, suited: Option<Rank>, offsuit: Option<Rank>) -> HighCardRule {
    HighCardRule {
        high,
        suited,
        offsuit,
        bet: Bet::X4,
    }
}

/// A built-in strategy table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// See [StrategyTable::standard].
    #[default]
    Standard,
    /// See [StrategyTable::tiered].
    Tiered,
}

impl Variant {
    /// Returns all variants.
    pub fn variants() -> impl DoubleEndedIterator<Item = Variant> {
        [Variant::Standard, Variant::Tiered].into_iter()
    }

    /// The table for this variant.
    pub fn table(&self) -> StrategyTable {
        match self {
            Variant::Standard => StrategyTable::standard(),
            Variant::Tiered => StrategyTable::tiered(),
        }
    }

    /// The variant name.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::Tiered => "tiered",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Variant::variants()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .with_context(|| format!("Unknown strategy variant '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_tiers() {
        let standard = StrategyTable::standard().pre_flop;
        assert_eq!(standard.pair_bet(Rank::Deuce), None);
        assert_eq!(standard.pair_bet(Rank::Trey), Some(Bet::X4));
        assert_eq!(standard.pair_bet(Rank::Ace), Some(Bet::X4));

        let tiered = StrategyTable::tiered().pre_flop;
        assert_eq!(tiered.pair_bet(Rank::Deuce), None);
        assert_eq!(tiered.pair_bet(Rank::Trey), Some(Bet::X3));
        assert_eq!(tiered.pair_bet(Rank::Ten), Some(Bet::X3));
        assert_eq!(tiered.pair_bet(Rank::Jack), Some(Bet::X4));
        assert_eq!(tiered.pair_bet(Rank::King), Some(Bet::X4));
    }

    #[test]
    fn json_round_trip() {
        for variant in Variant::variants() {
            let json = variant.table().to_json().unwrap();
            assert_eq!(StrategyTable::from_json(&json).unwrap(), variant.table());
        }

        let json = StrategyTable::standard().to_json().unwrap();
        assert!(json.contains("\"final\""));
        assert!(json.contains("\"min_draw_low\": \"Eight\""));

        let json = StrategyTable::tiered().to_json().unwrap();
        assert!(json.contains("\"min_category\": \"Pair\""));
    }

    #[test]
    fn invalid_tables() {
        let mut table = StrategyTable::standard();
        table.pre_flop.ace = Bet::X2;
        let json = table.to_json().unwrap();
        assert!(StrategyTable::from_json(&json).is_err());

        assert!(StrategyTable::from_json("{}").is_err());
        assert!(StrategyTable::load("/no/such/strategy.json").is_err());
    }

    #[test]
    fn variant_names() {
        assert_eq!("standard".parse::<Variant>().unwrap(), Variant::Standard);
        assert_eq!("Tiered".parse::<Variant>().unwrap(), Variant::Tiered);
        assert!("other".parse::<Variant>().is_err());
        assert_eq!(Variant::default().table(), StrategyTable::default());
        assert_eq!(Bet::X4.to_string(), "4X");
    }
}
