// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Betting recommendations for the three Ultimate Hold'em decisions.
//!
//! The player decides to raise 3X or 4X or check before the flop, to raise
//! 2X or check after the flop, and to raise 1X or fold when the whole board
//! is out. The [Advisor] picks the decision point from the number of cards:
//!
//! ```
//! # use ultimate_core::strategy::*;
//! # use ultimate_eval::Hand;
//! let advisor = Advisor::default();
//! let hand = "AS KD".parse::<Hand>().unwrap();
//! let rec = advisor.advise(hand.cards()).unwrap();
//! assert_eq!(rec, Recommendation::PreFlop(PreFlopAction::Raise(Bet::X4)));
//! assert_eq!(rec.to_string(), "Raise 4X");
//! ```
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use ultimate_eval::{Card, HandCategory, HandError};

mod decide;
pub use decide::{decide_final, decide_post_flop, decide_pre_flop};

mod table;
pub use table::{
    Bet, FinalTable, HighCardRule, PairTier, PostFlopTable, PreFlopTable, StrategyTable, Variant,
};

/// A betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Street {
    /// The player sees the hole cards.
    PreFlop,
    /// The first three community cards are out.
    PostFlop,
    /// All five community cards are out.
    Final,
}

impl Street {
    /// The number of community cards at this street.
    pub fn board_cards(&self) -> usize {
        match self {
            Street::PreFlop => 0,
            Street::PostFlop => 3,
            Street::Final => 5,
        }
    }

    /// The street decided with the given number of cards, if any.
    pub fn from_card_count(count: usize) -> Option<Street> {
        match count {
            2 => Some(Street::PreFlop),
            5 => Some(Street::PostFlop),
            7 => Some(Street::Final),
            _ => None,
        }
    }
}

/// Pre-flop action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreFlopAction {
    /// Check.
    Check,
    /// Raise by the given multiple of the ante.
    Raise(Bet),
}

/// Post-flop action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostFlopAction {
    /// Check.
    Check,
    /// Raise 2X.
    Raise,
}

/// Final street action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalAction {
    /// Fold.
    Fold,
    /// Raise 1X.
    Raise,
}

/// The final action with the hand the player ends up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalDecision {
    /// The action.
    pub action: FinalAction,
    /// The best hand category with all seven cards.
    pub category: HandCategory,
}

/// A recommendation for one of the three decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// Before the flop.
    PreFlop(PreFlopAction),
    /// After the flop.
    PostFlop(PostFlopAction),
    /// With the whole board.
    Final(FinalDecision),
}

impl Recommendation {
    /// The street this recommendation is for.
    pub fn street(&self) -> Street {
        match self {
            Recommendation::PreFlop(_) => Street::PreFlop,
            Recommendation::PostFlop(_) => Street::PostFlop,
            Recommendation::Final(_) => Street::Final,
        }
    }

    /// The raise size if this is a raise.
    pub fn raise(&self) -> Option<Bet> {
        match self {
            Recommendation::PreFlop(PreFlopAction::Raise(bet)) => Some(*bet),
            Recommendation::PostFlop(PostFlopAction::Raise) => Some(Bet::X2),
            Recommendation::Final(FinalDecision {
                action: FinalAction::Raise,
                ..
            }) => Some(Bet::X1),
            _ => None,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.raise(), self) {
            (Some(bet), Recommendation::Final(d)) => write!(f, "Raise {bet} ({})", d.category),
            (Some(bet), _) => write!(f, "Raise {bet}"),
            (None, Recommendation::Final(d)) => write!(f, "Fold ({})", d.category),
            (None, _) => f.write_str("Check"),
        }
    }
}

/// Error returned when a recommendation cannot be made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdviceError {
    /// The cards are not a valid hand.
    #[error(transparent)]
    InvalidHand(#[from] HandError),
    /// The number of cards is not a decision point.
    #[error("no decision with {0} cards, expected 2, 5 or 7")]
    NoDecisionPoint(usize),
}

/// Makes recommendations using a strategy table.
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    table: StrategyTable,
}

impl Advisor {
    /// Creates an advisor with the given table.
    pub fn new(table: StrategyTable) -> Self {
        Self { table }
    }

    /// The strategy table.
    pub fn table(&self) -> &StrategyTable {
        &self.table
    }

    /// Recommends an action for the hole cards followed by the board cards.
    ///
    /// Decisions are made with 2, 5 or 7 cards, any other number of cards is
    /// an error.
    pub fn advise(&self, cards: &[Card]) -> Result<Recommendation, AdviceError> {
        let street = Street::from_card_count(cards.len())
            .ok_or(AdviceError::NoDecisionPoint(cards.len()))?;

        let hole = [cards[0], cards[1]];
        let rec = match street {
            Street::PreFlop => Recommendation::PreFlop(self.pre_flop(hole)?),
            Street::PostFlop => {
                Recommendation::PostFlop(self.post_flop(hole, [cards[2], cards[3], cards[4]])?)
            }
            Street::Final => {
                Recommendation::Final(self.final_street(hole, std::array::from_fn(|i| cards[i + 2]))?)
            }
        };

        Ok(rec)
    }

    /// The pre-flop decision.
    pub fn pre_flop(&self, hole: [Card; 2]) -> Result<PreFlopAction, HandError> {
        decide_pre_flop(&self.table.pre_flop, hole)
    }

    /// The post-flop decision.
    pub fn post_flop(&self, hole: [Card; 2], board: [Card; 3]) -> Result<PostFlopAction, HandError> {
        decide_post_flop(&self.table.post_flop, hole, board)
    }

    /// The final street decision.
    pub fn final_street(
        &self,
        hole: [Card; 2],
        board: [Card; 5],
    ) -> Result<FinalDecision, HandError> {
        decide_final(&self.table.final_street, hole, board)
    }
}
