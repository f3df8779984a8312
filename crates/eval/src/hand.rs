// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A validated set of player and community cards.
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{
    Card, ParseCardError, Rank,
    eval::{Counts, HandCategory, classify},
};

/// Error returned for card sets that do not form a valid hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// Less than two cards.
    #[error("a hand needs at least {min} cards, got {0}", min = Hand::MIN_CARDS)]
    TooFewCards(usize),
    /// More than seven cards.
    #[error("a hand holds at most {max} cards, got {0}", max = Hand::MAX_CARDS)]
    TooManyCards(usize),
    /// The same card appears twice.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A card could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseCardError),
}

/// A player hand.
///
/// The first two cards are the player hole cards, the rest are the community
/// cards in the order they were revealed. A hand always has between 2 and 7
/// distinct cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Minimum number of cards in a hand.
    pub const MIN_CARDS: usize = 2;

    /// Maximum number of cards in a hand.
    pub const MAX_CARDS: usize = 7;

    /// Creates a hand from hole cards followed by community cards.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Result<Self, HandError> {
        let cards = cards.into_iter().collect::<Vec<_>>();

        if cards.len() < Self::MIN_CARDS {
            return Err(HandError::TooFewCards(cards.len()));
        }

        if cards.len() > Self::MAX_CARDS {
            return Err(HandError::TooManyCards(cards.len()));
        }

        let mut seen = 0u64;
        for card in &cards {
            let bit = 1u64 << card.id();
            if seen & bit != 0 {
                return Err(HandError::DuplicateCard(*card));
            }
            seen |= bit;
        }

        Ok(Self { cards })
    }

    /// Creates a hand from the hole cards and the community cards.
    pub fn with_board(hole: [Card; 2], board: &[Card]) -> Result<Self, HandError> {
        Self::new(hole.into_iter().chain(board.iter().copied()))
    }

    /// All the cards in this hand.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The player hole cards.
    pub fn hole(&self) -> [Card; 2] {
        [self.cards[0], self.cards[1]]
    }

    /// The community cards.
    pub fn board(&self) -> &[Card] {
        &self.cards[2..]
    }

    /// The best hand category for these cards.
    pub fn category(&self) -> HandCategory {
        classify(self)
    }

    /// Rank and suit counters for all the cards.
    pub fn counts(&self) -> Counts {
        Counts::new(&self.cards)
    }

    /// The top card of the best straight in this hand, five for the wheel.
    pub fn straight_top(&self) -> Option<Rank> {
        self.counts().rank_mask().straight_top()
    }

    /// Checks if a hole card is part of a pair.
    ///
    /// This is the case when the hole cards are a pocket pair or when a hole
    /// card rank matches a community card, a pair made only of community cards
    /// is not a hidden pair.
    pub fn has_hidden_pair(&self) -> bool {
        let [c1, c2] = self.hole();
        c1.rank() == c2.rank()
            || self
                .board()
                .iter()
                .any(|c| c.rank() == c1.rank() || c.rank() == c2.rank())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Parses cards separated by spaces or commas, e.g. `"AS KD 7H"`.
impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Self::new(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    #[test]
    fn hand_validation() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let kd = Card::new(Rank::King, Suit::Diamonds);

        assert_eq!(Hand::new([ah]), Err(HandError::TooFewCards(1)));
        assert_eq!(Hand::new(Vec::new()), Err(HandError::TooFewCards(0)));
        assert_eq!(Hand::new([ah, ah]), Err(HandError::DuplicateCard(ah)));
        assert!(Hand::new([ah, kd]).is_ok());

        let err = "2C 3C 4C 5C 6C 7C 8C 9C".parse::<Hand>().unwrap_err();
        assert_eq!(err, HandError::TooManyCards(8));

        let err = "AS ZZ".parse::<Hand>().unwrap_err();
        assert_eq!(
            err,
            HandError::Parse(ParseCardError::InvalidRank("Z".to_string()))
        );
    }

    #[test]
    fn hand_parts() {
        let hand = "AS, KD 7H 7C 2D".parse::<Hand>().unwrap();
        assert_eq!(hand.cards().len(), 5);
        assert_eq!(
            hand.hole(),
            ["AS".parse::<Card>().unwrap(), "KD".parse::<Card>().unwrap()]
        );
        assert_eq!(hand.board().len(), 3);
        assert_eq!(hand.to_string(), "AS KD 7H 7C 2D");

        let with_board = Hand::with_board(hand.hole(), hand.board()).unwrap();
        assert_eq!(with_board, hand);
    }

    #[test]
    fn hidden_pair() {
        let hidden = |s: &str| s.parse::<Hand>().unwrap().has_hidden_pair();

        // Pocket pair.
        assert!(hidden("7S 7H"));
        assert!(hidden("7S 7H 2C 3D 4S"));
        // Hole card pairs a community card.
        assert!(hidden("AS 7H 2C 7D 4S"));
        assert!(hidden("AS 7H 2C 3D 4S 9C AD"));
        // A board pair is not hidden.
        assert!(!hidden("AS KH 2C 2D 4S"));
        assert!(!hidden("AS KH"));
    }
}
