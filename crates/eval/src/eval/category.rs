// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and the classifier.
use serde::{Deserialize, Serialize};
use std::fmt;

use super::counts::{Counts, RankMask};
use crate::{Card, Hand, Rank};

/// A poker hand category, from the lowest to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pair.
    HighCard,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// Returns all categories from the lowest to the highest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The hand name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }

    /// Classifies the best hand that can be made with the given cards.
    pub(crate) fn of_cards(cards: &[Card]) -> HandCategory {
        let counts = Counts::new(cards);
        let flush_suit = counts.flush_suit();

        if let Some(suit) = flush_suit {
            let suited = RankMask::from_cards(cards.iter().filter(|c| c.suit() == suit));
            match suited.straight_top() {
                Some(Rank::Ace) => return HandCategory::RoyalFlush,
                Some(_) => return HandCategory::StraightFlush,
                None => {}
            }
        }

        if counts.has_rank_count(4) {
            HandCategory::FourOfAKind
        } else if counts.has_rank_count(3) && counts.pairs() >= 2 {
            HandCategory::FullHouse
        } else if flush_suit.is_some() {
            HandCategory::Flush
        } else if counts.rank_mask().straight_top().is_some() {
            HandCategory::Straight
        } else if counts.has_rank_count(3) {
            HandCategory::ThreeOfAKind
        } else {
            match counts.pairs() {
                0 => HandCategory::HighCard,
                1 => HandCategory::Pair,
                _ => HandCategory::TwoPair,
            }
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies the best hand category formed by the hand cards.
pub fn classify(hand: &Hand) -> HandCategory {
    HandCategory::of_cards(hand.cards())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;
    use ahash::AHashMap;

    fn classify_str(s: &str) -> HandCategory {
        classify(&s.parse::<Hand>().unwrap())
    }

    #[test]
    fn categories() {
        use HandCategory::*;

        assert_eq!(classify_str("TH JH QH KH AH"), RoyalFlush);
        assert_eq!(classify_str("2C 7D TH JH QH KH AH"), RoyalFlush);
        assert_eq!(classify_str("9H TH JH QH KH"), StraightFlush);
        assert_eq!(classify_str("AD 2D 3D 4D 5D"), StraightFlush);
        assert_eq!(classify_str("7S 7H 7D 7C 2S"), FourOfAKind);
        assert_eq!(classify_str("7S 7H 7D 2C 2S"), FullHouse);
        assert_eq!(classify_str("7S 7H 7D 2C 2S 2H"), FullHouse);
        assert_eq!(classify_str("2S 7S 9S JS KS"), Flush);
        assert_eq!(classify_str("6S 7D 8H 9C TS"), Straight);
        assert_eq!(classify_str("AS 2H 3D 4C 5S"), Straight);
        assert_eq!(classify_str("7S 7H 7D 2C 9S"), ThreeOfAKind);
        assert_eq!(classify_str("7S 7H 2D 2C 9S"), TwoPair);
        assert_eq!(classify_str("7S 7H 2D 2C 9S 9D"), TwoPair);
        assert_eq!(classify_str("7S 7H 2D 3C 9S"), Pair);
        assert_eq!(classify_str("7S 8H 2D 3C 9S"), HighCard);
    }

    #[test]
    fn flush_beats_straight() {
        assert_eq!(classify_str("6S 7D 8H 9C TS 2S 4S"), HandCategory::Straight);
        assert_eq!(classify_str("6S 7D 8H 9S TS 2S 4S"), HandCategory::Flush);
    }

    #[test]
    fn straight_flush_needs_suited_run() {
        // A flush and a straight that do not share the same cards.
        assert_eq!(classify_str("5H 6H 7H 8H 9C KH"), HandCategory::Flush);
        assert_eq!(classify_str("5H 6H 7H 8H 9C 4S"), HandCategory::Straight);
    }

    #[test]
    fn wheel() {
        let hand = "AS 2H 3D 4C 5S".parse::<Hand>().unwrap();
        assert_eq!(classify(&hand), HandCategory::Straight);
        assert_eq!(hand.straight_top(), Some(Rank::Five));
    }

    #[test]
    fn category_order() {
        let categories = HandCategory::categories().collect::<Vec<_>>();
        assert_eq!(categories.len(), 10);
        assert!(categories.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(HandCategory::ThreeOfAKind.to_string(), "Three of a Kind");
    }

    #[test]
    fn order_independent() {
        let hands = [
            "TH JH QH KH AH 2C 7D",
            "AS 2H 3D 4C 5S KD",
            "7S 7H 7D 2C 2S",
            "2S 7S 9S JS KS 3H",
            "7S 7H 2D 3C 9S",
        ];

        for hand in hands {
            let cards = hand.split_whitespace().collect::<Vec<_>>();
            let expected = classify_str(hand);

            let reversed = cards.iter().rev().copied().collect::<Vec<_>>().join(" ");
            assert_eq!(classify_str(&reversed), expected);

            for shift in 1..cards.len() {
                let mut rotated = cards.clone();
                rotated.rotate_left(shift);
                assert_eq!(classify_str(&rotated.join(" ")), expected);
            }
        }
    }

    #[test]
    fn two_cards_hands() {
        Deck::default().for_each(2, |cards| {
            let hand = Hand::new(cards.iter().copied()).unwrap();
            let category = classify(&hand);
            if cards[0].rank() == cards[1].rank() {
                assert_eq!(category, HandCategory::Pair);
            } else {
                assert_eq!(category, HandCategory::HighCard);
            }
        });
    }

    #[test]
    fn five_cards_distribution() {
        let mut counts = AHashMap::default();
        Deck::default().for_each(5, |cards| {
            *counts.entry(HandCategory::of_cards(cards)).or_insert(0u32) += 1;
        });

        assert_eq!(counts[&HandCategory::RoyalFlush], 4);
        assert_eq!(counts[&HandCategory::StraightFlush], 36);
        assert_eq!(counts[&HandCategory::FourOfAKind], 624);
        assert_eq!(counts[&HandCategory::FullHouse], 3_744);
        assert_eq!(counts[&HandCategory::Flush], 5_108);
        assert_eq!(counts[&HandCategory::Straight], 10_200);
        assert_eq!(counts[&HandCategory::ThreeOfAKind], 54_912);
        assert_eq!(counts[&HandCategory::TwoPair], 123_552);
        assert_eq!(counts[&HandCategory::Pair], 1_098_240);
        assert_eq!(counts[&HandCategory::HighCard], 1_302_540);
    }
}
