// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit counters shared by the classifier and the strategy rules.
use ultimate_cards::{Card, Rank, Suit};

/// The distinct ranks in a set of cards.
///
/// Bit `v` is set for a rank with value `v` (2 for a deuce up to 14 for an
/// ace), an ace also sets bit 1 so that the wheel A-2-3-4-5 is a run of five
/// consecutive bits like any other straight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankMask(u16);

impl RankMask {
    const ACE_LOW: u16 = 1 << 1;

    /// Creates a mask with the ranks of the given cards.
    pub fn from_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        let mut mask = Self::default();
        for card in cards {
            mask.insert(card.rank());
        }
        mask
    }

    /// Adds a rank to this mask.
    pub fn insert(&mut self, rank: Rank) {
        self.0 |= 1 << rank.value();
        if rank == Rank::Ace {
            self.0 |= Self::ACE_LOW;
        }
    }

    /// Checks if the mask contains a rank.
    pub fn contains(&self, rank: Rank) -> bool {
        self.0 & (1 << rank.value()) != 0
    }

    /// The number of distinct ranks.
    pub fn len(&self) -> usize {
        (self.0 & !Self::ACE_LOW).count_ones() as usize
    }

    /// Checks if the mask has no ranks.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The top card of the highest straight in this mask.
    ///
    /// The wheel A-2-3-4-5 returns [Rank::Five].
    pub fn straight_top(&self) -> Option<Rank> {
        (5..=Rank::Ace.value())
            .rev()
            .find(|top| self.has_run(top - 4, 5))
            .and_then(Rank::from_value)
    }

    /// The lowest rank of the highest run of four or more consecutive ranks.
    ///
    /// This is an open ended draw or better, runs that use the ace as a one
    /// are not considered.
    pub fn straight_draw(&self) -> Option<Rank> {
        (Rank::Deuce.value()..=Rank::Jack.value())
            .rev()
            .find(|&low| self.has_run(low, 4))
            .and_then(Rank::from_value)
    }

    fn has_run(&self, low: u8, len: u8) -> bool {
        let run = ((1u16 << len) - 1) << low;
        self.0 & run == run
    }
}

/// Per rank and per suit counters for a set of cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    ranks: [u8; Rank::COUNT],
    suits: [u8; Suit::COUNT],
    len: u8,
}

impl Counts {
    /// Count the ranks and suits of the given cards.
    pub fn new(cards: &[Card]) -> Self {
        let mut counts = Self::default();
        for card in cards {
            counts.ranks[card.rank() as usize] += 1;
            counts.suits[card.suit().index()] += 1;
            counts.len += 1;
        }
        counts
    }

    /// The number of cards with the given rank.
    pub fn rank(&self, rank: Rank) -> u8 {
        self.ranks[rank as usize]
    }

    /// The number of cards with the given suit.
    pub fn suit(&self, suit: Suit) -> u8 {
        self.suits[suit.index()]
    }

    /// The distinct ranks.
    pub fn rank_mask(&self) -> RankMask {
        let mut mask = RankMask::default();
        for rank in Rank::ranks().filter(|&r| self.rank(r) > 0) {
            mask.insert(rank);
        }
        mask
    }

    /// The highest rank in the cards.
    pub fn high_rank(&self) -> Option<Rank> {
        Rank::ranks().rev().find(|&r| self.rank(r) > 0)
    }

    /// The highest rank that appears at least `n` times.
    pub fn highest_with(&self, n: u8) -> Option<Rank> {
        Rank::ranks().rev().find(|&r| self.rank(r) >= n)
    }

    /// Checks if any rank appears at least `n` times.
    pub fn has_rank_count(&self, n: u8) -> bool {
        self.ranks.iter().any(|&c| c >= n)
    }

    /// The number of distinct ranks that appear at least twice.
    pub fn pairs(&self) -> usize {
        self.ranks.iter().filter(|&&c| c >= 2).count()
    }

    /// The suit with most cards and its count, ties go to the last suit.
    pub fn longest_suit(&self) -> (Suit, u8) {
        Suit::suits()
            .map(|s| (s, self.suit(s)))
            .max_by_key(|&(_, n)| n)
            .unwrap_or((Suit::Spades, 0))
    }

    /// The suit with five or more cards if any.
    pub fn flush_suit(&self) -> Option<Suit> {
        Suit::suits().find(|&s| self.suit(s) >= 5)
    }

    /// Checks if four or more cards share a suit.
    pub fn has_flush_draw(&self) -> bool {
        self.longest_suit().1 >= 4
    }

    /// Checks if all the cards share a suit.
    pub fn is_suited(&self) -> bool {
        self.len > 0 && self.longest_suit().1 == self.len
    }
}
