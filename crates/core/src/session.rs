// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card selection for one hand.
//!
//! A [Session] fills the two hole cards and then the five community cards in
//! the order they are selected and asks the advisor for a recommendation
//! after the 2nd, 5th and 7th card.
use ahash::AHashSet;
use log::info;
use thiserror::Error;

use ultimate_eval::{Card, Deck, Hand, HandCategory};

use crate::strategy::{AdviceError, Advisor, Recommendation};

/// Error returned when a card cannot be selected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The card was already selected in this hand.
    #[error("card {0} already selected")]
    CardInUse(Card),
    /// All seven cards have been selected.
    #[error("all cards have been selected")]
    HandComplete,
    /// The card is not selected.
    #[error("card {0} is not selected")]
    CardNotSelected(Card),
    /// Only the last selected card can be removed.
    #[error("card {0} is not the last selected card")]
    NotLastCard(Card),
    /// The advisor rejected the cards.
    #[error(transparent)]
    Advice(#[from] AdviceError),
}

/// The last decision made in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Waiting for the hole cards.
    Waiting,
    /// The pre-flop decision has been made.
    Initial,
    /// The post-flop decision has been made.
    Flop,
    /// The final decision has been made.
    Final,
}

/// The cards selected in a hand.
#[derive(Debug)]
pub struct Session {
    advisor: Advisor,
    hole: [Option<Card>; 2],
    board: [Option<Card>; 5],
    used: AHashSet<Card>,
    recommendation: Option<Recommendation>,
}

impl Session {
    /// Creates a session that uses the given advisor.
    pub fn new(advisor: Advisor) -> Self {
        Self {
            advisor,
            hole: [None; 2],
            board: [None; 5],
            used: AHashSet::default(),
            recommendation: None,
        }
    }

    /// The advisor used by this session.
    pub fn advisor(&self) -> &Advisor {
        &self.advisor
    }

    /// Selects the next card.
    ///
    /// Returns a recommendation when the card completes the hole cards, the
    /// flop or the board.
    pub fn select(&mut self, card: Card) -> Result<Option<Recommendation>, SessionError> {
        let count = self.used.len();
        if count == self.hole.len() + self.board.len() {
            return Err(SessionError::HandComplete);
        }

        if self.used.contains(&card) {
            return Err(SessionError::CardInUse(card));
        }

        if count < self.hole.len() {
            self.hole[count] = Some(card);
        } else {
            self.board[count - self.hole.len()] = Some(card);
        }
        self.used.insert(card);

        self.advise()
    }

    /// Removes the last selected card.
    ///
    /// Cards are removed in the reverse order they were selected so the board
    /// stays in the order it was dealt. Returns the recommendation for the
    /// remaining cards if they are at a decision point.
    pub fn deselect(&mut self, card: Card) -> Result<Option<Recommendation>, SessionError> {
        if !self.used.contains(&card) {
            return Err(SessionError::CardNotSelected(card));
        }

        let last = self
            .board
            .iter_mut()
            .rev()
            .chain(self.hole.iter_mut().rev())
            .find(|slot| slot.is_some());

        match last {
            Some(slot) if *slot == Some(card) => *slot = None,
            _ => return Err(SessionError::NotLastCard(card)),
        }
        self.used.remove(&card);

        self.advise()
    }

    /// Removes the last selected card if any, see [Session::deselect].
    pub fn undo(&mut self) -> Result<Option<Recommendation>, SessionError> {
        match self.selected().last() {
            Some(&card) => self.deselect(card),
            None => Ok(None),
        }
    }

    fn advise(&mut self) -> Result<Option<Recommendation>, SessionError> {
        self.recommendation = match self.used.len() {
            2 | 5 | 7 => {
                let rec = self.advisor.advise(&self.selected())?;
                info!("{} => {rec}", self.selected_hand());
                Some(rec)
            }
            _ => None,
        };

        Ok(self.recommendation)
    }

    /// The selected cards, hole cards first.
    pub fn selected(&self) -> Vec<Card> {
        self.hole.iter().chain(&self.board).flatten().copied().collect()
    }

    /// The hole card slots.
    pub fn hole(&self) -> &[Option<Card>; 2] {
        &self.hole
    }

    /// The community card slots.
    pub fn board(&self) -> &[Option<Card>; 5] {
        &self.board
    }

    /// The recommendation for the last decision if the next card has not
    /// been selected yet.
    pub fn recommendation(&self) -> Option<Recommendation> {
        self.recommendation
    }

    /// The last decision made in this hand.
    pub fn stage(&self) -> Stage {
        match self.used.len() {
            0..=1 => Stage::Waiting,
            2..=4 => Stage::Initial,
            5..=6 => Stage::Flop,
            _ => Stage::Final,
        }
    }

    /// The best hand with the selected cards once there are at least two.
    pub fn current_category(&self) -> Option<HandCategory> {
        Hand::new(self.selected()).ok().map(|hand| hand.category())
    }

    /// Checks if all seven cards have been selected.
    pub fn is_complete(&self) -> bool {
        self.stage() == Stage::Final
    }

    /// The cards that can still be selected.
    pub fn available(&self) -> impl Iterator<Item = Card> + '_ {
        Deck::default()
            .into_iter()
            .filter(|card| !self.used.contains(card))
    }

    /// Clears the selected cards.
    pub fn reset(&mut self) {
        self.hole = [None; 2];
        self.board = [None; 5];
        self.used.clear();
        self.recommendation = None;
    }

    fn selected_hand(&self) -> String {
        self.selected()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Advisor::default())
    }
}
