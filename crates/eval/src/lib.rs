// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ultimate Hold'em hand classifier.
//!
//! Classifies hands of 2 to 7 cards into one of the ten poker hand
//! categories, including the wheel straight where the ace plays as a one.
//!
//! To use the classifier create a [Hand] with the hole cards first and the
//! community cards after, and call [classify]:
//!
//! ```
//! # use ultimate_eval::*;
//! let hand = "AS KS QS JS TS 2D 3C".parse::<Hand>().unwrap();
//! assert_eq!(classify(&hand), HandCategory::RoyalFlush);
//!
//! let hand = "AS 2H 3D 4C 5S".parse::<Hand>().unwrap();
//! assert_eq!(hand.category(), HandCategory::Straight);
//! assert_eq!(hand.straight_top(), Some(Rank::Five));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Counts, HandCategory, RankMask, classify};

pub mod hand;
pub use hand::{Hand, HandError};

// Reexport cards types.
pub use ultimate_cards::{Card, Deck, ParseCardError, Rank, Suit};
