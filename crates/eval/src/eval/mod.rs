// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classifier.
//!
//! The classifier maps 2 to 7 cards to the best [HandCategory] they can form,
//! it only ranks categories and does not compare kickers between hands.
//!
//! The [Counts] and [RankMask] types are the fixed size rank and suit counters
//! the classifier is built on, they are also used by the strategy rules to
//! detect paired boards, flush draws and open ended straight draws.

mod category;
pub use category::{HandCategory, classify};

mod counts;
pub use counts::{Counts, RankMask};
