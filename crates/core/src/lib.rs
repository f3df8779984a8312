// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ultimate Hold'em strategy advisor.
//!
//! The [strategy] module maps the player cards at each decision point to a
//! recommended action using a configurable table, the [session] module
//! sequences the cards selected in a hand and the [stats] module keeps the
//! session win and loss counters.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod session;
pub mod stats;
pub mod strategy;
