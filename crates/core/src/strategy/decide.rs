// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Decision rules for the three streets.
use log::debug;

use ultimate_eval::{Card, Counts, Hand, HandError, Rank};

use super::{
    FinalAction, FinalDecision, PostFlopAction, PreFlopAction,
    table::{FinalTable, PostFlopTable, PreFlopTable},
};

/// Decides the pre-flop action given the player hole cards.
///
/// Pocket pairs follow the pair tiers, an ace always raises, king, queen and
/// jack high hands raise when the kicker reaches the suited or offsuit
/// threshold, everything else checks.
pub fn decide_pre_flop(table: &PreFlopTable, hole: [Card; 2]) -> Result<PreFlopAction, HandError> {
    Hand::new(hole)?;

    let [c1, c2] = hole;
    let (high, low) = if c1.rank() >= c2.rank() {
        (c1.rank(), c2.rank())
    } else {
        (c2.rank(), c1.rank())
    };

    if high == low {
        debug!("Pocket pair {c1} {c2}");
        return Ok(table
            .pair_bet(high)
            .map_or(PreFlopAction::Check, PreFlopAction::Raise));
    }

    if high == Rank::Ace {
        debug!("Ace high {c1} {c2}");
        return Ok(PreFlopAction::Raise(table.ace));
    }

    if let Some(rule) = table.high_card(high) {
        let suited = c1.suit() == c2.suit();
        let min_kicker = if suited { rule.suited } else { rule.offsuit };
        if min_kicker.is_some_and(|min| low >= min) {
            debug!("{high} high with kicker {low} suited={suited}");
            return Ok(PreFlopAction::Raise(rule.bet));
        }
    }

    Ok(PreFlopAction::Check)
}

/// Decides the post-flop action given the hole cards and the flop.
pub fn decide_post_flop(
    table: &PostFlopTable,
    hole: [Card; 2],
    board: [Card; 3],
) -> Result<PostFlopAction, HandError> {
    let hand = Hand::with_board(hole, &board)?;
    let counts = hand.counts();
    let board_counts = Counts::new(&board);

    if let Some(min) = table.min_category {
        let category = hand.category();
        if category >= min {
            debug!("{category} on {hand}");
            return Ok(PostFlopAction::Raise);
        }
    }

    if counts.has_rank_count(3) {
        debug!("Three of a kind on {hand}");
        return Ok(PostFlopAction::Raise);
    }

    let [c1, c2] = hole;
    let best_hole = c1.rank().max(c2.rank());
    let suited_board = board_counts.is_suited();
    let flush_draw = counts.has_flush_draw();

    if hand.has_hidden_pair() {
        // Small pocket pair under a higher board pair.
        let outranked = c1.rank() == c2.rank()
            && table.small_pair_max.is_some_and(|max| c1.rank() <= max)
            && board_counts
                .highest_with(2)
                .is_some_and(|pair| pair > c1.rank());

        // The suited board beats a pair without a flush draw or a high card.
        let flush_threat = table.suited_board_guard
            && suited_board
            && !flush_draw
            && board_counts.high_rank().is_some_and(|high| best_hole < high);

        if !outranked && !flush_threat {
            debug!("Hidden pair on {hand}");
            return Ok(PostFlopAction::Raise);
        }

        debug!("Hidden pair on {hand} outranked={outranked} flush_threat={flush_threat}");
    }

    let kicker = table.paired_board_kicker.is_some_and(|k| best_hole >= k);
    if kicker && board_counts.pairs() > 0 {
        debug!("Paired board with {best_hole} kicker on {hand}");
        return Ok(PostFlopAction::Raise);
    }

    let open_draw = match (table.min_draw_low, counts.rank_mask().straight_draw()) {
        (Some(min_low), Some(low)) => low >= min_low,
        _ => false,
    };
    if open_draw && (!suited_board || flush_draw) {
        debug!("Open straight draw on {hand}");
        return Ok(PostFlopAction::Raise);
    }

    if table.flush_draw && flush_draw {
        debug!("Flush draw on {hand}");
        return Ok(PostFlopAction::Raise);
    }

    Ok(PostFlopAction::Check)
}

/// Decides the final action given the hole cards and the full board.
///
/// The decision includes the category of the best hand made with all seven
/// cards for display.
pub fn decide_final(
    table: &FinalTable,
    hole: [Card; 2],
    board: [Card; 5],
) -> Result<FinalDecision, HandError> {
    let hand = Hand::with_board(hole, &board)?;
    let category = hand.category();
    let board_counts = Counts::new(&board);

    let decision = |action| Ok(FinalDecision { action, category });

    if table.min_category.is_some_and(|min| category >= min) {
        debug!("{category} on {hand}");
        return decision(FinalAction::Raise);
    }

    if table.board_made_hand
        && (board_counts.flush_suit().is_some() || board_counts.rank_mask().straight_top().is_some())
    {
        debug!("Playing the board on {hand}");
        return decision(FinalAction::Raise);
    }

    if hand.has_hidden_pair() {
        debug!("Hidden pair on {hand}");
        return decision(FinalAction::Raise);
    }

    let [c1, c2] = hole;
    let best_hole = c1.rank().max(c2.rank());
    let kicker = table.paired_board_kicker.is_some_and(|k| best_hole >= k);
    if kicker && board_counts.pairs() > 0 {
        debug!("Paired board with {best_hole} kicker on {hand}");
        return decision(FinalAction::Raise);
    }

    decision(FinalAction::Fold)
}
