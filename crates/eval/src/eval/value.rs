// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand value type.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use quintet_cards::Card;

use super::{HandRank, best_hand, best_of, category};

/// The value of a hand, a stronger hand compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandValue(u16);

impl HandValue {
    /// Evaluates a 5, 6, or 7 cards hand.
    ///
    /// Panics if the number of cards is not 5 <= n <= 7.
    pub fn eval(cards: &[Card]) -> Self {
        Self(best_of(cards))
    }

    /// Evaluates a 5, 6, or 7 cards hand and returns its best 5 cards.
    ///
    /// Panics if the number of cards is not 5 <= n <= 7.
    pub fn eval_with_best_hand(cards: &[Card]) -> (Self, [Card; 5]) {
        let (value, best) = best_hand(cards);
        (Self(value), best)
    }

    /// The equivalence value from 1 (royal flush) to 7462.
    pub fn value(&self) -> u16 {
        self.0
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        category(self.0)
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower values are stronger.
        other.0.cmp(&self.0)
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<HandValue> for u16 {
    fn from(value: HandValue) -> Self {
        value.0
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.rank(), self.0)
    }
}
