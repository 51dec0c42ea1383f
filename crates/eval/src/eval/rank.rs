// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive};

use quintet_tables::values;

/// The category of a hand, a stronger category compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pair, straight or flush.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence, ace can play low.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
}

/// Returns the category of an equivalence value in 1..=7462.
#[inline]
pub fn category(value: u16) -> HandRank {
    if value >= values::HIGH_CARD {
        HandRank::HighCard
    } else if value >= values::ONE_PAIR {
        HandRank::OnePair
    } else if value >= values::TWO_PAIR {
        HandRank::TwoPair
    } else if value >= values::THREE_OF_A_KIND {
        HandRank::ThreeOfAKind
    } else if value >= values::STRAIGHT {
        HandRank::Straight
    } else if value >= values::FLUSH {
        HandRank::Flush
    } else if value >= values::FULL_HOUSE {
        HandRank::FullHouse
    } else if value >= values::FOUR_OF_A_KIND {
        HandRank::FourOfAKind
    } else {
        HandRank::StraightFlush
    }
}

impl HandRank {
    /// Returns all ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The equivalence values of this category.
    pub fn values(&self) -> RangeInclusive<u16> {
        match self {
            HandRank::StraightFlush => values::STRAIGHT_FLUSH..=values::FOUR_OF_A_KIND - 1,
            HandRank::FourOfAKind => values::FOUR_OF_A_KIND..=values::FULL_HOUSE - 1,
            HandRank::FullHouse => values::FULL_HOUSE..=values::FLUSH - 1,
            HandRank::Flush => values::FLUSH..=values::STRAIGHT - 1,
            HandRank::Straight => values::STRAIGHT..=values::THREE_OF_A_KIND - 1,
            HandRank::ThreeOfAKind => values::THREE_OF_A_KIND..=values::TWO_PAIR - 1,
            HandRank::TwoPair => values::TWO_PAIR..=values::ONE_PAIR - 1,
            HandRank::OnePair => values::ONE_PAIR..=values::HIGH_CARD - 1,
            HandRank::HighCard => values::HIGH_CARD..=values::WORST,
        }
    }

    /// Number of 5 cards hands in this category.
    pub fn five_card_hands(&self) -> u32 {
        match self {
            HandRank::StraightFlush => 40,
            HandRank::FourOfAKind => 624,
            HandRank::FullHouse => 3_744,
            HandRank::Flush => 5_108,
            HandRank::Straight => 10_200,
            HandRank::ThreeOfAKind => 54_912,
            HandRank::TwoPair => 123_552,
            HandRank::OnePair => 1_098_240,
            HandRank::HighCard => 1_302_540,
        }
    }

    /// Number of 7 cards hands whose best 5 cards are in this category.
    pub fn seven_card_hands(&self) -> u32 {
        match self {
            HandRank::StraightFlush => 41_584,
            HandRank::FourOfAKind => 224_848,
            HandRank::FullHouse => 3_473_184,
            HandRank::Flush => 4_047_644,
            HandRank::Straight => 6_180_020,
            HandRank::ThreeOfAKind => 6_461_620,
            HandRank::TwoPair => 31_433_400,
            HandRank::OnePair => 58_627_800,
            HandRank::HighCard => 23_294_460,
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{label}")
    }
}
