// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Packed card encoding.
use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Primes used to encode a card rank, from deuce to ace.
///
/// The product of the primes of five cards identifies the hand rank multiset
/// independently of the cards order.
pub const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// A Poker card.
///
/// A card is a single 32 bits word with the following format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxpppppp|
///   +--------+--------+--------+--------+
///   p = prime number of rank (deuce=2,trey=3,four=5,five=7,...,ace=41)
///   r = rank of card (deuce=2,trey=3,four=4,five=5,...,ace=14)
///   cdhs = suit of card, exactly one bit set
///   b = bit turned on depending on rank of card (deuce=bit 16, ace=bit 28)
/// ```
///
/// For example the five of hearts is `0x00082507` and the king of diamonds is
/// `0x08004d25`. The evaluator works directly on this word: it ANDs the suit
/// nibbles, ORs the rank bits, and multiplies the primes of a hand.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u32);

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u32, suit as u32);
        Self(PRIMES[(rank - 2) as usize] | (rank << 8) | (suit << 12) | (1 << (rank + 14)))
    }

    /// The packed card word.
    #[inline]
    pub const fn id(&self) -> u32 {
        self.0
    }

    /// The rank prime, the low byte of the word.
    #[inline]
    pub const fn prime(&self) -> u32 {
        self.0 & 0xff
    }

    /// The rank value from 2 (deuce) to 14 (ace).
    #[inline]
    pub const fn rank_value(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// The one-hot suit nibble.
    #[inline]
    pub const fn suit_bits(&self) -> u8 {
        ((self.0 >> 12) & 0xf) as u8
    }

    /// The 13 bits rank pattern with only this card rank bit set.
    #[inline]
    pub const fn rank_bit(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::from_value(self.rank_value())
            .unwrap_or_else(|| panic!("Invalid rank 0x{:x}", self.0))
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => panic!("Invalid suit 0x{:x}", self.0),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{} 0x{:08x})", self.rank(), self.suit(), self.0)
    }
}

impl FromStr for Card {
    type Err = anyhow::Error;

    /// Parses a two characters card like `As`, `Td` or `2c`, case insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        let (Some(r), Some(u), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("Invalid card {s:?}, expected rank and suit like 'As'");
        };

        let rank = Rank::ranks()
            .find(|rank| rank.to_char() == r.to_ascii_uppercase())
            .ok_or_else(|| anyhow!("Invalid rank {r:?} in card {s:?}"))?;

        let suit = Suit::suits()
            .find(|suit| suit.to_char() == u.to_ascii_lowercase())
            .ok_or_else(|| anyhow!("Invalid suit {u:?} in card {s:?}"))?;

        Ok(Card::new(rank, suit))
    }
}

/// Parses a whitespace separated list of cards like `"As Kd 7h"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split_whitespace().map(|c| c.parse::<Card>()).collect()
}

/// Formats a hand as space separated cards, e.g. `Ac 4d 7c Jh 2s`.
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank for a value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        Self::ALL.get(usize::from(value).checked_sub(2)?).copied()
    }

    fn to_char(self) -> char {
        b"23456789TJQKA"[self as usize - 2] as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Card suit, the discriminant is the suit bit in the card nibble.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
