// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Quintet Poker hand evaluator.
//!
//! Constant time evaluator for 5 cards hands, and 6 or 7 cards hands by
//! taking the best 5 cards subset. This evaluator is a port of the
//! [Cactus Kev's][kevlink] poker evaluator with Paul Senzee's perfect hash,
//! the lookup tables are generated at build time by `quintet-tables`.
//!
//! Every hand maps to one of 7462 equivalence values, 1 is a royal flush and
//! 7462 is 7-5-4-3-2 unsuited:
//!
//! ```
//! # use quintet_eval::*;
//! let royal = parse_cards("As Ks Qs Js Ts").unwrap();
//! assert_eq!(classify(&royal.try_into().unwrap()), 1);
//!
//! let worst = parse_cards("7c 5d 4h 3s 2c").unwrap();
//! assert_eq!(category(classify(&worst.try_into().unwrap())), HandRank::HighCard);
//! ```
//!
//! [HandValue] wraps a value with an ordering where the stronger hand is
//! greater:
//!
//! ```
//! # use quintet_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]);
//! let v2 = HandValue::eval(&cards[5..]);
//! assert!(v2 > v1);
//! assert_eq!(v2.rank(), HandRank::StraightFlush);
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{
    HandRank, HandValue, PERM7, best_hand, best_of, best_of_seven, category, classify, eval_5cards,
};

// Reexport cards types.
pub use quintet_cards::{Card, Deck, Rank, Suit, format_hand, parse_cards};
