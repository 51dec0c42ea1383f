// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluation of a 5 cards hand goes through three lookups:
//!
//! 1. if all cards have the same suit the OR of the rank bits indexes the
//!    flushes table (straight flushes and flushes);
//! 2. otherwise the same rank pattern indexes the unique ranks table
//!    (straights and high cards), a zero means the hand has a repeated rank;
//! 3. the product of the cards primes goes through the perfect hash into the
//!    paired hands table (pairs up to four of a kind).
//!
//! 6 and 7 cards hands are evaluated by taking the minimum value over all
//! their 5 cards subsets, [HandValue::eval_with_best_hand] also returns the
//! subset, useful for UIs to show a winning hand.
mod five;
mod rank;
mod seven;
mod tables;
mod value;

pub use five::{classify, eval_5cards};
pub use rank::{HandRank, category};
pub use seven::{PERM7, best_hand, best_of, best_of_seven};
pub use value::HandValue;
