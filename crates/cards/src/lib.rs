// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Quintet cards types.
//!
//! This crate defines the packed [Card] encoding consumed by the evaluator:
//!
//! ```
//! # use quintet_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.rank(), Rank::Ace);
//! assert_eq!(ah.to_string(), "Ah");
//!
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(kd.id(), 0x08004d25);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating hands:
//!
//! ```
//! # use quintet_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(3, |hand| {
//!     assert_eq!(hand.len(), 3);
//!     counter += 1;
//! });
//! assert_eq!(counter, 22_100);
//! ```
//!
//! The **`parallel`** feature enables [Deck::par_for_each] that splits the
//! iteration across a given number of threads, the closure receives the task
//! id that can be used to index per task data and avoid contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use quintet_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 5, |_task_id, hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 2_598_960);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, PRIMES, Rank, Suit, format_hand, parse_cards};

mod deck;
pub use deck::Deck;
