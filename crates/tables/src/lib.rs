// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Quintet evaluator tables.
//!
//! Builds the four lookup tables used by the [Cactus Kev's][kevlink] five
//! cards evaluator and the perfect hash that indexes the paired hands table
//! (courtesy of Paul Senzee):
//!
//! - `flushes`: equivalence value of a suited hand indexed by its 13 bits rank
//!   pattern (straight flushes and flushes).
//! - `unique5`: equivalence value of an unsuited hand with five distinct ranks
//!   (straights and high cards), zero for all other patterns.
//! - `hash_values`: equivalence value of a hand with a repeated rank, indexed
//!   by [find] applied to the product of the cards primes.
//! - `hash_adjust`: the per bucket adjustments that make [find] collision free
//!   over the 4888 paired products.
//!
//! The tables are built once by the evaluator build script and embedded as
//! constants, see [Tables::write_rust].
//!
//! ```
//! # use quintet_tables::{Tables, find};
//! let tables = Tables::build().unwrap();
//! // Four aces and a king.
//! let product = 41 * 41 * 41 * 41 * 37;
//! assert_eq!(tables.hash_values[find(product, &tables.hash_adjust)], 11);
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use log::{debug, info};

mod codegen;
mod hash;
mod ranks;
pub mod values;

pub use hash::{HASH_ADJUST_SIZE, HASH_TABLE_SIZE, find, mix};

/// Number of 13 bits rank patterns.
pub const RANK_PATTERNS: usize = 1 << 13;

/// The evaluator lookup tables.
#[derive(Clone)]
pub struct Tables {
    /// Flushes and straight flushes by rank pattern.
    pub flushes: [u16; RANK_PATTERNS],
    /// Straights and high cards by rank pattern.
    pub unique5: [u16; RANK_PATTERNS],
    /// Paired hands by perfect hash index.
    pub hash_values: [u16; HASH_TABLE_SIZE],
    /// Perfect hash adjustments by bucket.
    pub hash_adjust: [u16; HASH_ADJUST_SIZE],
}

impl Tables {
    /// Derives the hands strength order and builds all the tables.
    ///
    /// Fails if the hands enumeration doesn't fill the category value ranges
    /// or if the perfect hash search cannot place all the paired hands.
    pub fn build() -> Result<Tables> {
        let mut flushes = [0u16; RANK_PATTERNS];
        let mut unique5 = [0u16; RANK_PATTERNS];

        let straights = ranks::straights();
        let highs = ranks::distinct_patterns();

        assign(values::STRAIGHT_FLUSH, values::FOUR_OF_A_KIND, &straights, |m, v| {
            flushes[m as usize] = v
        })?;
        assign(values::STRAIGHT, values::THREE_OF_A_KIND, &straights, |m, v| {
            unique5[m as usize] = v
        })?;
        assign(values::FLUSH, values::STRAIGHT, &highs, |m, v| {
            flushes[m as usize] = v
        })?;
        assign(values::HIGH_CARD, values::WORST + 1, &highs, |m, v| {
            unique5[m as usize] = v
        })?;

        debug!(
            "{} straights and {} distinct rank patterns",
            straights.len(),
            highs.len()
        );

        let mut paired = Vec::with_capacity(values::PAIRED_HANDS);
        for (first, end, products) in [
            (values::FOUR_OF_A_KIND, values::FULL_HOUSE, ranks::four_of_a_kind()),
            (values::FULL_HOUSE, values::FLUSH, ranks::full_house()),
            (values::THREE_OF_A_KIND, values::TWO_PAIR, ranks::three_of_a_kind()),
            (values::TWO_PAIR, values::ONE_PAIR, ranks::two_pair()),
            (values::ONE_PAIR, values::HIGH_CARD, ranks::one_pair()),
        ] {
            assign(first, end, &products, |p, v| paired.push((p, v)))?;
        }

        ranks::check_products(&paired)?;

        let (hash_adjust, hash_values) = hash::search(&paired)?;

        info!(
            "Built evaluator tables: {} flush, {} unique, {} paired hands",
            flushes.iter().filter(|&&v| v != 0).count(),
            unique5.iter().filter(|&&v| v != 0).count(),
            paired.len()
        );

        Ok(Tables {
            flushes,
            unique5,
            hash_values,
            hash_adjust,
        })
    }
}

/// Assigns the values `first..end` to `keys` in order.
fn assign<K, F>(first: u16, end: u16, keys: &[K], mut set: F) -> Result<()>
where
    K: Copy,
    F: FnMut(K, u16),
{
    let expected = usize::from(end - first);
    if keys.len() != expected {
        bail!(
            "Category starting at {first} has {} hands, expected {expected}",
            keys.len()
        );
    }

    for (value, &key) in (first..end).zip(keys) {
        set(key, value);
    }

    Ok(())
}
