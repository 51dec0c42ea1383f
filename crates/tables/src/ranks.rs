// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank patterns and rank multisets enumeration in strength order.
//!
//! Ranks are indices from 0 (deuce) to 12 (ace), a pattern has bit `r` set
//! for each rank `r` and a multiset is identified by the product of its
//! ranks primes. Every function returns its hands strongest first.
use ahash::AHashMap;
use anyhow::{Result, bail};
use quintet_cards::PRIMES;

const RANKS: u8 = 13;

/// Ace, deuce, trey, four, five.
const WHEEL: u16 = 0b1_0000_0000_1111;

/// The ten straights patterns from broadway down to the wheel.
pub fn straights() -> Vec<u16> {
    (0..9)
        .rev()
        .map(|low| 0b1_1111 << low)
        .chain([WHEEL])
        .collect()
}

/// All five distinct ranks patterns that are not straights.
pub fn distinct_patterns() -> Vec<u16> {
    let straights = straights();
    combinations(5, 0)
        .into_iter()
        .map(|ranks| ranks.iter().fold(0u16, |m, &r| m | 1 << r))
        .filter(|m| !straights.contains(m))
        .collect()
}

/// Quads rank, then kicker.
pub fn four_of_a_kind() -> Vec<u32> {
    let mut products = Vec::new();
    for quads in (0..RANKS).rev() {
        for kicker in combinations(1, 1 << quads) {
            products.push(prime(quads).pow(4) * product(&kicker));
        }
    }
    products
}

/// Trips rank, then pair rank.
pub fn full_house() -> Vec<u32> {
    let mut products = Vec::new();
    for trips in (0..RANKS).rev() {
        for pair in combinations(1, 1 << trips) {
            products.push(prime(trips).pow(3) * product(&pair).pow(2));
        }
    }
    products
}

/// Trips rank, then the two kickers.
pub fn three_of_a_kind() -> Vec<u32> {
    let mut products = Vec::new();
    for trips in (0..RANKS).rev() {
        for kickers in combinations(2, 1 << trips) {
            products.push(prime(trips).pow(3) * product(&kickers));
        }
    }
    products
}

/// High pair, low pair, then kicker.
pub fn two_pair() -> Vec<u32> {
    let mut products = Vec::new();
    for pairs in combinations(2, 0) {
        let used = (1 << pairs[0]) | (1 << pairs[1]);
        for kicker in combinations(1, used) {
            products.push(product(&pairs).pow(2) * product(&kicker));
        }
    }
    products
}

/// Pair rank, then the three kickers.
pub fn one_pair() -> Vec<u32> {
    let mut products = Vec::new();
    for pair in (0..RANKS).rev() {
        for kickers in combinations(3, 1 << pair) {
            products.push(prime(pair).pow(2) * product(&kickers));
        }
    }
    products
}

/// Fails if two paired hands have the same primes product.
pub fn check_products(paired: &[(u32, u16)]) -> Result<()> {
    let mut seen = AHashMap::with_capacity(paired.len());
    for &(product, value) in paired {
        if let Some(other) = seen.insert(product, value) {
            bail!("Hands {other} and {value} have the same product {product}");
        }
    }
    Ok(())
}

fn prime(rank: u8) -> u32 {
    PRIMES[usize::from(rank)]
}

fn product(ranks: &[u8]) -> u32 {
    ranks.iter().map(|&r| prime(r)).product()
}

/// All k distinct ranks not in `excluded`, each combination sorted high to
/// low and the combinations in descending lexicographic order.
fn combinations(k: usize, excluded: u16) -> Vec<Vec<u8>> {
    fn walk(below: u8, k: usize, excluded: u16, combo: &mut Vec<u8>, out: &mut Vec<Vec<u8>>) {
        if k == 0 {
            out.push(combo.clone());
            return;
        }

        for r in (0..below).rev() {
            if excluded & (1 << r) == 0 {
                combo.push(r);
                walk(r, k - 1, excluded, combo, out);
                combo.pop();
            }
        }
    }

    let mut out = Vec::new();
    walk(RANKS, k, excluded, &mut Vec::with_capacity(k), &mut out);
    out
}
