// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards out of six or seven.
use quintet_cards::Card;

use super::five::eval_5cards;

/// Creates the table of all 5 elements subsets of 0..n in lexicographic order.
const fn make_subsets<const M: usize>(n: usize) -> [[usize; 5]; M] {
    let mut out = [[0usize; 5]; M];
    let mut idx = [0, 1, 2, 3, 4];
    let mut m = 0;

    loop {
        out[m] = idx;
        m += 1;

        let mut i = 5;
        while i > 0 && idx[i - 1] == n - 5 + i - 1 {
            i -= 1;
        }

        if i == 0 {
            break;
        }

        idx[i - 1] += 1;
        while i < 5 {
            idx[i] = idx[i - 1] + 1;
            i += 1;
        }
    }

    assert!(m == M, "wrong number of subsets");
    out
}

/// The 21 ways to pick 5 cards out of 7.
pub const PERM7: [[usize; 5]; 21] = make_subsets(7);

/// The 6 ways to pick 5 cards out of 6.
const PERM6: [[usize; 5]; 6] = make_subsets(6);

const PERM5: [[usize; 5]; 1] = make_subsets(5);

/// Evaluates a 7 cards hand as the best value of its 21 five cards subsets.
pub fn best_of_seven(cards: &[Card; 7]) -> u16 {
    min_over(cards, &PERM7).0
}

/// Evaluates a 5, 6, or 7 cards hand.
///
/// Panics if the number of cards is not 5 <= n <= 7.
pub fn best_of(cards: &[Card]) -> u16 {
    min_over(cards, subsets(cards.len())).0
}

/// Evaluates a 5, 6, or 7 cards hand and returns the best five cards.
///
/// Panics if the number of cards is not 5 <= n <= 7.
pub fn best_hand(cards: &[Card]) -> (u16, [Card; 5]) {
    let (value, [i1, i2, i3, i4, i5]) = min_over(cards, subsets(cards.len()));
    (value, [cards[i1], cards[i2], cards[i3], cards[i4], cards[i5]])
}

fn subsets(n: usize) -> &'static [[usize; 5]] {
    match n {
        5 => &PERM5,
        6 => &PERM6,
        7 => &PERM7,
        _ => panic!("Expected 5 to 7 cards, got {n}"),
    }
}

/// Returns the best value and its subset, stops early on a royal flush.
#[inline]
fn min_over(cards: &[Card], subsets: &[[usize; 5]]) -> (u16, [usize; 5]) {
    let mut best = (u16::MAX, subsets[0]);

    for &p in subsets {
        let value = eval_5cards(cards[p[0]], cards[p[1]], cards[p[2]], cards[p[3]], cards[p[4]]);
        if value < best.0 {
            best = (value, p);
            if value == 1 {
                break;
            }
        }
    }

    best
}
