// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use std::thread;

use super::{Card, Deck, MAX_HAND, for_each_subset};

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The hands are split by their first card, task `t` takes the hands
    /// whose first card position is `t`, `t + num_tasks`, `t + 2 * num_tasks`,
    /// and so on. The closure takes the task identifier (0..num_tasks) and a
    /// slice of cards of length k.
    ///
    /// Panics if k is not 1 <= k <= 7 or num_tasks is zero.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((1..=MAX_HAND).contains(&k), "1 <= k <= 7");
        assert!(num_tasks > 0, "num_tasks > 0");

        let cards = &self.cards;
        if k > cards.len() {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut visit = |hand: &[Card]| f(task_id, hand);
                    for first in (task_id..cards.len()).step_by(num_tasks) {
                        for_each_subset(&cards[first + 1..], &cards[first..=first], k - 1, &mut visit);
                    }
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};
    use std::sync::atomic::{AtomicU64, Ordering};

    fn par_count(deck: &Deck, num_tasks: usize, k: usize) -> u64 {
        let counter = AtomicU64::new(0);
        deck.par_for_each(num_tasks, k, |task_id, hand| {
            assert!(task_id < num_tasks);
            assert_eq!(hand.len(), k);
            counter.fetch_add(1, Ordering::Relaxed);
        });
        counter.load(Ordering::Relaxed)
    }

    #[test]
    fn par_for_each_counts() {
        let deck = Deck::default();
        assert_eq!(par_count(&deck, 1, 2), 1_326);
        assert_eq!(par_count(&deck, 3, 3), 22_100);
        assert_eq!(par_count(&deck, 4, 5), 2_598_960);
        assert_eq!(par_count(&deck, 64, 1), 52);
    }

    #[test]
    fn par_for_each_same_hands() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Spades));

        let mut serial = Vec::new();
        deck.for_each(3, |hand| serial.push(hand.to_owned()));

        let parallel = std::sync::Mutex::new(Vec::new());
        deck.par_for_each(5, 3, |_, hand| parallel.lock().unwrap().push(hand.to_owned()));

        let mut parallel = parallel.into_inner().unwrap();
        parallel.sort_by_key(|h| h.iter().map(Card::id).collect::<Vec<_>>());
        serial.sort_by_key(|h| h.iter().map(Card::id).collect::<Vec<_>>());
        assert_eq!(serial, parallel);
    }
}
