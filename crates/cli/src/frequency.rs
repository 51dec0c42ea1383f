// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories frequencies.
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use quintet_eval::HandRank;

const RANKS: usize = 9;

/// Number of hands per category.
#[derive(Debug, Default)]
pub struct Frequencies {
    counts: [u64; RANKS],
}

impl Frequencies {
    /// Counts a hand.
    pub fn add(&mut self, rank: HandRank) {
        self.counts[rank as usize] += 1;
    }

    /// Total number of hands.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Prints the counts from the strongest category, with a note for the
    /// counts that differ from `expected`.
    pub fn print(&self, elapsed: Duration, expected: Option<fn(&HandRank) -> u32>) {
        for rank in HandRank::ranks().rev() {
            let count = self.counts[rank as usize];
            print!("{:>15}: {count:>9}", rank.to_string());

            match expected.map(|f| u64::from(f(&rank))) {
                Some(e) if e != count => println!(" (expected {e})"),
                _ => println!(),
            }
        }

        let secs = elapsed.as_secs_f64();
        println!();
        println!("Total hands: {}", self.total());
        println!("Elapsed:     {:.3}s", secs);
        if secs > 0.0 {
            println!("Hands/sec:   {:.0}", self.total() as f64 / secs);
        }
    }
}

/// Per task counters for parallel evaluation.
pub struct Shared {
    tasks: Vec<[AtomicU64; RANKS]>,
}

impl Shared {
    /// Creates counters for `num_tasks` tasks.
    pub fn new(num_tasks: usize) -> Self {
        let tasks = (0..num_tasks)
            .map(|_| std::array::from_fn(|_| AtomicU64::new(0)))
            .collect();
        Self { tasks }
    }

    /// Counts a hand for a task.
    pub fn add(&self, task_id: usize, rank: HandRank) {
        self.tasks[task_id][rank as usize].fetch_add(1, Ordering::Relaxed);
    }

    /// Sums the tasks counters.
    pub fn into_frequencies(self) -> Frequencies {
        let mut freq = Frequencies::default();
        for task in self.tasks {
            for (total, count) in freq.counts.iter_mut().zip(task) {
                *total += count.into_inner();
            }
        }
        freq
    }
}
