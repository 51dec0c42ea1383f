// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Perfect hash for the paired hands primes products.
//!
//! The mixing in [mix] is Paul Senzee's, the adjustment table is derived here
//! by [search] for this exact sequence of shifts and constant, any change to
//! [mix] requires building the tables again.
use anyhow::{Context, Result, bail};
use log::debug;

/// Number of buckets, the `b` half of [mix] has 9 bits.
pub const HASH_ADJUST_SIZE: usize = 512;

/// Number of slots, the `a` half of [mix] has 13 bits.
pub const HASH_TABLE_SIZE: usize = 8192;

/// Splits a primes product into the 13 bits slot `a` and the 9 bits bucket `b`.
#[inline]
pub const fn mix(u: u32) -> (usize, usize) {
    let mut u = u.wrapping_add(0xe91aaa35);
    u ^= u >> 16;
    u = u.wrapping_add(u << 8);
    u ^= u >> 4;
    let b = (u >> 8) & 0x1ff;
    let a = u.wrapping_add(u << 2) >> 19;
    (a as usize, b as usize)
}

/// Maps a paired hand primes product to its `hash_values` index.
#[inline]
pub const fn find(u: u32, adjust: &[u16; HASH_ADJUST_SIZE]) -> usize {
    let (a, b) = mix(u);
    a ^ adjust[b] as usize
}

/// Finds the bucket adjustments that place every `(product, value)` key in
/// its own slot and returns the adjustments and the filled slots.
///
/// Buckets are placed largest first, each one at the first adjustment that
/// maps all its keys to empty slots.
pub fn search(
    keys: &[(u32, u16)],
) -> Result<([u16; HASH_ADJUST_SIZE], [u16; HASH_TABLE_SIZE])> {
    let mut buckets = vec![Vec::<(usize, u16)>::new(); HASH_ADJUST_SIZE];
    for &(product, value) in keys {
        if value == 0 {
            bail!("Product {product} has the empty slot value");
        }

        let (a, b) = mix(product);
        if let Some((_, other)) = buckets[b].iter().find(|(slot, _)| *slot == a) {
            bail!("Hands {other} and {value} both hash to slot {a} in bucket {b}");
        }

        buckets[b].push((a, value));
    }

    let mut order = (0..HASH_ADJUST_SIZE).collect::<Vec<_>>();
    order.sort_by_key(|&b| std::cmp::Reverse(buckets[b].len()));

    debug!(
        "Hash search: {} keys, {} buckets used, largest bucket {}",
        keys.len(),
        buckets.iter().filter(|b| !b.is_empty()).count(),
        buckets[order[0]].len()
    );

    let mut adjust = [0u16; HASH_ADJUST_SIZE];
    let mut slots = [0u16; HASH_TABLE_SIZE];
    let mut probes = 0usize;

    for b in order {
        let bucket = &buckets[b];
        if bucket.is_empty() {
            break;
        }

        let adj = (0..HASH_TABLE_SIZE)
            .find(|adj| {
                probes += 1;
                bucket.iter().all(|&(a, _)| slots[a ^ adj] == 0)
            })
            .with_context(|| {
                format!(
                    "No collision free adjustment for bucket {b} with {} keys",
                    bucket.len()
                )
            })?;

        for &(a, value) in bucket {
            slots[a ^ adj] = value;
        }

        adjust[b] = adj as u16;
    }

    debug!("Hash search: {probes} adjustments probed");

    Ok((adjust, slots))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tables, values::PAIRED_HANDS};
    use ahash::HashSet;

    #[test]
    fn mix_ranges() {
        for u in [0, 1, 2, 104_553_157, u32::MAX, 0x1635_e5cb] {
            let (a, b) = mix(u);
            assert!(a < HASH_TABLE_SIZE);
            assert!(b < HASH_ADJUST_SIZE);
        }
    }

    #[test]
    fn mix_zero() {
        // 0 + 0xe91aaa35 = 0xe91aaa35
        // ^ >> 16        = 0xe91a432f
        // + << 8         = 0x035d722f (wrapped)
        // ^ >> 4         = 0x0368a50d
        assert_eq!(mix(0), (545, 165));
    }

    /// Primes products of all the hands with a repeated rank.
    fn paired_products() -> Vec<u32> {
        let mut products = Vec::new();
        for first in 0..13usize {
            for second in first..13 {
                for third in second..13 {
                    for fourth in third..13 {
                        for fifth in fourth..13 {
                            let ranks = [first, second, third, fourth, fifth];
                            let distinct = ranks.windows(2).all(|w| w[0] != w[1]);
                            let quints = ranks.iter().all(|&r| r == first);
                            if !distinct && !quints {
                                products.push(
                                    ranks.iter().map(|&r| quintet_cards::PRIMES[r]).product::<u32>(),
                                );
                            }
                        }
                    }
                }
            }
        }
        products
    }

    #[test]
    fn collision_free() {
        let tables = Tables::build().unwrap();
        let products = paired_products();
        assert_eq!(products.len(), PAIRED_HANDS);

        let slots = products
            .iter()
            .map(|&p| find(p, &tables.hash_adjust))
            .collect::<HashSet<_>>();
        assert_eq!(slots.len(), PAIRED_HANDS);
        assert!(slots.iter().all(|&slot| slot < HASH_TABLE_SIZE));

        for p in products {
            let value = tables.hash_values[find(p, &tables.hash_adjust)];
            assert!((11..=6185).contains(&value), "product {p} value {value}");
        }
    }

    #[test]
    fn largest_bucket_needs_sparse_slots() {
        let mut buckets = vec![Vec::new(); HASH_ADJUST_SIZE];
        for p in paired_products() {
            let (a, b) = mix(p);
            buckets[b].push(a);
        }

        let largest = buckets.iter().max_by_key(|b| b.len()).unwrap();
        assert_eq!(largest.len(), 22);

        // Whatever the adjustment, this bucket has a slot past the paired
        // hands count, so the table cannot have exactly one slot per hand.
        let lowest_max = (0..HASH_TABLE_SIZE)
            .map(|adj| largest.iter().map(|&a| a ^ adj).max().unwrap())
            .min()
            .unwrap();
        assert_eq!(lowest_max, 6272);
        assert!(lowest_max >= PAIRED_HANDS);
    }

    #[test]
    fn search_places_keys() {
        let keys = [(6u32, 11u16), (10, 12), (15, 13), (4_194_304, 14)];
        let (adjust, slots) = search(&keys).unwrap();

        for (product, value) in keys {
            assert_eq!(slots[find(product, &adjust)], value);
        }
        assert_eq!(slots.iter().filter(|&&v| v != 0).count(), keys.len());
    }

    #[test]
    fn search_rejects_same_key() {
        assert!(search(&[(6, 11), (6, 12)]).is_err());
        assert!(search(&[(6, 0)]).is_err());
    }

    #[test]
    fn search_runs_out_of_slots() {
        let mut seen = HashSet::default();
        let keys = (1u32..)
            .map(|i| i.wrapping_mul(0x9e37_79b9))
            .filter(|&u| seen.insert(mix(u)))
            .take(HASH_TABLE_SIZE + 1)
            .map(|u| (u, 1u16))
            .collect::<Vec<_>>();

        let err = search(&keys).unwrap_err();
        assert!(
            err.to_string().starts_with("No collision free adjustment"),
            "{err}"
        );
    }
}
