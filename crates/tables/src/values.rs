// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! First equivalence value of each hand category.
//!
//! Values go from 1 (royal flush) to [WORST] (7-5-4-3-2 unsuited), each
//! category covers the values up to the next category first value.

/// Straight flushes, 10 values.
pub const STRAIGHT_FLUSH: u16 = 1;
/// Four of a kind, 156 values.
pub const FOUR_OF_A_KIND: u16 = 11;
/// Full houses, 156 values.
pub const FULL_HOUSE: u16 = 167;
/// Flushes, 1277 values.
pub const FLUSH: u16 = 323;
/// Straights, 10 values.
pub const STRAIGHT: u16 = 1600;
/// Three of a kind, 858 values.
pub const THREE_OF_A_KIND: u16 = 1610;
/// Two pairs, 858 values.
pub const TWO_PAIR: u16 = 2468;
/// One pair, 2860 values.
pub const ONE_PAIR: u16 = 3326;
/// High cards, 1277 values.
pub const HIGH_CARD: u16 = 6186;
/// The worst hand value.
pub const WORST: u16 = 7462;

/// Number of distinct paired hands, the keys of the perfect hash.
pub const PAIRED_HANDS: usize = 4888;
