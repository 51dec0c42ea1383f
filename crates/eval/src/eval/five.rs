// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hands.
use quintet_cards::Card;
use quintet_tables::find;

use super::tables::{FLUSHES, HASH_ADJUST, HASH_VALUES, UNIQUE5};

/// Evaluates a 5 cards hand and returns its equivalence value from 1 (royal
/// flush) to 7462 (7-5-4-3-2 unsuited).
///
/// The cards must be distinct, the result for a hand with duplicated cards is
/// unspecified. The order of the cards doesn't change the result.
#[inline]
pub fn classify(cards: &[Card; 5]) -> u16 {
    let [c1, c2, c3, c4, c5] = *cards;
    eval_5cards(c1, c2, c3, c4, c5)
}

/// Evaluates the given five cards, see [classify].
#[inline]
pub fn eval_5cards(c1: Card, c2: Card, c3: Card, c4: Card, c5: Card) -> u16 {
    let (c1, c2, c3, c4, c5) = (c1.id(), c2.id(), c3.id(), c4.id(), c5.id());
    let q = ((c1 | c2 | c3 | c4 | c5) >> 16) as usize;

    // Flushes and straight flushes.
    if c1 & c2 & c3 & c4 & c5 & 0xf000 != 0 {
        return FLUSHES[q];
    }

    // Straights and high cards.
    let s = UNIQUE5[q];
    if s != 0 {
        return s;
    }

    let p = (c1 & 0xff) * (c2 & 0xff) * (c3 & 0xff) * (c4 & 0xff) * (c5 & 0xff);
    HASH_VALUES[find(p, &HASH_ADJUST)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, HandRank, Rank, Suit, category, parse_cards};
    use rand::prelude::*;

    fn hand(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn all_five_cards_hands() {
        let mut counts = [0u32; 9];
        let (mut min, mut max) = (u16::MAX, 0);

        Deck::default().for_each(5, |cards| {
            let value = classify(cards.try_into().unwrap());
            min = min.min(value);
            max = max.max(value);
            counts[category(value) as usize] += 1;
        });

        assert_eq!(min, 1);
        assert_eq!(max, 7462);

        for rank in HandRank::ranks() {
            assert_eq!(counts[rank as usize], rank.five_card_hands(), "{rank}");
        }
    }

    #[test]
    fn known_hands() {
        let royal = hand("As Ks Qs Js Ts");
        assert_eq!(classify(&royal), 1);
        assert_eq!(category(classify(&royal)), HandRank::StraightFlush);

        let worst = hand("7c 5d 4h 3s 2c");
        assert_eq!(classify(&worst), 7462);
        assert_eq!(category(classify(&worst)), HandRank::HighCard);

        let steel_wheel = hand("Ah 2h 3h 4h 5h");
        assert_eq!(classify(&steel_wheel), 10);

        let best_flush = hand("Ad Kd Qd Jd 9d");
        assert_eq!(classify(&best_flush), 323);

        let worst_pair = hand("2c 2d 5h 4s 3c");
        assert_eq!(classify(&worst_pair), 6185);
        assert_eq!(category(classify(&worst_pair)), HandRank::OnePair);
    }

    #[test]
    fn four_aces() {
        let aces = Suit::suits()
            .map(|s| Card::new(Rank::Ace, s))
            .collect::<Vec<_>>();

        let mut kickers = Deck::default();
        aces.iter().for_each(|&c| kickers.remove(c));

        for kicker in kickers {
            let value = eval_5cards(aces[0], aces[1], aces[2], aces[3], kicker);
            assert_eq!(category(value), HandRank::FourOfAKind);
            assert!((11..=22).contains(&value));
        }
    }

    #[test]
    fn wheel_straight() {
        let wheel = classify(&hand("Ac 2d 3h 4s 5c"));
        let six_high = classify(&hand("2c 3d 4h 5s 6c"));
        let best_high_card = classify(&hand("Ac Kd Qh Js 9c"));

        assert_eq!(category(wheel), HandRank::Straight);
        assert_eq!(wheel, 1609);
        assert!(six_high < wheel);
        assert!(wheel < best_high_card);
    }

    #[test]
    fn permutation_invariance() {
        let mut rng = rand::rng();
        let deck = Deck::default();

        deck.sample(&mut rng.clone(), 10_000, 5, |cards| {
            let mut cards: [Card; 5] = cards.try_into().unwrap();
            let value = classify(&cards);

            for _ in 0..5 {
                cards.shuffle(&mut rng);
                assert_eq!(classify(&cards), value);
            }
        });
    }
}
