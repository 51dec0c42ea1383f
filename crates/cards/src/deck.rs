// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck of cards.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

#[cfg(feature = "parallel")]
mod parallel;

/// The largest hand [Deck::for_each] can build.
const MAX_HAND: usize = 7;

/// A cards Deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the deck, `None` when the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards in deck order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Returns the position of the card with the given rank and suit.
    pub fn find_card(&self, rank: Rank, suit: Suit) -> Option<usize> {
        let card = Card::new(rank, suit);
        self.cards.iter().position(|c| c == &card)
    }

    /// Calls the `f` closure for each k-cards hand in lexicographic order of
    /// the cards positions.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=MAX_HAND).contains(&k), "1 <= k <= 7");
        for_each_subset(&self.cards, &[], k, &mut f);
    }

    /// Calls the `f` closure for `count` random k-cards hands.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn sample<R, F>(&self, rng: &mut R, count: usize, k: usize, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card]),
    {
        assert!((1..=MAX_HAND).contains(&k), "1 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut hand = Vec::with_capacity(k);
        for _ in 0..count {
            hand.clear();
            hand.extend(self.cards.choose_multiple(rng, k).copied());
            f(&hand);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Calls `f` with the `prefix` cards followed by each k-subset of `cards`.
fn for_each_subset<F>(cards: &[Card], prefix: &[Card], k: usize, f: &mut F)
where
    F: FnMut(&[Card]),
{
    let (n, m) = (cards.len(), prefix.len());
    if k > n || m + k > MAX_HAND {
        return;
    }

    let mut hand = [Card::new(Rank::Deuce, Suit::Clubs); MAX_HAND];
    hand[..m].copy_from_slice(prefix);

    let mut idx = [0usize; MAX_HAND];
    for i in 0..k {
        idx[i] = i;
        hand[m + i] = cards[i];
    }

    loop {
        f(&hand[..m + k]);

        // Find the rightmost position that can still move right.
        let mut i = k;
        while i > 0 && idx[i - 1] == n - k + i - 1 {
            i -= 1;
        }

        if i == 0 {
            break;
        }

        idx[i - 1] += 1;
        hand[m + i - 1] = cards[idx[i - 1]];

        for j in i..k {
            idx[j] = idx[j - 1] + 1;
            hand[m + j] = cards[idx[j]];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_order() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.cards();
        assert_eq!(cards[0], Card::new(Rank::Deuce, Suit::Clubs));
        assert_eq!(cards[12], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(cards[13], Card::new(Rank::Deuce, Suit::Diamonds));
        assert_eq!(cards[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn deck_find_card() {
        let mut deck = Deck::default();
        assert_eq!(deck.find_card(Rank::Deuce, Suit::Clubs), Some(0));
        assert_eq!(deck.find_card(Rank::Five, Suit::Hearts), Some(29));
        assert_eq!(deck.find_card(Rank::Ace, Suit::Spades), Some(51));

        deck.remove(Card::new(Rank::Five, Suit::Hearts));
        assert_eq!(deck.find_card(Rank::Five, Suit::Hearts), None);
        assert_eq!(deck.find_card(Rank::Ace, Suit::Spades), Some(50));
    }

    #[test]
    fn deck_deal_shuffled() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        let mut cards = HashSet::default();

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);

        count = 0;
        deck.for_each(1, |_| count += 1);
        assert_eq!(count, Deck::SIZE);
    }

    #[test]
    fn deck_for_each_order() {
        let mut deck = Deck::default();
        for card in deck.cards().to_vec().into_iter().skip(4) {
            deck.remove(card);
        }

        let mut hands = Vec::new();
        deck.for_each(2, |cards| hands.push(cards.to_owned()));

        let c = deck.cards();
        assert_eq!(
            hands,
            vec![
                vec![c[0], c[1]],
                vec![c[0], c[2]],
                vec![c[0], c[3]],
                vec![c[1], c[2]],
                vec![c[1], c[3]],
                vec![c[2], c[3]],
            ]
        );
    }

    #[test]
    fn deck_sample() {
        let deck = Deck::default();

        let mut count = 0;
        deck.sample(&mut rand::rng(), 100, 7, |cards| {
            assert_eq!(cards.len(), 7);
            assert_eq!(cards.iter().collect::<HashSet<_>>().len(), 7);
            count += 1;
        });
        assert_eq!(count, 100);
    }

    // This takes a while to run in debug mode as it goes through 133M hands.
    #[test]
    #[ignore]
    fn deck_for_each_7cards() {
        let mut deck = Deck::default();

        let mut count = 0;
        deck.for_each(7, |_| count += 1);
        assert_eq!(count, 133_784_560);

        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        count = 0;
        deck.for_each(7, |_| count += 1);
        assert_eq!(count, 99_884_400);
    }
}
