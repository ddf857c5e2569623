//! The 52-card deck: construction, shuffling, and the stock/waste pair.
//!
//! ## Stack orientation
//!
//! Every card sequence in the engine is bottom-first: index 0 is the bottom
//! card and the last element is the top. Popping takes the top card.

use serde::{Deserialize, Serialize};

use super::card::{Card, Suit};
use crate::core::rng::GameRng;
use crate::core::{DECK_SIZE, KING};

/// Build the standard deck in suit-major, value-ascending order, all face down.
///
/// Pure and deterministic: every call returns a fresh, identical deck.
#[must_use]
pub fn build_unshuffled_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for value in 1..=KING {
            cards.push(Card::new(suit, value));
        }
    }
    cards
}

/// Return a uniformly random permutation of `items` (Fisher–Yates).
///
/// Walks the index down from `len - 1` to 1, swapping each slot with a
/// uniformly chosen slot at or below it. The input is left untouched.
#[must_use]
pub fn shuffle<T: Clone>(items: &[T], rng: &mut GameRng) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_index(i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// What happened when the deck was turned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The top unturned card moved onto the turned pile.
    Turned(Card),
    /// The unturned deck was empty; this many turned cards went back face down.
    Recycled(usize),
    /// Both halves were empty.
    Exhausted,
}

/// Stock (`unturned`) and waste (`turned`).
///
/// Every unturned card is face down and every turned card is face up.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    /// Face-down stock; the last card is the next to turn.
    pub unturned: Vec<Card>,
    /// Face-up waste; the last card is the most recently turned.
    pub turned: Vec<Card>,
}

impl Deck {
    /// Create a deck whose stock is `unturned` and whose waste is empty.
    #[must_use]
    pub fn new(unturned: Vec<Card>) -> Self {
        Self { unturned, turned: Vec::new() }
    }

    /// Total cards in stock and waste.
    #[must_use]
    pub fn len(&self) -> usize {
        self.unturned.len() + self.turned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unturned.is_empty() && self.turned.is_empty()
    }

    /// Turn the next card, or recycle the waste when the stock is empty.
    ///
    /// Recycling reverses the waste and flips every card face down, so the
    /// first card turned becomes the next one turned again.
    pub fn turn(&mut self) -> TurnOutcome {
        if let Some(mut card) = self.unturned.pop() {
            card.upturned = true;
            self.turned.push(card);
            return TurnOutcome::Turned(card);
        }

        if self.turned.is_empty() {
            return TurnOutcome::Exhausted;
        }

        let recycled = self.turned.len();
        self.unturned = self
            .turned
            .drain(..)
            .rev()
            .map(|mut card| {
                card.upturned = false;
                card
            })
            .collect();
        TurnOutcome::Recycled(recycled)
    }
}
