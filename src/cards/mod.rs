//! Cards and the deck.
//!
//! - `Card`: suit, value, face-up flag
//! - `Deck`: stock and waste, with turning and recycling
//! - `build_unshuffled_deck` / `shuffle`: deck construction

pub mod card;
pub mod deck;

pub use card::{Card, Color, Suit};
pub use deck::{build_unshuffled_deck, shuffle, Deck, TurnOutcome};
