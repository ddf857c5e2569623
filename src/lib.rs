//! # klondike-ledger
//!
//! Klondike solitaire rules for an event-sourced host.
//!
//! ## Design Principles
//!
//! 1. **State Is Derived**: A game is never stored. The host keeps an
//!    append-only log of events and folds the reducer over it.
//!
//! 2. **Replay Never Fails**: Illegal moves and exhausted decks are no-ops,
//!    so any historical log replays to a state.
//!
//! 3. **Locations, Not References**: Rules name card sequences by
//!    `BoardLocation`; the game resolves them and performs every mutation.
//!
//! ## Modules
//!
//! - `core`: RNG, game ids, table configuration, errors
//! - `cards`: Cards, suits, the deck, shuffling
//! - `board`: Board locations, the game, the deal
//! - `rules`: Move legality, events, the reducer and aggregates
//! - `actions`: Request parameters and the events they produce

pub mod actions;
pub mod board;
pub mod cards;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameId, GameRng, IdSource, KlondikeError, ProcessIds, SeededIds, TableConfig};

pub use crate::cards::{build_unshuffled_deck, shuffle, Card, Color, Deck, Suit, TurnOutcome};

pub use crate::board::{deal, new_game, new_game_with, BoardLocation, Foundations, Game};

pub use crate::rules::{
    is_move_from_legal, is_move_legal, is_move_to_legal, legal_moves, reduce, replay, Aggregate, GameAggregate,
    GameEvent, GameIndex, GameTable, Move,
};

pub use crate::actions::{MoveCardParams, TurnCardParams};
