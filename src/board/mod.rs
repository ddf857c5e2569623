//! The board: locations and the game they address.
//!
//! ## Key Types
//!
//! - `BoardLocation`: the 13 named card sequences
//! - `Game`: a dealt game; resolves locations to its sequences
//! - `Foundations`: the per-suit stacks

pub mod game;
pub mod location;

pub use game::{deal, new_game, new_game_with, Foundations, Game, MovedCards};
pub use location::BoardLocation;
