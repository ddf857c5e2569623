//! Core engine types: RNG, ids, table configuration, errors.
//!
//! Nothing here knows about cards. These are the pieces the deal and the
//! host plumbing build on.

pub mod config;
pub mod error;
pub mod id;
pub mod rng;

pub use config::{TableConfig, ACE, DECK_SIZE, FOUNDATION_COUNT, KING, PILE_COUNT, RANK_COUNT, TABLEAU_DEAL};
pub use error::KlondikeError;
pub use id::{GameId, IdSource, ProcessIds, SeededIds};
pub use rng::GameRng;
