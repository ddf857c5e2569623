//! Klondike rules: move legality, events, and the reducer.
//!
//! - `legality`: pure predicates over card sequences
//! - `event`: the log's event types and wire format
//! - `reducer`: the game fold and the `Aggregate` trait hosts register
//! - `index`: aggregates over logs that hold many games
//! - `moves`: enumeration of legal moves

pub mod event;
pub mod index;
pub mod legality;
pub mod moves;
pub mod reducer;

pub use event::GameEvent;
pub use index::{GameIndex, GameTable};
pub use legality::{is_move_from_legal, is_move_legal, is_move_to_legal, top_index};
pub use moves::{legal_moves, Move};
pub use reducer::{apply, move_card, reduce, replay, turn_card, Aggregate, GameAggregate};
