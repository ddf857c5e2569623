//! Events in a game's log.
//!
//! The wire format is JSON with a `type` discriminant:
//!
//! ```json
//! {"type": "GAME_STARTED", "game": { ... }}
//! {"type": "TURN_CARD", "gameId": "..."}
//! {"type": "MOVE_CARD", "gameId": "...", "from": "PILE3", "fromIndex": 2, "to": "PILE5"}
//! ```
//!
//! `fromIndex`/`toIndex` may be omitted; the reducer then targets the top card.

use serde::{Deserialize, Serialize};

use crate::board::{BoardLocation, Game};
use crate::core::GameId;

/// One entry of a game's append-only log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    /// A freshly dealt game. First event for its id.
    GameStarted {
        game: Box<Game>,
    },

    /// Turn the next stock card, or recycle the waste.
    #[serde(rename_all = "camelCase")]
    TurnCard {
        game_id: GameId,
    },

    /// Move cards from one location to another.
    #[serde(rename_all = "camelCase")]
    MoveCard {
        game_id: GameId,
        from: BoardLocation,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from_index: Option<i64>,
        to: BoardLocation,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to_index: Option<i64>,
    },
}

impl GameEvent {
    /// The game this event belongs to.
    #[must_use]
    pub fn game_id(&self) -> &GameId {
        match self {
            GameEvent::GameStarted { game } => &game.id,
            GameEvent::TurnCard { game_id } | GameEvent::MoveCard { game_id, .. } => game_id,
        }
    }

    /// The wire discriminant.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::GameStarted { .. } => "GAME_STARTED",
            GameEvent::TurnCard { .. } => "TURN_CARD",
            GameEvent::MoveCard { .. } => "MOVE_CARD",
        }
    }
}
