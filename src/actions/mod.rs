//! Turning player requests into log events.
//!
//! An action never touches game state. It produces the event the host
//! appends to the log; whether a move is legal is decided when the log is
//! replayed. `start_game` is the only action that does work up front: it
//! deals the game the event carries.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::board::{new_game_with, BoardLocation};
use crate::core::{GameId, GameRng, IdSource};
use crate::rules::GameEvent;

/// Parameters of a turn request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnCardParams {
    pub game_id: GameId,
}

/// Parameters of a move request. Omitted indices mean "top card".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardParams {
    pub game_id: GameId,
    pub from: BoardLocation,
    #[serde(default)]
    pub from_index: Option<i64>,
    pub to: BoardLocation,
    #[serde(default)]
    pub to_index: Option<i64>,
}

impl MoveCardParams {
    /// Move the top card of `from` onto `to`.
    #[must_use]
    pub fn top(game_id: GameId, from: BoardLocation, to: BoardLocation) -> Self {
        Self {
            game_id,
            from,
            from_index: None,
            to,
            to_index: None,
        }
    }

    /// Move the run starting at `index` instead of the top card.
    #[must_use]
    pub fn with_from_index(mut self, index: i64) -> Self {
        self.from_index = Some(index);
        self
    }

    /// Compare against the destination card at `index` instead of the top.
    #[must_use]
    pub fn with_to_index(mut self, index: i64) -> Self {
        self.to_index = Some(index);
        self
    }
}

/// Deal a game and return its id with the `GAME_STARTED` event to append.
#[instrument(skip_all)]
pub fn start_game(rng: &mut GameRng, ids: &mut impl IdSource) -> (GameId, GameEvent) {
    let game = new_game_with(rng, ids);
    (game.id.clone(), GameEvent::GameStarted { game: Box::new(game) })
}

/// The `TURN_CARD` event for a request.
#[must_use]
pub fn turn_card(params: TurnCardParams) -> GameEvent {
    GameEvent::TurnCard { game_id: params.game_id }
}

/// The `MOVE_CARD` event for a request.
#[must_use]
pub fn move_card(params: MoveCardParams) -> GameEvent {
    GameEvent::MoveCard {
        game_id: params.game_id,
        from: params.from,
        from_index: params.from_index,
        to: params.to,
        to_index: params.to_index,
    }
}
