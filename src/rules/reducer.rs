//! The game reducer and the aggregate fold.
//!
//! Current state is never stored; it is derived by folding [`reduce`] over a
//! game's events in log order, starting from no game at all:
//!
//! ```
//! use klondike_ledger::board::new_game_with;
//! use klondike_ledger::core::{GameRng, SeededIds};
//! use klondike_ledger::rules::{replay, GameAggregate, GameEvent};
//!
//! let mut rng = GameRng::new(7);
//! let mut ids = SeededIds::new(&rng);
//! let game = new_game_with(&mut rng, &mut ids);
//! let id = game.id.clone();
//!
//! let log = vec![
//!     GameEvent::GameStarted { game: Box::new(game) },
//!     GameEvent::TurnCard { game_id: id.clone() },
//! ];
//!
//! let state = replay(&GameAggregate, &log).unwrap();
//! assert_eq!(state.deck.turned.len(), 1);
//! ```
//!
//! ## No failures
//!
//! Illegal moves, turns on an empty deck and events for another game leave
//! the state exactly as it was. Replaying a historical log never fails.

use tracing::{debug, instrument, trace};

use super::event::GameEvent;
use super::legality::{is_move_legal, top_index};
use crate::board::{BoardLocation, Game, MovedCards};
use crate::cards::TurnOutcome;

/// A fold over game events.
///
/// Hosts register aggregates and feed them the log one event at a time.
///
/// ## Implementation Notes
///
/// - `initialize`: the state before any event
/// - `reduce`: must be deterministic; replay relies on it
pub trait Aggregate {
    /// The derived state.
    type State;

    /// State before the first event.
    fn initialize(&self) -> Self::State;

    /// Apply one event.
    fn reduce(&self, state: Self::State, event: &GameEvent) -> Self::State;
}

/// Fold `aggregate` over `events` from its initial state.
pub fn replay<'a, A, I>(aggregate: &A, events: I) -> A::State
where
    A: Aggregate,
    I: IntoIterator<Item = &'a GameEvent>,
{
    events
        .into_iter()
        .fold(aggregate.initialize(), |state, event| aggregate.reduce(state, event))
}

/// The single-game aggregate: `Option<Game>` folded by [`reduce`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GameAggregate;

impl Aggregate for GameAggregate {
    type State = Option<Game>;

    fn initialize(&self) -> Self::State {
        None
    }

    fn reduce(&self, state: Self::State, event: &GameEvent) -> Self::State {
        reduce(state, event)
    }
}

/// Apply one event to the current game.
///
/// `GAME_STARTED` replaces the state with the dealt game. Every other event
/// needs an existing game with a matching id, and is otherwise ignored.
#[instrument(level = "debug", skip_all, fields(event = event.kind(), game_id = %event.game_id()))]
pub fn reduce(game: Option<Game>, event: &GameEvent) -> Option<Game> {
    match event {
        GameEvent::GameStarted { game } => Some(game.as_ref().clone()),
        _ => game.map(|mut game| {
            apply(&mut game, event);
            game
        }),
    }
}

/// Apply a turn or move event to `game` in place.
///
/// Events for another game id and `GAME_STARTED` events are ignored.
pub fn apply(game: &mut Game, event: &GameEvent) {
    if event.game_id() != &game.id {
        trace!(current = %game.id, "ignoring event for another game");
        return;
    }

    match event {
        GameEvent::GameStarted { .. } => {}
        GameEvent::TurnCard { .. } => {
            turn_card(game);
        }
        GameEvent::MoveCard { from, from_index, to, to_index, .. } => {
            move_card(game, *from, *from_index, *to, *to_index);
        }
    }
}

/// Turn the next stock card, or recycle the waste when the stock is empty.
pub fn turn_card(game: &mut Game) -> TurnOutcome {
    let outcome = game.deck.turn();
    match outcome {
        TurnOutcome::Recycled(count) => debug!(count, "recycled waste into stock"),
        TurnOutcome::Exhausted => debug!("turn on an empty deck"),
        TurnOutcome::Turned(_) => {}
    }
    outcome
}

/// Move the cards from `from_index` to the top of `from` onto `to`, if legal.
///
/// Omitted indices target the top card of their sequence at call time.
/// Returns the moved cards; an illegal move returns none and changes nothing.
pub fn move_card(
    game: &mut Game,
    from: BoardLocation,
    from_index: Option<i64>,
    to: BoardLocation,
    to_index: Option<i64>,
) -> MovedCards {
    let from_cards = game.stack(from);
    let to_cards = game.stack(to);
    let from_index = from_index.unwrap_or_else(|| top_index(from_cards));
    let to_index = to_index.unwrap_or_else(|| top_index(to_cards));

    if !is_move_legal(from, from_index, from_cards, to, to_index, to_cards) {
        debug!(%from, from_index, %to, to_index, "rejected illegal move");
        return MovedCards::new();
    }

    // Legal moves always start inside the source.
    let Ok(start) = usize::try_from(from_index) else {
        return MovedCards::new();
    };
    game.move_tail(from, start, to)
}
