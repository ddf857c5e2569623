//! Aggregates over a log that interleaves many games.
//!
//! - [`GameIndex`]: the ids of every game started, in start order
//! - [`GameTable`]: every game, keyed by id, each folded by the game reducer

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{instrument, trace};

use super::event::GameEvent;
use super::reducer::{apply, Aggregate};
use crate::board::Game;
use crate::core::GameId;

/// Ordered list of started games.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameIndex;

impl Aggregate for GameIndex {
    type State = Vector<GameId>;

    fn initialize(&self) -> Self::State {
        Vector::new()
    }

    fn reduce(&self, mut state: Self::State, event: &GameEvent) -> Self::State {
        if let GameEvent::GameStarted { game } = event {
            state.push_back(game.id.clone());
        }
        state
    }
}

/// All games in one keyed map.
///
/// Each event is routed to the game its id names; events for unknown ids are
/// dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameTable;

impl Aggregate for GameTable {
    type State = FxHashMap<GameId, Game>;

    fn initialize(&self) -> Self::State {
        FxHashMap::default()
    }

    #[instrument(level = "debug", skip_all, fields(event = event.kind(), game_id = %event.game_id()))]
    fn reduce(&self, mut state: Self::State, event: &GameEvent) -> Self::State {
        match event {
            GameEvent::GameStarted { game } => {
                state.insert(game.id.clone(), game.as_ref().clone());
            }
            _ => match state.get_mut(event.game_id()) {
                Some(game) => apply(game, event),
                None => trace!("event for unknown game"),
            },
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::new_game_with;
    use crate::core::{GameRng, SeededIds};
    use crate::rules::replay;

    fn two_games() -> (Game, Game) {
        let mut rng = GameRng::new(99);
        let mut ids = SeededIds::new(&rng);
        (new_game_with(&mut rng, &mut ids), new_game_with(&mut rng, &mut ids))
    }

    #[test]
    fn test_index_lists_started_games_in_order() {
        let (a, b) = two_games();
        let log = vec![
            GameEvent::GameStarted { game: Box::new(a.clone()) },
            GameEvent::TurnCard { game_id: a.id.clone() },
            GameEvent::GameStarted { game: Box::new(b.clone()) },
        ];

        let index = replay(&GameIndex, &log);
        assert_eq!(index, Vector::from(vec![a.id, b.id]));
    }

    #[test]
    fn test_table_routes_by_id() {
        let (a, b) = two_games();
        let log = vec![
            GameEvent::GameStarted { game: Box::new(a.clone()) },
            GameEvent::GameStarted { game: Box::new(b.clone()) },
            GameEvent::TurnCard { game_id: b.id.clone() },
            GameEvent::TurnCard { game_id: b.id.clone() },
            GameEvent::TurnCard { game_id: GameId::new("nobody") },
        ];

        let table = replay(&GameTable, &log);

        assert_eq!(table.len(), 2);
        assert_eq!(table[&a.id], a);
        assert_eq!(table[&b.id].deck.turned.len(), 2);
        assert_eq!(table[&b.id].deck.unturned.len(), 22);
    }
}
