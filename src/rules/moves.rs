//! Enumerating the legal moves of a position.

use serde::{Deserialize, Serialize};

use super::legality::{is_move_legal, top_index};
use crate::board::{BoardLocation, Game};

/// A legal move: the run starting at `from_index` goes onto the top of `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub from: BoardLocation,
    pub from_index: i64,
    pub to: BoardLocation,
}

/// Every playable move the reducer would accept with a defaulted
/// destination index.
///
/// Each source index is tried against every other location, so pile runs
/// of every length show up as separate moves. The face-down stock is never
/// offered as a source even though the legality check accepts its top card;
/// a player reaches those cards by turning.
#[must_use]
pub fn legal_moves(game: &Game) -> Vec<Move> {
    let mut moves = Vec::new();

    for from in BoardLocation::ALL {
        if from == BoardLocation::DeckUnturned {
            continue;
        }
        let from_cards = game.stack(from);
        for from_index in 0..from_cards.len() as i64 {
            for to in BoardLocation::ALL {
                if to == from {
                    continue;
                }
                let to_cards = game.stack(to);
                if is_move_legal(from, from_index, from_cards, to, top_index(to_cards), to_cards) {
                    moves.push(Move { from, from_index, to });
                }
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};
    use crate::core::GameId;

    #[test]
    fn test_moves_on_small_board() {
        let mut game = Game {
            id: GameId::new("g"),
            deck: Default::default(),
            foundations: Default::default(),
            piles: Default::default(),
        };
        game.piles[0] = vec![Card::new(Suit::Heart, 1).face_up()];
        game.piles[1] = vec![Card::new(Suit::Spade, 13).face_up()];

        let moves = legal_moves(&game);

        assert!(moves.contains(&Move { from: BoardLocation::Pile0, from_index: 0, to: BoardLocation::FoundationHearts }));
        for empty in [BoardLocation::Pile2, BoardLocation::Pile6] {
            assert!(moves.contains(&Move { from: BoardLocation::Pile1, from_index: 0, to: empty }));
        }
        // King to each of 5 empty piles, Ace to its foundation.
        assert_eq!(moves.len(), 6);
    }

    #[test]
    fn test_stock_is_not_a_source() {
        let mut game = Game {
            id: GameId::new("g"),
            deck: Default::default(),
            foundations: Default::default(),
            piles: Default::default(),
        };
        game.deck.unturned = vec![Card::new(Suit::Club, 1)];
        game.deck.turned = vec![Card::new(Suit::Heart, 1).face_up()];

        let moves = legal_moves(&game);

        assert_eq!(
            moves,
            vec![Move { from: BoardLocation::DeckTurned, from_index: 0, to: BoardLocation::FoundationHearts }]
        );
    }
}
