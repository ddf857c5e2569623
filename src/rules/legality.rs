//! Move legality.
//!
//! A move takes the cards from `from_index` to the top of one sequence and
//! puts them on another. Legality is split into a source half and a
//! destination half so each can be checked alone; [`is_move_legal`] is their
//! conjunction.
//!
//! ## Index convention
//!
//! Indices are signed. Callers that omit an index use [`top_index`], which is
//! `len - 1` and therefore `-1` for an empty sequence. The destination guard
//! is `to_index >= to_cards.len()`, so an empty destination only passes it
//! with the `-1` default; an explicit `0` is rejected. Moves onto an empty pile
//! or foundation depend on exactly this arithmetic.

use crate::board::BoardLocation;
use crate::cards::Card;
use crate::core::{ACE, KING};

/// The index of the top card, `-1` when `cards` is empty.
#[must_use]
pub fn top_index(cards: &[Card]) -> i64 {
    cards.len() as i64 - 1
}

/// The card at a signed index, if the index lands inside `cards`.
fn card_at(cards: &[Card], index: i64) -> Option<&Card> {
    usize::try_from(index).ok().and_then(|i| cards.get(i))
}

/// Full legality check for moving `from_cards[from_index..]` onto `to`.
#[must_use]
pub fn is_move_legal(
    from: BoardLocation,
    from_index: i64,
    from_cards: &[Card],
    to: BoardLocation,
    to_index: i64,
    to_cards: &[Card],
) -> bool {
    is_move_from_legal(from, from_index, from_cards)
        && is_move_to_legal(from, from_index, from_cards, to, to_index, to_cards)
}

/// Whether the cards starting at `from_index` may leave `from`.
///
/// Piles export any run that starts on a face-up card. The deck and the
/// foundations only give up their top card.
#[must_use]
pub fn is_move_from_legal(from: BoardLocation, from_index: i64, from_cards: &[Card]) -> bool {
    let Some(card) = card_at(from_cards, from_index) else {
        return false;
    };

    if from.is_pile() {
        card.upturned
    } else {
        from_index == top_index(from_cards)
    }
}

/// Whether the card at `from_index` may land on `to`, judged against the
/// destination card at `to_index`.
#[must_use]
pub fn is_move_to_legal(
    from: BoardLocation,
    from_index: i64,
    from_cards: &[Card],
    to: BoardLocation,
    to_index: i64,
    to_cards: &[Card],
) -> bool {
    if to_index >= to_cards.len() as i64 {
        return false;
    }
    if to.is_deck() {
        return false;
    }
    // Only piles may move more than one card.
    if !from.is_pile() && from_index != top_index(from_cards) {
        return false;
    }

    let Some(from_card) = card_at(from_cards, from_index) else {
        return false;
    };
    let to_card = card_at(to_cards, to_index);

    if to.is_pile() {
        return if to_cards.is_empty() {
            from_card.value() == KING
        } else {
            to_card.is_some_and(|to_card| {
                from_card.suit().is_opposite_color(to_card.suit()) && from_card.value() + 1 == to_card.value()
            })
        };
    }

    if let Some(suit) = to.foundation_suit() {
        return from_card.suit() == suit
            && if to_cards.is_empty() {
                from_card.value() == ACE
            } else {
                to_card.is_some_and(|to_card| from_card.value() == to_card.value() + 1)
            };
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use BoardLocation::*;

    fn up(suit: Suit, value: u8) -> Card {
        Card::new(suit, value).face_up()
    }

    fn down(suit: Suit, value: u8) -> Card {
        Card::new(suit, value)
    }

    /// Check a move using the top-of-stack defaults for both indices.
    fn legal_to_top(from: BoardLocation, from_cards: &[Card], to: BoardLocation, to_cards: &[Card]) -> bool {
        is_move_legal(from, top_index(from_cards), from_cards, to, top_index(to_cards), to_cards)
    }

    #[test]
    fn test_top_index() {
        assert_eq!(top_index(&[]), -1);
        assert_eq!(top_index(&[up(Suit::Heart, 1)]), 0);
    }

    #[test]
    fn test_from_out_of_bounds() {
        let cards = [up(Suit::Heart, 5)];
        assert!(!is_move_from_legal(Pile0, 1, &cards));
        assert!(!is_move_from_legal(Pile0, -1, &[]));
        assert!(!is_move_from_legal(DeckTurned, -1, &[]));
        assert!(is_move_from_legal(Pile0, 0, &cards));
    }

    #[test]
    fn test_from_pile_requires_face_up() {
        let pile = [down(Suit::Club, 9), up(Suit::Heart, 8), up(Suit::Spade, 7)];
        assert!(!is_move_from_legal(Pile2, 0, &pile));
        assert!(is_move_from_legal(Pile2, 1, &pile));
        assert!(is_move_from_legal(Pile2, 2, &pile));
    }

    #[test]
    fn test_from_deck_and_foundation_top_only() {
        let waste = [up(Suit::Heart, 2), up(Suit::Club, 3)];
        assert!(is_move_from_legal(DeckTurned, 1, &waste));
        assert!(!is_move_from_legal(DeckTurned, 0, &waste));

        let foundation = [up(Suit::Heart, 1), up(Suit::Heart, 2)];
        assert!(is_move_from_legal(FoundationHearts, 1, &foundation));
        assert!(!is_move_from_legal(FoundationHearts, 0, &foundation));

        // The stock gives up its top card too, face down or not.
        let stock = [down(Suit::Club, 7), down(Suit::Spade, 13)];
        assert!(is_move_from_legal(DeckUnturned, 1, &stock));
        assert!(legal_to_top(DeckUnturned, &stock, Pile2, &[]));
    }

    #[test]
    fn test_pile_to_pile_colors_and_ranks() {
        let red_five = [up(Suit::Heart, 5)];

        assert!(legal_to_top(Pile0, &red_five, Pile1, &[up(Suit::Spade, 6)]));
        assert!(legal_to_top(Pile0, &red_five, Pile1, &[up(Suit::Club, 6)]));
        assert!(!legal_to_top(Pile0, &red_five, Pile1, &[up(Suit::Diamond, 6)]));
        assert!(!legal_to_top(Pile0, &red_five, Pile1, &[up(Suit::Spade, 7)]));
        assert!(!legal_to_top(Pile0, &red_five, Pile1, &[up(Suit::Heart, 7)]));
        assert!(!legal_to_top(Pile0, &red_five, Pile1, &[up(Suit::Spade, 4)]));
    }

    #[test]
    fn test_empty_pile_takes_only_king() {
        assert!(legal_to_top(DeckTurned, &[up(Suit::Club, 13)], Pile4, &[]));
        assert!(!legal_to_top(DeckTurned, &[up(Suit::Club, 1)], Pile4, &[]));
        assert!(!legal_to_top(DeckTurned, &[up(Suit::Club, 12)], Pile4, &[]));
    }

    #[test]
    fn test_empty_destination_needs_default_index() {
        let king = [up(Suit::Spade, 13)];
        assert!(is_move_legal(Pile0, 0, &king, Pile1, -1, &[]));
        // An explicit 0 fails the destination bound for an empty sequence.
        assert!(!is_move_legal(Pile0, 0, &king, Pile1, 0, &[]));

        let ace = [up(Suit::Heart, 1)];
        assert!(is_move_legal(Pile0, 0, &ace, FoundationHearts, -1, &[]));
        assert!(!is_move_legal(Pile0, 0, &ace, FoundationHearts, 0, &[]));
    }

    #[test]
    fn test_to_index_is_the_compared_card() {
        let from = [up(Suit::Heart, 5)];
        let to = [up(Suit::Spade, 6), up(Suit::Heart, 12)];

        assert!(is_move_legal(Pile0, 0, &from, Pile1, 0, &to));
        assert!(!is_move_legal(Pile0, 0, &from, Pile1, 1, &to));
        assert!(!is_move_legal(Pile0, 0, &from, Pile1, 2, &to));
        // A negative index onto a non-empty pile has no card to compare.
        assert!(!is_move_legal(Pile0, 0, &from, Pile1, -1, &to));
    }

    #[test]
    fn test_foundation_sequence() {
        let ace = [up(Suit::Heart, 1)];
        let two = [up(Suit::Heart, 2)];
        let two_diamonds = [up(Suit::Diamond, 2)];

        assert!(legal_to_top(DeckTurned, &ace, FoundationHearts, &[]));
        assert!(!legal_to_top(DeckTurned, &two, FoundationHearts, &[]));
        assert!(!legal_to_top(DeckTurned, &ace, FoundationSpades, &[]));

        let hearts = [up(Suit::Heart, 1)];
        assert!(legal_to_top(DeckTurned, &two, FoundationHearts, &hearts));
        assert!(!legal_to_top(DeckTurned, &two_diamonds, FoundationHearts, &hearts));
        assert!(!legal_to_top(DeckTurned, &ace, FoundationHearts, &hearts));
    }

    #[test]
    fn test_never_onto_deck() {
        let card = [up(Suit::Heart, 4)];
        assert!(!legal_to_top(Pile0, &card, DeckTurned, &[up(Suit::Club, 5)]));
        assert!(!legal_to_top(Pile0, &card, DeckUnturned, &[down(Suit::Club, 5)]));
        assert!(!legal_to_top(Pile0, &card, DeckTurned, &[]));
    }

    #[test]
    fn test_single_card_from_non_pile() {
        let foundation = [up(Suit::Heart, 1), up(Suit::Heart, 2)];
        let pile = [up(Suit::Spade, 3)];

        assert!(is_move_legal(FoundationHearts, 1, &foundation, Pile0, 0, &pile));
        assert!(!is_move_to_legal(FoundationHearts, 0, &foundation, Pile0, 0, &pile));
    }

    #[test]
    fn test_run_moves_onto_pile() {
        let source = [down(Suit::Club, 2), up(Suit::Spade, 8), up(Suit::Heart, 7), up(Suit::Club, 6)];
        let dest = [up(Suit::Diamond, 9)];

        assert!(is_move_legal(Pile3, 1, &source, Pile5, 0, &dest));
        assert!(!is_move_legal(Pile3, 2, &source, Pile5, 0, &dest));
        assert!(!is_move_legal(Pile3, 0, &source, Pile5, 0, &dest));
    }

    #[test]
    fn test_pile_run_onto_foundation_judged_by_base_card() {
        let hearts = [up(Suit::Heart, 1), up(Suit::Heart, 2)];
        let source = [up(Suit::Heart, 3), up(Suit::Spade, 2)];

        // Only the card at from_index is compared; the single-card limit
        // applies to deck and foundation sources, not piles.
        assert!(is_move_legal(Pile0, 0, &source, FoundationHearts, 1, &hearts));
        assert!(!is_move_legal(Pile0, 1, &source, FoundationHearts, 1, &hearts));
        assert!(!is_move_legal(Pile0, 0, &source, FoundationHearts, -1, &[]));
    }
}
