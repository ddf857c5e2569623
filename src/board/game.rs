//! A game in progress and the deal that creates it.
//!
//! ## Addressing
//!
//! Rules and the reducer never hold references into a game across calls.
//! They name a sequence by [`BoardLocation`] and ask the game for it with
//! [`Game::stack`] or [`Game::stack_mut`]. Moving cards between two sequences
//! happens in one place, [`Game::move_tail`], which borrows them one at a time.
//!
//! ## Example
//!
//! ```
//! use klondike_ledger::board::{new_game_with, BoardLocation};
//! use klondike_ledger::core::{GameRng, SeededIds};
//!
//! let mut rng = GameRng::new(42);
//! let mut ids = SeededIds::new(&rng);
//! let game = new_game_with(&mut rng, &mut ids);
//!
//! assert_eq!(game.stack(BoardLocation::Pile6).len(), 7);
//! assert_eq!(game.stack(BoardLocation::DeckUnturned).len(), 24);
//! assert!(game.is_consistent());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument};

use super::location::BoardLocation;
use crate::cards::{build_unshuffled_deck, shuffle, Card, Deck, Suit};
use crate::core::{
    GameId, GameRng, IdSource, KlondikeError, ProcessIds, DECK_SIZE, PILE_COUNT, RANK_COUNT, TABLEAU_DEAL,
};

/// The four foundations, one ascending stack per suit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Foundations {
    #[serde(rename = "HEART")]
    pub heart: Vec<Card>,
    #[serde(rename = "DIAMOND")]
    pub diamond: Vec<Card>,
    #[serde(rename = "CLUB")]
    pub club: Vec<Card>,
    #[serde(rename = "SPADE")]
    pub spade: Vec<Card>,
}

impl Foundations {
    /// The stack built for `suit`.
    #[must_use]
    pub fn get(&self, suit: Suit) -> &Vec<Card> {
        match suit {
            Suit::Heart => &self.heart,
            Suit::Diamond => &self.diamond,
            Suit::Club => &self.club,
            Suit::Spade => &self.spade,
        }
    }

    pub fn get_mut(&mut self, suit: Suit) -> &mut Vec<Card> {
        match suit {
            Suit::Heart => &mut self.heart,
            Suit::Diamond => &mut self.diamond,
            Suit::Club => &mut self.club,
            Suit::Spade => &mut self.spade,
        }
    }

    /// Cards across all four foundations.
    #[must_use]
    pub fn len(&self) -> usize {
        Suit::ALL.iter().map(|&suit| self.get(suit).len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cards moved by a single move; a run is at most one full suit.
pub type MovedCards = SmallVec<[Card; RANK_COUNT]>;

/// A game in progress: the whole board configuration plus its id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    /// Assigned at deal time, never changed.
    pub id: GameId,
    pub deck: Deck,
    pub foundations: Foundations,
    /// Tableau columns, bottom card first.
    pub piles: [Vec<Card>; PILE_COUNT],
}

impl Game {
    /// The sequence a location names.
    #[must_use]
    pub fn stack(&self, location: BoardLocation) -> &[Card] {
        match location {
            BoardLocation::DeckTurned => &self.deck.turned,
            BoardLocation::DeckUnturned => &self.deck.unturned,
            BoardLocation::Pile0 => &self.piles[0],
            BoardLocation::Pile1 => &self.piles[1],
            BoardLocation::Pile2 => &self.piles[2],
            BoardLocation::Pile3 => &self.piles[3],
            BoardLocation::Pile4 => &self.piles[4],
            BoardLocation::Pile5 => &self.piles[5],
            BoardLocation::Pile6 => &self.piles[6],
            BoardLocation::FoundationHearts => &self.foundations.heart,
            BoardLocation::FoundationDiamonds => &self.foundations.diamond,
            BoardLocation::FoundationClubs => &self.foundations.club,
            BoardLocation::FoundationSpades => &self.foundations.spade,
        }
    }

    /// Mutable access to the sequence a location names.
    pub fn stack_mut(&mut self, location: BoardLocation) -> &mut Vec<Card> {
        match location {
            BoardLocation::DeckTurned => &mut self.deck.turned,
            BoardLocation::DeckUnturned => &mut self.deck.unturned,
            BoardLocation::Pile0 => &mut self.piles[0],
            BoardLocation::Pile1 => &mut self.piles[1],
            BoardLocation::Pile2 => &mut self.piles[2],
            BoardLocation::Pile3 => &mut self.piles[3],
            BoardLocation::Pile4 => &mut self.piles[4],
            BoardLocation::Pile5 => &mut self.piles[5],
            BoardLocation::Pile6 => &mut self.piles[6],
            BoardLocation::FoundationHearts => &mut self.foundations.heart,
            BoardLocation::FoundationDiamonds => &mut self.foundations.diamond,
            BoardLocation::FoundationClubs => &mut self.foundations.club,
            BoardLocation::FoundationSpades => &mut self.foundations.spade,
        }
    }

    /// Move every card from `from_index` to the top of `from` onto `to`,
    /// keeping their order. A pile left with cards has its new top turned up.
    ///
    /// No legality check happens here. Returns the moved cards; an index past
    /// the top moves nothing.
    pub fn move_tail(&mut self, from: BoardLocation, from_index: usize, to: BoardLocation) -> MovedCards {
        let source = self.stack_mut(from);
        if from_index >= source.len() {
            return MovedCards::new();
        }
        let moved: MovedCards = source.drain(from_index..).collect();
        self.stack_mut(to).extend(moved.iter().copied());

        // Flip after the append: a same-pile move ends with its own run on top.
        if from.is_pile() {
            if let Some(top) = self.stack_mut(from).last_mut() {
                top.upturned = true;
            }
        }

        moved
    }

    /// Every card on the table, in no particular order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        BoardLocation::ALL.into_iter().flat_map(move |location| self.stack(location).iter())
    }

    /// Number of cards on the table; 52 for any game this engine produced.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.foundations.len() + self.piles.iter().map(Vec::len).sum::<usize>()
    }

    /// All four foundations are complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        Suit::ALL.iter().all(|&suit| self.foundations.get(suit).len() == RANK_COUNT)
    }

    /// Check the board invariants.
    ///
    /// - exactly one standard deck across all sequences
    /// - stock face down, waste face up
    /// - each pile's face-up cards are a suffix forming an alternating,
    ///   descending run
    /// - foundation cards are face up
    ///
    /// Foundation order is not checked: a pile run may land on a foundation
    /// when its base card fits, carrying the rest of the run with it.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen: Vec<(Suit, u8)> = self.cards().map(|c| (c.suit(), c.value())).collect();
        seen.sort_unstable();
        let mut expected: Vec<(Suit, u8)> = build_unshuffled_deck().iter().map(|c| (c.suit(), c.value())).collect();
        expected.sort_unstable();
        if seen != expected {
            return false;
        }

        if self.deck.unturned.iter().any(|c| c.upturned) || self.deck.turned.iter().any(|c| !c.upturned) {
            return false;
        }

        let piles_ok = self.piles.iter().all(|pile| {
            let first_up = pile.iter().position(|c| c.upturned).unwrap_or(pile.len());
            let run = &pile[first_up..];
            run.iter().all(|c| c.upturned)
                && run.windows(2).all(|pair| {
                    pair[0].suit().is_opposite_color(pair[1].suit()) && pair[0].value() == pair[1].value() + 1
                })
        });

        let foundations_ok = Suit::ALL
            .iter()
            .all(|&suit| self.foundations.get(suit).iter().all(|c| c.upturned));

        piles_ok && foundations_ok
    }

    /// Encode the game as a compact bincode snapshot.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, KlondikeError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`Game::to_snapshot`].
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, KlondikeError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Lay out a 52-card sequence as a fresh game.
///
/// Pile `i` takes `i + 1` cards popped off the end of `cards`, in pop order,
/// and only its last card is turned up. What remains is the stock.
///
/// # Panics
///
/// Panics if `cards` holds fewer than 28 cards.
#[must_use]
pub fn deal(id: GameId, mut cards: Vec<Card>) -> Game {
    assert!(
        cards.len() >= TABLEAU_DEAL,
        "Dealing needs at least {TABLEAU_DEAL} cards, got {}",
        cards.len()
    );

    let tableau = cards.split_off(cards.len() - TABLEAU_DEAL);
    let mut popped = tableau.into_iter().rev();
    let mut piles: [Vec<Card>; PILE_COUNT] = Default::default();

    for (i, pile) in piles.iter_mut().enumerate() {
        pile.extend(popped.by_ref().take(i + 1));
        for (depth, card) in pile.iter_mut().enumerate() {
            card.upturned = depth == i;
        }
    }

    for card in &mut cards {
        card.upturned = false;
    }

    Game {
        id,
        deck: Deck::new(cards),
        foundations: Foundations::default(),
        piles,
    }
}

/// Shuffle a fresh deck from `rng`, take an id from `ids`, and deal.
#[instrument(skip(rng, ids), fields(seed = rng.seed()))]
pub fn new_game_with(rng: &mut GameRng, ids: &mut impl IdSource) -> Game {
    let shuffled = shuffle(&build_unshuffled_deck(), rng);
    debug_assert_eq!(shuffled.len(), DECK_SIZE);

    let game = deal(ids.next_id(), shuffled);
    debug!(game_id = %game.id, "dealt new game");
    game
}

/// Deal a new game from an entropy-seeded shuffle with a process-unique id.
#[must_use]
pub fn new_game() -> Game {
    new_game_with(&mut GameRng::from_entropy(), &mut ProcessIds::new())
}
