//! Symbolic board locations.
//!
//! A closed set of 13 addresses, each naming exactly one card sequence in a
//! game. Locations serialize as their upper-case names (`PILE3`,
//! `FOUNDATION_HEARTS`, ...), the same names the event log carries.

use serde::{Deserialize, Serialize};

use crate::cards::Suit;
use crate::core::{KlondikeError, PILE_COUNT};

/// One of the 13 card sequences on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoardLocation {
    DeckTurned,
    DeckUnturned,
    Pile0,
    Pile1,
    Pile2,
    Pile3,
    Pile4,
    Pile5,
    Pile6,
    FoundationHearts,
    FoundationDiamonds,
    FoundationClubs,
    FoundationSpades,
}

use BoardLocation::*;

/// Tableau piles in index order.
const PILES: [BoardLocation; PILE_COUNT] = [Pile0, Pile1, Pile2, Pile3, Pile4, Pile5, Pile6];

/// Foundation location for each suit, and back.
const FOUNDATION_SUITS: [(BoardLocation, Suit); 4] = [
    (FoundationHearts, Suit::Heart),
    (FoundationDiamonds, Suit::Diamond),
    (FoundationClubs, Suit::Club),
    (FoundationSpades, Suit::Spade),
];

impl BoardLocation {
    /// Every location.
    pub const ALL: [BoardLocation; 13] = [
        DeckTurned,
        DeckUnturned,
        Pile0,
        Pile1,
        Pile2,
        Pile3,
        Pile4,
        Pile5,
        Pile6,
        FoundationHearts,
        FoundationDiamonds,
        FoundationClubs,
        FoundationSpades,
    ];

    /// The wire name of this location.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DeckTurned => "DECK_TURNED",
            DeckUnturned => "DECK_UNTURNED",
            Pile0 => "PILE0",
            Pile1 => "PILE1",
            Pile2 => "PILE2",
            Pile3 => "PILE3",
            Pile4 => "PILE4",
            Pile5 => "PILE5",
            Pile6 => "PILE6",
            FoundationHearts => "FOUNDATION_HEARTS",
            FoundationDiamonds => "FOUNDATION_DIAMONDS",
            FoundationClubs => "FOUNDATION_CLUBS",
            FoundationSpades => "FOUNDATION_SPADES",
        }
    }

    /// The tableau pile at `index`, if there is one.
    #[must_use]
    pub fn pile(index: usize) -> Option<Self> {
        PILES.get(index).copied()
    }

    /// The foundation built for `suit`.
    #[must_use]
    pub fn foundation_for(suit: Suit) -> Self {
        FOUNDATION_SUITS[suit.index()].0
    }

    #[must_use]
    pub fn is_pile(self) -> bool {
        self.pile_index().is_some()
    }

    #[must_use]
    pub fn is_foundation(self) -> bool {
        self.foundation_suit().is_some()
    }

    #[must_use]
    pub fn is_deck(self) -> bool {
        matches!(self, DeckTurned | DeckUnturned)
    }

    /// Index into the tableau for pile locations.
    #[must_use]
    pub fn pile_index(self) -> Option<usize> {
        PILES.iter().position(|&pile| pile == self)
    }

    /// The suit a foundation location accepts.
    #[must_use]
    pub fn foundation_suit(self) -> Option<Suit> {
        FOUNDATION_SUITS
            .iter()
            .find(|(location, _)| *location == self)
            .map(|&(_, suit)| suit)
    }
}

impl std::fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for BoardLocation {
    type Err = KlondikeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|location| location.name() == s)
            .ok_or_else(|| KlondikeError::UnknownLocation(s.to_string()))
    }
}
