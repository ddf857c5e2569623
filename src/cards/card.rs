//! Suits, colors and playing cards.
//!
//! A card's suit and value are fixed at creation. The only thing that ever
//! changes is whether it lies face up.

use serde::{Deserialize, Serialize};

use crate::core::{KlondikeError, ACE, KING};

/// Card suit. Serialized in upper case (`HEART`, `DIAMOND`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

/// Suit color. Tableau runs alternate colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    /// All suits, in the order the unshuffled deck is built.
    pub const ALL: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

    /// The suit's color: hearts and diamonds are red.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Heart | Suit::Diamond => Color::Red,
            Suit::Club | Suit::Spade => Color::Black,
        }
    }

    /// True when the two suits have different colors.
    #[must_use]
    pub fn is_opposite_color(self, other: Suit) -> bool {
        !matches!(
            (self.color(), other.color()),
            (Color::Red, Color::Red) | (Color::Black, Color::Black)
        )
    }

    /// Position in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Upper-case wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Heart => "HEART",
            Suit::Diamond => "DIAMOND",
            Suit::Club => "CLUB",
            Suit::Spade => "SPADE",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Suit {
    type Err = KlondikeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| KlondikeError::UnknownSuit(s.to_string()))
    }
}

/// Display labels indexed by `value - 1`.
const DISPLAYS: [&str; 13] = ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"];

/// A playing card.
///
/// Serialized as `{suit, value, display, upturned}`; `display` is derived from
/// `value` and checked on the way back in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "CardRepr", try_from = "CardRepr")]
pub struct Card {
    suit: Suit,
    value: u8,
    /// Whether the card lies face up.
    pub upturned: bool,
}

impl Card {
    /// Create a face-down card.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside `1..=13`. Use [`Card::try_new`] for
    /// untrusted input.
    #[must_use]
    pub fn new(suit: Suit, value: u8) -> Self {
        assert!((ACE..=KING).contains(&value), "Card value must be 1..=13, got {value}");
        Self { suit, value, upturned: false }
    }

    /// Create a face-down card, rejecting out-of-range values.
    pub fn try_new(suit: Suit, value: u8) -> Result<Self, KlondikeError> {
        if (ACE..=KING).contains(&value) {
            Ok(Self { suit, value, upturned: false })
        } else {
            Err(KlondikeError::CardValueOutOfRange(value))
        }
    }

    /// Same card, face up.
    #[must_use]
    pub fn face_up(mut self) -> Self {
        self.upturned = true;
        self
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// 1 = Ace, 11 = Jack, 12 = Queen, 13 = King.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Human label: `A`, `2`..`10`, `J`, `Q`, `K`.
    #[must_use]
    pub fn display(&self) -> &'static str {
        DISPLAYS[usize::from(self.value - 1)]
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self.suit {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        };
        if self.upturned {
            write!(f, "{}{}", self.display(), symbol)
        } else {
            write!(f, "[{}{}]", self.display(), symbol)
        }
    }
}

/// Wire shape of a card.
#[derive(Serialize, Deserialize)]
struct CardRepr {
    suit: Suit,
    value: u8,
    display: String,
    upturned: bool,
}

impl From<Card> for CardRepr {
    fn from(card: Card) -> Self {
        Self {
            suit: card.suit,
            value: card.value,
            display: card.display().to_string(),
            upturned: card.upturned,
        }
    }
}

impl TryFrom<CardRepr> for Card {
    type Error = KlondikeError;

    fn try_from(repr: CardRepr) -> Result<Self, Self::Error> {
        let mut card = Card::try_new(repr.suit, repr.value)?;
        if card.display() != repr.display {
            return Err(KlondikeError::DisplayMismatch {
                value: repr.value,
                display: repr.display,
            });
        }
        card.upturned = repr.upturned;
        Ok(card)
    }
}
