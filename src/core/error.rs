//! Errors raised at the edges of the engine.
//!
//! The rules themselves never fail: an illegal move or an exhausted deck is a
//! no-op. Errors only appear when decoding external input (location names,
//! serialized cards) or encoding/decoding game snapshots.

/// Error produced when external input cannot be turned into engine values.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum KlondikeError {
    /// A location name that is not one of the 13 board locations.
    #[display("Unknown board location: {}", _0)]
    UnknownLocation(String),

    /// A suit name that is not HEART, DIAMOND, CLUB or SPADE.
    #[display("Unknown suit: {}", _0)]
    UnknownSuit(String),

    /// A card value outside 1..=13.
    #[display("Card value {} is out of range 1..=13", _0)]
    CardValueOutOfRange(u8),

    /// A serialized card whose display label does not match its value.
    #[display("Card display {:?} does not match value {}", display, value)]
    DisplayMismatch {
        /// Value carried by the card.
        value: u8,
        /// Label carried by the card.
        display: String,
    },

    /// Snapshot encoding or decoding failed.
    #[display("Snapshot error: {}", _0)]
    Snapshot(String),
}

impl std::error::Error for KlondikeError {}

impl From<bincode::Error> for KlondikeError {
    fn from(err: bincode::Error) -> Self {
        Self::Snapshot(err.to_string())
    }
}
