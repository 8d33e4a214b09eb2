//! Error types for parsing operations.

use thiserror::Error;

use crate::card::Suit;

/// Errors that can occur when parsing a card short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is not exactly two characters.
    #[error("card code must be two characters")]
    Length,
    /// Unknown rank character.
    #[error("unknown rank character '{0}'")]
    Rank(char),
    /// Unknown suit character.
    #[error("unknown suit character '{0}'")]
    Suit(char),
}

/// Errors that can occur when parsing a PBN hand string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseHandError {
    /// The string does not split into exactly four dot-separated suit groups.
    #[error("All four suits must be declared.")]
    MissingSuits,
    /// A rank character does not resolve to a card in the group's suit.
    #[error("no such card '{rank}{suit}'")]
    UnknownCard {
        /// The offending rank character.
        rank: char,
        /// The suit of the group the character appeared in.
        suit: Suit,
    },
}

/// Errors that can occur when parsing a PBN deal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseDealError {
    /// The deal string has no single-letter seat prefix before `:`.
    #[error("deal must start with a seat letter and ':'")]
    MissingSeat,
    /// Unknown seat character.
    #[error("unknown seat character '{0}'")]
    Seat(char),
    /// The deal does not contain exactly four hands.
    #[error("deal must contain four hands")]
    MissingHands,
    /// One of the four hands failed to parse.
    #[error(transparent)]
    Hand(#[from] ParseHandError),
}
