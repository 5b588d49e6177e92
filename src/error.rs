//! Error types for card and deck operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a card from untyped input.
///
/// Every variant means the input lies outside the rank or suit domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank encoding is outside `0..=12`.
    #[error("invalid rank value {0}")]
    InvalidRank(u8),
    /// Suit encoding is outside `0..=3`.
    #[error("invalid suit value {0}")]
    InvalidSuit(u8),
    /// Text is not of the form `"<rank> of <suit>"`.
    #[error("unrecognized card name")]
    UnknownName,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// Fewer cards left than requested.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when adding cards to a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertError {
    /// The card is already in the deck.
    #[error("{0} is already in the deck")]
    DuplicateCard(Card),
}
