//! Deck configuration options.

/// Canonical order of a freshly built full deck, listed from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DeckOrder {
    /// Clubs Two..Ace, then Diamonds, Hearts, Spades.
    #[default]
    SuitMajor,
    /// Every Two Clubs..Spades, then every Three, and so on up to the Aces.
    ///
    /// This is ascending card order.
    RankMajor,
}

/// Configuration options for building a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{DeckOptions, DeckOrder};
///
/// let options = DeckOptions::default()
///     .with_order(DeckOrder::RankMajor)
///     .with_shuffle_on_create(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeckOptions {
    /// Order of the 52 cards before any shuffle.
    pub order: DeckOrder,
    /// Whether the deck is shuffled right after it is built.
    pub shuffle_on_create: bool,
}

impl DeckOptions {
    /// Sets the canonical order.
    #[must_use]
    pub const fn with_order(mut self, order: DeckOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets whether the deck is shuffled on creation.
    #[must_use]
    pub const fn with_shuffle_on_create(mut self, shuffle: bool) -> Self {
        self.shuffle_on_create = shuffle;
        self
    }
}
