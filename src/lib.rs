//! A standard 52-card playing-card deck with optional `no_std` support.
//!
//! The crate provides an immutable, totally ordered [`Card`] value and a
//! [`Deck`] that owns a seeded random number generator for reproducible
//! shuffling and sequential dealing.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, DeckOptions};
//!
//! let mut deck = Deck::new(DeckOptions::default().with_shuffle_on_create(true), 42);
//! let hand = deck.deal_cards(5).unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.remaining(), 47);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError, InsertError};
pub use options::{DeckOptions, DeckOrder};
