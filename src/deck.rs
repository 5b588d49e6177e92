//! The deck: an owned, shuffleable sequence of distinct cards.

use alloc::vec::Vec;

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank, Suit};
use crate::error::{DealError, InsertError};
use crate::options::{DeckOptions, DeckOrder};

/// A deck of distinct playing cards.
///
/// The deck owns its random number generator, seeded at construction, so the
/// same seed always produces the same shuffles. The *top* of the deck is the
/// next card [`Deck::deal_card`] returns; [`Deck::iter`] walks from the top
/// down.
///
/// A full deck starts in [`DeckOrder::SuitMajor`] order unless configured
/// otherwise: the Two of Clubs on top and the Ace of Spades at the bottom.
///
/// ```
/// use deckrs::{Card, Deck, Rank, Suit};
///
/// let mut deck = Deck::full(7);
/// assert_eq!(deck.remaining(), 52);
/// assert_eq!(deck.deal_card(), Ok(Card::new(Suit::Clubs, Rank::Two)));
/// deck.shuffle();
/// assert_eq!(deck.remaining(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards, bottom first; the last element is the top.
    cards: Vec<Card>,
    /// Bitset of [`Card::index`] for every card in `cards`.
    members: u64,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full 52-card deck built according to `options`.
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        let mut deck = Self::empty(seed);
        deck.cards = Self::create_cards(options.order);
        deck.members = deck.cards.iter().fold(0, |bits, card| bits | bit(*card));

        if options.shuffle_on_create {
            deck.shuffle();
        }
        deck
    }

    /// Creates a full deck in the default canonical order.
    #[must_use]
    pub fn full(seed: u64) -> Self {
        Self::new(DeckOptions::default(), seed)
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub fn empty(seed: u64) -> Self {
        Self {
            cards: Vec::new(),
            members: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a custom deck from cards listed top first.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::DuplicateCard`] if a card appears twice.
    pub fn from_cards<I>(seed: u64, cards: I) -> Result<Self, InsertError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut deck = Self::empty(seed);
        for card in cards {
            deck.insert(card)?;
        }
        Ok(deck)
    }

    /// Builds the 52 cards in `order`, stored bottom first.
    fn create_cards(order: DeckOrder) -> Vec<Card> {
        let mut cards = Vec::with_capacity(Card::COUNT);

        match order {
            DeckOrder::SuitMajor => {
                for suit in Suit::ALL {
                    for rank in Rank::ALL {
                        cards.push(Card::new(suit, rank));
                    }
                }
            }
            DeckOrder::RankMajor => {
                for rank in Rank::ALL {
                    for suit in Suit::ALL {
                        cards.push(Card::new(suit, rank));
                    }
                }
            }
        }

        cards.reverse();
        cards
    }

    /// Adds a card to the bottom of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::DuplicateCard`] if the card is already in the deck.
    pub fn insert(&mut self, card: Card) -> Result<(), InsertError> {
        if self.contains(card) {
            return Err(InsertError::DuplicateCard(card));
        }
        self.members |= bit(card);
        self.cards.insert(0, card);
        Ok(())
    }

    /// Shuffles the remaining cards using the deck's own generator.
    ///
    /// Every permutation is equally likely. Membership and size are unchanged.
    pub fn shuffle(&mut self) {
        trace!("shuffling {} cards", self.cards.len());
        self.cards.shuffle(&mut self.rng);
    }

    /// Shuffles the remaining cards using an external generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        trace!("shuffling {} cards with external rng", self.cards.len());
        self.cards.shuffle(rng);
    }

    /// Sorts the remaining cards so the lowest card is on top.
    pub fn sort(&mut self) {
        self.cards.sort_unstable_by(|a, b| b.cmp(a));
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain.
    pub fn deal_card(&mut self) -> Result<Card, DealError> {
        let Some(card) = self.cards.pop() else {
            debug!("deal refused: deck is empty");
            return Err(DealError::EmptyDeck);
        };
        self.members &= !bit(card);
        trace!("dealt {card}, {} remaining", self.cards.len());
        Ok(card)
    }

    /// Removes and returns the top `count` cards, top first.
    ///
    /// Either all requested cards are dealt or none are.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if cards were requested from an empty
    /// deck, or [`DealError::NotEnoughCards`] if fewer than `count` remain.
    pub fn deal_cards(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        if count > 0 && self.cards.is_empty() {
            debug!("deal of {count} refused: deck is empty");
            return Err(DealError::EmptyDeck);
        }
        if count > self.cards.len() {
            debug!(
                "deal of {count} refused: only {} remaining",
                self.cards.len()
            );
            return Err(DealError::NotEnoughCards);
        }

        let mut dealt = self.cards.split_off(self.cards.len() - count);
        dealt.reverse();
        for card in &dealt {
            self.members &= !bit(*card);
        }
        trace!("dealt {count} cards, {} remaining", self.cards.len());
        Ok(dealt)
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the number of cards not yet dealt.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether all cards have been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the card is still in the deck.
    #[must_use]
    pub const fn contains(&self, card: Card) -> bool {
        self.members & bit(card) != 0
    }

    /// Iterates over the remaining cards from the top down.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Card> + ExactSizeIterator + '_ {
        self.cards.iter().rev().copied()
    }
}

const fn bit(card: Card) -> u64 {
    1 << card.index()
}

/// Deals cards from the top until the deck is empty.
impl Iterator for Deck {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        self.deal_card().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cards.len(), Some(self.cards.len()))
    }
}

impl ExactSizeIterator for Deck {}
