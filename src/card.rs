//! Card types, name tables, and parsing.

use alloc::format;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card rank, ordered from [`Rank::Two`] (lowest) to [`Rank::Ace`] (highest).
///
/// The discriminants are the 0-based integer encoding accepted by
/// [`Rank::try_from`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2.
    #[default]
    Two = 0,
    /// 3.
    Three = 1,
    /// 4.
    Four = 2,
    /// 5.
    Five = 3,
    /// 6.
    Six = 4,
    /// 7.
    Seven = 5,
    /// 8.
    Eight = 6,
    /// 9.
    Nine = 7,
    /// 10.
    Ten = 8,
    /// Jack.
    Jack = 9,
    /// Queen.
    Queen = 10,
    /// King.
    King = 11,
    /// Ace.
    Ace = 12,
}

const RANK_NAMES: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King", "Ace",
];

const RANK_WORDS: [&str; 13] = [
    "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen",
    "King", "Ace",
];

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Lowest rank.
    pub const MIN: Self = Self::Two;
    /// Highest rank.
    pub const MAX: Self = Self::Ace;

    /// Returns `true` if `value` encodes a rank (`0..=12`).
    #[must_use]
    pub const fn is_valid(value: u8) -> bool {
        value <= Self::MAX as u8
    }

    /// Display name of the rank, e.g. `"10"` or `"Queen"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        RANK_NAMES[self as usize]
    }

    fn from_name(name: &str) -> Option<Self> {
        RANK_NAMES
            .iter()
            .zip(RANK_WORDS)
            .position(|(short, word)| {
                short.eq_ignore_ascii_case(name) || word.eq_ignore_ascii_case(name)
            })
            .map(|i| Self::ALL[i])
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(CardError::InvalidRank(value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank as Self
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Card suit, ordered for tie-breaking: Clubs < Diamonds < Hearts < Spades.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    #[default]
    Clubs = 0,
    /// Diamonds.
    Diamonds = 1,
    /// Hearts.
    Hearts = 2,
    /// Spades.
    Spades = 3,
}

const SUIT_NAMES: [&str; 4] = ["Clubs", "Diamonds", "Hearts", "Spades"];

impl Suit {
    /// All suits in ascending order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Lowest suit.
    pub const MIN: Self = Self::Clubs;
    /// Highest suit.
    pub const MAX: Self = Self::Spades;

    /// Returns `true` if `value` encodes a suit (`0..=3`).
    #[must_use]
    pub const fn is_valid(value: u8) -> bool {
        value <= Self::MAX as u8
    }

    /// Display name of the suit, e.g. `"Hearts"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        SUIT_NAMES[self as usize]
    }

    fn from_name(name: &str) -> Option<Self> {
        SUIT_NAMES
            .iter()
            .position(|suit| suit.eq_ignore_ascii_case(name))
            .map(|i| Self::ALL[i])
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(CardError::InvalidSuit(value))
    }
}

impl From<Suit> for u8 {
    fn from(suit: Suit) -> Self {
        suit as Self
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A playing card.
///
/// Cards are plain values: two cards with the same rank and suit are equal
/// and interchangeable. Ordering is by rank first, then by suit.
///
/// ```
/// use deckrs::{Card, Rank, Suit};
///
/// let card = Card::new(Suit::Hearts, Rank::Queen);
/// assert_eq!(card.to_string(), "Queen of Hearts");
/// assert!(card < Card::new(Suit::Clubs, Rank::King));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Number of distinct cards.
    pub const COUNT: usize = 52;

    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { rank, suit }
    }

    /// Creates a card from the integer encodings of its suit and rank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] or [`CardError::InvalidRank`] if
    /// either value is out of range. The suit is checked first.
    pub fn try_from_raw(suit: u8, rank: u8) -> Result<Self, CardError> {
        let suit = Suit::try_from(suit)?;
        let rank = Rank::try_from(rank)?;
        Ok(Self::new(suit, rank))
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Position of this card in ascending card order (`0..52`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank as usize * Suit::ALL.len() + self.suit as usize
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_none() && f.precision().is_none() {
            return write!(f, "{} of {}", self.rank.name(), self.suit.name());
        }
        f.pad(&format!("{} of {}", self.rank.name(), self.suit.name()))
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses `"<rank> of <suit>"`, e.g. `"Ace of Spades"` or `"10 of clubs"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = s.trim().split_once(" of ").ok_or(CardError::UnknownName)?;
        let rank = Rank::from_name(rank.trim()).ok_or(CardError::UnknownName)?;
        let suit = Suit::from_name(suit.trim()).ok_or(CardError::UnknownName)?;
        Ok(Self::new(suit, rank))
    }
}
