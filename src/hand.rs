//! Bridge hand representation and the PBN suit-string codec.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank, Suit};
use crate::error::ParseHandError;

/// An ordered collection of cards held by one player.
///
/// A hand enforces no size limit and no uniqueness: callers are responsible
/// for supplying sensible hands (thirteen distinct cards for bridge).
///
/// # Example
///
/// ```
/// use pbnrs::{Card, Hand};
///
/// let mut hand = Hand::new();
/// hand.add_card(Card::CA);
/// hand.add_card(Card::SA);
/// hand.sort();
/// assert_eq!(hand.to_string(), "AS AC");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first occurrence of a card from the hand.
    ///
    /// Returns whether the card was present.
    pub fn remove_card(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sorts the hand in place into descending bridge order.
    ///
    /// Suits come out Spades, Hearts, Diamonds, Clubs, and ranks descend
    /// from Ace within each suit. The sort is stable, so duplicate cards
    /// retain their relative order. Returns the hand for call chaining.
    pub fn sort(&mut self) -> &mut Self {
        self.cards.sort_by(|a, b| b.cmp(a));
        self
    }

    /// Returns the cards of the given suit, in their current order.
    ///
    /// The hand is not re-sorted: on a sorted hand the cards come out in
    /// descending rank order.
    pub fn cards_in_suit(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |c| c.suit == suit)
    }

    /// Computes the high-card points of the hand.
    ///
    /// Ace counts 4, King 3, Queen 2, Jack 1. Order-independent. Saturates
    /// at `u8::MAX` for hands larger than any real deal.
    ///
    /// # Example
    ///
    /// ```
    /// use pbnrs::Hand;
    ///
    /// let hand = Hand::from_pbn("A432.K432.QJ3.JT")?;
    /// assert_eq!(hand.hcp(), 11);
    /// # Ok::<(), pbnrs::ParseHandError>(())
    /// ```
    #[must_use]
    pub fn hcp(&self) -> u8 {
        self.cards
            .iter()
            .map(|c| c.rank.hcp())
            .fold(0, u8::saturating_add)
    }

    /// Encodes the hand as a PBN suit string.
    ///
    /// The four suit groups appear in Spades, Hearts, Diamonds, Clubs order
    /// separated by `.`, with the rank characters of each group sorted
    /// descending. A suit with no cards contributes an empty group; an empty
    /// hand encodes as `-`.
    ///
    /// # Example
    ///
    /// ```
    /// use pbnrs::{Card, Hand};
    ///
    /// let hand: Hand = [Card::SK, Card::SA, Card::H7, Card::C2].into_iter().collect();
    /// assert_eq!(hand.to_pbn(), "AK.7..2");
    /// ```
    #[must_use]
    pub fn to_pbn(&self) -> String {
        if self.cards.is_empty() {
            return String::from("-");
        }

        let mut out = String::with_capacity(self.cards.len() + 3);
        for (index, suit) in Suit::PBN_ORDER.into_iter().enumerate() {
            if index > 0 {
                out.push('.');
            }
            let mut ranks: Vec<Rank> = self.cards_in_suit(suit).map(|c| c.rank).collect();
            ranks.sort_by(|a, b| b.cmp(a));
            for rank in ranks {
                out.push(rank.to_char());
            }
        }
        out
    }

    /// Parses a PBN suit string into a new hand.
    ///
    /// The literal `-` parses to an empty hand. Otherwise the string must
    /// split on `.` into exactly four suit groups, read as Spades, Hearts,
    /// Diamonds, Clubs; cards are appended group by group, left to right.
    /// Hand size and duplicate cards are not validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not declare all four suits, or
    /// if a group contains a character that is not a rank.
    pub fn from_pbn(s: &str) -> Result<Self, ParseHandError> {
        if s == "-" {
            return Ok(Self::new());
        }

        let mut groups = [""; 4];
        let mut count = 0;
        for group in s.split('.') {
            if count == 4 {
                return Err(ParseHandError::MissingSuits);
            }
            groups[count] = group;
            count += 1;
        }
        if count != 4 {
            return Err(ParseHandError::MissingSuits);
        }

        let mut hand = Self::new();
        for (group, suit) in groups.into_iter().zip(Suit::PBN_ORDER) {
            for c in group.chars() {
                let rank =
                    Rank::from_char(c).ok_or(ParseHandError::UnknownCard { rank: c, suit })?;
                hand.add_card(Card::new(rank, suit));
            }
        }
        Ok(hand)
    }
}

impl fmt::Display for Hand {
    /// Writes the cards as space-separated short codes, in current order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}
