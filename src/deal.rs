//! Four-hand deals and the PBN deal-string codec.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ParseDealError;
use crate::hand::Hand;

/// A seat at the table, in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Seat {
    /// North.
    #[default]
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
}

impl Seat {
    /// All seats in clockwise order starting from North.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Parses a seat from its letter (`N`, `E`, `S`, or `W`).
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Returns the seat letter.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Returns the next seat clockwise.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A complete deal of four hands.
///
/// Hands are stored per seat; the `first` seat is the one named in the PBN
/// deal-string prefix and determines the order hands are written in.
///
/// # Example
///
/// ```
/// use pbnrs::{Deal, Seat};
///
/// let deal = Deal::from_pbn(
///     "N:AKQT3.J6.KJ42.95 652.AK42.AQ87.T4 J74.QT95.T.AK863 98.873.9653.QJ72",
/// )?;
/// assert_eq!(deal.hand(Seat::North).to_pbn(), "AKQT3.J6.KJ42.95");
/// # Ok::<(), pbnrs::ParseDealError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deal {
    /// The seat the deal string starts from.
    first: Seat,
    /// Hands indexed in North, East, South, West order.
    hands: [Hand; 4],
}

impl Deal {
    /// Creates a deal of four empty hands starting from the given seat.
    #[must_use]
    pub const fn new(first: Seat) -> Self {
        Self {
            first,
            hands: [const { Hand::new() }; 4],
        }
    }

    /// Returns the seat the deal string starts from.
    #[must_use]
    pub const fn first(&self) -> Seat {
        self.first
    }

    /// Returns the hand at the given seat.
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat as usize]
    }

    /// Returns the hand at the given seat for mutation.
    pub const fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        &mut self.hands[seat as usize]
    }

    /// Deals a shuffled 52-card deck into four hands of thirteen cards.
    ///
    /// The shuffle is driven by a seeded RNG, so the same seed always
    /// produces the same deal. Hands are left unsorted; call
    /// [`Hand::sort`] for canonical rendering.
    #[must_use]
    pub fn random(first: Seat, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut deck = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::PBN_ORDER {
            for rank in Rank::DESCENDING {
                deck.push(Card::new(rank, suit));
            }
        }
        deck.shuffle(&mut rng);

        let mut deal = Self::new(first);
        let mut seat = first;
        for chunk in deck.chunks(DECK_SIZE / 4) {
            for &card in chunk {
                deal.hand_mut(seat).add_card(card);
            }
            seat = seat.next();
        }
        deal
    }

    /// Encodes the deal as a PBN deal string.
    ///
    /// The first seat's letter and a `:` are followed by the four hands in
    /// PBN suit-string form, clockwise from the first seat, separated by
    /// spaces. Hands are written as-is; sort them first for canonical
    /// output.
    #[must_use]
    pub fn to_pbn(&self) -> String {
        let mut out = String::new();
        out.push(self.first.to_char());
        out.push(':');
        let mut seat = self.first;
        for index in 0..4 {
            if index > 0 {
                out.push(' ');
            }
            out.push_str(&self.hand(seat).to_pbn());
            seat = seat.next();
        }
        out
    }

    /// Parses a PBN deal string.
    ///
    /// # Errors
    ///
    /// Returns an error if the seat prefix is missing or unknown, if there
    /// are not exactly four space-separated hands, or if any hand fails to
    /// parse.
    pub fn from_pbn(s: &str) -> Result<Self, ParseDealError> {
        let (prefix, rest) = s.split_once(':').ok_or(ParseDealError::MissingSeat)?;
        let mut chars = prefix.chars();
        let (Some(seat), None) = (chars.next(), chars.next()) else {
            return Err(ParseDealError::MissingSeat);
        };
        let first = Seat::from_char(seat).ok_or(ParseDealError::Seat(seat))?;

        let mut deal = Self::new(first);
        let mut seat = first;
        let mut count = 0;
        for hand in rest.split(' ') {
            if count == 4 {
                return Err(ParseDealError::MissingHands);
            }
            *deal.hand_mut(seat) = Hand::from_pbn(hand)?;
            seat = seat.next();
            count += 1;
        }
        if count != 4 {
            return Err(ParseDealError::MissingHands);
        }
        Ok(deal)
    }
}

impl fmt::Display for Deal {
    /// Writes the PBN deal string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pbn())
    }
}
