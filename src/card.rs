//! Card, suit, and rank types.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
///
/// The derived ordering ranks suits Clubs < Diamonds < Hearts < Spades,
/// matching the conventional bridge suit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// Suits in PBN order: Spades first, Clubs last.
    pub const PBN_ORDER: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Parses a suit from its letter (`S`, `H`, `D`, or `C`).
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'S' => Some(Self::Spades),
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            _ => None,
        }
    }

    /// Returns the suit letter.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }

    /// Returns the suit symbol (`♠`, `♥`, `♦`, or `♣`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    /// Returns whether the suit is red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Card rank.
///
/// Discriminants are the rank values used for comparison: pips count as
/// themselves and Jack = 11, Queen = 12, King = 13, Ace = 14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2.
    Two = 2,
    /// 3.
    Three = 3,
    /// 4.
    Four = 4,
    /// 5.
    Five = 5,
    /// 6.
    Six = 6,
    /// 7.
    Seven = 7,
    /// 8.
    Eight = 8,
    /// 9.
    Nine = 9,
    /// 10.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Ace.
    Ace = 14,
}

impl Rank {
    /// Ranks in descending order, Ace first.
    pub const DESCENDING: [Self; 13] = [
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
    ];

    /// Parses a rank from its character (`2`-`9`, `T`, `J`, `Q`, `K`, or `A`).
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }

    /// Returns the rank character.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// Returns the high-card-point value of the rank.
    ///
    /// Ace = 4, King = 3, Queen = 2, Jack = 1, everything else 0.
    #[must_use]
    pub const fn hcp(self) -> u8 {
        match self {
            Self::Ace => 4,
            Self::King => 3,
            Self::Queen => 2,
            Self::Jack => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A playing card.
///
/// The derived ordering is suit-major ascending (Clubs lowest, Spades
/// highest, then rank within suit), so the conventional descending bridge
/// order is obtained by reversing the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    /// Writes the two-character short code, rank character then suit letter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a two-character short code such as `AS` or `5C`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Length);
        };
        let rank = Rank::from_char(rank).ok_or(ParseCardError::Rank(rank))?;
        let suit = Suit::from_char(suit).ok_or(ParseCardError::Suit(suit))?;
        Ok(Self::new(rank, suit))
    }
}

/// The 52 card singletons, named suit letter then rank character.
impl Card {
    /// A♠.
    pub const SA: Self = Self::new(Rank::Ace, Suit::Spades);
    /// K♠.
    pub const SK: Self = Self::new(Rank::King, Suit::Spades);
    /// Q♠.
    pub const SQ: Self = Self::new(Rank::Queen, Suit::Spades);
    /// J♠.
    pub const SJ: Self = Self::new(Rank::Jack, Suit::Spades);
    /// T♠.
    pub const ST: Self = Self::new(Rank::Ten, Suit::Spades);
    /// 9♠.
    pub const S9: Self = Self::new(Rank::Nine, Suit::Spades);
    /// 8♠.
    pub const S8: Self = Self::new(Rank::Eight, Suit::Spades);
    /// 7♠.
    pub const S7: Self = Self::new(Rank::Seven, Suit::Spades);
    /// 6♠.
    pub const S6: Self = Self::new(Rank::Six, Suit::Spades);
    /// 5♠.
    pub const S5: Self = Self::new(Rank::Five, Suit::Spades);
    /// 4♠.
    pub const S4: Self = Self::new(Rank::Four, Suit::Spades);
    /// 3♠.
    pub const S3: Self = Self::new(Rank::Three, Suit::Spades);
    /// 2♠.
    pub const S2: Self = Self::new(Rank::Two, Suit::Spades);

    /// A♥.
    pub const HA: Self = Self::new(Rank::Ace, Suit::Hearts);
    /// K♥.
    pub const HK: Self = Self::new(Rank::King, Suit::Hearts);
    /// Q♥.
    pub const HQ: Self = Self::new(Rank::Queen, Suit::Hearts);
    /// J♥.
    pub const HJ: Self = Self::new(Rank::Jack, Suit::Hearts);
    /// T♥.
    pub const HT: Self = Self::new(Rank::Ten, Suit::Hearts);
    /// 9♥.
    pub const H9: Self = Self::new(Rank::Nine, Suit::Hearts);
    /// 8♥.
    pub const H8: Self = Self::new(Rank::Eight, Suit::Hearts);
    /// 7♥.
    pub const H7: Self = Self::new(Rank::Seven, Suit::Hearts);
    /// 6♥.
    pub const H6: Self = Self::new(Rank::Six, Suit::Hearts);
    /// 5♥.
    pub const H5: Self = Self::new(Rank::Five, Suit::Hearts);
    /// 4♥.
    pub const H4: Self = Self::new(Rank::Four, Suit::Hearts);
    /// 3♥.
    pub const H3: Self = Self::new(Rank::Three, Suit::Hearts);
    /// 2♥.
    pub const H2: Self = Self::new(Rank::Two, Suit::Hearts);

    /// A♦.
    pub const DA: Self = Self::new(Rank::Ace, Suit::Diamonds);
    /// K♦.
    pub const DK: Self = Self::new(Rank::King, Suit::Diamonds);
    /// Q♦.
    pub const DQ: Self = Self::new(Rank::Queen, Suit::Diamonds);
    /// J♦.
    pub const DJ: Self = Self::new(Rank::Jack, Suit::Diamonds);
    /// T♦.
    pub const DT: Self = Self::new(Rank::Ten, Suit::Diamonds);
    /// 9♦.
    pub const D9: Self = Self::new(Rank::Nine, Suit::Diamonds);
    /// 8♦.
    pub const D8: Self = Self::new(Rank::Eight, Suit::Diamonds);
    /// 7♦.
    pub const D7: Self = Self::new(Rank::Seven, Suit::Diamonds);
    /// 6♦.
    pub const D6: Self = Self::new(Rank::Six, Suit::Diamonds);
    /// 5♦.
    pub const D5: Self = Self::new(Rank::Five, Suit::Diamonds);
    /// 4♦.
    pub const D4: Self = Self::new(Rank::Four, Suit::Diamonds);
    /// 3♦.
    pub const D3: Self = Self::new(Rank::Three, Suit::Diamonds);
    /// 2♦.
    pub const D2: Self = Self::new(Rank::Two, Suit::Diamonds);

    /// A♣.
    pub const CA: Self = Self::new(Rank::Ace, Suit::Clubs);
    /// K♣.
    pub const CK: Self = Self::new(Rank::King, Suit::Clubs);
    /// Q♣.
    pub const CQ: Self = Self::new(Rank::Queen, Suit::Clubs);
    /// J♣.
    pub const CJ: Self = Self::new(Rank::Jack, Suit::Clubs);
    /// T♣.
    pub const CT: Self = Self::new(Rank::Ten, Suit::Clubs);
    /// 9♣.
    pub const C9: Self = Self::new(Rank::Nine, Suit::Clubs);
    /// 8♣.
    pub const C8: Self = Self::new(Rank::Eight, Suit::Clubs);
    /// 7♣.
    pub const C7: Self = Self::new(Rank::Seven, Suit::Clubs);
    /// 6♣.
    pub const C6: Self = Self::new(Rank::Six, Suit::Clubs);
    /// 5♣.
    pub const C5: Self = Self::new(Rank::Five, Suit::Clubs);
    /// 4♣.
    pub const C4: Self = Self::new(Rank::Four, Suit::Clubs);
    /// 3♣.
    pub const C3: Self = Self::new(Rank::Three, Suit::Clubs);
    /// 2♣.
    pub const C2: Self = Self::new(Rank::Two, Suit::Clubs);
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
