//! A bridge hand and Portable Bridge Notation (PBN) library with optional
//! `no_std` support.
//!
//! The crate models playing [`Card`]s, ordered [`Hand`]s with sorting, suit
//! filtering, rendering, and high-card-point scoring, and full four-hand
//! [`Deal`]s, all round-tripping through the compact PBN suit-string
//! format.
//!
//! # Example
//!
//! ```
//! use pbnrs::{Hand, Suit};
//!
//! let mut hand = Hand::from_pbn("A432.K432.QJ3.JT")?;
//! hand.sort();
//! assert_eq!(hand.hcp(), 11);
//! assert_eq!(hand.cards_in_suit(Suit::Spades).count(), 4);
//! assert_eq!(hand.to_pbn(), "A432.K432.QJ3.JT");
//! # Ok::<(), pbnrs::ParseHandError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deal;
pub mod error;
pub mod hand;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deal::{Deal, Seat};
pub use error::{ParseCardError, ParseDealError, ParseHandError};
pub use hand::Hand;
