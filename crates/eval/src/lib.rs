// Copyright (C) 2026 The Fivedraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Fivedraw Poker hand evaluator.
//!
//! Five card draw hand evaluator. A [Hand] is dealt from a [Deck], keeps its
//! five cards sorted by rank, and ranks itself into a [HandValue] made of a
//! [HandCategory] and a tiebreak [Rank]:
//!
//! ```
//! # use fivedraw_eval::*;
//! let mut deck = Deck::default();
//! let hand = Hand::deal(&mut deck)?;
//!
//! // The top of an unshuffled deck is 2C 3C 4C 5C 6C.
//! let value = hand.classify();
//! assert_eq!(value.category(), HandCategory::StraightFlush);
//! assert_eq!(value.tiebreak(), Rank::Six);
//! # Ok::<(), fivedraw_eval::HandError>(())
//! ```
//!
//! Hands compare from the caller's point of view:
//!
//! ```
//! # use fivedraw_eval::*;
//! let pair: Hand = "4C 4H 8D JC KS".parse()?;
//! let high: Hand = "2C 5D 9H JS KC".parse()?;
//! assert_eq!(pair.compare(&high), Outcome::Win);
//! # Ok::<(), fivedraw_eval::HandError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod hand;
pub use hand::{Hand, HandCategory, HandError, HandValue, Outcome};

// Reexport cards types.
pub use fivedraw_cards::{Card, CardError, Deck, DeckError, Rank, Suit};
