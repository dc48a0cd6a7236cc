// Copyright (C) 2026 The Fivedraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Fivedraw Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use fivedraw_cards::{Card, Rank, Suit};
//! let jd = Card::new(Rank::Jack, Suit::Diamonds);
//! let td = "TD".parse::<Card>()?;
//! assert!(jd.rank() > td.rank());
//! # Ok::<(), fivedraw_cards::CardError>(())
//! ```
//!
//! and a [Deck] type that holds the 52 card deck with the top of the deck at
//! the front: [Deck::take] draws from the top, [Deck::put_back] returns cards
//! to the bottom.
//!
//! ```
//! # use fivedraw_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let cards = deck.take(5)?;
//! assert_eq!(deck.count(), 47);
//!
//! deck.put_back(cards);
//! assert_eq!(deck.count(), 52);
//! # Ok::<(), fivedraw_cards::DeckError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardError, Deck, DeckError, Rank, Suit};
