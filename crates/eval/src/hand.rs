// Copyright (C) 2026 The Fivedraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Five card hand and ranking types.
use serde::{Deserialize, Serialize};
use std::{cmp::{Ordering, Reverse}, fmt, mem, str::FromStr};
use thiserror::Error;

use fivedraw_cards::{Card, CardError, Deck, DeckError, Rank};

/// Hand categories from weakest to strongest.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No two cards match, ranked by the highest card.
    HighCard = 0,
    /// Two cards of one rank.
    OnePair,
    /// Two cards of one rank and two cards of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five ranks in sequence.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and two cards of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Five suited ranks in sequence.
    StraightFlush,
    /// Ten to ace, all suited.
    RoyalFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}

/// A ranked hand.
///
/// Values order by category first, then by the tiebreak rank inside the
/// category. Cards outside the tiebreak never count, two hands with the same
/// category and tiebreak are a draw no matter their remaining cards.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandValue {
    category: HandCategory,
    tiebreak: Rank,
}

impl HandValue {
    /// Returns the hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Returns the rank that breaks ties inside the category.
    pub fn tiebreak(&self) -> Rank {
        self.tiebreak
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} high", self.category, self.tiebreak)
    }
}

/// Result of comparing two hands, seen from the comparing hand.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// This hand ranks above the other.
    Win,
    /// This hand ranks below the other.
    Lose,
    /// Both hands rank the same.
    Draw,
}

/// Errors from building and mutating hands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum HandError {
    /// A hand holds exactly five cards.
    #[error("a hand holds exactly five cards")]
    WrongCardCount,
    /// A draw replaces at most three cards.
    #[error("cannot replace more than three cards")]
    TooManyCards,
    /// Replace positions count card slots from one.
    #[error("invalid card position {0}, expected 1 to 5")]
    InvalidIndex(usize),
    /// A card literal failed to parse.
    #[error(transparent)]
    Card(#[from] CardError),
    /// The deck ran out of cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// A five card Poker hand.
///
/// The hand keeps its cards sorted by ascending rank, the sort is stable so
/// cards of equal rank stay in deal order. Positions passed to
/// [Hand::replace] count slots in this sorted order, starting from one.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// The most cards a single draw can replace.
    pub const MAX_REPLACE: usize = 3;

    /// Creates a hand from exactly five cards, sorting them by rank.
    pub fn new(cards: Vec<Card>) -> Result<Self, HandError> {
        let mut cards: [Card; Self::SIZE] =
            cards.try_into().map_err(|_| HandError::WrongCardCount)?;
        cards.sort_by_key(Card::rank);
        Ok(Self { cards })
    }

    /// Deals a hand from the top of the deck.
    pub fn deal(deck: &mut Deck) -> Result<Self, HandError> {
        let cards = deck.take(Self::SIZE)?;
        Self::new(cards)
    }

    /// Returns the cards in ascending rank order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns true if all five cards form a rank sequence.
    ///
    /// The ace only plays high, A 2 3 4 5 is not a straight.
    pub fn is_straight(&self) -> bool {
        self.cards
            .windows(2)
            .all(|w| w[1].rank_index() == w[0].rank_index() + 1)
    }

    /// Returns true if all five cards share a suit.
    pub fn is_flush(&self) -> bool {
        self.cards.iter().all(|c| c.suit() == self.cards[0].suit())
    }

    /// Ranks the hand into its category and tiebreak rank.
    pub fn classify(&self) -> HandValue {
        let straight = self.is_straight();
        let flush = self.is_flush();
        let high = self.cards[Self::SIZE - 1].rank();

        let (category, tiebreak) = if straight && flush {
            if high == Rank::Ace {
                (HandCategory::RoyalFlush, high)
            } else {
                (HandCategory::StraightFlush, high)
            }
        } else {
            match self.rank_groups().as_slice() {
                [(4, quad), _] => (HandCategory::FourOfAKind, *quad),
                [(3, triple), (2, _)] => (HandCategory::FullHouse, *triple),
                _ if flush => (HandCategory::Flush, high),
                _ if straight => (HandCategory::Straight, high),
                [(3, triple), ..] => (HandCategory::ThreeOfAKind, *triple),
                [(2, high_pair), (2, _), _] => (HandCategory::TwoPair, *high_pair),
                [(2, pair), ..] => (HandCategory::OnePair, *pair),
                _ => (HandCategory::HighCard, high),
            }
        };

        HandValue { category, tiebreak }
    }

    /// Compares this hand against another, from this hand's point of view.
    pub fn compare(&self, other: &Hand) -> Outcome {
        match self.classify().cmp(&other.classify()) {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Lose,
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// Replaces up to three cards with fresh draws from the deck.
    ///
    /// Positions count slots in the rank sorted hand from one and may repeat,
    /// each occurrence replaces whatever card then occupies the slot. All
    /// replacements are drawn before the discards return to the bottom of the
    /// deck, so a draw can never hand back a card it just discarded. On any
    /// error the hand and the deck are left untouched.
    pub fn replace(&mut self, positions: &[usize], deck: &mut Deck) -> Result<(), HandError> {
        if positions.len() > Self::MAX_REPLACE {
            return Err(HandError::TooManyCards);
        }
        if let Some(&pos) = positions.iter().find(|&&p| !(1..=Self::SIZE).contains(&p)) {
            return Err(HandError::InvalidIndex(pos));
        }

        let draws = deck.take(positions.len())?;
        let discards = positions
            .iter()
            .zip(draws)
            .map(|(&pos, draw)| mem::replace(&mut self.cards[pos - 1], draw))
            .collect::<Vec<_>>();
        deck.put_back(discards);
        self.cards.sort_by_key(Card::rank);

        Ok(())
    }

    /// Rank groups sorted by descending count, then by descending rank.
    fn rank_groups(&self) -> Vec<(usize, Rank)> {
        let mut groups: Vec<(usize, Rank)> = Vec::new();
        for card in &self.cards {
            match groups.iter_mut().find(|(_, rank)| *rank == card.rank()) {
                Some((count, _)) => *count += 1,
                None => groups.push((1, card.rank())),
            }
        }

        groups.sort_by_key(|&(count, rank)| Reverse((count, rank)));
        groups
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<_>, CardError>>()?;
        Self::new(cards)
    }
}
