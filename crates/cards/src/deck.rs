// Copyright (C) 2026 The Fivedraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck types.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card is an immutable rank and suit pair. Two cards are equal only when
/// both rank and suit match, while ordering between cards goes through
/// [Card::rank] alone because suits carry no order.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card with the given rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the 0-based position of the card rank in the Two to Ace order.
    pub fn rank_index(&self) -> u8 {
        self.rank as u8
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                Ok(Card::new(Rank::from_char(rank)?, Suit::from_char(suit)?))
            }
            _ => Err(CardError::InvalidLiteral),
        }
    }
}

/// Card rank.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Two
    Two = 0,
    /// Three
    Three,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns an iterator over all the ranks from [Rank::Two] to [Rank::Ace].
    pub fn ranks() -> impl Iterator<Item = Rank> {
        use Rank::*;
        [
            Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    fn from_char(c: char) -> Result<Rank, CardError> {
        let rank = match c {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(CardError::InvalidRank),
        };

        Ok(rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ranks().nth(value as usize).ok_or(CardError::InvalidRank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };
        write!(f, "{c}")
    }
}

/// Card suit.
///
/// Suits carry no order, two cards of the same rank compare equal in rank no
/// matter the suit.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs
    Clubs = 0,
    /// Diamonds
    Diamonds,
    /// Hearts
    Hearts,
    /// Spades
    Spades,
}

impl Suit {
    /// Returns an iterator over all the suits.
    pub fn suits() -> impl Iterator<Item = Suit> {
        use Suit::*;
        [Clubs, Diamonds, Hearts, Spades].into_iter()
    }

    fn from_char(c: char) -> Result<Suit, CardError> {
        let suit = match c {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(CardError::InvalidSuit),
        };

        Ok(suit)
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Suit::suits().nth(value as usize).ok_or(CardError::InvalidSuit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };
        write!(f, "{c}")
    }
}

/// Errors from building cards out of untyped values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum CardError {
    /// The value does not name one of the thirteen ranks.
    #[error("invalid card rank")]
    InvalidRank,
    /// The value does not name one of the four suits.
    #[error("invalid card suit")]
    InvalidSuit,
    /// The literal is not a two character rank and suit pair.
    #[error("invalid card literal, expected rank and suit like \"JD\"")]
    InvalidLiteral,
}

/// A cards deck.
///
/// The front of the deck is the top: [Deck::take] removes cards from the
/// front and [Deck::put_back] appends cards to the back.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Deck::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the number of cards left in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the deck has no cards left.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the top `n` cards in order.
    ///
    /// Fails without removing any card when fewer than `n` cards are left.
    pub fn take(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards);
        }

        Ok(self.cards.drain(..n).collect())
    }

    /// Appends the given cards to the bottom of the deck in order.
    ///
    /// The deck does not police duplicates, callers return only cards they
    /// took from this deck.
    pub fn put_back<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|suit| Rank::ranks().map(move |rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Errors from drawing cards out of a deck.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum DeckError {
    /// The deck has fewer cards left than the draw asked for.
    #[error("not enough cards left in the deck")]
    InsufficientCards,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn new_deck_has_all_cards() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.into_iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn new_deck_is_in_canonical_order() {
        let cards = Deck::default().into_iter().collect::<Vec<_>>();
        assert_eq!(cards[0], Card::new(Rank::Two, Suit::Clubs));
        assert_eq!(cards[12], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(cards[13], Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(cards[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn shuffling_keeps_all_cards() {
        let mut rng = StdRng::seed_from_u64(8524);
        let deck = Deck::new_and_shuffled(&mut rng);
        assert_eq!(deck.count(), Deck::SIZE);

        let shuffled = deck.into_iter().collect::<Vec<_>>();
        let canonical = Deck::default().into_iter().collect::<Vec<_>>();
        assert_ne!(shuffled, canonical);
        assert_eq!(
            shuffled.iter().collect::<HashSet<_>>(),
            canonical.iter().collect::<HashSet<_>>()
        );
    }

    #[test]
    fn take_draws_from_the_top() {
        let mut deck = Deck::default();
        let cards = deck.take(3).unwrap();
        assert_eq!(deck.count(), Deck::SIZE - 3);
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Two, Suit::Clubs),
                Card::new(Rank::Three, Suit::Clubs),
                Card::new(Rank::Four, Suit::Clubs),
            ]
        );

        // The next draw continues from where the previous one stopped.
        let cards = deck.take(1).unwrap();
        assert_eq!(cards, vec![Card::new(Rank::Five, Suit::Clubs)]);
    }

    #[test]
    fn take_too_many_leaves_deck_unchanged() {
        let mut deck = Deck::default();
        assert_eq!(deck.take(Deck::SIZE + 1), Err(DeckError::InsufficientCards));
        assert_eq!(deck.count(), Deck::SIZE);

        let mut empty = Deck::from(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.take(1), Err(DeckError::InsufficientCards));
    }

    #[test]
    fn put_back_appends_to_the_bottom() {
        let mut deck = Deck::default();
        let taken = deck.take(2).unwrap();
        deck.put_back(taken.clone());
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.into_iter().collect::<Vec<_>>();
        assert_eq!(&cards[Deck::SIZE - 2..], &taken[..]);
    }

    #[test]
    fn explicit_cards_deck() {
        let cards = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
        ];

        let mut deck = Deck::from(cards.clone());
        assert_eq!(deck.count(), 2);
        assert_eq!(deck.take(2).unwrap(), cards);
        assert!(deck.is_empty());
    }

    #[test]
    fn card_to_string() {
        let card = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(card.to_string(), "KD");

        let card = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(card.to_string(), "5S");

        let card = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(card.to_string(), "JC");

        let card = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(card.to_string(), "TH");

        let card = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(card.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        let card = "QS".parse::<Card>().unwrap();
        assert_eq!(card, Card::new(Rank::Queen, Suit::Spades));

        assert_eq!("1D".parse::<Card>(), Err(CardError::InvalidRank));
        assert_eq!("JX".parse::<Card>(), Err(CardError::InvalidSuit));
        assert_eq!("J".parse::<Card>(), Err(CardError::InvalidLiteral));
        assert_eq!("JDX".parse::<Card>(), Err(CardError::InvalidLiteral));
    }

    #[test]
    fn ranks_order() {
        let ranks = Rank::ranks().collect::<Vec<_>>();
        assert_eq!(ranks.len(), 13);
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ranks[0], Rank::Two);
        assert_eq!(ranks[12], Rank::Ace);
    }

    #[test]
    fn cards_order_by_rank_only() {
        let tc = Card::new(Rank::Ten, Suit::Clubs);
        let th = Card::new(Rank::Ten, Suit::Hearts);
        let js = Card::new(Rank::Jack, Suit::Spades);

        assert_eq!(tc.rank(), th.rank());
        assert_ne!(tc, th);
        assert!(tc.rank() < js.rank());
        assert_eq!(tc.rank_index(), 8);
    }

    #[test]
    fn rank_and_suit_from_index() {
        assert_eq!(Rank::try_from(0u8), Ok(Rank::Two));
        assert_eq!(Rank::try_from(12u8), Ok(Rank::Ace));
        assert_eq!(Rank::try_from(13u8), Err(CardError::InvalidRank));

        assert_eq!(Suit::try_from(3u8), Ok(Suit::Spades));
        assert_eq!(Suit::try_from(4u8), Err(CardError::InvalidSuit));
    }
}
