// Copyright (C) 2026 The Fivedraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Five card draw game scaffolding.
use rand::Rng;
use thiserror::Error;

use fivedraw_eval::{Deck, Hand, HandError, Outcome};

use crate::poker::Chips;

/// Errors from running a game round.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum GameError {
    /// A bet larger than the player bankroll.
    #[error("not enough chips to cover the bet")]
    InsufficientChips,
    /// A game needs at least two players.
    #[error("a game needs at least two players")]
    NotEnoughPlayers,
    /// The player has no dealt hand.
    #[error("the player has no hand")]
    NoHand,
    /// A hand operation failed.
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// A seated player state.
#[derive(Clone, Debug)]
pub struct Player {
    /// The player name.
    pub name: String,
    /// The player chips.
    pub chips: Chips,
    /// The dealt hand, if any.
    pub hand: Option<Hand>,
    /// The player is still in the hand.
    pub in_play: bool,
}

impl Player {
    /// Creates a player with a starting bankroll.
    pub fn new(name: String, chips: Chips) -> Self {
        Self {
            name,
            chips,
            hand: None,
            in_play: true,
        }
    }

    /// Debits and returns the bet, failing when the bankroll cannot cover it.
    pub fn place_bet(&mut self, bet: Chips) -> Result<Chips, GameError> {
        if self.chips < bet {
            return Err(GameError::InsufficientChips);
        }

        self.chips -= bet;
        Ok(bet)
    }

    /// Credits winnings to the bankroll.
    pub fn add_pot(&mut self, pot: Chips) {
        self.chips += pot;
    }

    /// Folds the hand, the player sits out until the next deal.
    pub fn fold(&mut self) {
        self.in_play = false;
    }
}

/// A five card draw game for a table of players.
///
/// The game owns the deck for the round, hands reach it only through the
/// game's own methods.
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    deck: Deck,
    pot: Chips,
    turn: usize,
}

impl Game {
    /// The smallest table the game deals for.
    pub const MIN_PLAYERS: usize = 2;

    /// Creates a game with a freshly shuffled deck.
    pub fn new<R: Rng>(players: Vec<Player>, rng: &mut R) -> Result<Self, GameError> {
        if players.len() < Self::MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }

        Ok(Self {
            players,
            deck: Deck::new_and_shuffled(rng),
            pot: Chips::ZERO,
            turn: 0,
        })
    }

    /// Returns the seated players.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the pot total.
    pub fn pot(&self) -> Chips {
        self.pot
    }

    /// Returns the seat whose turn it is.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Moves the turn to the next seat around the table.
    pub fn advance_turn(&mut self) {
        self.turn = (self.turn + 1) % self.players.len();
    }

    /// Returns the number of cards left in the game deck.
    pub fn deck_count(&self) -> usize {
        self.deck.count()
    }

    /// Deals five cards to every player still in the hand.
    pub fn deal_round(&mut self) -> Result<(), GameError> {
        for player in self.players.iter_mut().filter(|p| p.in_play) {
            player.hand = Some(Hand::deal(&mut self.deck)?);
        }

        Ok(())
    }

    /// Collects the ante from every player still in the hand.
    ///
    /// Checks every bankroll before debiting any, a short stack fails the
    /// whole round and leaves all bankrolls and the pot untouched.
    pub fn take_bets(&mut self, ante: Chips) -> Result<(), GameError> {
        if self.players.iter().any(|p| p.in_play && p.chips < ante) {
            return Err(GameError::InsufficientChips);
        }

        for player in self.players.iter_mut().filter(|p| p.in_play) {
            self.pot += player.place_bet(ante)?;
        }

        Ok(())
    }

    /// Replaces cards in the seat's hand with draws from the game deck.
    pub fn draw(&mut self, seat: usize, positions: &[usize]) -> Result<(), GameError> {
        let player = &mut self.players[seat];
        let hand = player.hand.as_mut().ok_or(GameError::NoHand)?;
        hand.replace(positions, &mut self.deck)?;

        Ok(())
    }

    /// Finds the showdown winner among the players still in the hand.
    ///
    /// Returns the winning seat, or `None` when the top hands tie.
    pub fn showdown(&self) -> Option<usize> {
        let mut winner: Option<(usize, &Hand)> = None;
        let mut tied = false;

        for (seat, player) in self.players.iter().enumerate() {
            let Some(hand) = player.hand.as_ref().filter(|_| player.in_play) else {
                continue;
            };

            match winner {
                Some((_, best)) => match hand.compare(best) {
                    Outcome::Win => {
                        winner = Some((seat, hand));
                        tied = false;
                    }
                    Outcome::Draw => tied = true,
                    Outcome::Lose => {}
                },
                None => winner = Some((seat, hand)),
            }
        }

        match winner {
            Some((seat, _)) if !tied => Some(seat),
            _ => None,
        }
    }

    /// Pays the pot to the given seat and resets it.
    pub fn pay_winner(&mut self, seat: usize) {
        self.players[seat].add_pot(self.pot);
        self.pot = Chips::ZERO;
    }
}
