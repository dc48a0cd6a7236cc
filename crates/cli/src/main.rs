// Copyright (C) 2026 The Fivedraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Fivedraw CLI game.
//!
//! Plays one round of five card draw among computer seats: antes, deal, a
//! draw phase in turn order, showdown, and the payout.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use fivedraw_core::{
    game::{Game, Player},
    poker::{Card, Chips, Hand, HandCategory},
};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of seats at the table.
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=6))]
    seats: u8,
    /// Starting chips for each seat.
    #[clap(long, default_value_t = 1_000)]
    chips: u32,
    /// Ante each seat pays into the pot.
    #[clap(long, default_value_t = 10)]
    ante: u32,
    /// Seed for a reproducible round.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    play_round(&cli, &mut rng)
}

/// Plays a single round from antes to payout.
fn play_round(cli: &Cli, rng: &mut StdRng) -> Result<()> {
    let players = (1..=cli.seats)
        .map(|seat| Player::new(format!("Player {seat}"), Chips::new(cli.chips)))
        .collect();
    let mut game = Game::new(players, rng)?;

    let ante = Chips::new(cli.ante);
    game.take_bets(ante)?;
    info!("{} seats ante {} each, pot {}", cli.seats, ante, game.pot());

    game.deal_round()?;
    log_hands(&game);

    // Each seat draws once, in turn order.
    for _ in 0..game.players().len() {
        let seat = game.turn();
        let positions = match &game.players()[seat].hand {
            Some(hand) => discard_positions(hand),
            None => Vec::new(),
        };

        let name = &game.players()[seat].name;
        if positions.is_empty() {
            info!("{name} stands pat");
        } else {
            info!("{name} draws {}", positions.len());
            game.draw(seat, &positions)?;
        }

        game.advance_turn();
    }

    log_hands(&game);

    match game.showdown() {
        Some(seat) => {
            let pot = game.pot();
            game.pay_winner(seat);

            let winner = &game.players()[seat];
            match &winner.hand {
                Some(hand) => info!("{} wins {} with {}", winner.name, pot, hand.classify()),
                None => info!("{} wins {}", winner.name, pot),
            }
        }
        None => info!("The top hands tie, nobody takes the pot"),
    }

    for player in game.players() {
        info!("{} leaves with {}", player.name, player.chips);
    }

    Ok(())
}

/// Logs every live hand with its ranking.
fn log_hands(game: &Game) {
    for player in game.players() {
        if let Some(hand) = &player.hand {
            info!("{}: {hand}  ({})", player.name, hand.classify());
        }
    }
}

/// Positions of the cards a seat throws away, lowest cards first.
///
/// Made hands stand pat, otherwise every card outside a pair or better
/// group goes, up to the draw limit.
fn discard_positions(hand: &Hand) -> Vec<usize> {
    let cards = hand.cards();
    let paired = |c: &Card| cards.iter().filter(|o| o.rank() == c.rank()).count() >= 2;

    match hand.classify().category() {
        HandCategory::Straight
        | HandCategory::Flush
        | HandCategory::FullHouse
        | HandCategory::StraightFlush
        | HandCategory::RoyalFlush => Vec::new(),
        _ => cards
            .iter()
            .enumerate()
            .filter(|&(_, c)| !paired(c))
            .map(|(i, _)| i + 1)
            .take(Hand::MAX_REPLACE)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn discards_keep_made_hands() {
        assert!(discard_positions(&hand("5C 6D 7H 8S 9C")).is_empty());
        assert!(discard_positions(&hand("2H 7H 9H JH KH")).is_empty());
        assert!(discard_positions(&hand("8C 8D 8H KC KD")).is_empty());
    }

    #[test]
    fn discards_drop_unpaired_cards() {
        // Pair of fours, the three kickers go.
        assert_eq!(discard_positions(&hand("4C 4H 8D JC KS")), vec![3, 4, 5]);

        // Two pair keeps both pairs and dumps the kicker.
        assert_eq!(discard_positions(&hand("3C 3D 9H 9S QC")), vec![5]);

        // Three of a kind keeps the triple.
        assert_eq!(discard_positions(&hand("6C 6D 6H TC QD")), vec![4, 5]);
    }

    #[test]
    fn discards_cap_at_the_draw_limit() {
        // Nothing made, the three lowest cards go.
        assert_eq!(discard_positions(&hand("2C 5D 9H JC KS")), vec![1, 2, 3]);
    }
}
