// Copyright (C) 2026 The Fivedraw Authors
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --example showdown
// Hand 1: 3D 8C 8H TS KD  One Pair, 8 high
// Hand 2: 2H 5C 9S JD JS  One Pair, J high
// Hand 1 draws 3, now 4C 8C 8H 8D 9H  Three of a Kind, 8 high
// Hand 1 wins
// ```

use fivedraw_eval::{Deck, Hand, HandCategory, HandError, Outcome};

fn main() -> Result<(), HandError> {
    let mut deck = Deck::new_and_shuffled(&mut rand::rng());

    let mut hand1 = Hand::deal(&mut deck)?;
    let hand2 = Hand::deal(&mut deck)?;
    println!("Hand 1: {hand1}  {}", hand1.classify());
    println!("Hand 2: {hand2}  {}", hand2.classify());

    // Hand 1 draws new cards for every slot outside its best group.
    let positions = discard_positions(&hand1);
    if !positions.is_empty() {
        hand1.replace(&positions, &mut deck)?;
        println!(
            "Hand 1 draws {}, now {hand1}  {}",
            positions.len(),
            hand1.classify()
        );
    }

    match hand1.compare(&hand2) {
        Outcome::Win => println!("Hand 1 wins"),
        Outcome::Lose => println!("Hand 2 wins"),
        Outcome::Draw => println!("Draw"),
    }

    Ok(())
}

/// Positions of the cards a naive player would throw away.
fn discard_positions(hand: &Hand) -> Vec<usize> {
    let value = hand.classify();
    let keep = match value.category() {
        HandCategory::OnePair
        | HandCategory::TwoPair
        | HandCategory::ThreeOfAKind
        | HandCategory::FourOfAKind => Some(value.tiebreak()),
        _ => None,
    };

    match keep {
        Some(rank) => hand
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.rank() != rank)
            .map(|(i, _)| i + 1)
            .take(Hand::MAX_REPLACE)
            .collect(),
        None => Vec::new(),
    }
}
