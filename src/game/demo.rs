// src/game/demo.rs

//! Generates a plausible in-progress game when no snapshot file is configured.
use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Card, CardColor, Game, GameOptions, GameStatus, Hint, Player, Turn, TurnAction};

const NAMES: [&str; 5] = ["Alice", "Bob", "Chloe", "Dmitri", "Esme"];
const NUMBERS_PER_COLOR: [u8; 10] = [1, 1, 1, 2, 2, 3, 3, 4, 4, 5];

fn shuffled_deck<R: Rng>(rng: &mut R) -> Vec<Card> {
    let mut deck: Vec<Card> = CardColor::ALL
        .iter()
        .filter(|color| **color != CardColor::Multicolor)
        .flat_map(|color| NUMBERS_PER_COLOR.iter().map(move |n| Card::new(*color, *n)))
        .collect();
    deck.shuffle(rng);
    deck
}

fn hand_size(players: usize) -> usize {
    if players >= 4 { 4 } else { 5 }
}

/// Build a game with `players` seats (clamped to 2..=5) after `turns` random turns.
pub fn demo_game<R: Rng>(players: usize, turns: usize, rng: &mut R) -> Game {
    let players_count = players.clamp(2, NAMES.len());
    let mut deck = shuffled_deck(rng);

    let mut seats: Vec<Player> = NAMES[..players_count]
        .iter()
        .map(|name| Player::new(*name))
        .collect();
    for seat in &mut seats {
        for _ in 0..hand_size(players_count) {
            if let Some(card) = deck.pop() {
                seat.hand.push(card);
            }
        }
    }

    let mut fireworks: HashMap<CardColor, u8> = HashMap::new();
    let mut played_cards = Vec::new();
    let mut discard_pile = Vec::new();
    let mut history = Vec::new();
    let mut current = 0;

    for _ in 0..turns {
        let seat = &seats[current];
        if seat.hand.is_empty() {
            break;
        }

        let action = match rng.gen_range(0..3) {
            0 => {
                let to = (current + rng.gen_range(1..players_count)) % players_count;
                let target = &seats[to];
                let hint = match target.hand.choose(rng) {
                    Some(card) if rng.gen_bool(0.5) => Hint::Color(card.color),
                    Some(card) => Hint::Number(card.number),
                    None => Hint::Number(1),
                };
                TurnAction::Hint { from: current, to, hint }
            }
            choice => {
                let index = rng.gen_range(0..seat.hand.len());
                let card = seats[current].hand.remove(index);
                if choice == 1 {
                    let height = fireworks.entry(card.color).or_insert(0);
                    if *height + 1 == card.number {
                        *height = card.number;
                        played_cards.push(card);
                    } else {
                        discard_pile.push(card);
                    }
                    TurnAction::Play { from: current, card }
                } else {
                    discard_pile.push(card);
                    TurnAction::Discard { from: current, card }
                }
            }
        };

        let mut turn = Turn::new(action);
        if !matches!(turn.action, TurnAction::Hint { .. }) {
            if let Some(drawn) = deck.pop() {
                seats[current].hand.push(drawn);
                turn = turn.with_drawn(drawn);
            }
        }
        history.push(turn);
        current = (current + 1) % players_count;
    }

    Game {
        status: GameStatus::Ongoing,
        played_cards,
        discard_pile,
        turns_history: history,
        players: seats,
        current_player: current,
        options: GameOptions {
            players_count,
            turns_history: true,
        },
        synced: true,
    }
}
