// src/game/card.rs
use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Red,
    Yellow,
    Green,
    Blue,
    White,
    Multicolor,
}

impl CardColor {
    pub const ALL: [CardColor; 6] = [
        CardColor::Red,
        CardColor::Yellow,
        CardColor::Green,
        CardColor::Blue,
        CardColor::White,
        CardColor::Multicolor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CardColor::Red => "red",
            CardColor::Yellow => "yellow",
            CardColor::Green => "green",
            CardColor::Blue => "blue",
            CardColor::White => "white",
            CardColor::Multicolor => "multicolor",
        }
    }

    /// Single letter used in compact card labels like `R3`.
    pub fn letter(&self) -> char {
        match self {
            CardColor::Red => 'R',
            CardColor::Yellow => 'Y',
            CardColor::Green => 'G',
            CardColor::Blue => 'B',
            CardColor::White => 'W',
            CardColor::Multicolor => 'M',
        }
    }

    pub fn terminal_color(&self) -> Color {
        match self {
            CardColor::Red => Color::Red,
            CardColor::Yellow => Color::Yellow,
            CardColor::Green => Color::Green,
            CardColor::Blue => Color::Blue,
            CardColor::White => Color::White,
            CardColor::Multicolor => Color::Magenta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: CardColor,
    pub number: u8,
}

impl Card {
    pub fn new(color: CardColor, number: u8) -> Self {
        Self { color, number }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.letter(), self.number)
    }
}
