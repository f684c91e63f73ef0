//! The result object: a scored, placed word.
use crate::constants::letter_value;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation of a word on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    #[inline]
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }

    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

/// One placed tile: `letter_shown` is the letter code `0..=25`; `was_blank`
/// forces a letter value of zero and means the cell is recorded as a
/// played blank on commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    pub letter: u8,
    pub row: usize,
    pub col: usize,
    pub was_blank: bool,
}

impl Placement {
    /// Point value of this tile, honoring the "blanks always score zero" rule.
    pub fn value(&self) -> u32 {
        if self.was_blank {
            0
        } else {
            letter_value(self.letter)
        }
    }
}

/// A single legal, scored move.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    /// The main word, as letter codes `0..=25`.
    pub word: Vec<u8>,
    pub anchor_row: usize,
    pub anchor_col: usize,
    pub direction: Direction,
    pub placements: Vec<Placement>,
    /// Perpendicular words formed by this move, as letter codes.
    pub cross_words: Vec<Vec<u8>>,
    pub score: u32,
    /// Populated only when the caller opts into leave evaluation.
    pub leave_score: f32,
    /// Populated only when the caller runs simulation.
    pub sim_equity: Option<f32>,
}

impl Move {
    pub fn is_sweep(&self) -> bool {
        self.placements.len() == 7
    }

    /// Decode `word` to an uppercase string.
    pub fn word_string(&self) -> String {
        decode(&self.word)
    }

    pub fn cross_word_strings(&self) -> Vec<String> {
        self.cross_words.iter().map(|w| decode(w)).collect()
    }

    /// Ranking key: `sim_equity` when simulation ran, else `score`, per spec.md §4.7.
    pub fn ranking_key(&self) -> f32 {
        self.sim_equity.unwrap_or(self.score as f32)
    }

    /// Dedup key: `(word, anchor_row, anchor_col, direction)`.
    pub fn dedup_key(&self) -> (Vec<u8>, usize, usize, Direction) {
        (self.word.clone(), self.anchor_row, self.anchor_col, self.direction)
    }
}

pub fn decode(letters: &[u8]) -> String {
    letters.iter().map(|&l| (b'A' + l) as char).collect()
}
