//! Validating cross-words and computing the point value of a candidate move.
//!
//! Grounded in `original_source/crossplay/engine.py`'s `_validate_and_score`
//! and `_get_cross_word`: every newly placed tile is checked for the
//! perpendicular word it completes (if any), and that word must be in the
//! dictionary for the move to be legal at all.
use crate::board::Board;
use crate::constants::{letter_value, BonusSquare, SWEEP_BONUS};
use crate::dictionary::Dictionary;
use crate::mv::{Direction, Move, Placement};
use crate::tile::Cell;

fn word_multiplier(bonus: BonusSquare) -> u32 {
    match bonus {
        BonusSquare::DoubleWord | BonusSquare::Star => 2,
        BonusSquare::TripleWord => 3,
        _ => 1,
    }
}

fn letter_multiplier(bonus: BonusSquare) -> u32 {
    match bonus {
        BonusSquare::DoubleLetter => 2,
        BonusSquare::TripleLetter => 3,
        _ => 1,
    }
}

/// Read a cell's value as it stands on `board` *before* this move is
/// applied: reused tiles (already occupied) never carry a letter bonus,
/// because the board itself reports `BonusSquare::None` once occupied.
fn cell_letter_value(board: &Board, row: usize, col: usize, placements: &[Placement]) -> u32 {
    if let Some(p) = placements.iter().find(|p| p.row == row && p.col == col) {
        p.value() * letter_multiplier(board.bonus_at(row, col))
    } else {
        match board.get(row, col) {
            Cell::Letter(l) => letter_value(l),
            Cell::BlankAs(_) => 0,
            Cell::Empty => unreachable!("scored cell must be occupied or a new placement"),
        }
    }
}

/// Walk the perpendicular word through `(row, col)`, if the new tile at
/// that cell joins any existing neighbors. Returns `None` if the tile is
/// isolated in the cross direction (no perpendicular word formed).
fn cross_word_at(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    placements: &[Placement],
) -> Option<(Vec<u8>, u32)> {
    let cross = direction.perpendicular();
    let (dr, dc) = cross.step();
    let occupied = |r: isize, c: isize| -> bool {
        if r < 0 || c < 0 || r as usize >= crate::constants::BOARD_SIZE || c as usize >= crate::constants::BOARD_SIZE {
            return false;
        }
        let (r, c) = (r as usize, c as usize);
        board.is_occupied(r, c) || placements.iter().any(|p| p.row == r && p.col == c)
    };
    let mut start = (row as isize, col as isize);
    while occupied(start.0 - dr, start.1 - dc) {
        start = (start.0 - dr, start.1 - dc);
    }
    let mut end = (row as isize, col as isize);
    while occupied(end.0 + dr, end.1 + dc) {
        end = (end.0 + dr, end.1 + dc);
    }
    if start == end {
        return None;
    }
    let mut letters = Vec::new();
    let mut score = 0u32;
    let mut cursor = start;
    while cursor != (end.0 + dr, end.1 + dc) {
        let (r, c) = (cursor.0 as usize, cursor.1 as usize);
        let letter = if let Some(p) = placements.iter().find(|p| p.row == r && p.col == c) {
            p.letter
        } else {
            board.get(r, c).letter().expect("cross-word cell must be occupied")
        };
        letters.push(letter);
        score += cell_letter_value(board, r, c, placements);
        cursor = (cursor.0 + dr, cursor.1 + dc);
    }
    let word_mult = word_multiplier(board.bonus_at(row, col));
    Some((letters, score * word_mult))
}

/// Validate and score a fully-built candidate: every cross word it forms
/// must be a dictionary word. Returns `None` if any cross word is invalid.
pub fn score_move(
    dictionary: &Dictionary,
    board: &Board,
    word: Vec<u8>,
    anchor_row: usize,
    anchor_col: usize,
    direction: Direction,
    placements: Vec<Placement>,
) -> Option<Move> {
    let (dr, dc) = direction.step();
    let mut main_sum = 0u32;
    let mut word_mult = 1u32;
    let mut cross_words = Vec::new();
    let mut cross_sum = 0u32;

    let mut r = anchor_row as isize;
    let mut c = anchor_col as isize;
    for &letter in &word {
        let (row, col) = (r as usize, c as usize);
        main_sum += cell_letter_value(board, row, col, &placements);
        let is_new = placements.iter().any(|p| p.row == row && p.col == col);
        if is_new {
            word_mult *= word_multiplier(board.bonus_at(row, col));
            if let Some((cross_letters, cross_score)) = cross_word_at(board, row, col, direction, &placements) {
                let cross_word: String = cross_letters.iter().map(|&l| (b'A' + l) as char).collect();
                if !dictionary.is_word(&cross_word) {
                    return None;
                }
                cross_words.push(cross_letters);
                cross_sum += cross_score;
            }
        }
        let _ = letter;
        r += dr;
        c += dc;
    }

    let mut score = main_sum * word_mult + cross_sum;
    if placements.len() == 7 {
        score += SWEEP_BONUS;
    }

    Some(Move {
        word,
        anchor_row,
        anchor_col,
        direction,
        placements,
        cross_words,
        score,
        leave_score: 0.0,
        sim_equity: None,
    })
}
