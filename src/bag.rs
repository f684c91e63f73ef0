//! Bag accounting: the fixed tile distribution, and computing the unseen
//! tile pool from a board and a rack.
//!
//! Grounded in the teacher crate's `tilebag.rs`, which also keeps tile
//! counts in a `multiset::HashMultiSet` and computes "remaining tiles"
//! with the multiset `Sub` operator (teacher: `ai.rs::remaining_tiles`).
use crate::board::Board;
use crate::constants::{ALPHABET_LEN, BLANK, TILE_DISTRIBUTION};
use crate::tile::{Cell, Rack};
use multiset::HashMultiSet;
use std::ops::{Deref, Sub};

/// A multiset of tiles, keyed by letter code `0..=26` (26 = blank).
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<u8>);

impl Deref for TileBag {
    type Target = HashMultiSet<u8>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sub for TileBag {
    type Output = TileBag;
    fn sub(self, other: TileBag) -> TileBag {
        TileBag(self.0 - other.0)
    }
}

impl TileBag {
    pub fn empty() -> TileBag {
        TileBag(HashMultiSet::new())
    }

    /// The full, fixed distribution (100 tiles).
    pub fn full() -> TileBag {
        let mut bag = HashMultiSet::new();
        for (letter, &n) in TILE_DISTRIBUTION.iter().enumerate() {
            bag.insert_times(letter as u8, n as usize);
        }
        TileBag(bag)
    }

    pub fn count(&self, letter: u8) -> u32 {
        self.0.count_of(&letter) as u32
    }

    pub fn total(&self) -> u32 {
        self.0.len() as u32
    }

    pub fn from_rack(rack: &Rack) -> TileBag {
        let mut bag = HashMultiSet::new();
        for l in rack.distinct_letters() {
            bag.insert_times(l, rack.count(l) as usize);
        }
        TileBag(bag)
    }

    /// Tiles visible on `board`: a lowercase (blank-played) cell counts as
    /// a blank, per spec.md §6.
    pub fn from_board(board: &Board) -> TileBag {
        let mut bag = HashMultiSet::new();
        for r in 0..crate::constants::BOARD_SIZE {
            for c in 0..crate::constants::BOARD_SIZE {
                match board.get(r, c) {
                    Cell::Empty => {}
                    Cell::Letter(l) => bag.insert(l),
                    Cell::BlankAs(_) => bag.insert(BLANK),
                }
            }
        }
        TileBag(bag)
    }

    /// Flatten into one entry per tile (letter codes, 26 = blank).
    pub fn to_vec(&self) -> Vec<u8> {
        let mut v = Vec::with_capacity(self.total() as usize);
        for l in 0..ALPHABET_LEN as u8 {
            v.extend(std::iter::repeat(l).take(self.count(l) as usize));
        }
        v
    }
}

/// The unseen pool: `bag_distribution − board_tiles − own_rack`, clamped
/// at zero per tile (the `multiset` crate's `Sub` already saturates),
/// per spec.md §3.
pub fn unseen_pool(board: &Board, rack: &Rack) -> TileBag {
    TileBag::full() - TileBag::from_board(board) - TileBag::from_rack(rack)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_bag_totals_100() {
        assert_eq!(TileBag::full().total(), 100);
    }

    #[test]
    fn unseen_accounts_for_board_and_rack() {
        let mut board = Board::new();
        board.set(7, 7, Cell::Letter(0)); // A
        board.set(7, 8, Cell::BlankAs(1)); // blank played as B
        let rack = Rack::parse("CDE").unwrap();
        let pool = unseen_pool(&board, &rack);
        let unseen_sum: u32 = (0..ALPHABET_LEN as u8).map(|l| pool.count(l)).sum();
        assert_eq!(
            unseen_sum + rack.len() as u32 + board.count_tiles() as u32,
            100
        );
        assert_eq!(pool.count(0), TILE_DISTRIBUTION[0] - 1); // one A used
        assert_eq!(
            pool.count(BLANK),
            TILE_DISTRIBUTION[BLANK as usize] - 1
        ); // one blank used
    }

    #[test]
    fn clamps_at_zero_when_overdrawn() {
        let board = Board::new();
        let mut rack = Rack::new();
        rack.set_count(0, 200);
        let pool = unseen_pool(&board, &rack);
        assert_eq!(pool.count(0), 0);
    }
}
