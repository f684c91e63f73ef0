//! Move generation: anchor discovery and the trie-guided recursive search
//! that fills rack tiles into the board around each anchor.
//!
//! Grounded in `original_source/crossplay/engine.py`'s anchor-based search:
//! every candidate word must cross at least one anchor square (an empty
//! square adjacent to an existing tile, or the center square on the first
//! move), is built left-to-right in its direction with the dictionary trie
//! pruning dead prefixes as soon as they occur, and is handed to
//! [`crate::scorer::score_move`] once complete for cross-word validation
//! and point scoring.
use crate::board::Board;
use crate::constants::{BLANK, BOARD_SIZE, CENTER};
use crate::dictionary::Dictionary;
use crate::mv::{Direction, Move, Placement};
use crate::scorer::score_move;
use crate::tile::{Cell, Rack};
use crate::trie::{NodeId, Trie};

/// All empty squares with at least one occupied 4-neighbor. Empty when the
/// board itself is empty, in which case the only legal anchor is the
/// center square (spec.md §4.2, first-move rule).
pub fn find_anchors(board: &Board) -> Vec<(usize, usize)> {
    if board.is_board_empty() {
        return vec![(CENTER, CENTER)];
    }
    let mut anchors = Vec::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if board.is_occupied(r, c) {
                continue;
            }
            let has_neighbor = [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)].iter().any(|&(dr, dc)| {
                let (nr, nc) = (r as isize + dr, c as isize + dc);
                nr >= 0
                    && nc >= 0
                    && (nr as usize) < BOARD_SIZE
                    && (nc as usize) < BOARD_SIZE
                    && board.is_occupied(nr as usize, nc as usize)
            });
            if has_neighbor {
                anchors.push((r, c));
            }
        }
    }
    anchors
}

/// Generate every legal move for `rack` on `board`, scored but not leave-
/// or simulation-adjusted, deduplicated by `(word, anchor, direction)`,
/// sorted by descending score, and truncated to `top_n` (0 = unlimited).
pub fn generate_moves(dictionary: &Dictionary, board: &Board, rack: &Rack, top_n: usize) -> Vec<Move> {
    let mut found = Vec::new();
    let anchors = find_anchors(board);
    let first_move = board.is_board_empty();

    for &(row, col) in &anchors {
        for &direction in &[Direction::Horizontal, Direction::Vertical] {
            for (start, end) in word_spans(board, row, col, direction, first_move, rack.len()) {
                search_span(dictionary, board, rack, direction, start, end, &mut found);
            }
        }
    }

    dedup_preserving_order(&mut found);
    found.sort_by(|a, b| b.score.cmp(&a.score));
    if top_n > 0 && found.len() > top_n {
        found.truncate(top_n);
    }
    found
}

/// Every `(start, end)` cell range along `direction` through `(row, col)`
/// worth trying: on the first move, every length crossing the center
/// square; on a subsequent move, the single fixed start pinned by the
/// anchor's existing prefix, varied only in forward length.
fn word_spans(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    first_move: bool,
    rack_len: usize,
) -> Vec<((usize, usize), (usize, usize))> {
    if first_move {
        first_move_spans(direction, rack_len)
    } else {
        anchor_spans(board, row, col, direction, rack_len)
    }
}

/// First move: for each length from 2 up to `min(rack_len, BOARD_SIZE)`,
/// every start position whose span covers the center square, per
/// spec.md §4.3 and `original_source/crossplay/engine.py`'s
/// `_generate_first_moves`.
fn first_move_spans(direction: Direction, rack_len: usize) -> Vec<((usize, usize), (usize, usize))> {
    let mut spans = Vec::new();
    let max_len = rack_len.min(BOARD_SIZE);
    for len in 2..=max_len {
        let lo = CENTER.saturating_sub(len - 1);
        let hi = CENTER.min(BOARD_SIZE - len);
        if lo > hi {
            continue;
        }
        for s in lo..=hi {
            if s <= CENTER && CENTER < s + len {
                let (start, end) = match direction {
                    Direction::Horizontal => ((CENTER, s), (CENTER, s + len - 1)),
                    Direction::Vertical => ((s, CENTER), (s + len - 1, CENTER)),
                };
                spans.push((start, end));
            }
        }
    }
    spans
}

/// Subsequent moves: scan backward from the anchor through contiguous
/// occupied cells only (stopping at the first empty cell or the board
/// edge) to find `prefix_len`, and pin the span's start there — it never
/// moves further back across an empty gap. The forward length alone
/// varies, bounded by `prefix_len + rack_len + suffix_tiles + 1`, per
/// spec.md §4.3 step 4 and
/// `original_source/crossplay/engine.py`'s `_generate_moves_at_anchor`.
fn anchor_spans(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    rack_len: usize,
) -> Vec<((usize, usize), (usize, usize))> {
    let (dr, dc) = direction.step();
    let axis_len = BOARD_SIZE as isize;
    let occupied_at = |r: isize, c: isize| -> bool {
        r >= 0 && c >= 0 && r < axis_len && c < axis_len && board.is_occupied(r as usize, c as usize)
    };

    let mut prefix_len: isize = 0;
    {
        let mut r = row as isize - dr;
        let mut c = col as isize - dc;
        while occupied_at(r, c) {
            prefix_len += 1;
            r -= dr;
            c -= dc;
        }
    }
    let start_r = row as isize - dr * prefix_len;
    let start_c = col as isize - dc * prefix_len;

    let mut suffix_tiles: isize = 0;
    {
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while occupied_at(r, c) {
            suffix_tiles += 1;
            r += dr;
            c += dc;
        }
    }

    let max_len = ((prefix_len + rack_len as isize + suffix_tiles + 1) as usize).min(BOARD_SIZE);
    let anchor_idx = prefix_len;

    let mut spans = Vec::new();
    for len in 2..=max_len {
        let end_r = start_r + (len as isize - 1) * dr;
        let end_c = start_c + (len as isize - 1) * dc;
        if end_r < 0 || end_c < 0 || end_r >= axis_len || end_c >= axis_len {
            break;
        }
        if anchor_idx >= len as isize {
            continue;
        }
        // The word must not spill into a cell just before start or just
        // after end (that would make a different, longer word).
        if occupied_at(start_r - dr, start_c - dc) {
            continue;
        }
        if occupied_at(end_r + dr, end_c + dc) {
            continue;
        }
        let empties = {
            let mut n = 0usize;
            let mut r = start_r;
            let mut c = start_c;
            for _ in 0..len {
                if !occupied_at(r, c) {
                    n += 1;
                }
                r += dr;
                c += dc;
            }
            n
        };
        if empties == 0 || empties > rack_len {
            continue;
        }
        spans.push(((start_r as usize, start_c as usize), (end_r as usize, end_c as usize)));
    }
    spans
}

/// Walk `[start, end]` left to right, consuming rack tiles at empty cells
/// and matching board letters at occupied cells, pruning via the trie.
fn search_span(
    dictionary: &Dictionary,
    board: &Board,
    rack: &Rack,
    direction: Direction,
    start: (usize, usize),
    end: (usize, usize),
    found: &mut Vec<Move>,
) {
    let (dr, dc) = direction.step();
    let len = if dr != 0 {
        (end.0 as isize - start.0 as isize).unsigned_abs() + 1
    } else {
        (end.1 as isize - start.1 as isize).unsigned_abs() + 1
    };
    let mut word = Vec::with_capacity(len);
    let mut placements = Vec::new();
    fill(
        dictionary.trie(),
        Trie::ROOT,
        board,
        *rack,
        direction,
        start,
        len,
        0,
        &mut word,
        &mut placements,
        &mut |word, placements| {
            if let Some(mv) = score_move(
                dictionary,
                board,
                word.clone(),
                start.0,
                start.1,
                direction,
                placements.clone(),
            ) {
                found.push(mv);
            }
        },
    );
}

#[allow(clippy::too_many_arguments)]
fn fill(
    trie: &Trie,
    node: NodeId,
    board: &Board,
    mut rack: Rack,
    direction: Direction,
    start: (usize, usize),
    len: usize,
    depth: usize,
    word: &mut Vec<u8>,
    placements: &mut Vec<Placement>,
    on_complete: &mut dyn FnMut(&Vec<u8>, &Vec<Placement>),
) {
    if depth == len {
        if trie.is_terminal(node) && !placements.is_empty() {
            on_complete(word, placements);
        }
        return;
    }
    let (dr, dc) = direction.step();
    let row = (start.0 as isize + dr * depth as isize) as usize;
    let col = (start.1 as isize + dc * depth as isize) as usize;

    if let Cell::Letter(l) | Cell::BlankAs(l) = board.get(row, col) {
        if let Some(child) = trie.child(node, l) {
            word.push(l);
            fill(trie, child, board, rack, direction, start, len, depth + 1, word, placements, on_complete);
            word.pop();
        }
        return;
    }

    // Empty cell: try every letter the trie allows, preferring a real rack
    // tile over the blank when both can produce the same letter (the blank
    // is strictly worse for scoring and should only be spent when it is
    // the only way to reach that letter).
    let mut tried = LetterSet::default();
    for letter in 0u8..26 {
        if tried.contains(letter) {
            continue;
        }
        let child = match trie.child(node, letter) {
            Some(child) => child,
            None => continue,
        };
        let has_real = rack.count(letter) > 0;
        let has_blank = rack.count(BLANK) > 0;
        if !has_real && !has_blank {
            continue;
        }
        tried.insert(letter);

        let was_blank = !has_real;
        if was_blank {
            rack.remove_one(BLANK);
        } else {
            rack.remove_one(letter);
        }
        word.push(letter);
        placements.push(Placement { letter, row, col, was_blank });

        fill(trie, child, board, rack, direction, start, len, depth + 1, word, placements, on_complete);

        placements.pop();
        word.pop();
        if was_blank {
            rack.add(BLANK, 1);
        } else {
            rack.add(letter, 1);
        }
    }
}

/// A bitset of letter codes `0..=25` tried at one recursion frame of
/// [`fill`]. Kept as a bare `u32` rather than a per-node allocation,
/// matching the density/allocation-free goal behind the teacher's own
/// `LabelSet` bitset.
#[derive(Debug, Default, Clone, Copy)]
struct LetterSet(u32);

impl LetterSet {
    fn contains(&self, letter: u8) -> bool {
        self.0 & (1 << letter) != 0
    }

    fn insert(&mut self, letter: u8) {
        self.0 |= 1 << letter;
    }
}

fn dedup_preserving_order(moves: &mut Vec<Move>) {
    let mut seen = std::collections::HashSet::new();
    moves.retain(|m| seen.insert(m.dedup_key()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::from_words(vec!["CAT", "CATS", "AT", "TA", "ACT"])
    }

    #[test]
    fn letter_set_tracks_insertions() {
        let mut seen = LetterSet::default();
        assert!(!seen.contains(4));
        seen.insert(4);
        seen.insert(4); // idempotent
        assert!(seen.contains(4));
        assert!(!seen.contains(5));
    }

    #[test]
    fn empty_board_has_only_center_anchor() {
        let board = Board::new();
        assert_eq!(find_anchors(&board), vec![(CENTER, CENTER)]);
    }

    #[test]
    fn occupied_board_anchors_are_adjacent_to_tiles() {
        let mut board = Board::new();
        board.set(7, 7, Cell::Letter(0));
        let anchors = find_anchors(&board);
        assert!(anchors.contains(&(6, 7)));
        assert!(anchors.contains(&(7, 6)));
        assert!(!anchors.contains(&(7, 7)));
    }

    #[test]
    fn first_move_must_cross_center() {
        let board = Board::new();
        let rack = Rack::parse("CAT").unwrap();
        let moves = generate_moves(&dict(), &board, &rack, 0);
        assert!(!moves.is_empty());
        for mv in &moves {
            let (dr, dc) = mv.direction.step();
            let len = mv.word.len() as isize;
            let crosses = (0..len).any(|i| {
                let r = mv.anchor_row as isize + dr * i;
                let c = mv.anchor_col as isize + dc * i;
                r == CENTER as isize && c == CENTER as isize
            });
            assert!(crosses, "move {:?} does not cross center", mv.word_string());
        }
    }

    #[test]
    fn subsequent_move_extends_existing_tile() {
        let mut board = Board::new();
        board.set(7, 7, Cell::Letter(2)); // C
        board.set(7, 8, Cell::Letter(0)); // A
        board.set(7, 9, Cell::Letter(19)); // T
        let rack = Rack::parse("S").unwrap();
        let moves = generate_moves(&dict(), &board, &rack, 0);
        assert!(moves.iter().any(|m| m.word_string() == "CATS"));
    }

    #[test]
    fn anchor_start_does_not_reach_back_across_an_empty_gap() {
        // Board has "AT" at (7,7)-(7,8). The only horizontal anchor that
        // could grow "SCAT" out of it is (7,6), whose prefix scan stops
        // immediately (because (7,5) is empty) and pins start=(7,6), not
        // (7,5) — so "SCAT" (which needs new tiles at both (7,5) and
        // (7,6)) is unreachable, per spec.md §4.3 step 1-2 and
        // `original_source/crossplay/engine.py`'s `_generate_moves_at_anchor`.
        let mut board = Board::new();
        board.set(7, 7, Cell::Letter(0)); // A
        board.set(7, 8, Cell::Letter(19)); // T
        let rack = Rack::parse("SC").unwrap();
        let dict = Dictionary::from_words(vec!["SCAT", "AT", "CAT"]);
        let moves = generate_moves(&dict, &board, &rack, 0);
        assert!(!moves.iter().any(|m| m.word_string() == "SCAT"));
    }

    #[test]
    fn results_are_deduplicated_and_sorted_descending() {
        let board = Board::new();
        let rack = Rack::parse("CAT").unwrap();
        let moves = generate_moves(&dict(), &board, &rack, 0);
        let mut keys = std::collections::HashSet::new();
        for mv in &moves {
            assert!(keys.insert(mv.dedup_key()));
        }
        for pair in moves.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn top_n_truncates_results() {
        let board = Board::new();
        let rack = Rack::parse("CAT").unwrap();
        let all = generate_moves(&dict(), &board, &rack, 0);
        let top_one = generate_moves(&dict(), &board, &rack, 1);
        assert_eq!(top_one.len(), 1.min(all.len()));
    }
}
