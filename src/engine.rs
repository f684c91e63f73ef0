//! The top-level entry point: load a dictionary once, then rank candidate
//! moves for any number of board/rack pairs against it.
use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::generator::generate_moves;
use crate::leave::evaluate as evaluate_leave;
use crate::mv::Move;
use crate::simulate::estimate_equity;
use crate::tile::Rack;

/// Owns the dictionary and exposes move-finding over it. Cheap to clone if
/// the dictionary itself is behind an `Rc`/`Arc` at a higher layer; this
/// crate keeps ownership direct, matching how the teacher crate's
/// `Wordlist` is built once per process and then queried repeatedly.
#[derive(Debug, Clone)]
pub struct Engine {
    dictionary: Dictionary,
}

impl Engine {
    pub fn new(dictionary: Dictionary) -> Engine {
        Engine { dictionary }
    }

    pub fn from_file(path: &str) -> Result<Engine, Error> {
        Ok(Engine::new(Dictionary::from_file(path)?))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Find and rank the best moves for `rack` on `board`.
    ///
    /// - `top_n`: how many moves to return (0 = unlimited).
    /// - `n_sims`: Monte Carlo trials per candidate (0 = skip simulation and
    ///   rank by base score plus leave value only, per spec.md §4.6).
    /// - `seed`: base RNG seed; each candidate's trials are seeded off of it
    ///   so a repeated call with the same inputs reproduces the same ranking.
    pub fn find_best_moves(&self, board: &Board, rack: &Rack, top_n: usize, n_sims: usize, seed: u64) -> Vec<Move> {
        // Generate against an unbounded pool first: leave/simulation can
        // reorder the raw-score ranking, so truncating before evaluating
        // them would risk dropping a move that ends up ranking higher.
        let mut candidates = generate_moves(&self.dictionary, board, rack, 0);

        for (i, mv) in candidates.iter_mut().enumerate() {
            let rack_after = {
                let mut r = *rack;
                for p in &mv.placements {
                    if p.was_blank {
                        r.remove_one(crate::constants::BLANK);
                    } else {
                        r.remove_one(p.letter);
                    }
                }
                r
            };
            mv.leave_score = evaluate_leave(&rack_after);
            if n_sims > 0 {
                mv.sim_equity = Some(estimate_equity(
                    &self.dictionary,
                    board,
                    rack,
                    mv,
                    n_sims,
                    seed.wrapping_add(i as u64),
                ));
            }
        }

        candidates.sort_by(|a, b| b.ranking_key().partial_cmp(&a.ranking_key()).unwrap());
        if top_n > 0 && candidates.len() > top_n {
            candidates.truncate(top_n);
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Cell;

    fn engine() -> Engine {
        Engine::new(Dictionary::from_words(vec!["CAT", "CATS", "AT", "DOG", "CARS", "CAR"]))
    }

    #[test]
    fn ranks_without_simulation_by_score_and_leave() {
        let board = Board::new();
        let rack = Rack::parse("CAT").unwrap();
        let moves = engine().find_best_moves(&board, &rack, 0, 0, 0);
        assert!(!moves.is_empty());
        assert!(moves[0].leave_score != 0.0 || moves[0].placements.len() == rack.len());
        for pair in moves.windows(2) {
            assert!(pair[0].ranking_key() >= pair[1].ranking_key());
        }
    }

    #[test]
    fn simulation_populates_sim_equity() {
        let board = Board::new();
        let rack = Rack::parse("CAT").unwrap();
        let moves = engine().find_best_moves(&board, &rack, 3, 10, 99);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert!(mv.sim_equity.is_some());
        }
    }

    #[test]
    fn top_n_zero_means_unlimited() {
        let board = Board::new();
        let rack = Rack::parse("CAT").unwrap();
        let unlimited = engine().find_best_moves(&board, &rack, 0, 0, 0);
        let capped = engine().find_best_moves(&board, &rack, 1, 0, 0);
        assert_eq!(capped.len(), 1.min(unlimited.len()));
    }

    #[test]
    fn extends_an_existing_word_on_a_non_empty_board() {
        let mut board = Board::new();
        board.set(7, 7, Cell::Letter(2));
        board.set(7, 8, Cell::Letter(0));
        board.set(7, 9, Cell::Letter(17));
        let rack = Rack::parse("S").unwrap();
        let moves = engine().find_best_moves(&board, &rack, 0, 0, 0);
        assert!(moves.iter().any(|m| m.word_string() == "CARS"));
    }
}
