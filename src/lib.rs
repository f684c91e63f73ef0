#![deny(clippy::wrong_pub_self_convention, clippy::used_underscore_binding,
   clippy::map_unwrap_or,
   clippy::int_plus_one, clippy::string_add_assign, clippy::if_not_else,
   clippy::invalid_upcast_comparisons,
   clippy::mutex_integer, clippy::mut_mut, clippy::items_after_statements,
   clippy::print_stdout, clippy::mem_forget, clippy::maybe_infinite_iter)]

//! A crossword-tile move-generation and scoring engine.
//! <br>
//! Given a dictionary, a board, and a rack, this crate finds every legal
//! word placement, scores it (main word, cross words, sweep bonus), and
//! optionally ranks candidates by Monte Carlo-estimated equity against an
//! unknown opponent draw rather than by raw score alone.
//! It can use the `rayon` crate to run those simulations in parallel.
//!
//! # How to use `crossplay_engine`
//! Build a [`Dictionary`] from a word list, wrap it in an [`Engine`], then
//! call [`Engine::find_best_moves`] with a [`Board`] and a [`Rack`].
//!
//! # Basic usage
//! ```
//! # use crossplay_engine::{Board, Dictionary, Engine, Rack};
//! let dictionary = Dictionary::from_words(vec!["CAT", "CATS", "AT"]);
//! let engine = Engine::new(dictionary);
//! let board = Board::new();
//! let rack = Rack::parse("CAT").unwrap();
//! let moves = engine.find_best_moves(&board, &rack, 5, 0, 0);
//! assert!(!moves.is_empty());
//! ```
mod bag;
mod board;
mod constants;
mod dictionary;
mod engine;
mod error;
mod generator;
mod leave;
mod mv;
mod scorer;
mod simulate;
mod tile;
mod trie;

pub use crate::bag::{unseen_pool, TileBag};
pub use crate::board::Board;
pub use crate::constants::{letter_value, BonusSquare, BOARD_SIZE, CENTER};
pub use crate::dictionary::Dictionary;
pub use crate::engine::Engine;
pub use crate::error::Error;
pub use crate::generator::{find_anchors, generate_moves};
pub use crate::leave::evaluate as evaluate_leave;
pub use crate::mv::{Direction, Move, Placement};
pub use crate::simulate::estimate_equity;
pub use crate::tile::{Cell, Rack};
pub use crate::trie::{from_file as trie_from_file, Trie};
