use anyhow::{Context, Result};
use crossplay_engine::{Board, Dictionary, Engine, Rack};
use std::env;
use std::time::Instant;

const DEFAULT_STATE: &[&str] = &[
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    ".......CRATE...",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
];

fn run() -> Result<()> {
    let mut args = env::args().skip(1);
    let wordfile = args.next().unwrap_or_else(|| "wordlists/words.txt".to_string());
    let rack_str = args.next().unwrap_or_else(|| "STARS".to_string());

    let dictionary = Dictionary::from_file(&wordfile).context("loading dictionary")?;
    let engine = Engine::new(dictionary);
    let board = Board::from_strings(DEFAULT_STATE)?;
    let rack = Rack::parse(&rack_str.to_uppercase())?;

    let now = Instant::now();
    let moves = engine.find_best_moves(&board, &rack, 10, 100, 1);
    let dt = now.elapsed().as_secs_f32();
    eprintln!("found {} moves in {:.3}s", moves.len(), dt);

    for mv in moves {
        println!(
            "{:2} {:2} {:10} {:-10} score={:3} leave={:5.1} equity={:?}",
            mv.anchor_row,
            mv.anchor_col,
            format!("{:?}", mv.direction),
            mv.word_string(),
            mv.score,
            mv.leave_score,
            mv.sim_equity,
        );
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
