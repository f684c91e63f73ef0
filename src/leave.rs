//! Leave evaluation: scoring the rack tiles left behind after a move.
//!
//! Grounded in `original_source/crossplay/leave.py`: sum per-letter
//! desirability, penalize vowel/consonant imbalance, penalize duplicate
//! non-blank letters, reward pairs/triples that combine well, and penalize
//! a lone Q with no U left to pair it.
use crate::constants::{
    Letter, LEAVE_DESIRABILITY, LETTER_Q, LETTER_U, Q_WITHOUT_U_PENALTY, SYNERGY_PAIRS,
    SYNERGY_TRIPLES, VOWELS,
};
use crate::tile::Rack;

/// Per-extra-copy penalty for a duplicated non-blank letter (count k >= 2).
const DUPLICATE_PENALTY: f32 = -3.0;

/// Additional flat penalty once a letter's count reaches 3 or more.
const TRIPLICATE_PENALTY: f32 = -4.0;

/// Score a rack left after a move. An empty leave always scores `0.0`.
///
/// The result is rounded to one decimal place, matching the external
/// score-reporting convention used throughout this crate.
pub fn evaluate(rack: &Rack) -> f32 {
    if rack.is_empty() {
        return 0.0;
    }

    let mut score = 0.0f32;
    let letters: Vec<Letter> = rack.to_vec();

    for &l in &letters {
        score += LEAVE_DESIRABILITY[l as usize];
    }

    score += vowel_balance_penalty(&letters);
    score += duplicate_penalty(rack);
    score += synergy_bonus(rack);

    if rack.count(LETTER_Q) > 0 && rack.count(LETTER_U) == 0 {
        score += Q_WITHOUT_U_PENALTY;
    }

    round1(score)
}

/// `-15 * (vowels/|leave| - 0.40)^2 * |leave|`, per spec.md §4.5/§6.
fn vowel_balance_penalty(letters: &[Letter]) -> f32 {
    let n = letters.len() as f32;
    let vowels = letters.iter().filter(|l| VOWELS.contains(l)).count() as f32;
    let ratio = vowels / n - 0.40;
    -15.0 * ratio * ratio * n
}

/// For each non-blank letter with count k >= 2: subtract `3*(k-1)`; if
/// k >= 3, subtract an additional flat 4, per spec.md §4.5.
fn duplicate_penalty(rack: &Rack) -> f32 {
    let mut penalty = 0.0;
    for l in 0..26u8 {
        let n = rack.count(l) as i32;
        if n >= 2 {
            penalty += DUPLICATE_PENALTY * (n - 1) as f32;
        }
        if n >= 3 {
            penalty += TRIPLICATE_PENALTY;
        }
    }
    penalty
}

fn synergy_bonus(rack: &Rack) -> f32 {
    let mut bonus = 0.0;
    for &(letters, value) in SYNERGY_TRIPLES {
        if letters.iter().all(|&l| rack.count(l) > 0) {
            bonus += value;
        }
    }
    for &(letters, value) in SYNERGY_PAIRS {
        if letters.iter().all(|&l| rack.count(l) > 0) {
            bonus += value;
        }
    }
    bonus
}

fn round1(x: f32) -> f32 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_leave_is_zero() {
        assert_eq!(evaluate(&Rack::new()), 0.0);
    }

    #[test]
    fn lone_q_without_u_is_penalized() {
        let with_u = Rack::parse("QUIT").unwrap();
        let without_u = Rack::parse("QKIT").unwrap();
        assert!(evaluate(&without_u) < evaluate(&with_u) - 5.0);
    }

    #[test]
    fn duplicate_letters_cost_points() {
        let dup = Rack::parse("AABCD").unwrap();
        let spread = Rack::parse("ABCDE").unwrap();
        assert!(evaluate(&dup) < evaluate(&spread));
    }

    #[test]
    fn synergy_pair_outscores_isolated_letters() {
        // Same length and vowel count (both all-consonant pairs), so the
        // vowel-balance penalty is identical; only the synergy bonus differs.
        let synergy = Rack::parse("ST").unwrap();
        let no_synergy = Rack::parse("BC").unwrap();
        assert!(evaluate(&synergy) > evaluate(&no_synergy));
    }

    #[test]
    fn blank_is_highly_desirable() {
        let one_blank = Rack::parse("?").unwrap();
        let one_common = Rack::parse("E").unwrap();
        assert!(evaluate(&one_blank) > evaluate(&one_common));
    }
}
