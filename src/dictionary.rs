//! Word list with both set-lookup and trie-based prefix search.
//!
//! Grounded in `original_source/crossplay/dictionary.py`: a dictionary is
//! a trie (for the generator's prefix-guided walk) paired with a plain
//! `HashSet` (for cheap whole-word membership checks, e.g. cross-word
//! validation). Loading the backing word list file is a collaborator
//! concern per spec.md §1; this module owns the in-memory structure and
//! the normalization rule only.
use crate::error::Error;
use crate::trie::Trie;
use std::collections::HashSet;

/// A normalized word list backed by a [`Trie`] plus a membership set.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    trie: Trie,
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary {
            trie: Trie::new(),
            words: HashSet::new(),
        }
    }

    /// Build a dictionary from an in-memory list of words. Each word is
    /// uppercased; words outside `2..=15` letters or containing a
    /// non-letter are rejected silently, per spec.md §6.
    pub fn from_words<'a, I: IntoIterator<Item = &'a str>>(words: I) -> Dictionary {
        let mut dict = Dictionary::new();
        for word in words {
            dict.insert(word);
        }
        dict
    }

    /// Load a dictionary from a line-delimited word list file.
    pub fn from_file(path: &str) -> Result<Dictionary, Error> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::DictionaryReadError {
            path: path.to_string(),
            source,
        })?;
        let mut dict = Dictionary::new();
        for line in text.lines() {
            dict.insert(line);
        }
        log::debug!("loaded {} words from {}", dict.words.len(), path);
        Ok(dict)
    }

    fn insert(&mut self, word: &str) {
        let word = word.trim();
        let len = word.chars().count();
        if !(2..=15).contains(&len) || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return;
        }
        let upper = word.to_ascii_uppercase();
        self.trie.insert(&upper);
        self.words.insert(upper);
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_and_long_and_non_alpha() {
        let dict = Dictionary::from_words(vec!["A", "AB", "ABC123", "OK", "X".repeat(16).as_str()]);
        assert_eq!(dict.word_count(), 2);
        assert!(dict.is_word("AB"));
        assert!(dict.is_word("OK"));
    }

    #[test]
    fn trie_and_set_agree() {
        let dict = Dictionary::from_words(vec!["CAT", "CARS"]);
        assert!(dict.trie().contains("CAT"));
        assert!(dict.is_word("cat"));
    }
}
