//! Prefix trie over the dictionary.
//!
//! Nodes live in a flat arena (`Vec<TrieNode>`) with a fixed 26-entry
//! children array per node — spec.md §9 notes this is denser and faster
//! than a map-per-node, and it is how `labelset.rs` in the teacher crate
//! pursues the same goal (a bitset-indexed child index) for its own
//! packed-row representation.
use crate::error::Error;

#[derive(Debug, Clone)]
struct TrieNode {
    children: [Option<u32>; 26],
    terminal: bool,
}

impl TrieNode {
    fn new() -> TrieNode {
        TrieNode {
            children: [None; 26],
            terminal: false,
        }
    }
}

/// A read-only-after-construction prefix trie over the dictionary.
///
/// Used both as a word membership set (terminal flag at the end of a
/// walk) and as a prefix filter (a walk that doesn't dead-end is a live
/// prefix), exactly as spec.md §4.1 describes.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

/// A cursor into the trie. `Trie::ROOT` is the empty-prefix cursor.
pub type NodeId = u32;

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Trie {
    pub const ROOT: NodeId = 0;

    pub fn new() -> Trie {
        Trie {
            nodes: vec![TrieNode::new()],
        }
    }

    /// Build a trie from an iterator of words. Words are expected to already
    /// be normalized (uppercase, `2..=15` letters) by the caller — see
    /// [`crate::dictionary::Dictionary`].
    pub fn from_words<'a, I: IntoIterator<Item = &'a str>>(words: I) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word);
        }
        trie
    }

    /// Insert a word (letters `A..Z`, case-insensitive), marking its final node terminal.
    pub fn insert(&mut self, word: &str) {
        let mut node = Trie::ROOT;
        for c in word.chars() {
            if !c.is_ascii_alphabetic() {
                return;
            }
            let letter = (c.to_ascii_uppercase() as u8 - b'A') as usize;
            node = match self.nodes[node as usize].children[letter] {
                Some(child) => child,
                None => {
                    let id = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::new());
                    self.nodes[node as usize].children[letter] = Some(id);
                    id
                }
            };
        }
        self.nodes[node as usize].terminal = true;
    }

    /// Walk one letter (code `0..=25`) from `node`. Returns `None` if absent.
    #[inline]
    pub fn child(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        self.nodes[node as usize].children[letter as usize]
    }

    #[inline]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node as usize].terminal
    }

    /// Whether `word` is a complete word in the trie.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = Trie::ROOT;
        for c in word.chars() {
            if !c.is_ascii_alphabetic() {
                return false;
            }
            let letter = c.to_ascii_uppercase() as u8 - b'A';
            match self.child(node, letter) {
                Some(child) => node = child,
                None => return false,
            }
        }
        self.is_terminal(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Build a trie from a line-delimited word list file. Lines are normalized
/// to uppercase; lines with length outside `2..=15` or containing a
/// non-letter are rejected silently, per spec.md §6.
pub fn from_file(path: &str) -> Result<Trie, Error> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::DictionaryReadError {
        path: path.to_string(),
        source,
    })?;
    Ok(Trie::from_words(text.lines().filter_map(normalize_line)))
}

fn normalize_line(line: &str) -> Option<&str> {
    let word = line.trim();
    let len = word.chars().count();
    if (2..=15).contains(&len) && word.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(word)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let trie = Trie::from_words(vec!["CAT", "CAR", "CARS", "DOG"]);
        assert!(trie.contains("CAT"));
        assert!(trie.contains("CARS"));
        assert!(!trie.contains("CA"));
        assert!(!trie.contains("CARX"));
    }

    #[test]
    fn prefix_walk_succeeds_past_word_boundary() {
        let trie = Trie::from_words(vec!["CARS"]);
        let mut node = Trie::ROOT;
        for c in "CAR".chars() {
            node = trie.child(node, c as u8 - b'A').unwrap();
        }
        assert!(!trie.is_terminal(node));
        let node = trie.child(node, b'S' - b'A').unwrap();
        assert!(trie.is_terminal(node));
    }

    #[test]
    fn case_insensitive_insert() {
        let trie = Trie::from_words(vec!["cat"]);
        assert!(trie.contains("CAT"));
        assert!(trie.contains("cat"));
    }
}
