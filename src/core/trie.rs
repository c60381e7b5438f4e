// --- File: src/core/trie.rs
use std::collections::HashMap;

/// Index of an affix record inside the lexicon's affix list.
pub type AffixId = usize;

#[derive(Debug, Clone)]
struct AffixNode {
    children: HashMap<char, usize>,
    affix_id: Option<AffixId>,
}

impl AffixNode {
    fn new() -> Self {
        Self { children: HashMap::new(), affix_id: None }
    }
}

/// An arena-backed character trie used for longest-first affix matching.
/// Suffixes are stored reversed so both directions share the same walk.
#[derive(Debug, Clone)]
pub struct AffixTrie {
    nodes: Vec<AffixNode>,
}

impl Default for AffixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl AffixTrie {
    pub fn new() -> Self {
        Self { nodes: vec![AffixNode::new()] }
    }

    /// Inserts a key (already reversed for suffixes) mapping to `affix_id`.
    /// O(k) where k is the key length.
    pub fn insert<I>(&mut self, key: I, affix_id: AffixId)
    where
        I: IntoIterator<Item = char>,
    {
        let mut node_idx = 0;
        for c in key {
            node_idx = match self.nodes[node_idx].children.get(&c) {
                Some(&next) => next,
                None => {
                    let new_node_id = self.nodes.len();
                    self.nodes.push(AffixNode::new());
                    self.nodes[node_idx].children.insert(c, new_node_id);
                    new_node_id
                }
            };
        }
        self.nodes[node_idx].affix_id = Some(affix_id);
    }

    /// Walks `input` and returns the longest stored key that is a prefix of
    /// it and no longer than `max_len` characters, as `(length, affix_id)`.
    pub fn longest_match<I>(&self, input: I, max_len: usize) -> Option<(usize, AffixId)>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node_idx = 0;
        let mut best = None;
        for (depth, c) in input.into_iter().take(max_len).enumerate() {
            match self.nodes[node_idx].children.get(&c) {
                Some(&next) => node_idx = next,
                None => break,
            }
            if let Some(id) = self.nodes[node_idx].affix_id {
                best = Some((depth + 1, id));
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|node| node.affix_id.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix_trie() -> AffixTrie {
        let mut trie = AffixTrie::new();
        for (id, key) in ["וה", "ה", "ו", "ב"].iter().enumerate() {
            trie.insert(key.chars(), id);
        }
        trie
    }

    #[test]
    fn prefers_the_longest_key() {
        let trie = prefix_trie();
        assert_eq!(trie.longest_match("והילד".chars(), usize::MAX), Some((2, 0)));
        assert_eq!(trie.longest_match("הילד".chars(), usize::MAX), Some((1, 1)));
        assert_eq!(trie.longest_match("ילד".chars(), usize::MAX), None);
    }

    #[test]
    fn length_cap_falls_back_to_shorter_key() {
        let trie = prefix_trie();
        assert_eq!(trie.longest_match("וה".chars(), 1), Some((1, 2)));
        assert_eq!(trie.longest_match("ב".chars(), 0), None);
    }

    #[test]
    fn reversed_keys_match_suffixes() {
        let mut trie = AffixTrie::new();
        trie.insert("ים".chars().rev(), 0);
        trie.insert("ם".chars().rev(), 1);
        assert_eq!(trie.longest_match("ילדים".chars().rev(), 4), Some((2, 0)));
        assert_eq!(trie.len(), 2);
    }
}
