//! In-memory trie over the restricted alphabet.
//!
//! Nodes live in a flat arena and address each other by index, mirroring the
//! surrogate-key row model of the persistence layer. Index 0 is always the
//! root. Nodes are created on first insertion of a letter at a position and
//! never removed within a build; inserting the same word again accumulates
//! its completion count.

use crate::types::{Vocabulary, Word};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct TrieNode {
    /// `None` for the root.
    pub letter: Option<char>,
    /// Full prefix from the root through this node.
    pub path: String,
    /// Corpus occurrences of the word ending exactly here; zero means
    /// "prefix only".
    pub completion_count: u64,
    children: BTreeMap<char, usize>,
}

#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self::with_root(String::new())
    }

    /// A trie whose root represents `root_path` instead of the empty prefix.
    /// Used when materializing a subtree from storage.
    pub(crate) fn with_root(root_path: String) -> Self {
        let letter = root_path.chars().next_back();
        Self {
            nodes: vec![TrieNode {
                letter,
                path: root_path,
                completion_count: 0,
                children: BTreeMap::new(),
            }],
        }
    }

    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        let mut trie = Self::new();
        for (word, count) in vocabulary.iter() {
            trie.insert(word, count);
        }
        trie
    }

    pub const fn root(&self) -> usize {
        0
    }

    pub fn node(&self, index: usize) -> &TrieNode {
        &self.nodes[index]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Walks/creates one node per letter and adds `count` to the terminal
    /// node's completion count.
    pub fn insert(&mut self, word: &Word, count: u64) {
        let mut current = self.root();
        for letter in word.chars() {
            current = self.child_or_create(current, letter);
        }
        self.nodes[current].completion_count += count;
    }

    /// Used by materialization, where counts arrive already aggregated.
    pub(crate) fn attach_child(&mut self, parent: usize, letter: char, count: u64) -> usize {
        let index = self.child_or_create(parent, letter);
        self.nodes[index].completion_count = count;
        index
    }

    pub(crate) fn set_completion_count(&mut self, index: usize, count: u64) {
        self.nodes[index].completion_count = count;
    }

    fn child_or_create(&mut self, parent: usize, letter: char) -> usize {
        if let Some(&existing) = self.nodes[parent].children.get(&letter) {
            return existing;
        }
        let mut path = self.nodes[parent].path.clone();
        path.push(letter);
        let index = self.nodes.len();
        self.nodes.push(TrieNode {
            letter: Some(letter),
            path,
            completion_count: 0,
            children: BTreeMap::new(),
        });
        self.nodes[parent].children.insert(letter, index);
        index
    }

    /// Resolves a prefix to its node index, `None` on the first missing
    /// child (including in an empty trie).
    ///
    /// Prefixes are absolute, matched against full root-anchored paths. On
    /// a trie materialized from a subtree, a prefix extending the root path
    /// walks down from the root; an ancestor of the root path resolves to
    /// the root itself.
    pub fn find(&self, prefix: &str) -> Option<usize> {
        let relative = match prefix.strip_prefix(self.nodes[0].path.as_str()) {
            Some(rest) => rest,
            None if self.nodes[0].path.starts_with(prefix) => "",
            None => return None,
        };

        let mut current = self.root();
        for letter in relative.chars() {
            current = *self.nodes[current].children.get(&letter)?;
        }
        Some(current)
    }

    /// Every (word, count) in the inclusive subtree under `index` with a
    /// nonzero completion count. Order is not meaningful; callers sort.
    pub fn collect_words(&self, index: usize) -> Vec<(String, u64)> {
        let mut words = Vec::new();
        let mut stack = vec![index];
        while let Some(current) = stack.pop() {
            let node = &self.nodes[current];
            if node.completion_count > 0 {
                words.push((node.path.clone(), node.completion_count));
            }
            stack.extend(node.children.values());
        }
        words
    }

    /// `collect_words` over the node resolved from `prefix`; empty when the
    /// prefix is absent.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<(String, u64)> {
        match self.find(prefix) {
            Some(index) => self.collect_words(index),
            None => Vec::new(),
        }
    }
}
