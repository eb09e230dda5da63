//! Shard routing: maps a node path to its storage partition.
//!
//! Every non-root node lives in the partition addressed by its path's first
//! letter and its depth, so "applesauce" (depth 10) and "a" (depth 1) land in
//! different tables even though both start with 'a'. The root node has its
//! own partition. Keeping one table per (letter, depth) pair bounds the rows
//! scanned per level; any node's own path carries enough information to
//! address its partition.

/// The restricted alphabet: every letter a path may contain.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

const ROOT_TABLE_NAME: &str = "trie_root";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Root,
    Shard { letter: char, depth: usize },
}

impl Partition {
    /// Routes a path to its partition. The empty path is the root.
    pub fn of_path(path: &str) -> Partition {
        match path.chars().next() {
            None => Partition::Root,
            Some(letter) => Partition::Shard {
                letter,
                depth: path.chars().count(),
            },
        }
    }

    /// Partitions that may hold children of a node with the given path.
    ///
    /// A non-root node has exactly one candidate partition (same first
    /// letter, one level deeper). The root's children are spread across one
    /// depth-1 partition per alphabet letter; most of those tables never
    /// exist and reads against them must come back empty.
    pub fn children_of_path(path: &str) -> Vec<Partition> {
        match path.chars().next() {
            None => ALPHABET
                .chars()
                .map(|letter| Partition::Shard { letter, depth: 1 })
                .collect(),
            Some(letter) => vec![Partition::Shard {
                letter,
                depth: path.chars().count() + 1,
            }],
        }
    }

    pub fn table_name(&self) -> String {
        match self {
            Partition::Root => ROOT_TABLE_NAME.to_string(),
            Partition::Shard { letter, depth } => format!("trie_{letter}_{depth}"),
        }
    }
}
