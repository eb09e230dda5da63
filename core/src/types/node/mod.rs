use redb::TypeName;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Surrogate key of a persisted node, allocated from a database-wide
/// monotonic counter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Table key for shard partitions: (parent id, letter).
///
/// Encoded as the parent id in big-endian followed by the letter byte, so
/// byte order equals (parent, letter) order. A point get on this key is the
/// child lookup the whole persistence layer depends on, and all children of
/// one parent form a contiguous key range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ChildKey {
    pub parent: NodeId,
    pub letter: char,
}

impl ChildKey {
    /// Inclusive key range covering every child of `parent` within one
    /// partition.
    pub fn parent_range(parent: NodeId) -> std::ops::RangeInclusive<ChildKey> {
        let low = ChildKey {
            parent,
            letter: '\0',
        };
        let high = ChildKey {
            parent,
            letter: char::from(u8::MAX),
        };
        low..=high
    }
}

fn extract_parent(data: &[u8]) -> (NodeId, &[u8]) {
    let (id, rest) = data.split_first_chunk::<8>().expect("truncated child key");
    (NodeId(u64::from_be_bytes(*id)), rest)
}

impl redb::Key for ChildKey {
    fn compare(data1: &[u8], data2: &[u8]) -> Ordering {
        let (parent1, rest1) = extract_parent(data1);
        let (parent2, rest2) = extract_parent(data2);

        parent1.cmp(&parent2).then_with(|| rest1.cmp(rest2))
    }
}

impl redb::Value for ChildKey {
    type SelfType<'a> = ChildKey;
    type AsBytes<'a> = [u8; 9];

    fn fixed_width() -> Option<usize> {
        Some(9)
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let (parent, rest) = extract_parent(data);
        ChildKey {
            parent,
            letter: char::from(rest[0]),
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        let mut bytes = [0u8; 9];
        bytes[..8].copy_from_slice(&value.parent.0.to_be_bytes());
        bytes[8] = value.letter as u8;
        bytes
    }

    fn type_name() -> TypeName {
        TypeName::new("typeahead::ChildKey")
    }
}

/// One persisted trie node.
///
/// `parent` and `letter` are `None` only for the root record. `path` is the
/// full prefix spelled from the root through this node; a zero
/// `completion_count` marks a prefix-only placeholder, not a complete word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub letter: Option<char>,
    pub completion_count: u64,
    pub path: String,
}

impl redb::Value for NodeRecord {
    type SelfType<'a> = NodeRecord;
    type AsBytes<'a> = Vec<u8>;

    fn fixed_width() -> Option<usize> {
        None
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        postcard::from_bytes(data).expect("invalid node record")
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        postcard::to_allocvec(value).expect("node record serialization failed")
    }

    fn type_name() -> TypeName {
        TypeName::new("typeahead::NodeRecord")
    }
}

#[cfg(test)]
mod tests;
