//! Store orchestration: bulk loading, prefix queries, and reconstruction of
//! the in-memory trie from partitioned storage.

use crate::core::db::error::DatabaseError;
use crate::core::db::{Database, LoadStats};
use crate::trie::Trie;
use crate::types::{Config, NodeId, NodeRecord, Vocabulary, Word};
use error::StoreError;
use std::collections::{HashMap, VecDeque};

pub(crate) mod db;

pub mod error {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StoreError {
        #[error("Database error: {0}")]
        Database(#[from] DatabaseError),
    }
}

/// The persistent prefix store.
///
/// Owns the database handle; every operation goes through this explicit
/// context. One bulk load assumes exclusive write access and commits
/// atomically at the end; reads may run concurrently with each other but
/// not with an in-progress load (caller responsibility).
pub struct PrefixStore {
    db: Database,
}

/// Result of a bulk vocabulary load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadOutcome {
    pub words_loaded: u64,
    pub occurrences: u64,
}

impl From<LoadStats> for LoadOutcome {
    fn from(stats: LoadStats) -> Self {
        Self {
            words_loaded: stats.words,
            occurrences: stats.occurrences,
        }
    }
}

impl PrefixStore {
    pub fn open(config: &Config) -> Result<Self, StoreError> {
        let db = Database::open(config)?;
        Ok(Self { db })
    }
}

/// Write operations.
impl PrefixStore {
    /// Bulk-loads a vocabulary in one atomic commit.
    pub fn load(&mut self, vocabulary: &Vocabulary) -> Result<LoadOutcome, StoreError> {
        Ok(self.db.load(vocabulary)?.into())
    }

    /// Upserts a single word outside a bulk load.
    pub fn upsert_word(&mut self, word: &Word, count: u64) -> Result<(), StoreError> {
        Ok(self.db.upsert_path(word, count)?)
    }
}

/// Query operations.
impl PrefixStore {
    /// The root record: empty path, no parent.
    pub fn root(&self) -> Result<NodeRecord, StoreError> {
        Ok(self.db.root()?)
    }

    /// Single navigation step: the child of `parent` reached by `letter`,
    /// routed on the child's full path.
    pub fn find_child(
        &self,
        parent: NodeId,
        letter: char,
        child_path: &str,
    ) -> Result<Option<NodeRecord>, StoreError> {
        Ok(self.db.find_child(parent, letter, child_path)?)
    }

    /// Resolves a prefix to its persisted record. The empty prefix is the
    /// root; a zero-count record is a prefix-only placeholder, distinct
    /// from `None`.
    pub fn find_prefix_node(&self, prefix: &str) -> Result<Option<NodeRecord>, StoreError> {
        Ok(self.db.find_path(prefix)?)
    }

    /// Every (word, count) under `prefix` with a nonzero completion count.
    ///
    /// Walks an explicit record frontier so only the active edge of the
    /// subtree is in memory at once. Unordered; the canonical downstream
    /// ordering is descending by count and is the caller's job.
    pub fn words_with_prefix(&self, prefix: &str) -> Result<Vec<(String, u64)>, StoreError> {
        let Some(start) = self.db.find_path(prefix)? else {
            return Ok(Vec::new());
        };

        let mut words = Vec::new();
        let mut frontier = VecDeque::from([start]);
        while let Some(record) = frontier.pop_front() {
            if record.completion_count > 0 {
                words.push((record.path.clone(), record.completion_count));
            }
            frontier.extend(self.db.enumerate_children(&record)?);
        }
        Ok(words)
    }

    /// Corpus-wide occurrence total across all loads.
    pub fn total_count(&self) -> Result<u64, StoreError> {
        Ok(self.db.total_count()?)
    }
}

/// Reconstruction.
impl PrefixStore {
    /// Rebuilds an in-memory trie from storage, rooted at the record for
    /// `prefix` (the whole trie for the empty prefix). `None` when the
    /// prefix has no record. The materialized trie answers prefix queries
    /// with the same absolute paths as the store, even for a subtree.
    pub fn materialize(&self, prefix: &str) -> Result<Option<Trie>, StoreError> {
        let Some(start) = self.db.find_path(prefix)? else {
            return Ok(None);
        };

        let mut trie = Trie::with_root(start.path.clone());
        trie.set_completion_count(trie.root(), start.completion_count);
        let mut index_of: HashMap<NodeId, usize> = HashMap::from([(start.id, trie.root())]);

        let mut frontier = VecDeque::from([start]);
        while let Some(record) = frontier.pop_front() {
            let parent_index = index_of[&record.id];
            for child in self.db.enumerate_children(&record)? {
                let letter = child
                    .letter
                    .ok_or_else(|| DatabaseError::RecordLost(child.path.clone()))?;
                let child_index = trie.attach_child(parent_index, letter, child.completion_count);
                index_of.insert(child.id, child_index);
                frontier.push_back(child);
            }
        }
        Ok(Some(trie))
    }
}
