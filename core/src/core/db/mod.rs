//! Database layer for the partitioned trie.
//!
//! Every trie node is a row in a redb table chosen by the shard router: one
//! root table, plus one table per (first-letter, depth) pair actually
//! populated. Rows are keyed by `(parent id, letter)`, which gives the O(1)
//! child lookup every walk depends on and makes "children of parent" a
//! single range scan.
//!
//! Partitions are sparse by construction. Write transactions create tables
//! lazily and idempotently; read paths treat a missing table as zero rows,
//! never as an error.

use crate::core::db::error::DatabaseError;
use crate::types::word::in_alphabet;
use crate::types::{ChildKey, Config, NodeId, NodeRecord, Partition, Vocabulary, Word};
use redb::{
    ReadOnlyTable, ReadTransaction, ReadableDatabase, ReadableTable, TableDefinition, TableError,
    WriteTransaction,
};

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum DatabaseError {
        #[error("Database error: {0}")]
        Redb(#[from] redb::DatabaseError),

        #[error("Table error: {0}")]
        TableError(#[from] redb::TableError),

        #[error("Storage error: {0}")]
        StorageError(#[from] redb::StorageError),

        #[error("Transaction error: {0}")]
        TransactionError(#[from] redb::TransactionError),

        #[error("Commit error: {0}")]
        CommitError(#[from] redb::CommitError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Root record missing")]
        RootMissing,

        #[error("Record lost after insert: {0}")]
        RecordLost(String),
    }
}

/// Root partition: the single record with no parent.
const ROOT_TABLE: TableDefinition<u8, NodeRecord> = TableDefinition::new("trie_root");
const ROOT_KEY: u8 = 0;

/// Meta table: id counter and corpus-wide occurrence total.
const META_TABLE: TableDefinition<&str, u64> = TableDefinition::new("meta");
const META_NEXT_ID: &str = "next_node_id";
const META_TOTAL_COUNT: &str = "total_count";

/// Interval between bulk-load progress log events, in words.
const LOAD_LOG_INTERVAL: u64 = 500;

/// The database struct wrapping redb.
pub struct Database {
    db: redb::Database,
}

/// What a bulk load wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Distinct words upserted.
    pub words: u64,
    /// Total occurrences added across all words.
    pub occurrences: u64,
}

impl Database {
    /// Creates or opens a database using paths from the config.
    ///
    /// Ensures the root and meta tables exist and that the root record is
    /// present; safe to call repeatedly on the same path.
    pub fn open(config: &Config) -> Result<Self, DatabaseError> {
        std::fs::create_dir_all(&config.base_path)?;

        let db = redb::Database::create(config.db_path())?;

        let write_txn = db.begin_write()?;
        {
            let mut root_table = write_txn.open_table(ROOT_TABLE)?;
            let mut meta_table = write_txn.open_table(META_TABLE)?;

            if root_table.get(&ROOT_KEY)?.is_none() {
                let next = meta_table
                    .get(META_NEXT_ID)?
                    .map(|guard| guard.value())
                    .unwrap_or(0);
                meta_table.insert(META_NEXT_ID, &(next + 1))?;

                root_table.insert(
                    &ROOT_KEY,
                    &NodeRecord {
                        id: NodeId(next),
                        parent: None,
                        letter: None,
                        completion_count: 0,
                        path: String::new(),
                    },
                )?;
            }
        }
        write_txn.commit()?;

        Ok(Self { db })
    }

    fn shard(name: &str) -> TableDefinition<'_, ChildKey, NodeRecord> {
        TableDefinition::new(name)
    }

    /// Opens a shard table read-only, mapping "table does not exist" to
    /// `None`: absent partitions contribute no rows.
    fn open_shard_ro(
        read_txn: &ReadTransaction,
        name: &str,
    ) -> Result<Option<ReadOnlyTable<ChildKey, NodeRecord>>, DatabaseError> {
        match read_txn.open_table(Self::shard(name)) {
            Ok(table) => Ok(Some(table)),
            Err(TableError::TableDoesNotExist(_)) => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn root_in_read(read_txn: &ReadTransaction) -> Result<NodeRecord, DatabaseError> {
        let table = read_txn.open_table(ROOT_TABLE)?;
        table
            .get(&ROOT_KEY)?
            .map(|guard| guard.value())
            .ok_or(DatabaseError::RootMissing)
    }

    fn root_in_write(write_txn: &WriteTransaction) -> Result<NodeRecord, DatabaseError> {
        let table = write_txn.open_table(ROOT_TABLE)?;
        table
            .get(&ROOT_KEY)?
            .map(|guard| guard.value())
            .ok_or(DatabaseError::RootMissing)
    }

    /// Allocates the next surrogate id from the meta counter.
    fn allocate_id(write_txn: &WriteTransaction) -> Result<NodeId, DatabaseError> {
        let mut meta_table = write_txn.open_table(META_TABLE)?;
        let next = meta_table
            .get(META_NEXT_ID)?
            .map(|guard| guard.value())
            .unwrap_or(0);
        meta_table.insert(META_NEXT_ID, &(next + 1))?;
        Ok(NodeId(next))
    }

    fn bump_total(write_txn: &WriteTransaction, delta: u64) -> Result<(), DatabaseError> {
        let mut meta_table = write_txn.open_table(META_TABLE)?;
        let total = meta_table
            .get(META_TOTAL_COUNT)?
            .map(|guard| guard.value())
            .unwrap_or(0);
        meta_table.insert(META_TOTAL_COUNT, &(total + delta))?;
        Ok(())
    }
}

/// Write operations.
impl Database {
    /// Walks `word` from the root, creating each missing prefix record with
    /// a zero count, then adds `count` to the terminal record. Equivalent in
    /// effect to repeated single-letter inserts.
    fn upsert_word_in_txn(
        write_txn: &WriteTransaction,
        word: &Word,
        count: u64,
    ) -> Result<(), DatabaseError> {
        let mut parent = Self::root_in_write(write_txn)?.id;
        let mut path = String::with_capacity(word.len());
        let mut terminal = None;

        for letter in word.chars() {
            path.push(letter);
            let name = Partition::of_path(&path).table_name();
            let key = ChildKey { parent, letter };

            let record = {
                let mut table = write_txn.open_table(Self::shard(&name))?;
                let existing = table.get(&key)?.map(|guard| guard.value());
                match existing {
                    Some(record) => record,
                    None => {
                        let id = Self::allocate_id(write_txn)?;
                        let record = NodeRecord {
                            id,
                            parent: Some(parent),
                            letter: Some(letter),
                            completion_count: 0,
                            path: path.clone(),
                        };
                        table.insert(&key, &record)?;
                        record
                    }
                }
            };

            parent = record.id;
            terminal = Some((name, key));
        }

        // Word is validated non-empty, but stay total anyway.
        let Some((name, key)) = terminal else {
            return Ok(());
        };

        let mut table = write_txn.open_table(Self::shard(&name))?;
        let record = table
            .get(&key)?
            .map(|guard| guard.value())
            .ok_or_else(|| DatabaseError::RecordLost(path.clone()))?;
        let updated = NodeRecord {
            completion_count: record.completion_count + count,
            ..record
        };
        table.insert(&key, &updated)?;
        Ok(())
    }

    /// Upserts a single word in its own transaction.
    pub fn upsert_path(&mut self, word: &Word, count: u64) -> Result<(), DatabaseError> {
        let write_txn = self.db.begin_write()?;
        Self::upsert_word_in_txn(&write_txn, word, count)?;
        Self::bump_total(&write_txn, count)?;
        write_txn.commit()?;
        Ok(())
    }

    /// Bulk-loads a vocabulary in one transaction, committed once at the
    /// end. A storage failure mid-load commits nothing; the load must be
    /// re-run from scratch, not resumed.
    pub fn load(&mut self, vocabulary: &Vocabulary) -> Result<LoadStats, DatabaseError> {
        let total_words = vocabulary.len() as u64;
        let write_txn = self.db.begin_write()?;
        let mut stats = LoadStats::default();

        for (word, count) in vocabulary.iter() {
            Self::upsert_word_in_txn(&write_txn, word, count)?;
            stats.words += 1;
            stats.occurrences += count;
            if stats.words % LOAD_LOG_INTERVAL == 0 {
                tracing::debug!(loaded = stats.words, total = total_words, "bulk load progress");
            }
        }

        Self::bump_total(&write_txn, stats.occurrences)?;
        write_txn.commit()?;

        tracing::info!(
            words = stats.words,
            occurrences = stats.occurrences,
            "bulk load committed"
        );
        Ok(stats)
    }
}

/// Read operations.
impl Database {
    /// The unique record with no parent.
    pub fn root(&self) -> Result<NodeRecord, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        Self::root_in_read(&read_txn)
    }

    /// Point lookup of one child by `(parent, letter)`, routed on the
    /// child's path.
    ///
    /// Letters outside the restricted alphabet miss unconditionally. Stored
    /// keys encode the letter as a single byte, so an unchecked wide
    /// character could alias a stored letter sharing its low byte.
    pub fn find_child(
        &self,
        parent: NodeId,
        letter: char,
        child_path: &str,
    ) -> Result<Option<NodeRecord>, DatabaseError> {
        if !in_alphabet(letter) {
            return Ok(None);
        }
        let read_txn = self.db.begin_read()?;
        let name = Partition::of_path(child_path).table_name();
        let Some(table) = Self::open_shard_ro(&read_txn, &name)? else {
            return Ok(None);
        };
        let key = ChildKey { parent, letter };
        Ok(table.get(&key)?.map(|guard| guard.value()))
    }

    /// Read-only walk from the root; `None` on the first missing child or
    /// the first letter outside the restricted alphabet. The empty prefix
    /// resolves to the root record.
    pub fn find_path(&self, prefix: &str) -> Result<Option<NodeRecord>, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let mut current = Self::root_in_read(&read_txn)?;
        let mut path = String::with_capacity(prefix.len());

        for letter in prefix.chars() {
            if !in_alphabet(letter) {
                return Ok(None);
            }
            path.push(letter);
            let name = Partition::of_path(&path).table_name();
            let Some(table) = Self::open_shard_ro(&read_txn, &name)? else {
                return Ok(None);
            };
            let key = ChildKey {
                parent: current.id,
                letter,
            };
            match table.get(&key)? {
                Some(guard) => current = guard.value(),
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// All direct children of a record.
    ///
    /// A non-root record has one candidate partition; the root probes every
    /// letter's depth-1 partition, skipping the ones that were never
    /// created.
    pub fn enumerate_children(
        &self,
        record: &NodeRecord,
    ) -> Result<Vec<NodeRecord>, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let mut children = Vec::new();

        for partition in Partition::children_of_path(&record.path) {
            let name = partition.table_name();
            let Some(table) = Self::open_shard_ro(&read_txn, &name)? else {
                continue;
            };
            for entry in table.range(ChildKey::parent_range(record.id))? {
                let (_, value) = entry?;
                children.push(value.value());
            }
        }
        Ok(children)
    }

    /// Corpus-wide sum of completion counts, maintained across loads.
    pub fn total_count(&self) -> Result<u64, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(META_TABLE)?;
        Ok(table
            .get(META_TOTAL_COUNT)?
            .map(|guard| guard.value())
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests;
