use crate::types::word::{Word, in_alphabet};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidWordError {
    #[error("word is empty after sanitization")]
    Empty,

    #[error("word starts with disallowed character {0:?}")]
    DisallowedLeadingChar(char),
}

/// A word → occurrence-count mapping, built once before a trie or load pass
/// and immutable during it.
///
/// Only sanitized [`Word`]s are stored; a raw token whose leading character
/// falls outside the alphabet, or that sanitizes to nothing, never enters
/// the map.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    counts: HashMap<Word, u64>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a vocabulary from an already-tokenized stream, counting
    /// occurrences. Invalid tokens are logged and skipped; one bad token
    /// never aborts the batch.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        let mut vocabulary = Self::new();
        for token in tokens {
            if let Err(error) = vocabulary.add_token(token) {
                tracing::warn!(token, %error, "skipping token");
            }
        }
        vocabulary
    }

    /// Sanitizes one raw token and counts a single occurrence.
    pub fn add_token(&mut self, token: &str) -> Result<(), InvalidWordError> {
        let leading = token
            .chars()
            .next()
            .ok_or(InvalidWordError::Empty)?
            .to_ascii_lowercase();
        if !in_alphabet(leading) {
            return Err(InvalidWordError::DisallowedLeadingChar(leading));
        }

        let word = Word::try_from(token).map_err(|_| InvalidWordError::Empty)?;
        self.add(word, 1);
        Ok(())
    }

    pub fn add(&mut self, word: Word, count: u64) {
        *self.counts.entry(word).or_insert(0) += count;
    }

    /// Looks up the count for a raw word, applying the same sanitize policy
    /// as insertion.
    pub fn get(&self, word: &str) -> Option<u64> {
        let word = Word::try_from(word).ok()?;
        self.counts.get(&word).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all occurrence counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Word, u64)> {
        self.counts.iter().map(|(word, count)| (word, *count))
    }
}

#[cfg(test)]
mod tests;
