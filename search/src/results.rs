//! Completion result types.

/// One scored completion.
///
/// `score` is a relative ranking score, not a probability: it blends the
/// keyboard-substitution weight of the matched candidate prefix, a
/// geometric penalty per extra completed letter, and the word's corpus
/// frequency. Scores are only comparable within one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub word: String,
    pub score: f64,
}

/// Unordered completion set as produced by the engine.
#[derive(Debug, Clone, Default)]
pub struct Completions(pub(crate) Vec<Completion>);

impl Completions {
    /// Sorts descending by score and keeps the best `n`.
    pub fn top(self, n: usize) -> Vec<Completion> {
        let mut completions = self.0;
        completions.sort_by(|a, b| b.score.total_cmp(&a.score));
        completions.truncate(n);
        completions
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Completion> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Completion> {
        self.0
    }
}
