use crate::adjacency::{FAR_WEIGHT, NEAR_WEIGHT, SAME_WEIGHT, neighbors};
use crate::config::SearchConfig;
use crate::results::{Completion, Completions};
use thiserror::Error;
use typeahead_core::{PrefixStore, StoreError};

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Generates and scores probable intended words for a typed token.
pub struct CompletionEngine {
    config: SearchConfig,
}

impl CompletionEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Fuzzy-completes `token` against the store.
    ///
    /// Empty tokens, or tokens whose first character is not a letter, yield
    /// an empty result. Output is unordered; use [`Completions::top`] to
    /// rank.
    pub fn complete(
        &self,
        store: &PrefixStore,
        token: &str,
    ) -> Result<Completions, CompletionError> {
        let lowered = token.to_lowercase();
        let Some(first) = lowered.chars().next() else {
            return Ok(Completions::default());
        };
        if !first.is_ascii_lowercase() {
            return Ok(Completions::default());
        }
        let cleaned: String = lowered
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect();

        let total = store.total_count()?;
        if total == 0 {
            return Ok(Completions::default());
        }

        let candidates = self.expand(&cleaned);
        let mut completions = Vec::new();
        for (candidate, weight) in candidates {
            let candidate_len = candidate.chars().count();
            for (word, count) in store.words_with_prefix(&candidate)? {
                // Exact hits keep their substitution weight; each extra
                // completed letter costs a factor of 10.
                let extra = word.chars().count() - candidate_len;
                let score =
                    weight * 10f64.powi(-(extra as i32)) * (count as f64 / total as f64);
                completions.push(Completion { word, score });
            }
        }
        Ok(Completions(completions))
    }

    /// Breadth-first candidate generation: every same-length variant of
    /// `token` reachable by per-position substitution with its weight
    /// (same ×0.75, near ×0.08, far ×0.03 per position).
    fn expand(&self, token: &str) -> Vec<(String, f64)> {
        let mut letters = token.chars();
        let Some(first) = letters.next() else {
            return Vec::new();
        };

        let mut frontier = Vec::new();
        frontier.push((first.to_string(), SAME_WEIGHT));
        let (near, far) = neighbors(first);
        for &n in near {
            frontier.push((n.to_string(), NEAR_WEIGHT));
        }
        for &f in far {
            frontier.push((f.to_string(), FAR_WEIGHT));
        }
        self.prune(&mut frontier);

        for letter in letters {
            let (near, far) = neighbors(letter);
            let mut next = Vec::with_capacity(frontier.len() * (1 + near.len() + far.len()));
            for (candidate, weight) in &frontier {
                let mut same = candidate.clone();
                same.push(letter);
                next.push((same, weight * SAME_WEIGHT));
                for &n in near {
                    let mut variant = candidate.clone();
                    variant.push(n);
                    next.push((variant, weight * NEAR_WEIGHT));
                }
                for &f in far {
                    let mut variant = candidate.clone();
                    variant.push(f);
                    next.push((variant, weight * FAR_WEIGHT));
                }
            }
            self.prune(&mut next);
            frontier = next;
        }
        frontier
    }

    /// Drops the lowest-weight candidates once the frontier exceeds the
    /// configured cap.
    fn prune(&self, frontier: &mut Vec<(String, f64)>) {
        if frontier.len() > self.config.max_candidates {
            frontier.sort_by(|a, b| b.1.total_cmp(&a.1));
            frontier.truncate(self.config.max_candidates);
        }
    }
}
