#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Upper bound on the candidate frontier during expansion. Candidate
    /// count grows multiplicatively with token length; when the frontier
    /// exceeds this bound the lowest-weight candidates are pruned.
    pub max_candidates: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_candidates: 10_000,
        }
    }
}
