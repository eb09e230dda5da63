//! Fuzzy completion over the prefix store.
//!
//! Given a typed token, the engine generates spelling variants from a QWERTY
//! adjacency model, queries the store for completions of each variant, and
//! scores every hit by blending substitution likelihood with corpus
//! frequency.
//!
//! # Design
//!
//! - Candidate generation is an explicit breadth-first frontier, capped at
//!   `SearchConfig::max_candidates` (lowest-weight candidates are pruned
//!   first, so output matches the uncapped process for inputs under the
//!   cap).
//! - Scores are relative, not normalized probabilities: components do not
//!   sum to 1 across candidates. Only their ordering is meaningful.
//! - Ranking is the caller's job; `Completions::top(n)` sorts descending by
//!   score and truncates.

mod adjacency;
mod config;
mod engine;
mod results;

pub use adjacency::{FAR_WEIGHT, NEAR_WEIGHT, SAME_WEIGHT, neighbors};
pub use config::SearchConfig;
pub use engine::{CompletionEngine, CompletionError};
pub use results::{Completion, Completions};
