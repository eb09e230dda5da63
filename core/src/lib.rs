pub mod core;
pub mod trie;
pub mod types;

pub use crate::core::{LoadOutcome, PrefixStore, error::StoreError};
pub use crate::trie::Trie;
