pub(crate) mod config;
pub use config::Config;

pub(crate) mod word;
pub use word::{Word, WordError};

pub(crate) mod vocabulary;
pub use vocabulary::{InvalidWordError, Vocabulary};

pub(crate) mod partition;
pub use partition::{ALPHABET, Partition};

pub(crate) mod node;
pub use node::{ChildKey, NodeId, NodeRecord};
