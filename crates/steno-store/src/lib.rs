//! Persistence for learned patterns: a JSON document of `ngram -> token`.

pub mod file_store;
pub mod memory;
pub mod traits;

pub use file_store::FilePatternStore;
pub use memory::MemoryPatternStore;
pub use traits::PatternStore;
