//! Steno Compactor: reversible dictionary substitution for LLM prompts.
//!
//! Layers, in compression order:
//! 1. Phrases: static and learned multi-word phrases, longest first
//! 2. Suffixes: word endings (aggressive mode only)
//! 3. Phonetic: whole-word respellings
//!
//! Decompression walks the layers in reverse.

pub mod compressor;
pub mod decompressor;
pub mod defaults;
pub mod learner;
pub mod matcher;
pub mod report;
pub mod table;

pub use compressor::{compress, CompressionResult, Compressor};
pub use decompressor::{decompress, Decompressor};
pub use learner::{analyze, CorpusLearner, LearningPass};
pub use report::{measure_corpus, CorpusReport};
pub use table::PatternTable;
