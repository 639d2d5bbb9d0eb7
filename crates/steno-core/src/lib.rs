//! Shared types, configuration and errors for the stenographic compression engine.

pub mod config;
pub mod error;
pub mod types;

pub use config::{CompressionConfig, LearnerConfig, StenoConfig, StoreConfig};
pub use error::{Result, StenoError};
pub use types::{Layer, LearnedMapping, LearnedPattern, Pattern};
