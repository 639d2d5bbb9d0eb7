use thiserror::Error;

use crate::types::Layer;

#[derive(Error, Debug)]
pub enum StenoError {
    #[error("Collision in {layer} layer: {detail}")]
    Collision { layer: Layer, detail: String },
    #[error("Pattern conflict: {candidate:?} overlaps {existing:?} ({reason})")]
    PatternConflict {
        candidate: String,
        existing: String,
        reason: String,
    },
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Store error: {0}")]
    Store(String),
    #[error("LLM call failed: {0}")]
    Llm(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, StenoError>;
