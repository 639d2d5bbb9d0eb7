//! LLM bridge: compress prompts on the way out, expand replies on the way back,
//! and keep learned patterns persisted between runs.

pub mod bridge;
pub mod stats;

pub use bridge::{BridgeResponse, StenoBridge};
pub use stats::{BridgeStats, RequestMetrics};
