//! Running totals across bridged requests.

use serde::{Deserialize, Serialize};

/// Per-request numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMetrics {
    pub compression_ratio: f64,
    pub original_len: usize,
    pub compressed_len: usize,
    pub tokens_saved: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BridgeStats {
    pub requests: u64,
    pub original_chars: usize,
    pub compressed_chars: usize,
    pub tokens_saved: usize,
}

impl BridgeStats {
    pub fn record(&mut self, metrics: &RequestMetrics) {
        self.requests += 1;
        self.original_chars += metrics.original_len;
        self.compressed_chars += metrics.compressed_len;
        self.tokens_saved += metrics.tokens_saved;
    }

    pub fn compression_ratio(&self) -> f64 {
        if self.compressed_chars == 0 {
            return 1.0;
        }
        self.original_chars as f64 / self.compressed_chars as f64
    }
}
