//! Corpus-level compression measurement.

use serde::{Deserialize, Serialize};

use crate::compressor::Compressor;
use crate::decompressor::Decompressor;
use crate::table::PatternTable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusReport {
    pub texts: usize,
    pub avg_ratio: f64,
    pub total_ratio: f64,
    pub space_saved_pct: f64,
    pub tokens_original: usize,
    pub tokens_compressed: usize,
    /// Texts whose round trip matched, ignoring case.
    pub round_trips: usize,
}

/// Compress every text, verify its round trip, and aggregate the numbers.
pub fn measure_corpus(table: &PatternTable, texts: &[impl AsRef<str>], aggressive: bool) -> CorpusReport {
    if texts.is_empty() {
        return CorpusReport { total_ratio: 1.0, avg_ratio: 1.0, ..Default::default() };
    }
    let compressor = Compressor::new(table).aggressive(aggressive);
    let decompressor = Decompressor::new(table);

    let mut total_original = 0;
    let mut total_compressed = 0;
    let mut ratio_sum = 0.0;
    let mut round_trips = 0;

    for text in texts {
        let text = text.as_ref();
        let result = compressor.compress(text);
        if decompressor.decompress(&result.compressed).to_lowercase() == text.to_lowercase() {
            round_trips += 1;
        }
        total_original += result.original_len;
        total_compressed += result.compressed_len;
        ratio_sum += result.ratio;
    }

    let total_ratio = if total_compressed == 0 { 1.0 } else { total_original as f64 / total_compressed as f64 };
    let space_saved_pct = if total_original == 0 {
        0.0
    } else {
        (1.0 - total_compressed as f64 / total_original as f64) * 100.0
    };

    CorpusReport {
        texts: texts.len(),
        avg_ratio: ratio_sum / texts.len() as f64,
        total_ratio,
        space_saved_pct,
        tokens_original: total_original / 4,
        tokens_compressed: total_compressed / 4,
        round_trips,
    }
}
