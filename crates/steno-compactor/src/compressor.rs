//! Forward pass: phrases (longest first), then suffixes, then phonetic words.

use serde::{Deserialize, Serialize};
use steno_core::Pattern;

use crate::matcher::{self, Boundary, Rule};
use crate::table::PatternTable;

/// Compressed text with length statistics. Lengths are in characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionResult {
    pub compressed: String,
    pub original_len: usize,
    pub compressed_len: usize,
    /// original_len / compressed_len, or 1.0 when nothing is left.
    pub ratio: f64,
}

impl CompressionResult {
    fn new(original: &str, compressed: String) -> Self {
        let original_len = original.chars().count();
        let compressed_len = compressed.chars().count();
        let ratio = if compressed_len == 0 {
            1.0
        } else {
            original_len as f64 / compressed_len as f64
        };
        Self { compressed, original_len, compressed_len, ratio }
    }

    pub fn saved_chars(&self) -> usize {
        self.original_len.saturating_sub(self.compressed_len)
    }

    pub fn reduction_pct(&self) -> f64 {
        if self.original_len == 0 {
            return 0.0;
        }
        self.saved_chars() as f64 / self.original_len as f64 * 100.0
    }

    /// Rough LLM token saving, at four characters per token.
    pub fn estimated_tokens_saved(&self) -> usize {
        (self.original_len / 4).saturating_sub(self.compressed_len / 4)
    }
}

/// Compressor bound to a pattern table snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Compressor<'a> {
    table: &'a PatternTable,
    aggressive: bool,
}

impl<'a> Compressor<'a> {
    pub fn new(table: &'a PatternTable) -> Self {
        Self { table, aggressive: false }
    }

    /// Also strip word suffixes.
    pub fn aggressive(mut self, aggressive: bool) -> Self {
        self.aggressive = aggressive;
        self
    }

    /// The ordered rule list this compressor applies.
    pub fn rules(&self) -> Vec<Rule<'a>> {
        let mut phrases: Vec<&Pattern> = self.table.active_phrase_patterns();
        // Stable sort keeps insertion order among equal lengths.
        phrases.sort_by_key(|p| std::cmp::Reverse(p.surface_chars()));

        let mut rules: Vec<Rule<'a>> = phrases
            .into_iter()
            .map(|p| Rule::new(&p.surface, &p.token, Boundary::Word))
            .collect();

        if self.aggressive {
            rules.extend(
                self.table
                    .suffixes()
                    .iter()
                    .map(|p| Rule::new(&p.surface, &p.token, Boundary::WordEnd)),
            );
        }

        rules.extend(
            self.table
                .phonetics()
                .iter()
                .map(|p| Rule::new(&p.surface, &p.token, Boundary::Word)),
        );
        rules
    }

    pub fn compress(&self, text: &str) -> CompressionResult {
        if text.is_empty() {
            return CompressionResult::new(text, String::new());
        }
        let compressed = matcher::run(&self.rules(), text);
        CompressionResult::new(text, compressed)
    }
}

/// Compress `text` with `table`.
pub fn compress(table: &PatternTable, text: &str, aggressive: bool) -> CompressionResult {
    Compressor::new(table).aggressive(aggressive).compress(text)
}
