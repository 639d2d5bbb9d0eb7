//! Reverse pass: phonetic tokens, then suffix tokens, then phrase tokens.
//!
//! Tokens are replaced literally. Two consequences are accepted:
//! - expansion always emits the table's surface form, so the original casing
//!   of replaced spans is lost (a suffix keeps its stem's casing, the suffix
//!   itself comes back canonical);
//! - token strings that occur naturally in the input are expanded too.
//!
//! Anything that looks like a token but is not in the table is left alone.

use steno_core::Pattern;

use crate::matcher::{self, Boundary, Rule};
use crate::table::PatternTable;

#[derive(Debug, Clone, Copy)]
pub struct Decompressor<'a> {
    table: &'a PatternTable,
}

fn layer_rules<'a>(patterns: impl Iterator<Item = &'a Pattern>) -> Vec<Rule<'a>> {
    let mut layer: Vec<&Pattern> = patterns.collect();
    layer.sort_by_key(|p| std::cmp::Reverse(p.token.chars().count()));
    layer
        .into_iter()
        .map(|p| Rule::new(&p.token, &p.surface, Boundary::Literal))
        .collect()
}

impl<'a> Decompressor<'a> {
    pub fn new(table: &'a PatternTable) -> Self {
        Self { table }
    }

    pub fn rules(&self) -> Vec<Rule<'a>> {
        let mut rules = layer_rules(self.table.phonetics().iter());
        rules.extend(layer_rules(self.table.suffixes().iter()));
        rules.extend(layer_rules(self.table.active_phrase_patterns().into_iter()));
        rules
    }

    pub fn decompress(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        matcher::run(&self.rules(), text)
    }
}

/// Expand every known token in `text`.
pub fn decompress(table: &PatternTable, text: &str) -> String {
    Decompressor::new(table).decompress(text)
}
