//! Corpus learning: promote frequent n-grams to learned phrase patterns.

use std::collections::HashMap;

use steno_core::{LearnedPattern, LearnerConfig, Result};

use crate::matcher::fold_char;
use crate::table::{symbol_number, symbol_token, PatternTable};

/// Frequency counter that remembers first-seen order.
#[derive(Debug, Default)]
struct OrderedCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl OrderedCounter {
    fn add(&mut self, key: String) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Top `n` by count; ties keep first-seen order.
    fn most_common(mut self, n: usize) -> Vec<(String, usize)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries.truncate(n);
        self.entries
    }
}

/// A learning pass staged on a copy of the table, not yet committed.
#[derive(Debug, Clone)]
pub struct LearningPass {
    table: PatternTable,
    learned: Vec<LearnedPattern>,
    next_symbol: u64,
}

impl LearningPass {
    /// The table as it will look once committed.
    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    pub fn learned(&self) -> &[LearnedPattern] {
        &self.learned
    }
}

/// Mines a corpus for repeated n-grams and registers them in a [`PatternTable`].
///
/// A pass runs in three steps: [`candidates`](Self::candidates) and
/// [`stage`](Self::stage) only read the table, [`commit`](Self::commit)
/// installs the staged result. [`analyze`](Self::analyze) runs all three.
#[derive(Debug, Clone)]
pub struct CorpusLearner {
    config: LearnerConfig,
    next_symbol: u64,
}

impl CorpusLearner {
    pub fn new() -> Self {
        Self::with_config(LearnerConfig::default())
    }

    pub fn with_config(config: LearnerConfig) -> Self {
        let next_symbol = config.counter_start;
        Self { config, next_symbol }
    }

    pub fn config(&self) -> &LearnerConfig {
        &self.config
    }

    /// Counter value the next learned token will use (if unused).
    pub fn next_symbol(&self) -> u64 {
        self.next_symbol
    }

    /// Move the counter past every learned symbol already in `table`.
    pub fn sync_counter(&mut self, table: &PatternTable) {
        if let Some(max) = table.learned().iter().filter_map(|p| symbol_number(&p.token)).max() {
            self.next_symbol = self.next_symbol.max(max + 1);
        }
    }

    /// Most frequent n-grams of `corpus` not already covered by an active
    /// phrase, capped at `max_candidates`. Ties keep first-seen order.
    pub fn candidates(&self, table: &PatternTable, corpus: &[impl AsRef<str>]) -> Vec<(String, usize)> {
        let mut counter = OrderedCounter::default();
        for doc in corpus {
            // Folded char by char so a learned surface has the same length as its source.
            let folded: String = doc.as_ref().chars().map(fold_char).collect();
            let words: Vec<&str> = folded.split_whitespace().collect();
            for n in self.config.min_n..=self.config.max_n {
                if n == 0 {
                    continue;
                }
                for window in words.windows(n) {
                    let gram = window.join(" ");
                    if !table.contains_phrase(&gram) {
                        counter.add(gram);
                    }
                }
            }
        }
        let candidates = counter.most_common(self.config.max_candidates);
        tracing::debug!(candidates = candidates.len(), "corpus scanned");
        candidates
    }

    /// Register every candidate seen at least `min_frequency` times on a copy
    /// of `table`. Neither `table` nor the counter is touched.
    pub fn stage(
        &self,
        table: &PatternTable,
        candidates: Vec<(String, usize)>,
        min_frequency: usize,
    ) -> Result<LearningPass> {
        let mut staged = table.clone();
        let mut next_symbol = self.next_symbol;
        let mut learned = Vec::new();

        for (ngram, frequency) in candidates {
            if frequency < min_frequency {
                continue;
            }
            let token = next_token(&staged, &mut next_symbol);
            if let Err(e) = staged.add_learned(ngram.clone(), token.clone()) {
                tracing::warn!(%ngram, error = %e, "learning pass rejected");
                return Err(e);
            }
            learned.push(LearnedPattern { ngram, token, frequency });
        }

        Ok(LearningPass {
            table: staged,
            learned,
            next_symbol,
        })
    }

    /// Install a staged pass. Returns the new patterns in assignment order.
    pub fn commit(&mut self, pass: LearningPass, table: &mut PatternTable) -> Vec<LearnedPattern> {
        *table = pass.table;
        self.next_symbol = pass.next_symbol;
        tracing::info!(learned = pass.learned.len(), next_symbol = self.next_symbol, "learning pass complete");
        pass.learned
    }

    /// Learn from `corpus`, registering every candidate seen at least
    /// `min_frequency` times. Returns the new patterns in assignment order.
    ///
    /// Registration is all-or-nothing: on error `table` and the counter are
    /// left as they were.
    pub fn analyze(
        &mut self,
        table: &mut PatternTable,
        corpus: &[impl AsRef<str>],
        min_frequency: usize,
    ) -> Result<Vec<LearnedPattern>> {
        let candidates = self.candidates(table, corpus);
        let pass = self.stage(table, candidates, min_frequency)?;
        Ok(self.commit(pass, table))
    }
}

fn next_token(table: &PatternTable, next_symbol: &mut u64) -> String {
    loop {
        let token = symbol_token(*next_symbol);
        *next_symbol += 1;
        if !table.contains_token(&token) {
            return token;
        }
    }
}

impl Default for CorpusLearner {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot learning with a fresh learner.
pub fn analyze(
    table: &mut PatternTable,
    corpus: &[impl AsRef<str>],
    min_frequency: usize,
) -> Result<Vec<LearnedPattern>> {
    let mut learner = CorpusLearner::new();
    learner.sync_counter(table);
    learner.analyze(table, corpus, min_frequency)
}
