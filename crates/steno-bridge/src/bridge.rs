//! Wraps any LLM call with transparent compression.

use std::collections::HashMap;

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use steno_compactor::{CompressionResult, Compressor, CorpusLearner, Decompressor, PatternTable};
use steno_core::{LearnedPattern, Result, StenoConfig, StenoError};
use steno_store::PatternStore;

use crate::stats::{BridgeStats, RequestMetrics};

/// What the caller gets back from [`StenoBridge::process_with_llm`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeResponse {
    pub response: String,
    pub compressed_prompt: String,
    pub metrics: RequestMetrics,
}

/// Shared compression front-end for an LLM.
///
/// The table sits behind a reader-writer lock: compress/decompress take read
/// guards and a learning pass takes the write guard only to install its
/// result. Cache entries are written under the read guard and cleared under
/// the write guard, so every cached result was built from the current table.
pub struct StenoBridge<S: PatternStore> {
    table: RwLock<PatternTable>,
    /// Serializes learning passes.
    learner: Mutex<CorpusLearner>,
    store: S,
    aggressive: bool,
    cache_capacity: usize,
    cache: Mutex<HashMap<String, CompressionResult>>,
    stats: Mutex<BridgeStats>,
}

impl<S: PatternStore> StenoBridge<S> {
    /// Build the default table and merge whatever `store` has learned so far.
    pub fn open(config: &StenoConfig, store: S) -> Result<Self> {
        Self::with_table(config, PatternTable::with_defaults()?, store)
    }

    pub fn with_table(config: &StenoConfig, mut table: PatternTable, store: S) -> Result<Self> {
        let learned = store.load()?;
        table.merge_learned(&learned)?;

        let mut learner = CorpusLearner::with_config(config.learning.clone());
        learner.sync_counter(&table);

        Ok(Self {
            table: RwLock::new(table),
            learner: Mutex::new(learner),
            store,
            aggressive: config.compression.aggressive,
            cache_capacity: config.compression.cache_capacity,
            cache: Mutex::new(HashMap::new()),
            stats: Mutex::new(BridgeStats::default()),
        })
    }

    pub fn compress(&self, text: &str) -> CompressionResult {
        let key = format!("{:x}", md5::compute(text.as_bytes()));
        let table = self.table.read();
        if let Some(hit) = self.cache.lock().get(&key) {
            return hit.clone();
        }
        let result = Compressor::new(&table).aggressive(self.aggressive).compress(text);
        if self.cache_capacity > 0 {
            let mut cache = self.cache.lock();
            if cache.len() >= self.cache_capacity {
                tracing::debug!(entries = cache.len(), "compression cache full, clearing");
                cache.clear();
            }
            cache.insert(key, result.clone());
        }
        result
    }

    pub fn decompress(&self, text: &str) -> String {
        let table = self.table.read();
        Decompressor::new(&table).decompress(text)
    }

    /// Compress `prompt`, hand it to `llm`, and expand the reply.
    pub fn process_with_llm<F>(&self, prompt: &str, llm: F) -> Result<BridgeResponse>
    where
        F: FnOnce(&str) -> anyhow::Result<String>,
    {
        let compressed = self.compress(prompt);
        let raw = llm(&compressed.compressed).map_err(|e| StenoError::Llm(format!("{e:#}")))?;
        let response = self.decompress(&raw);

        let metrics = RequestMetrics {
            compression_ratio: compressed.ratio,
            original_len: compressed.original_len,
            compressed_len: compressed.compressed_len,
            tokens_saved: compressed.estimated_tokens_saved(),
        };
        self.stats.lock().record(&metrics);
        tracing::debug!(ratio = metrics.compression_ratio, saved = metrics.tokens_saved, "bridged request");

        Ok(BridgeResponse {
            response,
            compressed_prompt: compressed.compressed,
            metrics,
        })
    }

    /// Learn from `corpus` and persist the whole learned layer.
    ///
    /// The staged mapping is saved before it is installed: if counting,
    /// staging or saving fails, the table, the symbol counter and the cache
    /// are unchanged.
    pub fn learn(&self, corpus: &[impl AsRef<str>], min_frequency: usize) -> Result<Vec<LearnedPattern>> {
        let mut learner = self.learner.lock();
        let pass = {
            let table = self.table.read();
            let candidates = learner.candidates(&table, corpus);
            learner.stage(&table, candidates, min_frequency)?
        };

        let mapping = pass.table().learned_mapping();
        if let Err(e) = self.store.save(&mapping) {
            tracing::warn!(error = %e, "learned patterns not persisted, pass discarded");
            return Err(e);
        }

        let mut table = self.table.write();
        let learned = learner.commit(pass, &mut table);
        if !learned.is_empty() {
            self.cache.lock().clear();
        }
        tracing::info!(new = learned.len(), total = mapping.len(), "learned patterns persisted");
        Ok(learned)
    }

    /// Copy of the current table.
    pub fn snapshot(&self) -> PatternTable {
        self.table.read().clone()
    }

    pub fn stats(&self) -> BridgeStats {
        self.stats.lock().clone()
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
