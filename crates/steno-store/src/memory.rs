use parking_lot::RwLock;
use steno_core::{LearnedMapping, Result};

use crate::traits::PatternStore;

/// In-memory pattern store.
#[derive(Debug, Default)]
pub struct MemoryPatternStore {
    data: RwLock<LearnedMapping>,
    saves: RwLock<usize>,
}

impl MemoryPatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mapping(mapping: LearnedMapping) -> Self {
        Self { data: RwLock::new(mapping), saves: RwLock::new(0) }
    }

    /// Number of completed saves.
    pub fn save_count(&self) -> usize {
        *self.saves.read()
    }
}

impl PatternStore for MemoryPatternStore {
    fn load(&self) -> Result<LearnedMapping> {
        Ok(self.data.read().clone())
    }

    fn save(&self, mapping: &LearnedMapping) -> Result<()> {
        *self.data.write() = mapping.clone();
        *self.saves.write() += 1;
        Ok(())
    }
}
