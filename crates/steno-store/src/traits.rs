use steno_core::{LearnedMapping, Result};

/// Persistence boundary for the learned layer.
pub trait PatternStore: Send + Sync {
    fn load(&self) -> Result<LearnedMapping>;
    fn save(&self, mapping: &LearnedMapping) -> Result<()>;
}

impl<S: PatternStore + ?Sized> PatternStore for Box<S> {
    fn load(&self) -> Result<LearnedMapping> {
        (**self).load()
    }

    fn save(&self, mapping: &LearnedMapping) -> Result<()> {
        (**self).save(mapping)
    }
}
