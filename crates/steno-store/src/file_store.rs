use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use steno_core::{LearnedMapping, Result, StenoError, StoreConfig};

use crate::traits::PatternStore;

/// JSON file store with atomic writes.
#[derive(Debug, Clone)]
pub struct FilePatternStore {
    path: PathBuf,
}

impl FilePatternStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn write_atomic(&self, bytes: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("tmp");
        let result = (|| -> std::io::Result<()> {
            let mut f = fs::File::create(&tmp_path)?;
            f.write_all(bytes)?;
            f.flush()?;
            f.sync_all()?;
            fs::rename(&tmp_path, &self.path)?;
            Ok(())
        })();
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }
}

impl PatternStore for FilePatternStore {
    /// A missing file is an empty mapping.
    fn load(&self) -> Result<LearnedMapping> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no learned patterns on disk");
            return Ok(LearnedMapping::new());
        }
        let bytes = fs::read(&self.path)?;
        let mapping: LearnedMapping = serde_json::from_slice(&bytes)?;
        tracing::debug!(path = %self.path.display(), patterns = mapping.len(), "learned patterns loaded");
        Ok(mapping)
    }

    fn save(&self, mapping: &LearnedMapping) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(mapping)?;
        self.write_atomic(&bytes).map_err(|e| {
            StenoError::Store(format!("failed to write {}: {e}", self.path.display()))
        })?;
        tracing::info!(path = %self.path.display(), patterns = mapping.len(), "learned patterns saved");
        Ok(())
    }
}
