use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StenoConfig {
    pub compression: CompressionConfig,
    pub learning: LearnerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    /// Enables the suffix layer.
    pub aggressive: bool,
    /// Entries kept in the bridge's result cache; 0 disables it.
    pub cache_capacity: usize,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            aggressive: false,
            cache_capacity: 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    pub min_n: usize,
    pub max_n: usize,
    /// Only the most frequent candidates are considered for promotion.
    pub max_candidates: usize,
    /// First learned symbol number; sits above hand-assigned tokens.
    pub counter_start: u64,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            min_n: 2,
            max_n: 6,
            max_candidates: 1000,
            counter_start: 1000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub dir: PathBuf,
    pub file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let dir = dirs::cache_dir()
            .map(|d| d.join("steno"))
            .unwrap_or_else(|| PathBuf::from(".steno_cache"));
        Self {
            dir,
            file_name: "patterns.json".into(),
        }
    }
}

impl StoreConfig {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

impl StenoConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = StenoConfig::default();
        assert!(!cfg.compression.aggressive);
        assert_eq!(cfg.compression.cache_capacity, 1024);
        assert_eq!(cfg.learning.min_n, 2);
        assert_eq!(cfg.learning.max_n, 6);
        assert_eq!(cfg.learning.max_candidates, 1000);
        assert_eq!(cfg.learning.counter_start, 1000);
        assert!(cfg.store.path().ends_with("patterns.json"));
    }

    #[test]
    fn test_partial_json() {
        let cfg = StenoConfig::from_json(r#"{"compression":{"aggressive":true},"learning":{"counter_start":5000}}"#).unwrap();
        assert!(cfg.compression.aggressive);
        assert_eq!(cfg.learning.counter_start, 5000);
        assert_eq!(cfg.learning.max_n, 6);
        assert_eq!(cfg.compression.cache_capacity, 1024);
    }

    #[test]
    fn test_bad_json() {
        assert!(StenoConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = StenoConfig::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(cfg.learning.counter_start, 1000);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("steno.json");
        std::fs::write(&path, r#"{"store":{"dir":"/tmp/x","file_name":"learned.json"}}"#).unwrap();
        let cfg = StenoConfig::load(&path).unwrap();
        assert_eq!(cfg.store.path(), PathBuf::from("/tmp/x/learned.json"));
    }
}
