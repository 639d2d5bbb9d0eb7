use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Persisted form of the learned layer: ngram -> token.
pub type LearnedMapping = BTreeMap<String, String>;

/// Substitution layer a pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    Phrase,
    Learned,
    Suffix,
    Phonetic,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Phrase => "phrase",
            Self::Learned => "learned",
            Self::Suffix => "suffix",
            Self::Phonetic => "phonetic",
        };
        f.write_str(name)
    }
}

/// A surface form and the token that stands in for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub surface: String,
    pub token: String,
}

impl Pattern {
    pub fn new(surface: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            token: token.into(),
        }
    }

    /// Build an ordered pattern list from `(surface, token)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Vec<Pattern> {
        pairs.iter().map(|(s, t)| Pattern::new(*s, *t)).collect()
    }

    pub fn surface_chars(&self) -> usize {
        self.surface.chars().count()
    }
}

/// An n-gram promoted to the learned layer by corpus analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnedPattern {
    pub ngram: String,
    pub token: String,
    pub frequency: usize,
}

