//! Pattern table: the phrase, suffix and phonetic layers plus learned phrases.
//!
//! All invariants are checked on insertion, so a constructed table is always
//! invertible:
//! - tokens are unique across every layer;
//! - surfaces are unique (case-insensitively) within a layer;
//! - no token is a substring of another token;
//! - no token occurs inside another pattern's surface, and no surface occurs
//!   inside another pattern's token (both case-insensitive).

use std::collections::{HashMap, HashSet};

use steno_core::{Layer, LearnedMapping, Pattern, Result, StenoError};

use crate::defaults;

#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    phrases: Vec<Pattern>,
    suffixes: Vec<Pattern>,
    phonetics: Vec<Pattern>,
    learned: Vec<Pattern>,
    /// token -> owning layer
    tokens: HashMap<String, Layer>,
    /// lower-cased surfaces per layer
    surfaces: HashMap<Layer, HashSet<String>>,
}

impl PatternTable {
    /// Build a table from the three static layers, rejecting any collision or conflict.
    pub fn new(phrases: Vec<Pattern>, suffixes: Vec<Pattern>, phonetics: Vec<Pattern>) -> Result<Self> {
        let mut table = Self::default();
        for (layer, patterns) in [
            (Layer::Phrase, phrases),
            (Layer::Suffix, suffixes),
            (Layer::Phonetic, phonetics),
        ] {
            for pattern in patterns {
                table.insert(layer, pattern)?;
            }
        }
        tracing::debug!(
            phrases = table.phrases.len(),
            suffixes = table.suffixes.len(),
            phonetics = table.phonetics.len(),
            "pattern table built"
        );
        Ok(table)
    }

    /// The built-in dictionary.
    pub fn with_defaults() -> Result<Self> {
        Self::new(defaults::phrases(), defaults::suffixes(), defaults::phonetics())
    }

    /// Register a learned phrase. Fails if the token exists anywhere, or the ngram
    /// already exists in any layer.
    pub fn add_learned(&mut self, ngram: impl Into<String>, token: impl Into<String>) -> Result<()> {
        self.insert(Layer::Learned, Pattern::new(ngram, token))
    }

    /// Register a persisted mapping, ordered by learned symbol number.
    pub fn merge_learned(&mut self, mapping: &LearnedMapping) -> Result<usize> {
        let mut entries: Vec<(&String, &String)> = mapping.iter().collect();
        entries.sort_by(|a, b| {
            let x = symbol_number(a.1).unwrap_or(u64::MAX);
            let y = symbol_number(b.1).unwrap_or(u64::MAX);
            x.cmp(&y).then_with(|| a.0.cmp(b.0))
        });
        let mut added = 0;
        for (ngram, token) in entries {
            if self.learned.iter().any(|p| &p.surface == ngram && &p.token == token) {
                continue;
            }
            self.add_learned(ngram.clone(), token.clone())?;
            added += 1;
        }
        tracing::info!(added, total = self.learned.len(), "merged learned patterns");
        Ok(added)
    }

    /// Static phrases followed by learned phrases, in insertion order.
    pub fn active_phrase_patterns(&self) -> Vec<&Pattern> {
        self.phrases.iter().chain(self.learned.iter()).collect()
    }

    pub fn phrases(&self) -> &[Pattern] {
        &self.phrases
    }

    pub fn suffixes(&self) -> &[Pattern] {
        &self.suffixes
    }

    pub fn phonetics(&self) -> &[Pattern] {
        &self.phonetics
    }

    pub fn learned(&self) -> &[Pattern] {
        &self.learned
    }

    /// Learned layer in its persisted form.
    pub fn learned_mapping(&self) -> LearnedMapping {
        self.learned
            .iter()
            .map(|p| (p.surface.clone(), p.token.clone()))
            .collect()
    }

    /// Case-insensitive membership in the static or learned phrase layers.
    pub fn contains_phrase(&self, surface: &str) -> bool {
        let folded = surface.to_lowercase();
        [Layer::Phrase, Layer::Learned]
            .iter()
            .any(|layer| self.surfaces.get(layer).is_some_and(|s| s.contains(&folded)))
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.tokens.contains_key(token)
    }

    /// Layer owning `token`, if any.
    pub fn layer_of(&self, token: &str) -> Option<Layer> {
        self.tokens.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn all_patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.phrases
            .iter()
            .chain(self.learned.iter())
            .chain(self.suffixes.iter())
            .chain(self.phonetics.iter())
    }

    fn layer_mut(&mut self, layer: Layer) -> &mut Vec<Pattern> {
        match layer {
            Layer::Phrase => &mut self.phrases,
            Layer::Learned => &mut self.learned,
            Layer::Suffix => &mut self.suffixes,
            Layer::Phonetic => &mut self.phonetics,
        }
    }

    fn insert(&mut self, layer: Layer, pattern: Pattern) -> Result<()> {
        if pattern.surface.trim().is_empty() {
            return Err(StenoError::InvalidPattern(format!("empty surface for token {:?}", pattern.token)));
        }
        if pattern.token.is_empty() {
            return Err(StenoError::InvalidPattern(format!("empty token for {:?}", pattern.surface)));
        }

        if let Some(owner) = self.tokens.get(&pattern.token) {
            return Err(StenoError::Collision {
                layer,
                detail: format!("token {:?} already used in {} layer", pattern.token, owner),
            });
        }

        let folded = pattern.surface.to_lowercase();
        let duplicate_in = match layer {
            // Learned ngrams must be new to every layer.
            Layer::Learned => [Layer::Phrase, Layer::Learned, Layer::Suffix, Layer::Phonetic]
                .into_iter()
                .find(|l| self.surfaces.get(l).is_some_and(|s| s.contains(&folded))),
            _ => Some(layer).filter(|l| self.surfaces.get(l).is_some_and(|s| s.contains(&folded))),
        };
        if let Some(existing) = duplicate_in {
            return Err(StenoError::Collision {
                layer,
                detail: format!("surface {:?} already present in {} layer", pattern.surface, existing),
            });
        }

        self.check_conflicts(&pattern)?;

        self.tokens.insert(pattern.token.clone(), layer);
        self.surfaces.entry(layer).or_default().insert(folded);
        self.layer_mut(layer).push(pattern);
        Ok(())
    }

    fn check_conflicts(&self, candidate: &Pattern) -> Result<()> {
        let cand_token = candidate.token.to_lowercase();
        let cand_surface = candidate.surface.to_lowercase();

        for existing in self.all_patterns() {
            let token = existing.token.to_lowercase();
            let surface = existing.surface.to_lowercase();

            let reason = if existing.token.contains(candidate.token.as_str())
                || candidate.token.contains(existing.token.as_str())
            {
                Some("token is a substring of another token")
            } else if surface.contains(&cand_token) || cand_surface.contains(&token) {
                Some("token occurs inside a surface form")
            } else if token.contains(&cand_surface) || cand_token.contains(&surface) {
                Some("surface form occurs inside a token")
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(StenoError::PatternConflict {
                    candidate: format!("{} -> {}", candidate.surface, candidate.token),
                    existing: format!("{} -> {}", existing.surface, existing.token),
                    reason: reason.into(),
                });
            }
        }
        Ok(())
    }
}

/// Numeric part of a learned symbol such as `[C1042]`.
pub(crate) fn symbol_number(token: &str) -> Option<u64> {
    token
        .strip_prefix("[C")
        .and_then(|rest| rest.strip_suffix(']'))
        .and_then(|digits| digits.parse().ok())
}

/// Learned symbol for counter value `n`.
pub(crate) fn symbol_token(n: u64) -> String {
    format!("[C{n}]")
}
