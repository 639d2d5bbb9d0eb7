//! Boundary-aware, case-insensitive string search.
//!
//! Every substitution in the engine is a [`Rule`]: a literal to find, its
//! replacement, and the boundary that must hold around a match. Rules are
//! applied in a fixed order by [`run`], each as one left-to-right scan over
//! the output of the previous rule.

/// Characters that extend a word. A match boundary is any other char.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Lower-case `c` when it maps to exactly one char, otherwise keep it.
/// Folded text keeps the char positions of its source.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn eq_ci(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Whole-word match, case-insensitive.
    Word,
    /// Tail of a word with a non-empty stem, case-insensitive. The stem is kept.
    WordEnd,
    /// Exact literal match anywhere.
    Literal,
}

#[derive(Debug, Clone, Copy)]
pub struct Rule<'a> {
    pub find: &'a str,
    pub replace: &'a str,
    pub boundary: Boundary,
}

impl<'a> Rule<'a> {
    pub fn new(find: &'a str, replace: &'a str, boundary: Boundary) -> Self {
        Self { find, replace, boundary }
    }

    /// Apply the rule once over `text`. Returns the new text and the match count.
    pub fn apply(&self, text: &str) -> (String, usize) {
        if text.is_empty() || self.find.is_empty() {
            return (text.to_string(), 0);
        }
        match self.boundary {
            Boundary::Word => replace_words(text, self.find, self.replace),
            Boundary::WordEnd => replace_suffix(text, self.find, self.replace),
            Boundary::Literal => {
                let hits = text.matches(self.find).count();
                if hits == 0 {
                    (text.to_string(), 0)
                } else {
                    (text.replace(self.find, self.replace), hits)
                }
            }
        }
    }
}

/// Run an ordered rule list over `text`.
pub fn run(rules: &[Rule<'_>], text: &str) -> String {
    let mut result = text.to_string();
    for rule in rules {
        let (next, _) = rule.apply(&result);
        result = next;
    }
    result
}

fn matches_at(chars: &[char], start: usize, needle: &[char]) -> bool {
    let end = start + needle.len();
    if end > chars.len() {
        return false;
    }
    if start > 0 && is_word_char(chars[start - 1]) {
        return false;
    }
    if end < chars.len() && is_word_char(chars[end]) {
        return false;
    }
    chars[start..end].iter().zip(needle).all(|(a, b)| eq_ci(*a, *b))
}

/// Replace every whole-word, case-insensitive occurrence of `surface`.
pub fn replace_words(text: &str, surface: &str, token: &str) -> (String, usize) {
    let needle: Vec<char> = surface.chars().collect();
    let chars: Vec<char> = text.chars().collect();
    if needle.is_empty() || needle.len() > chars.len() {
        return (text.to_string(), 0);
    }

    let mut out = String::with_capacity(text.len());
    let mut hits = 0;
    let mut i = 0;
    while i < chars.len() {
        if matches_at(&chars, i, &needle) {
            out.push_str(token);
            i += needle.len();
            hits += 1;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    (out, hits)
}

/// Replace `suffix` at the end of every word that has a non-empty stem before it.
pub fn replace_suffix(text: &str, suffix: &str, token: &str) -> (String, usize) {
    let suffix: Vec<char> = suffix.chars().collect();
    if suffix.is_empty() {
        return (text.to_string(), 0);
    }
    let chars: Vec<char> = text.chars().collect();

    let mut out = String::with_capacity(text.len());
    let mut hits = 0;
    let mut i = 0;
    while i < chars.len() {
        if !is_word_char(chars[i]) {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && is_word_char(chars[i]) {
            i += 1;
        }
        let word = &chars[start..i];
        let stem_len = word.len().saturating_sub(suffix.len());
        if stem_len > 0 && word[stem_len..].iter().zip(&suffix).all(|(a, b)| eq_ci(*a, *b)) {
            out.extend(&word[..stem_len]);
            out.push_str(token);
            hits += 1;
        } else {
            out.extend(word);
        }
    }
    (out, hits)
}
