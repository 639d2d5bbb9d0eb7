//! Built-in dictionary.

use steno_core::Pattern;

/// Multi-word phrases. Numbered tokens cover the highest-value phrases.
pub const PHRASES: &[(&str, &str)] = &[
    ("in order to", "[1]"),
    ("be able to", "[2]"),
    ("with respect to", "[3]"),
    ("at this point in time", "[4]"),
    ("the fact that", "[5]"),
    ("as a result of", "[6]"),
    ("in accordance with", "[7]"),
    ("for the purpose of", "[8]"),
    ("in the event that", "[9]"),
    ("with regard to", "[10]"),
    // Technical terms
    ("artificial intelligence", "[AI]"),
    ("machine learning", "[ML]"),
    ("large language model", "[LLM]"),
    ("neural network", "[NN]"),
    ("natural language processing", "[NLP]"),
    ("application programming interface", "[API]"),
    ("user interface", "[UI]"),
    ("user experience", "[UX]"),
    ("database", "[DB]"),
    ("javascript", "[JS]"),
    // Verb patterns
    ("is going to", "[>]"),
    ("was going to", "[>.]"),
    ("will be able to", "[>>]"),
    ("would have been", "[w.]"),
    ("could have been", "[c.]"),
    ("should have been", "[s.]"),
    ("might have been", "[m.]"),
    // Business terms
    ("return on investment", "[ROI]"),
    ("key performance indicator", "[KPI]"),
    ("quarter over quarter", "[QoQ]"),
    ("year over year", "[YoY]"),
    ("total addressable market", "[TAM]"),
];

/// Word endings. Only applied in aggressive mode.
pub const SUFFIXES: &[(&str, &str)] = &[
    ("tion", "[+N]"),
    ("ing", "[+G]"),
    ("ness", "[+S]"),
    ("ment", "[+M]"),
    ("able", "[+B]"),
    ("ible", "[+I]"),
    ("ful", "[+F]"),
    ("less", "[+L]"),
    ("ly", "[+Y]"),
];

/// Informal respellings. Longer words precede their prefixes.
pub const PHONETICS: &[(&str, &str)] = &[
    ("through", "{thru}"),
    ("though", "{tho}"),
    ("enough", "{enuf}"),
    ("before", "{b4}"),
    ("because", "{bc}"),
    ("without", "{w/o}"),
    ("with", "{w/}"),
    ("you're", "{u're}"),
    ("your", "{ur}"),
    ("you", "{u}"),
    ("are", "{r}"),
    ("why", "{y}"),
    ("see", "{c}"),
    ("okay", "{ok}"),
];

pub fn phrases() -> Vec<Pattern> {
    Pattern::from_pairs(PHRASES)
}

pub fn suffixes() -> Vec<Pattern> {
    Pattern::from_pairs(SUFFIXES)
}

pub fn phonetics() -> Vec<Pattern> {
    Pattern::from_pairs(PHONETICS)
}
