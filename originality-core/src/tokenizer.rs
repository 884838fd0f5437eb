// originality-core/src/tokenizer.rs
//! Word tokenizer shared by the frequency model and the TF-IDF vectorizer.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of Unicode word characters (letters, marks, digits, connectors).
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("word pattern is a valid regex"));

/// Splits `text` into lowercase word tokens, left to right.
///
/// Punctuation and whitespace are discarded; digits are kept as-is.
/// Tokens are not deduplicated. An empty string yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
