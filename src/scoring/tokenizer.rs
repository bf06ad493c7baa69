//! Text tokenization utilities.
//!
//! A word character is `[A-Za-z0-9_]`. Everything else separates terms.

/// Shortest term kept by both document and query tokenization.
pub const MIN_TERM_LENGTH: usize = 3;

fn is_word_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || c == '_'
}

/// Split text on runs of non-word characters, dropping short fragments.
///
/// Fragments only contain ASCII word characters, so their byte length is
/// their character length. Empty fragments fall under the length filter.
pub fn split_terms(text: &str) -> impl Iterator<Item = &str> {
  text
    .split(|c: char| !is_word_char(c))
    .filter(|fragment| fragment.len() >= MIN_TERM_LENGTH)
}

/// Tokenize a document's text: lowercase first, then split and filter.
pub fn tokenize(text: &str) -> Vec<String> {
  split_terms(&text.to_lowercase()).map(str::to_owned).collect()
}

/// Tokenize a query string.
///
/// Queries are split and filtered exactly like documents but keep their case.
/// Terms are lowercased when they are matched against document tokens.
pub fn tokenize_query(query: &str) -> Vec<String> {
  split_terms(query).map(str::to_owned).collect()
}
