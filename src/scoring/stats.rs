//! Term statistics computed over a document slice.
//!
//! Nothing here is cached. Every call walks the documents it is given, so the
//! numbers always reflect the corpus as it is right now.

use crate::types::Document;
use serde::{Deserialize, Serialize};

/// How a query term is compared against document tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchMode {
  /// The token must equal the term.
  #[default]
  Exact,
  /// The token must contain the term as a substring.
  Partial,
}

impl MatchMode {
  /// Returns `true` if `token` matches the already lowercased `term`.
  pub fn matches(self, token: &str, term: &str) -> bool {
    match self {
      MatchMode::Exact => token == term,
      MatchMode::Partial => token.contains(term),
    }
  }
}

impl From<bool> for MatchMode {
  /// `true` selects partial matching.
  fn from(partial: bool) -> Self {
    if partial {
      MatchMode::Partial
    } else {
      MatchMode::Exact
    }
  }
}

/// Counts tokens matching a term that is already lowercase.
pub(crate) fn count_matches(term: &str, words: &[String], mode: MatchMode) -> usize {
  words.iter().filter(|word| mode.matches(word, term)).count()
}

/// Counts documents holding at least one token matching a lowercase term.
pub(crate) fn count_documents<T>(term: &str, documents: &[Document<T>], mode: MatchMode) -> usize {
  documents
    .iter()
    .filter(|document| document.words().iter().any(|word| mode.matches(word, term)))
    .count()
}

/// Number of tokens in `document` matching `term`.
///
/// The term is lowercased before comparison.
pub fn term_frequency<T>(term: &str, document: &Document<T>, mode: MatchMode) -> usize {
  count_matches(&term.to_lowercase(), document.words(), mode)
}

/// Number of documents with at least one token matching `term`.
///
/// The term is lowercased before comparison.
pub fn document_frequency<T>(term: &str, documents: &[Document<T>], mode: MatchMode) -> usize {
  count_documents(&term.to_lowercase(), documents, mode)
}

/// Mean token count over all documents, or `None` when there are none.
pub fn average_document_length<T>(documents: &[Document<T>]) -> Option<f64> {
  if documents.is_empty() {
    return None;
  }
  let total: usize = documents.iter().map(Document::len).sum();
  Some(total as f64 / documents.len() as f64)
}
