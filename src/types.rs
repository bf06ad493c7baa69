//! Core data types for the corpus.

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
pub trait Searchable: Send + Sync {}
#[cfg(feature = "parallel")]
impl<T: Send + Sync> Searchable for T {}

#[cfg(not(feature = "parallel"))]
pub trait Searchable {}
#[cfg(not(feature = "parallel"))]
impl<T> Searchable for T {}

/// An indexed document: the caller's payload paired with its tokens.
///
/// A `Document` is built once when the payload enters the corpus and is never
/// mutated afterwards. The token list is whatever the corpus processor
/// produced for the payload, in order, duplicates included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
  original: T,
  words: Vec<String>,
}

impl<T> Document<T> {
  /// Creates a document from a payload and its already computed tokens.
  pub fn new(original: T, words: Vec<String>) -> Self {
    Self { original, words }
  }

  /// The payload handed over by the caller.
  pub fn original(&self) -> &T {
    &self.original
  }

  /// The token sequence derived from the payload.
  pub fn words(&self) -> &[String] {
    &self.words
  }

  /// Number of tokens in the document.
  pub fn len(&self) -> usize {
    self.words.len()
  }

  /// Returns `true` if the processor produced no tokens for this document.
  ///
  /// Such a document can never match a query.
  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// Consumes the document and returns the payload.
  pub fn into_original(self) -> T {
    self.original
  }
}

/// A ranked search hit.
///
/// Results are produced by [`Corpus::search`](crate::corpus::Corpus::search)
/// and borrow the payload from the corpus. They are never stored by the
/// corpus, so a result list captured earlier is not affected by later
/// insertions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<T> {
  /// The matched payload.
  pub document: T,
  /// Mean BM25 score across the query terms. Always strictly positive.
  pub score: f64,
  /// Insertion index of the document inside the corpus.
  pub id: usize,
}

impl<T> SearchResult<T> {
  /// Creates a new search result.
  pub fn new(document: T, score: f64, id: usize) -> Self {
    Self {
      document,
      score,
      id,
    }
  }

  /// Maps the payload, keeping score and id.
  ///
  /// Handy for turning borrowed results into owned ones:
  /// `result.map(Clone::clone)`.
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SearchResult<U> {
    SearchResult {
      document: f(self.document),
      score: self.score,
      id: self.id,
    }
  }
}
