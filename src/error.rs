//! Error types for corpus construction and configuration.

use thiserror::Error;

/// Errors raised at the boundary of a [`Corpus`](crate::corpus::Corpus).
///
/// Searching never fails. Errors only surface while building a corpus or
/// loading its parameters.
#[derive(Debug, Error)]
pub enum CorpusError {
  /// No processor was configured, so documents cannot be turned into tokens.
  ///
  /// The default processor only understands textual payloads. Any other
  /// document type must supply its own.
  #[error("no document processor configured; non-text documents need a custom processor")]
  MissingProcessor,

  /// The BM25 parameters could not be parsed.
  #[error("invalid BM25 parameters: {0}")]
  InvalidParams(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CorpusError>;
