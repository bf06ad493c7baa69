//! The scoring building blocks used by the corpus.
//!
//! - [`tokenizer`]: splits document text and queries into terms.
//! - [`stats`]: term frequency, document frequency and average length.
//! - [`bm25`]: the BM25 formula itself.

/// Implements the BM25 relevance scoring function.
pub mod bm25;
/// Term statistics over a document slice.
pub mod stats;
/// Text tokenization utilities.
pub mod tokenizer;

pub use bm25::Bm25Scorer;
pub use stats::MatchMode;
pub use tokenizer::MIN_TERM_LENGTH;
