//! bm25_corpus - An embeddable in-memory BM25 ranking engine.
//!
//! A [`Corpus`](corpus::Corpus) holds documents of any type together with the
//! tokens a processor derived from them, and ranks them against free-text
//! queries with BM25. There is no persistent index: statistics are computed
//! from the live documents on every search.

pub mod corpus;
pub mod error;
pub mod options;
pub mod processors;
pub mod scoring;
pub mod types;

pub mod prelude {
  //! Convenient re-exports for common types and functions.

  pub use crate::corpus::Corpus;
  pub use crate::error::CorpusError;
  pub use crate::options::{CorpusOptions, CorpusOptionsBuilder, Processor};
  pub use crate::processors;
  pub use crate::scoring::bm25::{Bm25Scorer, DEFAULT_B, DEFAULT_GAMMA, DEFAULT_K1};
  pub use crate::scoring::stats::MatchMode;
  pub use crate::scoring::tokenizer::{tokenize, tokenize_query, MIN_TERM_LENGTH};
  pub use crate::types::*;
}
