//! An implementation of the Okapi BM25 scoring function.
//!
//! BM25 (Best Matching 25) estimates how relevant a document is to a query
//! term from the term's frequency in the document, its rarity across the
//! corpus, and the document's length relative to the corpus average.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default term frequency saturation.
pub const DEFAULT_K1: f64 = 1.5;
/// Default document length normalization.
pub const DEFAULT_B: f64 = 0.75;
/// Default per-term additive floor.
pub const DEFAULT_GAMMA: f64 = 0.0;

/// A scorer for ranking documents using BM25.
///
/// The parameters are taken as given. Values outside their usual range (a
/// negative `k1`, a `b` above 1) are not rejected and flow straight into the
/// formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Scorer {
  /// The `k1` parameter controls term frequency saturation. A higher value
  /// lets the score keep growing with repeated occurrences, while `0.0`
  /// ignores how often a term occurs once it occurs at all. The default is 1.5.
  #[serde(default = "default_k1")]
  pub k1: f64,
  /// The `b` parameter controls document length normalization. `0.0`
  /// disables it and `1.0` applies it fully. The default is 0.75.
  #[serde(default = "default_b")]
  pub b: f64,
  /// The `gamma` parameter is added to the saturated term frequency before
  /// the idf multiplication, giving every term a floor of `idf * gamma`.
  /// The default is 0.0.
  #[serde(default = "default_gamma")]
  pub gamma: f64,
}

fn default_k1() -> f64 {
  DEFAULT_K1
}

fn default_b() -> f64 {
  DEFAULT_B
}

fn default_gamma() -> f64 {
  DEFAULT_GAMMA
}

impl Default for Bm25Scorer {
  /// Creates a `Bm25Scorer` with the default `k1`, `b` and `gamma`.
  fn default() -> Self {
    Self {
      k1: DEFAULT_K1,
      b: DEFAULT_B,
      gamma: DEFAULT_GAMMA,
    }
  }
}

impl Bm25Scorer {
  /// Creates a new `Bm25Scorer` with the default parameters.
  pub fn new() -> Self {
    Self::default()
  }

  /// Parses scorer parameters from JSON. Missing fields keep their defaults.
  ///
  /// ```rust
  /// use bm25_corpus::prelude::*;
  ///
  /// let scorer = Bm25Scorer::from_json(r#"{ "k1": 1.2 }"#).unwrap();
  /// assert_eq!(scorer.k1, 1.2);
  /// assert_eq!(scorer.b, 0.75);
  /// ```
  pub fn from_json(json: &str) -> Result<Self> {
    Ok(serde_json::from_str(json)?)
  }

  /// Sets `k1`.
  pub fn k1(mut self, k1: f64) -> Self {
    self.k1 = k1;
    self
  }

  /// Sets `b`.
  pub fn b(mut self, b: f64) -> Self {
    self.b = b;
    self
  }

  /// Sets `gamma`.
  pub fn gamma(mut self, gamma: f64) -> Self {
    self.gamma = gamma;
    self
  }

  /// Calculates the Inverse Document Frequency (IDF) of a term.
  ///
  /// Uses `ln((N - n + 0.5) / (n + 0.5) + 1)`. The `+ 1` keeps the logarithm's
  /// argument above one for every `n` in `0..=N`, so the result is finite and
  /// never negative, even for a term present in every document.
  pub fn idf(&self, total_docs: usize, doc_freq: usize) -> f64 {
    let n = total_docs as f64;
    let df = doc_freq as f64;
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
  }

  /// The saturated, length normalized term frequency component.
  pub fn saturation(&self, tf: usize, doc_length: usize, avg_doc_length: f64) -> f64 {
    let tf = tf as f64;
    let norm = 1.0 - self.b + self.b * doc_length as f64 / avg_doc_length;
    (tf * (self.k1 + 1.0)) / (tf + self.k1 * norm)
  }

  /// Scores one term against one document.
  ///
  /// # Arguments
  ///
  /// * `tf` - Occurrences of the term in the document.
  /// * `doc_length` - Token count of the document.
  /// * `avg_doc_length` - Average token count across the corpus.
  /// * `idf` - The term's inverse document frequency, see [`Bm25Scorer::idf`].
  pub fn score(&self, tf: usize, doc_length: usize, avg_doc_length: f64, idf: f64) -> f64 {
    idf * (self.saturation(tf, doc_length, avg_doc_length) + self.gamma)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
  }

  #[test]
  fn test_idf_values() {
    let scorer = Bm25Scorer::new();
    // 3 docs, term in 2 of them: ln(1.5 / 2.5 + 1) = ln(1.6)
    assert!(close(scorer.idf(3, 2), 1.6f64.ln()));
    // term absent: ln(3.5 / 0.5 + 1) = ln(8)
    assert!(close(scorer.idf(3, 0), 8f64.ln()));
  }

  #[test]
  fn test_idf_never_negative() {
    let scorer = Bm25Scorer::new();
    for total in 0..50 {
      for df in 0..=total {
        let idf = scorer.idf(total, df);
        assert!(idf.is_finite());
        assert!(idf > 0.0);
      }
    }
  }

  #[test]
  fn test_bm25_scoring() {
    let scorer = Bm25Scorer::new();
    let idf = scorer.idf(10, 5);
    let score = scorer.score(3, 6, 10.0, idf);
    let expected = idf * (3.0 * 2.5) / (3.0 + 1.5 * (0.25 + 0.75 * 0.6));
    assert!(close(score, expected));
    assert!(score > 0.0);
  }

  #[test]
  fn test_zero_tf_scores_zero_without_gamma() {
    let scorer = Bm25Scorer::new();
    assert_eq!(scorer.score(0, 5, 4.0, 1.3), 0.0);
  }

  #[test]
  fn test_k1_zero_ignores_repetition() {
    let scorer = Bm25Scorer::new().k1(0.0);
    let idf = scorer.idf(4, 1);
    for tf in 1..10 {
      assert!(close(scorer.score(tf, 7, 3.0, idf), idf));
    }
  }

  #[test]
  fn test_gamma_is_inside_idf() {
    let scorer = Bm25Scorer::new().gamma(0.5);
    let idf = scorer.idf(4, 1);
    let base = Bm25Scorer::new().score(2, 4, 4.0, idf);
    assert!(close(scorer.score(2, 4, 4.0, idf), base + idf * 0.5));
    assert!(close(scorer.score(0, 4, 4.0, idf), idf * 0.5));
  }

  #[test]
  fn test_b_zero_ignores_length() {
    let scorer = Bm25Scorer::new().b(0.0);
    let short = scorer.saturation(2, 1, 10.0);
    let long = scorer.saturation(2, 100, 10.0);
    assert!(close(short, long));
  }

  #[test]
  fn test_negative_k1_is_not_rejected() {
    let scorer = Bm25Scorer::new().k1(-1.0);
    // tf * 0 / (tf - norm) is zero for any finite denominator
    assert_eq!(scorer.saturation(1, 2, 4.0), 0.0);
  }

  #[test]
  fn test_from_json_defaults() {
    let scorer = Bm25Scorer::from_json("{}").unwrap();
    assert_eq!(scorer, Bm25Scorer::default());

    let scorer = Bm25Scorer::from_json(r#"{"b": 0.3, "gamma": 0.1}"#).unwrap();
    assert_eq!(scorer.k1, DEFAULT_K1);
    assert_eq!(scorer.b, 0.3);
    assert_eq!(scorer.gamma, 0.1);
  }

  #[test]
  fn test_from_json_rejects_garbage() {
    assert!(Bm25Scorer::from_json(r#"{"k1": "fast"}"#).is_err());
  }
}
