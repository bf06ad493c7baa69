//! The corpus: an append-only document collection ranked with BM25.

use crate::error::{CorpusError, Result};
use crate::options::{CorpusOptions, Processor};
use crate::processors;
use crate::scoring::bm25::Bm25Scorer;
use crate::scoring::stats::{self, MatchMode};
use crate::scoring::tokenizer::tokenize_query;
use crate::types::{Document, SearchResult, Searchable};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An in-memory collection of documents searchable with BM25.
///
/// The corpus owns its documents in insertion order. Documents can be
/// appended but never removed or changed. Term statistics are not cached:
/// every search recomputes document frequencies and the average document
/// length from the current documents, so an [`add_document`] is visible to
/// the very next search.
///
/// Searching takes `&self` and appending takes `&mut self`, so a corpus shared
/// between threads needs the usual outer synchronization (an `RwLock`, or a
/// clone per batch of searches).
///
/// # Examples
///
/// ```rust
/// use bm25_corpus::prelude::*;
///
/// let corpus = Corpus::new(vec![
///     "the cat sat on the mat",
///     "dogs are great pets",
///     "the cat and the dog played",
/// ]);
///
/// let results = corpus.search("cat");
/// assert_eq!(results.len(), 2);
/// assert!(results.iter().all(|r| r.score > 0.0));
/// assert!(results.iter().all(|r| *r.document != "dogs are great pets"));
/// ```
///
/// [`add_document`]: Corpus::add_document
pub struct Corpus<T> {
  /// Indexed documents, in insertion order.
  documents: Vec<Document<T>>,
  /// Turns payloads into tokens.
  processor: Processor<T>,
  /// BM25 parameters.
  scorer: Bm25Scorer,
}

impl<T: AsRef<str> + 'static> Corpus<T> {
  /// Creates a corpus of textual documents with the default options.
  pub fn new(documents: impl IntoIterator<Item = T>) -> Self {
    Self::from_parts(documents, processors::text(), Bm25Scorer::default())
  }

  /// Creates a corpus of textual documents, layering `options` over the
  /// defaults.
  ///
  /// Unlike [`Corpus::with_options`] this never fails: when `options` holds no
  /// processor, the default text processor is used.
  ///
  /// ```rust
  /// use bm25_corpus::prelude::*;
  ///
  /// let corpus = Corpus::with_text_options(
  ///     vec!["the cat sat", "dogs bark"],
  ///     CorpusOptions::builder().k1(1.2).build(),
  /// );
  /// assert_eq!(corpus.scorer().k1, 1.2);
  /// assert_eq!(corpus.search("cat").len(), 1);
  /// ```
  pub fn with_text_options(documents: impl IntoIterator<Item = T>, options: CorpusOptions<T>) -> Self {
    let processor = options.processor.unwrap_or_else(processors::text);
    Self::from_parts(documents, processor, options.scorer)
  }
}

impl<T> Corpus<T> {
  /// Creates a corpus with explicit options.
  ///
  /// # Errors
  ///
  /// Returns [`CorpusError::MissingProcessor`] if `options` carries no
  /// processor. Non-text payloads always need one; text payloads can use
  /// [`Corpus::with_text_options`], which falls back to the default processor.
  ///
  /// ```rust
  /// use bm25_corpus::prelude::*;
  ///
  /// struct Note { body: String }
  ///
  /// let options = CorpusOptions::builder()
  ///     .processor(|note: &Note| tokenize(&note.body))
  ///     .k1(1.2)
  ///     .build();
  /// let corpus = Corpus::with_options(
  ///     vec![Note { body: "Buy milk and eggs".into() }],
  ///     options,
  /// ).unwrap();
  /// assert_eq!(corpus.search("milk").len(), 1);
  ///
  /// let missing = Corpus::with_options(Vec::<Note>::new(), CorpusOptions::default());
  /// assert!(matches!(missing, Err(CorpusError::MissingProcessor)));
  /// ```
  pub fn with_options(documents: impl IntoIterator<Item = T>, options: CorpusOptions<T>) -> Result<Self> {
    let processor = options.processor.ok_or(CorpusError::MissingProcessor)?;
    Ok(Self::from_parts(documents, processor, options.scorer))
  }

  fn from_parts(documents: impl IntoIterator<Item = T>, processor: Processor<T>, scorer: Bm25Scorer) -> Self {
    let mut corpus = Self {
      documents: Vec::new(),
      processor,
      scorer,
    };
    corpus.add_documents(documents);
    debug!(
      documents = corpus.documents.len(),
      k1 = scorer.k1,
      b = scorer.b,
      gamma = scorer.gamma,
      "corpus created"
    );
    corpus
  }

  /// Processes a payload and appends it to the corpus.
  pub fn add_document(&mut self, document: T) {
    let document = self.process_document(document);
    trace!(id = self.documents.len(), words = document.len(), "document added");
    self.documents.push(document);
  }

  /// Processes and appends several payloads, in order.
  pub fn add_documents(&mut self, documents: impl IntoIterator<Item = T>) {
    let documents = documents.into_iter();
    self.documents.reserve(documents.size_hint().0);
    for document in documents {
      self.add_document(document);
    }
  }

  fn process_document(&self, original: T) -> Document<T> {
    let words = (self.processor)(&original);
    Document::new(original, words)
  }

  /// The indexed documents, in insertion order.
  pub fn documents(&self) -> &[Document<T>] {
    &self.documents
  }

  /// Number of documents.
  pub fn len(&self) -> usize {
    self.documents.len()
  }

  /// Returns `true` if the corpus holds no documents.
  pub fn is_empty(&self) -> bool {
    self.documents.is_empty()
  }

  /// The BM25 parameters in use.
  pub fn scorer(&self) -> &Bm25Scorer {
    &self.scorer
  }

  /// Occurrences of `term` in `document`.
  pub fn term_frequency(&self, term: &str, document: &Document<T>, mode: MatchMode) -> usize {
    stats::term_frequency(term, document, mode)
  }

  /// Number of documents in the corpus containing `term`.
  pub fn document_frequency(&self, term: &str, mode: MatchMode) -> usize {
    stats::document_frequency(term, &self.documents, mode)
  }

  /// Mean token count of the documents, `None` for an empty corpus.
  pub fn average_document_length(&self) -> Option<f64> {
    stats::average_document_length(&self.documents)
  }

  /// Inverse document frequency of `term` across the corpus.
  pub fn inverse_document_frequency(&self, term: &str, mode: MatchMode) -> f64 {
    self.scorer.idf(self.documents.len(), self.document_frequency(term, mode))
  }

  /// BM25 score of a single term against a single document.
  ///
  /// Statistics are taken from the corpus as it is now. An empty corpus has
  /// no average length, and every term scores `0.0` against it.
  pub fn bm25(&self, term: &str, document: &Document<T>, mode: MatchMode) -> f64 {
    let Some(avg_doc_length) = self.average_document_length() else {
      return 0.0;
    };
    let tf = self.term_frequency(term, document, mode);
    let idf = self.inverse_document_frequency(term, mode);
    self.scorer.score(tf, document.len(), avg_doc_length, idf)
  }
}

impl<T: Searchable> Corpus<T> {
  /// Ranks the documents against `query` using exact term matching.
  ///
  /// Returns every document whose mean term score is strictly positive, best
  /// first. Equal scores keep insertion order. A query without any term of
  /// at least three word characters, or an empty corpus, yields no results.
  pub fn search(&self, query: &str) -> Vec<SearchResult<&T>> {
    self.search_with(query, MatchMode::Exact)
  }

  /// Ranks the documents against `query`, matching terms as substrings of
  /// tokens.
  pub fn search_partial(&self, query: &str) -> Vec<SearchResult<&T>> {
    self.search_with(query, MatchMode::Partial)
  }

  /// Ranks the documents against `query` with the given match mode.
  pub fn search_with(&self, query: &str, mode: MatchMode) -> Vec<SearchResult<&T>> {
    let terms: Vec<String> = tokenize_query(query)
      .iter()
      .map(|term| term.to_lowercase())
      .collect();

    let Some(avg_doc_length) = self.average_document_length() else {
      debug!(terms = terms.len(), ?mode, "search on empty corpus");
      return Vec::new();
    };
    if terms.is_empty() {
      debug!(?mode, "query has no searchable terms");
      return Vec::new();
    }

    let total_docs = self.documents.len();
    let idfs: Vec<f64> = terms
      .iter()
      .map(|term| {
        self
          .scorer
          .idf(total_docs, stats::count_documents(term, &self.documents, mode))
      })
      .collect();

    #[cfg(feature = "parallel")]
    let mut results: Vec<SearchResult<&T>> = self
      .documents
      .par_iter()
      .enumerate()
      .filter_map(|(id, document)| self.score_document(id, document, &terms, &idfs, avg_doc_length, mode))
      .collect();

    #[cfg(not(feature = "parallel"))]
    let mut results: Vec<SearchResult<&T>> = self
      .documents
      .iter()
      .enumerate()
      .filter_map(|(id, document)| self.score_document(id, document, &terms, &idfs, avg_doc_length, mode))
      .collect();

    results.sort_by(|a, b| {
      b.score
        .partial_cmp(&a.score)
        .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
      terms = terms.len(),
      ?mode,
      documents = total_docs,
      hits = results.len(),
      "search complete"
    );
    results
  }

  /// Mean score of one document over lowercase `terms` with precomputed idfs.
  fn score_document<'a>(
    &'a self,
    id: usize,
    document: &'a Document<T>,
    terms: &[String],
    idfs: &[f64],
    avg_doc_length: f64,
    mode: MatchMode,
  ) -> Option<SearchResult<&'a T>> {
    let total: f64 = terms
      .iter()
      .zip(idfs)
      .map(|(term, &idf)| {
        let tf = stats::count_matches(term, document.words(), mode);
        self.scorer.score(tf, document.len(), avg_doc_length, idf)
      })
      .sum();
    let score = total / terms.len() as f64;
    // NaN never passes this check.
    (score > 0.0).then(|| SearchResult::new(document.original(), score, id))
  }
}

impl<T> Extend<T> for Corpus<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    self.add_documents(iter);
  }
}

impl<T> Clone for Corpus<T>
where
  T: Clone,
{
  fn clone(&self) -> Self {
    Self {
      documents: self.documents.clone(),
      processor: self.processor.clone(),
      scorer: self.scorer,
    }
  }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Corpus<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Corpus")
      .field("documents", &self.documents)
      .field("scorer", &self.scorer)
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pets() -> Corpus<&'static str> {
    Corpus::new(vec![
      "the cat sat on the mat",
      "dogs are great pets",
      "the cat and the dog played",
    ])
  }

  #[test]
  fn test_cat_query() {
    let corpus = pets();
    let results = corpus.search("cat");
    let ids: Vec<usize> = results.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&0));
    assert!(ids.contains(&2));
    assert!(results.iter().all(|r| r.score > 0.0));
  }

  #[test]
  fn test_shorter_document_ranks_higher_for_same_tf() {
    // Both hold one "cat"; document 0 has 5 tokens, document 2 has 6.
    let corpus = pets();
    let results = corpus.search("cat");
    assert_eq!(results[0].id, 0);
    assert_eq!(results[1].id, 2);
    assert!(results[0].score > results[1].score);
  }

  #[test]
  fn test_score_matches_formula() {
    let corpus = pets();
    let results = corpus.search("cat");
    // N = 3, n = 2, avg = (5 + 4 + 6) / 3 = 5
    let idf = (1.5f64 / 2.5 + 1.0).ln();
    let expected = idf * (2.5 / (1.0 + 1.5 * (0.25 + 0.75 * 5.0 / 5.0)));
    assert!((results[0].score - expected).abs() < 1e-12);
  }

  #[test]
  fn test_score_is_mean_over_terms() {
    let corpus = pets();
    let single = corpus.search("cat")[0].score;
    // "zebra" matches nothing and contributes zero, halving the mean.
    let pair = corpus.search("cat zebra")[0].score;
    assert!((pair - single / 2.0).abs() < 1e-12);
  }

  #[test]
  fn test_query_case_is_ignored() {
    let corpus = pets();
    assert_eq!(corpus.search("CAT"), corpus.search("cat"));
  }

  #[test]
  fn test_empty_and_short_queries() {
    let corpus = pets();
    assert!(corpus.search("").is_empty());
    assert!(corpus.search("on a of").is_empty());
    assert!(corpus.search("!!! ??").is_empty());
  }

  #[test]
  fn test_empty_corpus() {
    let corpus: Corpus<&str> = Corpus::new(Vec::new());
    assert!(corpus.is_empty());
    assert!(corpus.search("cat").is_empty());
    assert_eq!(corpus.average_document_length(), None);
  }

  #[test]
  fn test_bm25_on_empty_corpus_is_zero() {
    let corpus: Corpus<&str> = Corpus::new(Vec::new());
    let outsider = Document::new("cat", vec!["cat".to_string()]);
    assert_eq!(corpus.bm25("cat", &outsider, MatchMode::Exact), 0.0);
  }

  #[test]
  fn test_all_empty_documents_yield_nothing() {
    let corpus = Corpus::new(vec!["", "a b", "!!"]);
    assert_eq!(corpus.average_document_length(), Some(0.0));
    assert!(corpus.search("cat").is_empty());
  }

  #[test]
  fn test_partial_mode() {
    let corpus = pets();
    assert_eq!(corpus.search("dog").len(), 1);
    let partial = corpus.search_partial("dog");
    assert_eq!(partial.len(), 2);
    assert_eq!(corpus.search_with("dog", MatchMode::from(true)), partial);
  }

  #[test]
  fn test_add_document_is_visible() {
    let mut corpus = pets();
    let before = corpus.search("bird").len();
    corpus.add_document("a bird sang");
    assert_eq!(before, 0);
    let results = corpus.search("bird");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 3);
    assert_eq!(*results[0].document, "a bird sang");
  }

  #[test]
  fn test_earlier_results_are_unchanged() {
    let mut corpus = pets();
    let before: Vec<SearchResult<String>> = corpus
      .search("cat")
      .into_iter()
      .map(|r| r.map(|doc| doc.to_string()))
      .collect();
    let snapshot = before.clone();
    corpus.add_document("cat cat cat");
    assert_eq!(before, snapshot);
    assert_eq!(corpus.search("cat")[0].id, 3);
  }

  #[test]
  fn test_extend() {
    let mut corpus = pets();
    corpus.extend(vec!["birds fly", "fish swim"]);
    assert_eq!(corpus.len(), 5);
    assert_eq!(corpus.documents()[4].words(), ["fish", "swim"]);
  }

  #[test]
  fn test_statistics_accessors() {
    let corpus = pets();
    let first = &corpus.documents()[0];
    assert_eq!(corpus.term_frequency("The", first, MatchMode::Exact), 2);
    assert_eq!(corpus.document_frequency("the", MatchMode::Exact), 2);
    assert_eq!(corpus.average_document_length(), Some(5.0));
    let idf = corpus.inverse_document_frequency("the", MatchMode::Exact);
    assert!((idf - (1.5f64 / 2.5 + 1.0).ln()).abs() < 1e-12);
    assert!(corpus.bm25("the", first, MatchMode::Exact) > 0.0);
    assert_eq!(corpus.bm25("dogs", first, MatchMode::Exact), 0.0);
  }

  #[test]
  fn test_missing_processor() {
    let result = Corpus::<u32>::with_options(vec![1, 2, 3], CorpusOptions::default());
    assert!(matches!(result, Err(CorpusError::MissingProcessor)));
  }

  #[test]
  fn test_text_options_keep_default_processor() {
    let options = CorpusOptions::builder().k1(1.2).build();
    let corpus = Corpus::with_text_options(vec!["the cat sat", "dogs bark"], options);
    assert_eq!(corpus.scorer().k1, 1.2);
    assert_eq!(corpus.scorer().b, crate::scoring::bm25::DEFAULT_B);
    assert_eq!(corpus.documents()[0].words(), ["the", "cat", "sat"]);
    let results = corpus.search("cat");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 0);
  }

  #[test]
  fn test_text_options_use_custom_processor() {
    let options = CorpusOptions::builder()
      .processor(|doc: &&str| vec![doc.to_uppercase()])
      .build();
    let corpus = Corpus::with_text_options(vec!["cat"], options);
    assert_eq!(corpus.documents()[0].words(), ["CAT"]);
  }

  #[test]
  fn test_k1_zero_drops_partially_matching_documents() {
    // tf = 0 with k1 = 0 gives 0 / 0 for the missing term, and the NaN
    // poisons the mean.
    let options = CorpusOptions::builder().k1(0.0).build();
    let corpus = Corpus::with_text_options(vec!["apple banana", "cherry pie"], options);
    assert!(corpus.search("apple cherry").is_empty());
    assert_eq!(corpus.search("apple").len(), 1);
  }

  #[test]
  fn test_ties_keep_insertion_order() {
    let corpus = Corpus::new(vec!["red apple", "green apple", "blue apple"]);
    let ids: Vec<usize> = corpus.search("apple").iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
  }
}
