//! Corpus configuration: the document processor and BM25 parameters.

use crate::processors;
use crate::scoring::bm25::{Bm25Scorer, DEFAULT_B, DEFAULT_GAMMA, DEFAULT_K1};
use std::fmt;
use std::sync::Arc;

/// Turns a payload into its ordered token sequence.
pub type Processor<T> = Arc<dyn Fn(&T) -> Vec<String> + Send + Sync>;

/// Resolved configuration of a corpus.
///
/// Built once, before the corpus, and fixed for its whole lifetime.
pub struct CorpusOptions<T> {
    /// The document processor. `None` means none was configured.
    pub processor: Option<Processor<T>>,
    /// BM25 parameters.
    pub scorer: Bm25Scorer,
}

impl<T> CorpusOptions<T> {
    /// Create a new options builder.
    pub fn builder() -> CorpusOptionsBuilder<T> {
        CorpusOptionsBuilder::default()
    }
}

impl<T: AsRef<str> + 'static> CorpusOptions<T> {
    /// Default options for textual documents.
    pub fn text() -> Self {
        Self {
            processor: Some(processors::text()),
            scorer: Bm25Scorer::default(),
        }
    }
}

impl<T> Default for CorpusOptions<T> {
    fn default() -> Self {
        Self {
            processor: None,
            scorer: Bm25Scorer::default(),
        }
    }
}

impl<T> Clone for CorpusOptions<T> {
    fn clone(&self) -> Self {
        Self {
            processor: self.processor.clone(),
            scorer: self.scorer,
        }
    }
}

impl<T> fmt::Debug for CorpusOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorpusOptions")
            .field("processor", &self.processor.as_ref().map(|_| "<fn>"))
            .field("scorer", &self.scorer)
            .finish()
    }
}

/// Builder for corpus options.
///
/// Every field is optional. Fields left unset fall back to the defaults when
/// the options are built.
pub struct CorpusOptionsBuilder<T> {
    processor: Option<Processor<T>>,
    k1: Option<f64>,
    b: Option<f64>,
    gamma: Option<f64>,
}

impl<T> Default for CorpusOptionsBuilder<T> {
    fn default() -> Self {
        Self {
            processor: None,
            k1: None,
            b: None,
            gamma: None,
        }
    }
}

impl<T> CorpusOptionsBuilder<T> {
    /// Set the document processor.
    pub fn processor<F>(mut self, processor: F) -> Self
    where
        F: Fn(&T) -> Vec<String> + Send + Sync + 'static,
    {
        self.processor = Some(Arc::new(processor));
        self
    }

    /// Set an already shared document processor.
    pub fn shared_processor(mut self, processor: Processor<T>) -> Self {
        self.processor = Some(processor);
        self
    }

    /// Set the term frequency saturation.
    pub fn k1(mut self, k1: f64) -> Self {
        self.k1 = Some(k1);
        self
    }

    /// Set the document length normalization.
    pub fn b(mut self, b: f64) -> Self {
        self.b = Some(b);
        self
    }

    /// Set the per-term additive floor.
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = Some(gamma);
        self
    }

    /// Set `k1`, `b` and `gamma` at once from a scorer, e.g. one loaded
    /// with [`Bm25Scorer::from_json`].
    pub fn scorer(mut self, scorer: Bm25Scorer) -> Self {
        self.k1 = Some(scorer.k1);
        self.b = Some(scorer.b);
        self.gamma = Some(scorer.gamma);
        self
    }

    /// Build the options, layering the fields set so far over the defaults.
    pub fn build(self) -> CorpusOptions<T> {
        CorpusOptions {
            processor: self.processor,
            scorer: Bm25Scorer {
                k1: self.k1.unwrap_or(DEFAULT_K1),
                b: self.b.unwrap_or(DEFAULT_B),
                gamma: self.gamma.unwrap_or(DEFAULT_GAMMA),
            },
        }
    }
}

impl<T: AsRef<str> + 'static> CorpusOptionsBuilder<T> {
    /// Use the default text processor.
    pub fn text(self) -> Self {
        self.shared_processor(processors::text())
    }
}
