//! Shared setup for the demos.
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber. `BM25_CORPUS_LOG` overrides the default
/// `debug` filter.
pub fn init_tracing() {
  let filter = std::env::var("BM25_CORPUS_LOG")
    .map(EnvFilter::new)
    .unwrap_or_else(|_| EnvFilter::new("bm25_corpus=debug"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}
