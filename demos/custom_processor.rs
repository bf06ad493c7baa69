//! Searching structured records with a custom processor.
use bm25_corpus::prelude::*;
use serde::Serialize;

#[path = "common.rs"]
mod common;

#[derive(Debug, Clone, Serialize)]
struct Post {
  title: String,
  content: String,
  author: String,
  tags: Vec<String>,
}

impl Post {
  fn new(title: &str, content: &str, author: &str, tags: &[&str]) -> Self {
    Self {
      title: title.to_string(),
      content: content.to_string(),
      author: author.to_string(),
      tags: tags.iter().map(|t| t.to_string()).collect(),
    }
  }
}

fn sample_posts() -> Vec<Post> {
  vec![
    Post::new(
      "Getting Started with Rust",
      "Rust prevents segfaults and guarantees thread safety.",
      "Alice",
      &["rust", "tutorial"],
    ),
    Post::new(
      "Advanced Rust Patterns",
      "Explore the builder pattern, the type state pattern, and more.",
      "Alice",
      &["rust", "patterns"],
    ),
    Post::new(
      "Introduction to Machine Learning",
      "Supervised learning, unsupervised learning, and neural networks explained.",
      "Charlie",
      &["machine-learning", "tutorial"],
    ),
  ]
}

fn main() -> Result<(), CorpusError> {
  common::init_tracing();
  println!("=== bm25_corpus Custom Processor Example ===\n");

  // Index title, content and tags; leave the author out.
  let options = CorpusOptions::builder()
    .shared_processor(processors::json_fields(&["title", "content", "tags"]))
    .scorer(Bm25Scorer::from_json(r#"{ "k1": 1.2, "b": 0.75 }"#)?)
    .build();
  let corpus = Corpus::with_options(sample_posts(), options)?;

  for query in ["pattern", "tutorial", "alice", "learning networks"] {
    println!("Query: {:?}", query);
    let results = corpus.search(query);
    if results.is_empty() {
      println!("  (no results)");
    }
    for result in results {
      println!("  [{:.4}] {} by {}", result.score, result.document.title, result.document.author);
    }
    println!();
  }

  // A closure works just as well.
  let options = CorpusOptions::builder()
    .processor(|post: &Post| tokenize(&post.author))
    .build();
  let by_author = Corpus::with_options(sample_posts(), options)?;
  println!("Posts by Alice: {}", by_author.search("alice").len());

  Ok(())
}
