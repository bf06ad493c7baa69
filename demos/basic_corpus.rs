//! Basic text corpus example.
use bm25_corpus::prelude::*;

#[path = "common.rs"]
mod common;

fn main() {
  common::init_tracing();
  println!("=== bm25_corpus Basic Example ===\n");

  let mut corpus = Corpus::new(vec![
    "Rust is a systems programming language that runs blazingly fast.",
    "Learn how to build a powerful search engine using Rust.",
    "Machine learning basics: supervised and unsupervised learning.",
    "Building web applications with Rust and Actix-web.",
  ]);
  println!("Indexed {} documents\n", corpus.len());

  for query in ["rust", "search engine", "learning", "web"] {
    println!("Query: {:?}", query);
    for result in corpus.search(query) {
      println!("  [{:.4}] #{} {}", result.score, result.id, result.document);
    }
    println!();
  }

  println!("Partial query: \"learn\"");
  for result in corpus.search_partial("learn") {
    println!("  [{:.4}] #{} {}", result.score, result.id, result.document);
  }
  println!();

  corpus.add_document("Search ranking with BM25 in Rust.");
  println!("After adding a document, query \"search\":");
  for result in corpus.search("search") {
    println!("  [{:.4}] #{} {}", result.score, result.id, result.document);
  }
}
