//! Ready-made document processors.
//!
//! A processor decides how a payload becomes tokens. The corpus runs it once
//! per document at ingestion time. Queries never go through it.

use crate::options::Processor;
use crate::scoring::tokenizer::tokenize;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

#[cfg(feature = "unicode")]
use crate::scoring::tokenizer::MIN_TERM_LENGTH;
#[cfg(feature = "unicode")]
use unicode_segmentation::UnicodeSegmentation;

/// The default processor for textual payloads.
///
/// Lowercases the text, splits it on runs of non-word characters and drops
/// terms shorter than [`MIN_TERM_LENGTH`](crate::scoring::MIN_TERM_LENGTH).
pub fn text<T: AsRef<str> + 'static>() -> Processor<T> {
  Arc::new(|document: &T| tokenize(document.as_ref()))
}

/// A processor using Unicode word boundaries instead of ASCII word characters.
///
/// Accented and non-Latin words stay whole (`"café"` is one term). The same
/// minimum length applies, counted in characters. Queries are still split on
/// ASCII word characters, so non-ASCII terms only match in partial mode or
/// when the query term is itself ASCII.
#[cfg(feature = "unicode")]
pub fn unicode_words<T: AsRef<str> + 'static>() -> Processor<T> {
  Arc::new(|document: &T| {
    document
      .as_ref()
      .unicode_words()
      .map(str::to_lowercase)
      .filter(|word| word.chars().count() >= MIN_TERM_LENGTH)
      .collect()
  })
}

/// A processor that indexes selected fields of a serializable payload.
///
/// Each field is addressed by a dotted path (`"author.name"`). Strings,
/// numbers and booleans are indexed as text, arrays of those are indexed
/// element by element. Every extracted value then goes through the default
/// text tokenizer. Missing fields contribute nothing.
///
/// ```rust
/// use bm25_corpus::prelude::*;
///
/// #[derive(serde::Serialize)]
/// struct Post {
///     title: String,
///     views: u32,
/// }
///
/// let processor = processors::json_fields::<Post>(&["title"]);
/// let post = Post { title: "Rust Patterns".into(), views: 10 };
/// assert_eq!(processor(&post), vec!["rust", "patterns"]);
/// ```
pub fn json_fields<T: serde::Serialize + 'static>(fields: &[&str]) -> Processor<T> {
  let fields: Vec<String> = fields.iter().map(|field| field.to_string()).collect();
  Arc::new(move |document: &T| {
    let value = match serde_json::to_value(document) {
      Ok(value) => value,
      Err(err) => {
        warn!(error = %err, "document could not be serialized; indexing it without tokens");
        return Vec::new();
      }
    };

    let mut words = Vec::new();
    for field in &fields {
      if let Some(current) = get_nested_field(&value, field) {
        collect_text(current, &mut words);
      }
    }
    words
  })
}

/// Get a nested field from a JSON value.
fn get_nested_field<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
  let mut current = value;
  for part in path.split('.') {
    current = current.get(part)?;
  }
  Some(current)
}

fn collect_text(value: &Value, words: &mut Vec<String>) {
  match value {
    Value::String(s) => words.extend(tokenize(s)),
    Value::Number(n) => words.extend(tokenize(&n.to_string())),
    Value::Bool(b) => words.extend(tokenize(&b.to_string())),
    Value::Array(items) => {
      for item in items {
        if !item.is_array() {
          collect_text(item, words);
        }
      }
    }
    _ => {}
  }
}
