//! Per-document term frequency counting.
//!
//! Single-word terms are counted against the token sequence of a document,
//! while phrases are counted as non-overlapping substrings of the normalized
//! document text, so a phrase has to appear with its exact spacing.

use std::collections::HashMap;

use super::tokenizer::{normalize, split_tokens, QueryTerm};

/// Term counts for a whole collection, one row per document and one column
/// per query term.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
  term_count: usize,
  /// Row-major `documents x terms` counts.
  counts: Vec<usize>,
  /// Number of documents containing each term at least once.
  doc_freq: Vec<usize>,
  /// Token count of each document.
  doc_lengths: Vec<usize>,
}

impl FrequencyTable {
  /// Tokenizes every document once and counts each term in it.
  pub fn build<D>(terms: &[QueryTerm], documents: &[D]) -> Self
  where
    D: AsRef<str>,
  {
    let mut table = FrequencyTable {
      term_count: terms.len(),
      counts: Vec::with_capacity(documents.len() * terms.len()),
      doc_freq: vec![0; terms.len()],
      doc_lengths: Vec::with_capacity(documents.len()),
    };

    let needs_tokens = terms.iter().any(|t| matches!(t, QueryTerm::Token(_)));

    for document in documents {
      let text = normalize(document.as_ref());
      let tokens = split_tokens(&text);
      table.doc_lengths.push(tokens.len());

      let token_counts = if needs_tokens {
        token_frequencies(&tokens)
      } else {
        HashMap::new()
      };

      for (term_idx, term) in terms.iter().enumerate() {
        let count = match term {
          QueryTerm::Empty => 0,
          QueryTerm::Token(token) => token_counts.get(token.as_str()).copied().unwrap_or(0),
          QueryTerm::Phrase(phrase) => count_phrase(&text, phrase),
        };
        if count > 0 {
          table.doc_freq[term_idx] += 1;
        }
        table.counts.push(count);
      }
    }

    table
  }

  /// Number of documents (rows).
  pub fn num_docs(&self) -> usize {
    self.doc_lengths.len()
  }

  /// Number of query terms (columns).
  pub fn num_terms(&self) -> usize {
    self.term_count
  }

  /// Occurrences of term `term` in document `doc`.
  pub fn frequency(&self, doc: usize, term: usize) -> usize {
    self.counts[doc * self.term_count + term]
  }

  /// Counts for every term in document `doc`.
  pub fn row(&self, doc: usize) -> &[usize] {
    let start = doc * self.term_count;
    &self.counts[start..start + self.term_count]
  }

  /// Number of documents containing term `term`.
  pub fn doc_freq(&self, term: usize) -> usize {
    self.doc_freq[term]
  }

  /// Token count of document `doc`.
  pub fn doc_length(&self, doc: usize) -> usize {
    self.doc_lengths[doc]
  }

  /// Mean token count, or `None` for an empty collection.
  pub fn avg_doc_length(&self) -> Option<f64> {
    if self.doc_lengths.is_empty() {
      return None;
    }
    let total: usize = self.doc_lengths.iter().sum();
    Some(total as f64 / self.doc_lengths.len() as f64)
  }
}

/// Calculate token frequencies for a tokenized document.
fn token_frequencies<'a>(tokens: &[&'a str]) -> HashMap<&'a str, usize> {
  let mut freqs = HashMap::new();
  for token in tokens {
    *freqs.entry(*token).or_insert(0) += 1;
  }
  freqs
}

/// Counts non-overlapping occurrences of `phrase`, scanning left to right and
/// resuming after the end of each match.
fn count_phrase(text: &str, phrase: &str) -> usize {
  let mut count = 0;
  let mut cursor = 0;
  while let Some(pos) = text[cursor..].find(phrase) {
    count += 1;
    cursor += pos + phrase.len();
  }
  count
}
