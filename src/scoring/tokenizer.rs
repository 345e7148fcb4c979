//! Text tokenization and case normalization.
//!
//! Every character in [`PUNCTUATION`] becomes a space and the result is split
//! on single spaces. Runs of separators therefore yield empty tokens, and an
//! empty text yields one empty token. Both count towards document length.

/// Characters replaced by a space before splitting.
pub const PUNCTUATION: &[char] = &[
  '.', ',', '\t', '!', '"', '£', '$', '%', '^', '&', '*', '(', ')', '-', '_', '=', '{', '}', '[',
  ']', ';', ':', '@', '~', '<', '>', '?', '/', '\\', '`', '¬', '\n', '\r',
];

fn is_punctuation(c: char) -> bool {
  PUNCTUATION.contains(&c)
}

/// Replaces every punctuation character with a single space.
pub fn strip_punctuation(text: &str) -> String {
  text
    .chars()
    .map(|c| if is_punctuation(c) { ' ' } else { c })
    .collect()
}

/// Uppercases and strips punctuation in one pass.
///
/// Only ASCII letters change case; other characters are kept as they are.
pub fn normalize(text: &str) -> String {
  text
    .chars()
    .map(|c| {
      if is_punctuation(c) {
        ' '
      } else {
        c.to_ascii_uppercase()
      }
    })
    .collect()
}

/// Splits already normalized text into tokens on single spaces.
pub fn split_tokens(normalized: &str) -> Vec<&str> {
  normalized.split(' ').collect()
}

/// Tokenize text into words without changing case.
pub fn tokenize(text: &str) -> Vec<String> {
  strip_punctuation(text)
    .split(' ')
    .map(str::to_owned)
    .collect()
}

/// A query term after case normalization, classified by how it is matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTerm {
  /// Empty or whitespace-only input. Never matched and never scored.
  Empty,
  /// A single word, matched exactly against document tokens.
  Token(String),
  /// Two or more space-separated words, matched as a substring of the
  /// normalized document text. Stored in the same normalized form.
  Phrase(String),
}

impl QueryTerm {
  /// Uppercases `term` and decides how it will be matched.
  ///
  /// Terms are split on single spaces only. A single-word term keeps its
  /// punctuation, while a phrase goes through [`normalize`] so that it is
  /// compared against document text in the same form.
  pub fn parse(term: &str) -> Self {
    if term.trim().is_empty() {
      return QueryTerm::Empty;
    }

    if term.contains(' ') {
      QueryTerm::Phrase(normalize(term))
    } else {
      QueryTerm::Token(term.to_ascii_uppercase())
    }
  }

  /// Whether the term is empty.
  pub fn is_empty(&self) -> bool {
    matches!(self, QueryTerm::Empty)
  }
}
