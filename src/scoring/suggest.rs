//! Spelling suggestions for query terms that matched nothing.

use strsim::jaro_winkler;

use super::tokenizer::tokenize;

/// Minimum Jaro-Winkler similarity for a token to be suggested.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Finds the document token closest to `term` (already uppercase).
///
/// The token is returned with its original casing. Tokens equal to the term
/// and tokens whose length differs by more than half are skipped.
pub fn closest_token<D>(term: &str, documents: &[D]) -> Option<String>
where
  D: AsRef<str>,
{
  let mut best: Option<(f64, String)> = None;
  let term_len = term.len();

  for document in documents {
    for token in tokenize(document.as_ref()) {
      if token.is_empty() {
        continue;
      }

      // Length-based pruning
      let len_diff = term_len.abs_diff(token.len());
      if len_diff * 2 > term_len.max(token.len()) {
        continue;
      }

      let upper = token.to_ascii_uppercase();
      if upper == term {
        continue;
      }

      let similarity = jaro_winkler(term, &upper);
      if similarity < SUGGESTION_THRESHOLD {
        continue;
      }
      if best.as_ref().map_or(true, |(score, _)| similarity > *score) {
        best = Some((similarity, token));
      }
    }
  }

  best.map(|(_, token)| token)
}
