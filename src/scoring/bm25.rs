//! The Okapi BM25 formula.
//!
//! A document's score is the sum over query terms of
//! `idf * f * (k1 + 1) / (f + k1 * (1 - b + b * doc_len / avg_doc_len))`.

/// Inverse document frequency of a term.
///
/// `total_docs` is the collection size and `doc_freq` the number of
/// documents containing the term. The value is
/// `ln(N + 0.5 - nq / (0.5 + nq))`; it is not floored, so it can be negative
/// for terms present in (nearly) every document of a tiny collection.
pub fn idf(total_docs: usize, doc_freq: usize) -> f64 {
  let n = total_docs as f64;
  let nq = doc_freq as f64;
  (n + 0.5 - nq / (0.5 + nq)).ln()
}

/// Contribution of one term to one document's score.
///
/// A term absent from the document contributes exactly zero, also when
/// `k1 = 0` would turn the formula into `0 / 0`.
pub fn term_weight(idf: f64, tf: usize, doc_length: usize, avg_doc_length: f64, k1: f64, b: f64) -> f64 {
  if tf == 0 {
    return 0.0;
  }
  let tf = tf as f64;
  let norm = k1 * (1.0 - b + b * doc_length as f64 / avg_doc_length);
  idf * tf * (k1 + 1.0) / (tf + norm)
}
