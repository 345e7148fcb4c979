//! Result and diagnostic types returned by a scoring call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single document with its BM25 score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredDocument<K> {
  /// The identifier the document was supplied with.
  pub id: K,
  /// The BM25 score. Zero and negative values are valid.
  pub score: f64,
}

/// Advisory conditions noticed while scoring.
///
/// Diagnostics never change the scores; they point at query terms that are
/// probably mistakes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Diagnostic {
  /// A query term was empty or whitespace only. Reported once per call, for
  /// the first such term.
  EmptyTerm {
    /// Zero-based position of the term in the query.
    term_index: usize,
  },
  /// A query term matched no document in the collection.
  NoMatchingDocuments {
    /// Zero-based position of the term in the query.
    term_index: usize,
    /// The term as supplied.
    term: String,
    /// The closest document token, when one is similar enough.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    suggestion: Option<String>,
  },
}

impl std::fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Diagnostic::EmptyTerm { term_index } => write!(
        f,
        "empty query term at position {}; check for typos or remove it",
        term_index + 1
      ),
      Diagnostic::NoMatchingDocuments {
        term_index,
        term,
        suggestion,
      } => {
        write!(
          f,
          "query term {} ({:?}) found no documents containing it",
          term_index + 1,
          term
        )?;
        if let Some(suggestion) = suggestion {
          write!(f, "; did you mean {:?}?", suggestion)?;
        }
        Ok(())
      }
    }
  }
}

/// Documents ordered by descending score, plus any diagnostics.
///
/// Every input document appears exactly once. Documents with equal scores
/// keep their input order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ranking<K> {
  /// Scored documents, best first.
  pub documents: Vec<ScoredDocument<K>>,
  /// Advisory diagnostics, empty when diagnostics are disabled.
  #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty", default))]
  pub diagnostics: Vec<Diagnostic>,
}

impl<K> Ranking<K> {
  /// Number of ranked documents.
  pub fn len(&self) -> usize {
    self.documents.len()
  }

  /// Whether the ranking holds no documents.
  pub fn is_empty(&self) -> bool {
    self.documents.is_empty()
  }

  /// Iterates over the documents, best first.
  pub fn iter(&self) -> std::slice::Iter<'_, ScoredDocument<K>> {
    self.documents.iter()
  }

  /// The best scoring document.
  pub fn top(&self) -> Option<&ScoredDocument<K>> {
    self.documents.first()
  }

  /// Identifiers in rank order.
  pub fn ids(&self) -> impl Iterator<Item = &K> + '_ {
    self.documents.iter().map(|d| &d.id)
  }

  /// Looks up the score of a document by identifier.
  pub fn get(&self, id: &K) -> Option<f64>
  where
    K: PartialEq,
  {
    self.documents.iter().find(|d| &d.id == id).map(|d| d.score)
  }

  /// Consumes the ranking into `(id, score)` pairs, best first.
  pub fn into_scores(self) -> Vec<(K, f64)> {
    self.documents.into_iter().map(|d| (d.id, d.score)).collect()
  }
}

impl<K> IntoIterator for Ranking<K> {
  type Item = ScoredDocument<K>;
  type IntoIter = std::vec::IntoIter<ScoredDocument<K>>;

  fn into_iter(self) -> Self::IntoIter {
    self.documents.into_iter()
  }
}

impl<'a, K> IntoIterator for &'a Ranking<K> {
  type Item = &'a ScoredDocument<K>;
  type IntoIter = std::slice::Iter<'a, ScoredDocument<K>>;

  fn into_iter(self) -> Self::IntoIter {
    self.documents.iter()
  }
}
