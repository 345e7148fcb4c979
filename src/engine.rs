//! The scorer that runs the whole BM25 pipeline over a collection.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Result, ScoreError};
use crate::params::Bm25Params;
use crate::scoring::{idf, term_weight, FrequencyTable, QueryTerm};
use crate::types::{Diagnostic, Ranking, ScoredDocument};

/// Scores a document collection against a query with Okapi BM25.
///
/// Each call is independent: the scorer keeps no state besides its
/// parameters, so one instance can be shared freely between threads.
///
/// # Examples
///
/// ```rust
/// use okapi::prelude::*;
///
/// let scorer = Bm25Scorer::new(Bm25Params::default());
/// let docs = ["Term appears once", "Term Term appears twice", "No match here"];
///
/// let ranking = scorer.rank(&["Term"], &docs).unwrap();
/// let order: Vec<usize> = ranking.ids().copied().collect();
/// assert_eq!(order, vec![1, 0, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bm25Scorer {
  params: Bm25Params,
}

impl Bm25Scorer {
  /// Creates a scorer with the given parameters.
  pub fn new(params: Bm25Params) -> Self {
    Self { params }
  }

  /// Returns the parameters used by this scorer.
  pub fn params(&self) -> &Bm25Params {
    &self.params
  }

  /// Ranks a slice of documents; each document is identified by its position.
  pub fn rank<Q, D>(&self, query: &[Q], documents: &[D]) -> Result<Ranking<usize>>
  where
    Q: AsRef<str>,
    D: AsRef<str>,
  {
    self.rank_keyed(query, documents.iter().enumerate())
  }

  /// Ranks documents supplied together with their own identifiers.
  ///
  /// With validation enabled, repeated identifiers are rejected before any
  /// scoring work is done.
  ///
  /// # Errors
  ///
  /// - [`ScoreError::InvalidParameter`] if `k1` or `b` is not finite.
  /// - [`ScoreError::DuplicateDocumentId`] if two documents share an id.
  pub fn rank_keyed<Q, K, D, I>(&self, query: &[Q], documents: I) -> Result<Ranking<K>>
  where
    Q: AsRef<str>,
    K: Eq + Hash,
    D: AsRef<str>,
    I: IntoIterator<Item = (K, D)>,
  {
    let (ids, texts): (Vec<K>, Vec<D>) = documents.into_iter().unzip();

    if self.params.validate {
      self.params.check()?;
      check_unique(&ids)?;
    }

    let terms: Vec<QueryTerm> = query.iter().map(|t| QueryTerm::parse(t.as_ref())).collect();
    let table = FrequencyTable::build(&terms, &texts);
    let scores = self.combine(&terms, &table);

    let diagnostics = if self.params.diagnostics {
      collect_diagnostics(query, &terms, &table, &texts)
    } else {
      Vec::new()
    };

    let mut documents: Vec<ScoredDocument<K>> = ids
      .into_iter()
      .zip(scores)
      .map(|(id, score)| ScoredDocument { id, score })
      .collect();

    // Stable, so equal scores keep their input order.
    documents.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(Ranking {
      documents,
      diagnostics,
    })
  }

  /// Sums the BM25 weight of every non-empty term for each document.
  fn combine(&self, terms: &[QueryTerm], table: &FrequencyTable) -> Vec<f64> {
    let Some(avg_doc_length) = table.avg_doc_length() else {
      return Vec::new();
    };

    let n = table.num_docs();
    let idfs: Vec<f64> = (0..terms.len()).map(|t| idf(n, table.doc_freq(t))).collect();

    tracing::debug!(
      documents = n,
      terms = terms.len(),
      avg_doc_length,
      "combining bm25 scores"
    );

    (0..n)
      .map(|doc| {
        let doc_length = table.doc_length(doc);
        let mut score = 0.0;
        for (t, term) in terms.iter().enumerate() {
          if term.is_empty() {
            continue;
          }
          score += term_weight(
            idfs[t],
            table.frequency(doc, t),
            doc_length,
            avg_doc_length,
            self.params.k1,
            self.params.b,
          );
        }
        score
      })
      .collect()
  }
}

/// Ranks `documents` against `query` with default parameters.
pub fn rank<Q, D>(query: &[Q], documents: &[D]) -> Result<Ranking<usize>>
where
  Q: AsRef<str>,
  D: AsRef<str>,
{
  Bm25Scorer::default().rank(query, documents)
}

fn check_unique<K: Eq + Hash>(ids: &[K]) -> Result<()> {
  let mut seen: HashMap<&K, usize> = HashMap::with_capacity(ids.len());
  for (position, id) in ids.iter().enumerate() {
    if let Some(&first) = seen.get(id) {
      return Err(ScoreError::DuplicateDocumentId {
        first,
        second: position,
      });
    }
    seen.insert(id, position);
  }
  Ok(())
}

fn collect_diagnostics<Q, D>(
  query: &[Q],
  terms: &[QueryTerm],
  table: &FrequencyTable,
  documents: &[D],
) -> Vec<Diagnostic>
where
  Q: AsRef<str>,
  D: AsRef<str>,
{
  let mut diagnostics = Vec::new();

  // Only noticed while walking documents, so an empty collection reports none.
  if table.num_docs() > 0 {
    if let Some(term_index) = terms.iter().position(QueryTerm::is_empty) {
      tracing::warn!(term_index, "empty query term; check for typos or remove it");
      diagnostics.push(Diagnostic::EmptyTerm { term_index });
    }
  }

  for (term_index, term) in terms.iter().enumerate() {
    if table.doc_freq(term_index) > 0 {
      continue;
    }

    #[cfg(feature = "suggest")]
    let suggestion = match term {
      QueryTerm::Token(token) => crate::scoring::suggest::closest_token(token, documents),
      _ => None,
    };
    #[cfg(not(feature = "suggest"))]
    let suggestion: Option<String> = {
      let _ = (term, documents);
      None
    };

    let raw = query[term_index].as_ref();
    tracing::warn!(
      term_index,
      term = raw,
      suggestion = suggestion.as_deref(),
      "query term found no documents containing it"
    );
    diagnostics.push(Diagnostic::NoMatchingDocuments {
      term_index,
      term: raw.to_string(),
      suggestion,
    });
  }

  diagnostics
}
