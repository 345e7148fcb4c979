//! Okapi - BM25 relevance scoring for in-memory document collections.
//!
//! Given a query made of terms (single words or multi-word phrases) and a
//! collection of documents, okapi scores every document with the Okapi BM25
//! formula and returns them ordered by descending relevance.
//!
//! ```rust
//! let docs = ["The Cat Sat", "A dog barked", "The cat and the other cat"];
//! let ranking = okapi::rank(&["cat"], &docs).unwrap();
//!
//! assert_eq!(ranking.top().map(|d| d.id), Some(2));
//! assert_eq!(ranking.get(&1), Some(0.0));
//! ```

pub mod engine;
pub mod error;
pub mod params;
pub mod scoring;
pub mod types;

pub use engine::{rank, Bm25Scorer};
pub use error::{Result, ScoreError};
pub use params::Bm25Params;
pub use types::{Diagnostic, Ranking, ScoredDocument};

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::engine::*;
  pub use crate::error::ScoreError;
  pub use crate::params::*;
  pub use crate::scoring::{idf, normalize, term_weight, tokenize, QueryTerm};
  pub use crate::types::*;
}
