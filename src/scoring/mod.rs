//! Building blocks of a scoring pass.
//!
//! - [`tokenizer`]: punctuation stripping, splitting and case normalization.
//! - [`frequency`]: the document x term frequency table.
//! - [`bm25`]: IDF and the per-term BM25 weight.

/// Implements the BM25 relevance formula.
pub mod bm25;
/// Counts query terms in each document.
pub mod frequency;
/// Suggests document tokens for misspelled query terms.
#[cfg(feature = "suggest")]
pub mod suggest;
/// Provides text tokenization utilities.
pub mod tokenizer;

pub use bm25::{idf, term_weight};
pub use frequency::FrequencyTable;
pub use tokenizer::{normalize, tokenize, QueryTerm};
