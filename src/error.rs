//! Error types for okapi.

use thiserror::Error;

/// Errors that abort a scoring call before any document is touched.
#[derive(Error, Debug)]
pub enum ScoreError {
  /// A tuning parameter is NaN or infinite.
  #[error("parameter `{name}` must be a finite number, got {value}")]
  InvalidParameter {
    /// The parameter name (`k1` or `b`).
    name: &'static str,
    /// The rejected value.
    value: f64,
  },

  /// Two documents in a keyed collection share the same identifier.
  ///
  /// Positions refer to the order in which the collection was supplied.
  #[error("documents at positions {first} and {second} share the same identifier")]
  DuplicateDocumentId {
    /// Position of the first occurrence.
    first: usize,
    /// Position of the repeated identifier.
    second: usize,
  },

  /// A parameter config could not be parsed.
  #[error("invalid parameter config: {0}")]
  Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScoreError>;
