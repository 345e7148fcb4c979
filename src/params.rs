//! Tuning parameters and behaviour flags for a scoring call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};

/// Parameters controlling a BM25 scoring pass.
///
/// Every field has a default, so a partial JSON object such as `{"k": 2.0}`
/// is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bm25Params {
  /// Term frequency saturation. Recommended values lie between 1.2 and 2.0.
  #[cfg_attr(feature = "serde", serde(default = "default_k1", alias = "k"))]
  pub k1: f64,
  /// Document length normalization. `b = 1` gives BM11, `b = 0` gives BM15.
  #[cfg_attr(feature = "serde", serde(default = "default_b"))]
  pub b: f64,
  /// Run the input checks before scoring.
  #[cfg_attr(feature = "serde", serde(default = "default_true"))]
  pub validate: bool,
  /// Collect and log advisory diagnostics (empty terms, terms with no hits).
  #[cfg_attr(feature = "serde", serde(default = "default_true"))]
  pub diagnostics: bool,
}

fn default_k1() -> f64 {
  1.2
}

fn default_b() -> f64 {
  0.75
}

#[cfg(feature = "serde")]
fn default_true() -> bool {
  true
}

impl Default for Bm25Params {
  fn default() -> Self {
    Self {
      k1: default_k1(),
      b: default_b(),
      validate: true,
      diagnostics: true,
    }
  }
}

impl Bm25Params {
  /// Creates parameters with the standard `k1 = 1.2`, `b = 0.75`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets the `k1` saturation parameter.
  pub fn k1(mut self, k1: f64) -> Self {
    self.k1 = k1;
    self
  }

  /// Sets the `b` length normalization parameter.
  pub fn b(mut self, b: f64) -> Self {
    self.b = b;
    self
  }

  /// Enables or disables input validation.
  pub fn validate(mut self, validate: bool) -> Self {
    self.validate = validate;
    self
  }

  /// Enables or disables diagnostics.
  pub fn diagnostics(mut self, diagnostics: bool) -> Self {
    self.diagnostics = diagnostics;
    self
  }

  /// Parses parameters from a JSON object. Missing fields take their defaults.
  #[cfg(feature = "serde")]
  pub fn from_json(json: &str) -> Result<Self> {
    serde_json::from_str(json).map_err(|e| ScoreError::Config(e.to_string()))
  }

  /// Rejects non-finite tuning parameters.
  pub fn check(&self) -> Result<()> {
    if !self.k1.is_finite() {
      return Err(ScoreError::InvalidParameter {
        name: "k1",
        value: self.k1,
      });
    }
    if !self.b.is_finite() {
      return Err(ScoreError::InvalidParameter {
        name: "b",
        value: self.b,
      });
    }
    Ok(())
  }
}
