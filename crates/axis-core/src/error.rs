// File: crates/axis-core/src/error.rs
// Summary: Error type shared by bounds validation, tick configuration, kind dispatch and parsing.

use thiserror::Error;

use crate::types::NumericKind;

pub type Result<T> = std::result::Result<T, AxisError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AxisError {
    /// `min` compares greater than `max` (or the pair is unordered, e.g. NaN).
    #[error("invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: String, max: String },

    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: NumericKind, found: NumericKind },

    /// The interior label mask does not have one entry per requested interior tick.
    #[error("label mask has {mask_len} entries but {requested} interior ticks were requested")]
    Configuration { requested: usize, mask_len: usize },

    #[error("unsupported numeric kind '{0}'")]
    UnsupportedKind(String),

    #[error("cannot parse '{input}' as {kind}")]
    ParseValue { kind: NumericKind, input: String },

    #[error("data set is empty")]
    EmptyDataSet,
}
