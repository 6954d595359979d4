//! Errors raised while building or draining a chain.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChainError>;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChainError {
  /// The value has none of the shapes a chain can be built from.
  #[error("unsupported chain source: {type_name}")]
  UnsupportedSource { type_name: &'static str },
  #[error("expected an ordered sequence, got {type_name}")]
  NotASequence { type_name: &'static str },
  #[error("expected a key/value mapping, got {type_name}")]
  NotAMapping { type_name: &'static str },
  #[error("position {position} is out of bounds for {len} materialized items")]
  OutOfBounds { position: usize, len: usize },
  /// `reduce` without a seed on a chain that yields nothing.
  #[error("cannot reduce an empty chain without an initial value")]
  EmptyReduce,
}
