//! Lazily evaluated collection pipelines.
//!
//! A source (sequence, keyed mapping, or any [`Enumerable`]) is wrapped in a
//! [`Chain`]; operators append links and terminals pull items through the
//! links one at a time. Every item carries an [`Index`]: its position, or
//! the key it was stored under, or the group it was counted into.

pub mod chain;
pub mod enumerator;
pub mod error;
pub mod index;
#[cfg(feature = "json")]
pub mod json;
pub mod link;
pub mod links;
pub mod select;
pub mod source;

pub use chain::{
  Chain,
  chain,
};
pub use enumerator::{
  BoxEnumerator,
  Enumerable,
  Enumerator,
};
pub use error::{
  ChainError,
  Result,
};
pub use index::Index;
pub use link::{
  LinkKind,
  Node,
};
pub use links::flattened::{
  Expansion,
  Flatten,
  Nested,
};
pub use select::{
  Properties,
  identity,
  property,
  property_mapper,
};
