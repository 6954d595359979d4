//! Origin indices carried alongside every chain item.
//!
//! An item's index is the position or key it held in the source collection.
//! Links that invalidate that meaning (sequence sources, concatenation,
//! flattening) cause downstream reordering links to renumber with
//! [`Index::Position`] instead.

use std::{
  fmt,
  rc::Rc,
};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Index {
  /// Position in an ordered sequence, or a renumbered position.
  Position(usize),
  /// Key of a mapping entry or a textual group key.
  Key(Rc<str>),
  /// Boolean group key, e.g. from `count_by(|x, _| x % 2 == 0)`.
  Flag(bool),
}

impl Index {
  pub fn key(key: &str) -> Self {
    Self::Key(Rc::from(key))
  }

  pub fn as_position(&self) -> Option<usize> {
    match self {
      Self::Position(pos) => Some(*pos),
      _ => None,
    }
  }

  pub fn as_key(&self) -> Option<&str> {
    match self {
      Self::Key(key) => Some(key),
      _ => None,
    }
  }
}

impl fmt::Display for Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Position(pos) => write!(f, "{pos}"),
      Self::Key(key) => f.write_str(key),
      Self::Flag(flag) => write!(f, "{flag}"),
    }
  }
}

impl From<usize> for Index {
  fn from(pos: usize) -> Self {
    Self::Position(pos)
  }
}

impl From<bool> for Index {
  fn from(flag: bool) -> Self {
    Self::Flag(flag)
  }
}

impl From<&str> for Index {
  fn from(key: &str) -> Self {
    Self::key(key)
  }
}

impl From<String> for Index {
  fn from(key: String) -> Self {
    Self::Key(Rc::from(key))
  }
}

impl From<Rc<str>> for Index {
  fn from(key: Rc<str>) -> Self {
    Self::Key(key)
  }
}

impl From<char> for Index {
  fn from(key: char) -> Self {
    Self::Key(Rc::from(key.to_string()))
  }
}
