//! The linked structure behind a chain.
//!
//! Every link holds the link it was derived from plus its own immutable
//! parameters. [`Node`] is the item-type-erased view used to walk the chain
//! back to its source; [`Link`] adds enumerator construction for a concrete
//! item type.

use crate::enumerator::BoxEnumerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
  Sequence,
  Mapping,
  Enumerable,
  Mapped,
  Filtered,
  Concatenated,
  Sliced,
  Zipped,
  Flattened,
  Grouped,
  Counted,
  Uniquely,
  Reversed,
  Sorted,
}

impl LinkKind {
  pub fn name(self) -> &'static str {
    match self {
      Self::Sequence => "sequence",
      Self::Mapping => "mapping",
      Self::Enumerable => "enumerable",
      Self::Mapped => "mapped",
      Self::Filtered => "filtered",
      Self::Concatenated => "concatenated",
      Self::Sliced => "sliced",
      Self::Zipped => "zipped",
      Self::Flattened => "flattened",
      Self::Grouped => "grouped",
      Self::Counted => "counted",
      Self::Uniquely => "uniquely",
      Self::Reversed => "reversed",
      Self::Sorted => "sorted",
    }
  }

  /// Whether this link invalidates origin indices for everything built on
  /// top of it.
  pub fn renumbers(self) -> bool {
    matches!(self, Self::Sequence | Self::Concatenated | Self::Flattened)
  }

  pub fn is_source(self) -> bool {
    matches!(self, Self::Sequence | Self::Mapping | Self::Enumerable)
  }
}

pub trait Node {
  fn kind(&self) -> LinkKind;

  /// The link this one was derived from, `None` for a source link.
  fn previous(&self) -> Option<&dyn Node>;
}

pub trait Link<T>: Node {
  /// A fresh enumerator; never shared between calls.
  fn enumerator(&self) -> BoxEnumerator<T>;

  fn as_node(&self) -> &dyn Node;
}

/// The source link the chain was built from.
pub fn start(node: &dyn Node) -> &dyn Node {
  let mut node = node;
  while let Some(previous) = node.previous() {
    node = previous;
  }
  node
}

/// `false` as soon as any link between `node` and the source renumbers.
pub fn saves_indices(node: &dyn Node) -> bool {
  let mut node = Some(node);
  while let Some(current) = node {
    if current.kind().renumbers() {
      return false;
    }
    node = current.previous();
  }
  true
}

/// Number of links from `node` back to the source, the source included.
pub fn depth(node: &dyn Node) -> usize {
  let mut depth = 1;
  let mut node = node;
  while let Some(previous) = node.previous() {
    node = previous;
    depth += 1;
  }
  depth
}
