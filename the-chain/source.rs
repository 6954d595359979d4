//! Source links: the zero-th link of every chain.
//!
//! A sequence source indexes items by position, a mapping source by key, and
//! an enumerable source defers to a host collection's own enumerator.

use std::rc::Rc;

use crate::{
  enumerator::{
    BoxEnumerator,
    Enumerable,
    Enumerator,
  },
  index::Index,
  link::{
    Link,
    LinkKind,
    Node,
  },
};

/// Ordered, indexable sequence. Items are shared with every enumerator.
pub struct SequenceSource<T> {
  items: Rc<[T]>,
}

impl<T> SequenceSource<T> {
  pub fn new(items: impl Into<Rc<[T]>>) -> Self {
    Self {
      items: items.into(),
    }
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

impl<T> Node for SequenceSource<T> {
  fn kind(&self) -> LinkKind {
    LinkKind::Sequence
  }

  fn previous(&self) -> Option<&dyn Node> {
    None
  }
}

impl<T: 'static> Link<T> for SequenceSource<T> {
  fn enumerator(&self) -> BoxEnumerator<T> {
    Box::new(SequenceEnumerator::new(self.items.clone()))
  }

  fn as_node(&self) -> &dyn Node {
    self
  }
}

pub struct SequenceEnumerator<T> {
  items:    Rc<[T]>,
  position: Option<usize>,
}

impl<T> SequenceEnumerator<T> {
  pub fn new(items: Rc<[T]>) -> Self {
    Self {
      items,
      position: None,
    }
  }
}

impl<T> Enumerator for SequenceEnumerator<T> {
  type Item = T;

  fn current(&self) -> Option<&T> {
    self.items.get(self.position?)
  }

  fn current_index(&self) -> Option<Index> {
    let pos = self.position?;
    (pos < self.items.len()).then_some(Index::Position(pos))
  }

  fn move_next(&mut self) -> bool {
    let next = self.position.map_or(0, |pos| pos + 1);
    if next < self.items.len() {
      self.position = Some(next);
      true
    } else {
      self.position = Some(self.items.len());
      false
    }
  }

  fn reset(&mut self) {
    self.position = None;
  }
}

/// Key/value mapping in insertion order.
pub struct MappingSource<T> {
  entries: Rc<[(Index, T)]>,
}

impl<T> MappingSource<T> {
  pub fn new<K, I>(entries: I) -> Self
  where
    K: Into<Index>,
    I: IntoIterator<Item = (K, T)>,
  {
    Self {
      entries: entries
        .into_iter()
        .map(|(key, value)| (key.into(), value))
        .collect(),
    }
  }
}

impl<T> Node for MappingSource<T> {
  fn kind(&self) -> LinkKind {
    LinkKind::Mapping
  }

  fn previous(&self) -> Option<&dyn Node> {
    None
  }
}

impl<T: 'static> Link<T> for MappingSource<T> {
  fn enumerator(&self) -> BoxEnumerator<T> {
    Box::new(MappingEnumerator::new(self.entries.clone()))
  }

  fn as_node(&self) -> &dyn Node {
    self
  }
}

/// Walks `(key, value)` entries in order, reporting the key as the index.
pub struct MappingEnumerator<T> {
  entries:  Rc<[(Index, T)]>,
  position: Option<usize>,
}

impl<T> MappingEnumerator<T> {
  pub fn new(entries: Rc<[(Index, T)]>) -> Self {
    Self {
      entries,
      position: None,
    }
  }
}

impl<T> Enumerator for MappingEnumerator<T> {
  type Item = T;

  fn current(&self) -> Option<&T> {
    self.entries.get(self.position?).map(|(_, value)| value)
  }

  fn current_index(&self) -> Option<Index> {
    self
      .entries
      .get(self.position?)
      .map(|(index, _)| index.clone())
  }

  fn move_next(&mut self) -> bool {
    let next = self.position.map_or(0, |pos| pos + 1);
    if next < self.entries.len() {
      self.position = Some(next);
      true
    } else {
      self.position = Some(self.entries.len());
      false
    }
  }

  fn reset(&mut self) {
    self.position = None;
  }
}

/// Wraps a host collection that already knows how to enumerate itself.
pub struct EnumerableSource<T> {
  inner: Rc<dyn Enumerable<T>>,
}

impl<T> EnumerableSource<T> {
  pub fn new(inner: Rc<dyn Enumerable<T>>) -> Self {
    Self { inner }
  }
}

impl<T> Node for EnumerableSource<T> {
  fn kind(&self) -> LinkKind {
    LinkKind::Enumerable
  }

  fn previous(&self) -> Option<&dyn Node> {
    None
  }
}

impl<T: 'static> Link<T> for EnumerableSource<T> {
  fn enumerator(&self) -> BoxEnumerator<T> {
    Box::new(HostEnumerator::new(self.inner.enumerator()))
  }

  fn as_node(&self) -> &dyn Node {
    self
  }
}

/// Host cursor with indices filled in: items the host does not index are
/// numbered by pulled position.
pub struct HostEnumerator<T> {
  inner:    BoxEnumerator<T>,
  position: Option<usize>,
}

impl<T> HostEnumerator<T> {
  pub fn new(inner: BoxEnumerator<T>) -> Self {
    Self {
      inner,
      position: None,
    }
  }
}

impl<T> Enumerator for HostEnumerator<T> {
  type Item = T;

  fn current(&self) -> Option<&T> {
    self.inner.current()
  }

  fn current_index(&self) -> Option<Index> {
    self.inner.current()?;
    let position = self.position?;
    Some(self.inner.index_or(position))
  }

  fn move_next(&mut self) -> bool {
    if !self.inner.move_next() {
      return false;
    }
    self.position = Some(self.position.map_or(0, |pos| pos + 1));
    true
  }

  fn reset(&mut self) {
    self.inner.reset();
    self.position = None;
  }
}
