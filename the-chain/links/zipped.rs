//! Lockstep links. Both stop as soon as any participant is exhausted, and
//! both report the index of the previous link.

use std::rc::Rc;

use crate::{
  chain::Chain,
  enumerator::{
    BoxEnumerator,
    Enumerator,
  },
  index::Index,
  link::{
    Link,
    LinkKind,
    Node,
  },
};

/// Pairs the previous link with one other collection.
pub struct Zipped<T, U> {
  previous: Chain<T>,
  other:    Chain<U>,
}

impl<T, U> Zipped<T, U> {
  pub fn new(previous: Chain<T>, other: Chain<U>) -> Self {
    Self { previous, other }
  }
}

impl<T, U> Node for Zipped<T, U> {
  fn kind(&self) -> LinkKind {
    LinkKind::Zipped
  }

  fn previous(&self) -> Option<&dyn Node> {
    Some(self.previous.node())
  }
}

impl<T: Clone + 'static, U: Clone + 'static> Link<(T, U)> for Zipped<T, U> {
  fn enumerator(&self) -> BoxEnumerator<(T, U)> {
    Box::new(ZippedEnumerator {
      previous: self.previous.enumerator(),
      other:    self.other.enumerator(),
      current:  None,
    })
  }

  fn as_node(&self) -> &dyn Node {
    self
  }
}

pub struct ZippedEnumerator<T, U> {
  previous: BoxEnumerator<T>,
  other:    BoxEnumerator<U>,
  current:  Option<(T, U)>,
}

impl<T: Clone, U: Clone> Enumerator for ZippedEnumerator<T, U> {
  type Item = (T, U);

  fn current(&self) -> Option<&(T, U)> {
    self.current.as_ref()
  }

  fn current_index(&self) -> Option<Index> {
    self.current.as_ref()?;
    self.previous.current_index()
  }

  fn move_next(&mut self) -> bool {
    self.current = None;
    if self.previous.move_next() && self.other.move_next() {
      self.current = self
        .previous
        .current()
        .cloned()
        .zip(self.other.current().cloned());
    }
    self.current.is_some()
  }

  fn reset(&mut self) {
    self.current = None;
    self.previous.reset();
    self.other.reset();
  }
}

/// Zips the previous link with any number of same-typed collections into
/// ordered tuples `[previous, other0, other1, ..]`.
pub struct ZippedAll<T> {
  previous: Chain<T>,
  others:   Rc<[Chain<T>]>,
}

impl<T> ZippedAll<T> {
  pub fn new(previous: Chain<T>, others: Rc<[Chain<T>]>) -> Self {
    Self { previous, others }
  }
}

impl<T> Node for ZippedAll<T> {
  fn kind(&self) -> LinkKind {
    LinkKind::Zipped
  }

  fn previous(&self) -> Option<&dyn Node> {
    Some(self.previous.node())
  }
}

impl<T: Clone + 'static> Link<Vec<T>> for ZippedAll<T> {
  fn enumerator(&self) -> BoxEnumerator<Vec<T>> {
    Box::new(ZippedAllEnumerator {
      previous: self.previous.enumerator(),
      others:   self.others.iter().map(Chain::enumerator).collect(),
      current:  None,
    })
  }

  fn as_node(&self) -> &dyn Node {
    self
  }
}

pub struct ZippedAllEnumerator<T> {
  previous: BoxEnumerator<T>,
  others:   Vec<BoxEnumerator<T>>,
  current:  Option<Vec<T>>,
}

impl<T: Clone> Enumerator for ZippedAllEnumerator<T> {
  type Item = Vec<T>;

  fn current(&self) -> Option<&Vec<T>> {
    self.current.as_ref()
  }

  fn current_index(&self) -> Option<Index> {
    self.current.as_ref()?;
    self.previous.current_index()
  }

  fn move_next(&mut self) -> bool {
    self.current = None;
    if !self.previous.move_next() || !self.others.iter_mut().all(|other| other.move_next()) {
      return false;
    }
    self.current = std::iter::once(&self.previous)
      .chain(self.others.iter())
      .map(|e| e.current().cloned())
      .collect();
    self.current.is_some()
  }

  fn reset(&mut self) {
    self.current = None;
    self.previous.reset();
    self.others.iter_mut().for_each(|other| other.reset());
  }
}
