use std::{
  hash::Hash,
  rc::Rc,
};

use hashbrown::HashSet;

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

/// Remembers which items were already yielded.
pub trait Seen<T> {
  /// Records the item, returning `false` if it was seen before.
  fn insert(&mut self, value: &T, index: &Index) -> bool;

  fn clear(&mut self);
}

/// Dedups by the items themselves.
pub struct SeenValues<T> {
  values: Vec<T>,
}

impl<T> Default for SeenValues<T> {
  fn default() -> Self {
    Self { values: Vec::new() }
  }
}

impl<T: Clone + PartialEq> Seen<T> for SeenValues<T> {
  fn insert(&mut self, value: &T, _: &Index) -> bool {
    if self.values.contains(value) {
      return false;
    }
    self.values.push(value.clone());
    true
  }

  fn clear(&mut self) {
    self.values.clear();
  }
}

/// Dedups by the items themselves, hashed.
pub struct SeenHashed<T> {
  values: HashSet<T>,
}

impl<T> Default for SeenHashed<T> {
  fn default() -> Self {
    Self {
      values: HashSet::new(),
    }
  }
}

impl<T: Clone + Hash + Eq> Seen<T> for SeenHashed<T> {
  fn insert(&mut self, value: &T, _: &Index) -> bool {
    if self.values.contains(value) {
      return false;
    }
    self.values.insert(value.clone())
  }

  fn clear(&mut self) {
    self.values.clear();
  }
}

/// Dedups by an extracted identifier.
pub struct SeenKeys<T, K> {
  keys: HashSet<K>,
  id:   Rc<dyn Fn(&T, &Index) -> K>,
}

impl<T, K> SeenKeys<T, K> {
  pub fn new(id: Rc<dyn Fn(&T, &Index) -> K>) -> Self {
    Self {
      keys: HashSet::new(),
      id,
    }
  }
}

impl<T, K: Hash + Eq> Seen<T> for SeenKeys<T, K> {
  fn insert(&mut self, value: &T, index: &Index) -> bool {
    self.keys.insert((self.id)(value, index))
  }

  fn clear(&mut self) {
    self.keys.clear();
  }
}

pub type SeenFactory<T> = Rc<dyn Fn() -> Box<dyn Seen<T>>>;

/// First occurrences only, with their original indices.
pub struct Uniquely<T> {
  previous: Chain<T>,
  seen:     SeenFactory<T>,
}

impl<T> Uniquely<T> {
  pub fn new(previous: Chain<T>, seen: SeenFactory<T>) -> Self {
    Self { previous, seen }
  }
}

impl<T> Node for Uniquely<T> {
  fn kind(&self) -> LinkKind {
    LinkKind::Uniquely
  }

  fn previous(&self) -> Option<&dyn Node> {
    Some(self.previous.node())
  }
}

impl<T: Clone + 'static> Link<T> for Uniquely<T> {
  fn enumerator(&self) -> BoxEnumerator<T> {
    Box::new(UniquelyEnumerator {
      previous: self.previous.enumerator(),
      seen:     (self.seen)(),
    })
  }

  fn as_node(&self) -> &dyn Node {
    self
  }
}

pub struct UniquelyEnumerator<T> {
  previous: BoxEnumerator<T>,
  seen:     Box<dyn Seen<T>>,
}

impl<T> Enumerator for UniquelyEnumerator<T> {
  type Item = T;

  fn current(&self) -> Option<&T> {
    self.previous.current()
  }

  fn current_index(&self) -> Option<Index> {
    self.previous.current_index()
  }

  fn move_next(&mut self) -> bool {
    while self.previous.move_next() {
      if let (Some(value), Some(index)) = (self.previous.current(), self.previous.current_index())
        && self.seen.insert(value, &index)
      {
        return true;
      }
    }
    false
  }

  fn reset(&mut self) {
    self.seen.clear();
    self.previous.reset();
  }
}
