//! Cursors that drive chain evaluation.
//!
//! An [`Enumerator`] is a single-pass, stateful cursor. It starts positioned
//! before the first item; every [`Enumerator::move_next`] pulls at most what
//! it needs from upstream. [`Enumerable`] is the capability of handing out
//! fresh enumerators, shared by chains and host collections alike.

use crate::index::Index;

pub type BoxEnumerator<T> = Box<dyn Enumerator<Item = T>>;

pub trait Enumerator {
  type Item;

  /// Item under the cursor, `None` before the first `move_next` and after
  /// exhaustion.
  fn current(&self) -> Option<&Self::Item>;

  /// Index of the item under the cursor. Host cursors that cannot name one
  /// may return `None` while `current` is `Some`; see [`Enumerator::index_or`].
  fn current_index(&self) -> Option<Index>;

  /// Advances the cursor. Returns `false` once the sequence is exhausted.
  fn move_next(&mut self) -> bool;

  /// Rewinds to the position before the first item.
  fn reset(&mut self);

  /// Current index, or `Position(pulled)` when the cursor reports none.
  fn index_or(&self, pulled: usize) -> Index {
    self.current_index().unwrap_or(Index::Position(pulled))
  }

  /// Drives the cursor to exhaustion, handing every entry to `f`.
  fn for_each_entry(&mut self, f: &mut dyn FnMut(&Self::Item, &Index)) {
    let mut pulled = 0;
    while self.move_next() {
      if let Some(value) = self.current() {
        f(value, &self.index_or(pulled));
      }
      pulled += 1;
    }
  }
}

/// Anything that can produce a fresh enumerator over its items.
pub trait Enumerable<T> {
  fn enumerator(&self) -> BoxEnumerator<T>;

  fn each(&self, f: &mut dyn FnMut(&T, &Index)) {
    self.enumerator().for_each_entry(f);
  }
}

/// Std iterator over the `(index, value)` entries of an enumerator.
pub struct Entries<T> {
  enumerator: BoxEnumerator<T>,
  pulled:     usize,
}

impl<T> Entries<T> {
  pub fn new(enumerator: BoxEnumerator<T>) -> Self {
    Self {
      enumerator,
      pulled: 0,
    }
  }
}

impl<T: Clone> Iterator for Entries<T> {
  type Item = (Index, T);

  fn next(&mut self) -> Option<Self::Item> {
    if !self.enumerator.move_next() {
      return None;
    }
    let index = self.enumerator.index_or(self.pulled);
    self.pulled += 1;
    let value = self.enumerator.current()?.clone();
    Some((index, value))
  }
}

/// Std iterator over bare values, dropping indices.
pub struct Values<T> {
  enumerator: BoxEnumerator<T>,
}

impl<T> Values<T> {
  pub fn new(enumerator: BoxEnumerator<T>) -> Self {
    Self { enumerator }
  }
}

impl<T: Clone> Iterator for Values<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    if !self.enumerator.move_next() {
      return None;
    }
    self.enumerator.current().cloned()
  }
}
