//! Materializing enumerator shared by the reordering links.
//!
//! On first access the previous enumerator is drained into an ordered buffer
//! of `(index, value)` entries which is then rearranged and served by
//! position. The buffer lives only as long as the enumerator: a new
//! enumerator, or a [`Enumerator::reset`], pulls from upstream again.

use std::rc::Rc;

use crate::{
  enumerator::{
    BoxEnumerator,
    Enumerator,
  },
  error::{
    ChainError,
    Result,
  },
  index::Index,
};

pub type Arrange<T> = Rc<dyn Fn(&mut Vec<(Index, T)>)>;

pub struct IndexedEnumerator<T> {
  previous: BoxEnumerator<T>,
  arrange:  Arrange<T>,
  /// Replace origin indices with final positions after arranging.
  renumber: bool,
  items:    Option<Vec<(Index, T)>>,
  position: Option<usize>,
}

impl<T: Clone + 'static> IndexedEnumerator<T> {
  pub fn new(previous: BoxEnumerator<T>, arrange: Arrange<T>, renumber: bool) -> Self {
    Self {
      previous,
      arrange,
      renumber,
      items: None,
      position: None,
    }
  }

  /// Upstream order, unchanged.
  pub fn passthrough(previous: BoxEnumerator<T>, renumber: bool) -> Self {
    Self::new(previous, Rc::new(|_: &mut Vec<(Index, T)>| {}), renumber)
  }

  fn materialize(&mut self) -> &[(Index, T)] {
    if self.items.is_none() {
      let mut items = Vec::new();
      self
        .previous
        .for_each_entry(&mut |value, index| items.push((index.clone(), value.clone())));
      (self.arrange)(&mut items);
      if self.renumber {
        for (pos, (index, _)) in items.iter_mut().enumerate() {
          *index = Index::Position(pos);
        }
      }
      tracing::trace!(
        len = items.len(),
        renumber = self.renumber,
        "materialized chain items"
      );
      self.items = Some(items);
    }
    self.items.as_deref().unwrap_or_default()
  }

  pub fn len(&mut self) -> usize {
    self.materialize().len()
  }

  pub fn is_empty(&mut self) -> bool {
    self.len() == 0
  }

  /// Entry at `position` in the arranged buffer.
  pub fn at(&mut self, position: usize) -> Result<(Index, &T)> {
    let items = self.materialize();
    items
      .get(position)
      .map(|(index, value)| (index.clone(), value))
      .ok_or(ChainError::OutOfBounds {
        position,
        len: items.len(),
      })
  }
}

impl<T: Clone + 'static> Enumerator for IndexedEnumerator<T> {
  type Item = T;

  fn current(&self) -> Option<&T> {
    let items = self.items.as_ref()?;
    items.get(self.position?).map(|(_, value)| value)
  }

  fn current_index(&self) -> Option<Index> {
    let items = self.items.as_ref()?;
    items.get(self.position?).map(|(index, _)| index.clone())
  }

  fn move_next(&mut self) -> bool {
    let len = self.materialize().len();
    let next = self.position.map_or(0, |pos| pos + 1);
    if next < len {
      self.position = Some(next);
      true
    } else {
      self.position = Some(len);
      false
    }
  }

  fn reset(&mut self) {
    self.items = None;
    self.position = None;
    self.previous.reset();
  }
}
