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

pub type MapFn<T, U> = Rc<dyn Fn(&T, &Index) -> U>;

pub struct Mapped<T, U> {
  previous: Chain<T>,
  callback: MapFn<T, U>,
}

impl<T, U> Mapped<T, U> {
  pub fn new(previous: Chain<T>, callback: MapFn<T, U>) -> Self {
    Self { previous, callback }
  }
}

impl<T, U> Node for Mapped<T, U> {
  fn kind(&self) -> LinkKind {
    LinkKind::Mapped
  }

  fn previous(&self) -> Option<&dyn Node> {
    Some(self.previous.node())
  }
}

impl<T: Clone + 'static, U: 'static> Link<U> for Mapped<T, U> {
  fn enumerator(&self) -> BoxEnumerator<U> {
    Box::new(MappedEnumerator {
      previous: self.previous.enumerator(),
      callback: self.callback.clone(),
      current:  None,
    })
  }

  fn as_node(&self) -> &dyn Node {
    self
  }
}

/// Applies the callback eagerly on every step; the index passes through.
pub struct MappedEnumerator<T, U> {
  previous: BoxEnumerator<T>,
  callback: MapFn<T, U>,
  current:  Option<U>,
}

impl<T, U> Enumerator for MappedEnumerator<T, U> {
  type Item = U;

  fn current(&self) -> Option<&U> {
    self.current.as_ref()
  }

  fn current_index(&self) -> Option<Index> {
    self.current.as_ref()?;
    self.previous.current_index()
  }

  fn move_next(&mut self) -> bool {
    self.current = None;
    if !self.previous.move_next() {
      return false;
    }
    if let (Some(value), Some(index)) = (self.previous.current(), self.previous.current_index()) {
      self.current = Some((self.callback)(value, &index));
    }
    self.current.is_some()
  }

  fn reset(&mut self) {
    self.current = None;
    self.previous.reset();
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use indexmap::IndexMap;

  use super::*;

  #[test]
  fn callback_sees_origin_keys() {
    let mapping: IndexMap<&str, i32> = IndexMap::from([("x", 1), ("y", 2)]);
    let labels = Chain::from(mapping)
      .map(|value, index| format!("{index}={value}"))
      .to_object();
    assert_eq!(labels[&Index::key("x")], "x=1");
    assert_eq!(labels[&Index::key("y")], "y=2");
  }

  #[test]
  fn current_is_empty_outside_the_items() {
    let mut e = Chain::from(vec![1]).map(|x, _| x * 2).enumerator();
    assert_eq!(e.current(), None);
    assert!(e.move_next());
    assert_eq!(e.current(), Some(&2));
    assert!(!e.move_next());
    assert_eq!(e.current(), None);
    assert_eq!(e.current_index(), None);
  }

  #[test]
  fn reset_applies_the_callback_again() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let mut e = Chain::from(vec![1, 2])
      .map(move |x, _| {
        counter.set(counter.get() + 1);
        x + 10
      })
      .enumerator();
    while e.move_next() {}
    assert_eq!(calls.get(), 2);

    e.reset();
    assert!(e.move_next());
    assert_eq!(e.current(), Some(&11));
    assert_eq!(e.current_index(), Some(Index::Position(0)));
    assert_eq!(calls.get(), 3);
  }
}
