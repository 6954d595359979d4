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

pub type Predicate<T> = Rc<dyn Fn(&T, &Index) -> bool>;

pub struct Filtered<T> {
  previous:  Chain<T>,
  predicate: Predicate<T>,
}

impl<T> Filtered<T> {
  pub fn new(previous: Chain<T>, predicate: Predicate<T>) -> Self {
    Self {
      previous,
      predicate,
    }
  }
}

impl<T> Node for Filtered<T> {
  fn kind(&self) -> LinkKind {
    LinkKind::Filtered
  }

  fn previous(&self) -> Option<&dyn Node> {
    Some(self.previous.node())
  }
}

impl<T: Clone + 'static> Link<T> for Filtered<T> {
  fn enumerator(&self) -> BoxEnumerator<T> {
    Box::new(FilteredEnumerator {
      previous:  self.previous.enumerator(),
      predicate: self.predicate.clone(),
    })
  }

  fn as_node(&self) -> &dyn Node {
    self
  }
}

pub struct FilteredEnumerator<T> {
  previous:  BoxEnumerator<T>,
  predicate: Predicate<T>,
}

impl<T> Enumerator for FilteredEnumerator<T> {
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
        && (self.predicate)(value, &index)
      {
        return true;
      }
    }
    false
  }

  fn reset(&mut self) {
    self.previous.reset();
  }
}

#[cfg(test)]
mod tests {
  use indexmap::IndexMap;

  use super::*;

  #[test]
  fn keeps_mapping_keys() {
    let mapping: IndexMap<&str, i32> = IndexMap::from([("a", 1), ("b", 2), ("c", 3)]);
    let odd: Vec<(Index, i32)> = Chain::from(mapping).filter(|x, _| x % 2 == 1).iter().collect();
    assert_eq!(odd, [(Index::key("a"), 1), (Index::key("c"), 3)]);
  }

  #[test]
  fn predicate_sees_the_index() {
    let items = Chain::from(vec!['a', 'b', 'c', 'd']).filter(|_, index| index.as_position() > Some(1));
    assert_eq!(items.to_vec(), ['c', 'd']);
  }

  #[test]
  fn reset_filters_from_the_start() {
    let mut e = Chain::from(vec![1, 2, 3, 4]).filter(|x, _| x % 2 == 0).enumerator();
    assert!(e.move_next());
    assert!(e.move_next());
    assert!(!e.move_next());

    e.reset();
    assert!(e.move_next());
    assert_eq!(e.current(), Some(&2));
    assert_eq!(e.current_index(), Some(Index::Position(1)));
  }
}
