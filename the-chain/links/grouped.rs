//! Aggregating links.
//!
//! Both drain the whole previous link as soon as an enumerator is requested
//! and then serve the buckets as a key/value mapping. Buckets keep
//! first-seen key order.

use std::rc::Rc;

use indexmap::IndexMap;

use crate::{
  chain::Chain,
  enumerator::BoxEnumerator,
  index::Index,
  link::{
    Link,
    LinkKind,
    Node,
  },
  source::MappingEnumerator,
};

pub type KeyFn<T> = Rc<dyn Fn(&T, &Index) -> Index>;
pub type ValueFn<T, V> = Rc<dyn Fn(&T, &Index) -> V>;

pub struct Grouped<T, V> {
  previous: Chain<T>,
  key:      KeyFn<T>,
  value:    ValueFn<T, V>,
}

impl<T, V> Grouped<T, V> {
  pub fn new(previous: Chain<T>, key: KeyFn<T>, value: ValueFn<T, V>) -> Self {
    Self {
      previous,
      key,
      value,
    }
  }
}

impl<T, V> Node for Grouped<T, V> {
  fn kind(&self) -> LinkKind {
    LinkKind::Grouped
  }

  fn previous(&self) -> Option<&dyn Node> {
    Some(self.previous.node())
  }
}

impl<T: Clone + 'static, V: 'static> Link<Vec<V>> for Grouped<T, V> {
  fn enumerator(&self) -> BoxEnumerator<Vec<V>> {
    let mut buckets: IndexMap<Index, Vec<V>> = IndexMap::new();
    self.previous.enumerator().for_each_entry(&mut |value, index| {
      let key = (self.key)(value, index);
      buckets
        .entry(key)
        .or_default()
        .push((self.value)(value, index));
    });
    tracing::trace!(buckets = buckets.len(), "grouped chain aggregated");
    Box::new(MappingEnumerator::new(buckets.into_iter().collect()))
  }

  fn as_node(&self) -> &dyn Node {
    self
  }
}

pub struct Counted<T> {
  previous: Chain<T>,
  key:      KeyFn<T>,
}

impl<T> Counted<T> {
  pub fn new(previous: Chain<T>, key: KeyFn<T>) -> Self {
    Self { previous, key }
  }
}

impl<T> Node for Counted<T> {
  fn kind(&self) -> LinkKind {
    LinkKind::Counted
  }

  fn previous(&self) -> Option<&dyn Node> {
    Some(self.previous.node())
  }
}

impl<T: Clone + 'static> Link<usize> for Counted<T> {
  fn enumerator(&self) -> BoxEnumerator<usize> {
    let mut counts: IndexMap<Index, usize> = IndexMap::new();
    self.previous.enumerator().for_each_entry(&mut |value, index| {
      *counts.entry((self.key)(value, index)).or_insert(0) += 1;
    });
    tracing::trace!(buckets = counts.len(), "counted chain aggregated");
    Box::new(MappingEnumerator::new(counts.into_iter().collect()))
  }

  fn as_node(&self) -> &dyn Node {
    self
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  #[test]
  fn group_keeps_first_seen_key_order() {
    let grouped = Chain::from(vec!["apple", "bean", "avocado", "beet", "corn"])
      .group_by(|word, _| word.chars().next().unwrap_or_default());

    let object = grouped.to_object();
    let keys: Vec<String> = object.keys().map(ToString::to_string).collect();
    assert_eq!(keys, ["a", "b", "c"]);
    assert_eq!(object[&Index::from('a')], vec!["apple", "avocado"]);
    assert_eq!(object[&Index::from('b')], vec!["bean", "beet"]);
  }

  #[test]
  fn group_applies_value_function() {
    let lengths = Chain::from(vec!["aa", "b", "cc"])
      .group(|word, _| word.len(), |word, _| word.to_uppercase())
      .to_object();
    assert_eq!(lengths[&Index::Position(2)], vec!["AA", "CC"]);
    assert_eq!(lengths[&Index::Position(1)], vec!["B"]);
  }

  #[test]
  fn aggregation_happens_when_the_enumerator_is_created() {
    let pulled = Rc::new(Cell::new(0));
    let seen = pulled.clone();
    let counted = Chain::from(vec![1, 2, 3])
      .map(move |x, _| {
        seen.set(seen.get() + 1);
        *x
      })
      .count_by(|x, _| x % 2 == 0);
    assert_eq!(pulled.get(), 0);

    let mut e = counted.enumerator();
    assert_eq!(pulled.get(), 3);
    assert!(e.move_next());
    assert_eq!(e.current_index(), Some(Index::Flag(false)));
    assert_eq!(e.current(), Some(&2));
  }
}
