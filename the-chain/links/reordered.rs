//! Reversed and Sorted: both need the whole previous link before the first
//! item can be answered.
//!
//! When the chain still saves origin indices they travel with their values;
//! otherwise the reordered items are renumbered by final position.

use std::{
  cmp::Ordering,
  rc::Rc,
};

use crate::{
  chain::Chain,
  enumerator::BoxEnumerator,
  index::Index,
  link::{
    Link,
    LinkKind,
    Node,
  },
  links::indexed::IndexedEnumerator,
};

pub type Comparator<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

pub struct Reversed<T> {
  previous: Chain<T>,
  renumber: bool,
}

impl<T> Reversed<T> {
  pub fn new(previous: Chain<T>) -> Self {
    let renumber = !previous.saves_indices();
    Self { previous, renumber }
  }
}

impl<T> Node for Reversed<T> {
  fn kind(&self) -> LinkKind {
    LinkKind::Reversed
  }

  fn previous(&self) -> Option<&dyn Node> {
    Some(self.previous.node())
  }
}

impl<T: Clone + 'static> Link<T> for Reversed<T> {
  fn enumerator(&self) -> BoxEnumerator<T> {
    Box::new(IndexedEnumerator::new(
      self.previous.enumerator(),
      Rc::new(|items: &mut Vec<(Index, T)>| items.reverse()),
      self.renumber,
    ))
  }

  fn as_node(&self) -> &dyn Node {
    self
  }
}

pub struct Sorted<T> {
  previous: Chain<T>,
  compare:  Comparator<T>,
  renumber: bool,
}

impl<T> Sorted<T> {
  pub fn new(previous: Chain<T>, compare: Comparator<T>) -> Self {
    let renumber = !previous.saves_indices();
    Self {
      previous,
      compare,
      renumber,
    }
  }
}

impl<T> Node for Sorted<T> {
  fn kind(&self) -> LinkKind {
    LinkKind::Sorted
  }

  fn previous(&self) -> Option<&dyn Node> {
    Some(self.previous.node())
  }
}

impl<T: Clone + 'static> Link<T> for Sorted<T> {
  fn enumerator(&self) -> BoxEnumerator<T> {
    let compare = self.compare.clone();
    Box::new(IndexedEnumerator::new(
      self.previous.enumerator(),
      Rc::new(move |items: &mut Vec<(Index, T)>| sort_stable(items, &*compare)),
      self.renumber,
    ))
  }

  fn as_node(&self) -> &dyn Node {
    self
  }
}

/// Bottom-up merge sort by `compare`. Ties keep upstream order, and a
/// comparator that is not a total order yields some permutation instead of
/// failing.
fn sort_stable<T>(items: &mut Vec<(Index, T)>, compare: &dyn Fn(&T, &T) -> Ordering) {
  let len = items.len();
  if len < 2 {
    return;
  }
  let mut order: Vec<usize> = (0..len).collect();
  let mut merged: Vec<usize> = Vec::with_capacity(len);
  let mut width = 1;
  while width < len {
    merged.clear();
    let mut start = 0;
    while start < len {
      let mid = (start + width).min(len);
      let end = (start + 2 * width).min(len);
      let (mut left, mut right) = (start, mid);
      while left < mid && right < end {
        // Take from the right run only when strictly less.
        if compare(&items[order[right]].1, &items[order[left]].1) == Ordering::Less {
          merged.push(order[right]);
          right += 1;
        } else {
          merged.push(order[left]);
          left += 1;
        }
      }
      merged.extend_from_slice(&order[left..mid]);
      merged.extend_from_slice(&order[right..end]);
      start = end;
    }
    std::mem::swap(&mut order, &mut merged);
    width *= 2;
  }

  let mut slots: Vec<Option<(Index, T)>> = items.drain(..).map(Some).collect();
  items.extend(order.into_iter().filter_map(|pos| slots[pos].take()));
}

/// Natural order for the default `sort`. Values unordered even against
/// themselves (NaN) form one bucket after every ordered value.
pub fn natural_order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
  if let Some(ordering) = a.partial_cmp(b) {
    return ordering;
  }
  let a_ordered = a.partial_cmp(a).is_some();
  let b_ordered = b.partial_cmp(b).is_some();
  match (a_ordered, b_ordered) {
    (true, false) => Ordering::Less,
    (false, true) => Ordering::Greater,
    _ => Ordering::Equal,
  }
}

#[cfg(test)]
mod tests {
  use indexmap::IndexMap;

  use super::*;

  #[test]
  fn natural_order_puts_unordered_last() {
    assert_eq!(natural_order(&1.0, &1.0), Ordering::Equal);
    assert_eq!(natural_order(&2.0, &1.0), Ordering::Greater);
    assert_eq!(natural_order(&f64::NAN, &1.0), Ordering::Greater);
    assert_eq!(natural_order(&1.0, &f64::NAN), Ordering::Less);
    assert_eq!(natural_order(&f64::NAN, &f64::NAN), Ordering::Equal);
  }

  #[test]
  fn sort_with_nan_keeps_numbers_ordered() {
    let mut items = Vec::new();
    for i in 0..2_000u32 {
      let x = (i.wrapping_mul(2_654_435_761) >> 7) % 1_000;
      items.push(if x % 5 == 0 { f64::NAN } else { f64::from(x) });
    }
    let nans = items.iter().filter(|x| x.is_nan()).count();

    let sorted = Chain::from(items.clone()).sort().to_vec();
    assert_eq!(sorted.len(), items.len());
    let (numbers, tail) = sorted.split_at(items.len() - nans);
    assert!(tail.iter().all(|x| x.is_nan()));
    assert!(numbers.windows(2).all(|pair| pair[0] <= pair[1]));
  }

  #[test]
  fn inconsistent_comparator_still_yields_every_item() {
    let sorted = Chain::from((0..100).collect::<Vec<i32>>())
      .sort_by(|_, _| Ordering::Less)
      .to_vec();
    let mut seen = sorted.clone();
    seen.sort_unstable();
    assert_eq!(seen, (0..100).collect::<Vec<_>>());
  }

  #[test]
  fn sequence_sort_renumbers() {
    let entries: Vec<(Index, i32)> = Chain::from(vec![30, 10, 20]).sort().iter().collect();
    assert_eq!(entries, vec![
      (Index::Position(0), 10),
      (Index::Position(1), 20),
      (Index::Position(2), 30),
    ]);

    let filtered: Vec<(Index, i32)> = Chain::from(vec![5, 40, 1, 30])
      .filter(|x, _| *x > 2)
      .sort()
      .iter()
      .collect();
    assert_eq!(filtered, vec![
      (Index::Position(0), 5),
      (Index::Position(1), 30),
      (Index::Position(2), 40),
    ]);
  }

  #[test]
  fn sequence_reverse_renumbers() {
    let entries: Vec<(Index, char)> = Chain::from(vec!['a', 'b', 'c']).reverse().iter().collect();
    assert_eq!(entries, vec![
      (Index::Position(0), 'c'),
      (Index::Position(1), 'b'),
      (Index::Position(2), 'a'),
    ]);
  }

  #[test]
  fn mapping_reverse_keeps_keys() {
    let source: IndexMap<&str, i32> = IndexMap::from([("foo", 1), ("bar", 2)]);
    let entries: Vec<(Index, i32)> = Chain::from(source).reverse().iter().collect();
    assert_eq!(entries, vec![(Index::key("bar"), 2), (Index::key("foo"), 1)]);
  }

  #[test]
  fn mapping_sort_keeps_keys() {
    let source: IndexMap<&str, i32> = IndexMap::from([("a", 3), ("b", 1), ("c", 2)]);
    let keys: Vec<String> = Chain::from(source)
      .sort()
      .iter()
      .map(|(index, _)| index.to_string())
      .collect();
    assert_eq!(keys, ["b", "c", "a"]);
  }

  #[test]
  fn sort_is_stable_for_equal_keys() {
    let people = vec![("ann", 30), ("bob", 25), ("cid", 30), ("dan", 25)];
    let names: Vec<&str> = Chain::from(people)
      .sort_by(|a, b| a.1.cmp(&b.1))
      .map(|person, _| person.0)
      .to_vec();
    assert_eq!(names, ["bob", "dan", "ann", "cid"]);
  }

  #[test]
  fn each_enumerator_sorts_again() {
    let sorted = Chain::from(vec![3, 1, 2]).sort();
    assert_eq!(sorted.to_vec(), [1, 2, 3]);
    assert_eq!(sorted.to_vec(), [1, 2, 3]);
  }
}
