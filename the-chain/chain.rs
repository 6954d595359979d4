//! The chain facade.
//!
//! A [`Chain`] is a handle on the last link of a lazily evaluated pipeline.
//! Every operator returns a new chain that shares its predecessor; nothing is
//! computed until a terminal operation (`each`, `to_vec`, `to_object`,
//! `reduce`, `first`, `count`, ...) asks the last link for an enumerator,
//! which in turn pulls from the links before it. Each terminal call walks the
//! pipeline from the source again.
//!
//! ```
//! use the_chain::chain;
//!
//! let evens: Vec<i32> = chain(vec![1, 2, 3, 4, 5])
//!   .filter(|x, _| x % 2 == 0)
//!   .map(|x, _| x * 10)
//!   .to_vec();
//! assert_eq!(evens, [20, 40]);
//! ```

use std::{
  cmp::Ordering,
  fmt,
  hash::Hash,
  ops::{
    Bound,
    RangeBounds,
  },
  rc::Rc,
};

use indexmap::IndexMap;

use crate::{
  enumerator::{
    BoxEnumerator,
    Entries,
    Enumerable,
    Values,
  },
  error::{
    ChainError,
    Result,
  },
  index::Index,
  link::{
    self,
    Link,
    LinkKind,
    Node,
  },
  links::{
    concatenated::Concatenated,
    filtered::Filtered,
    flattened::{
      Flatten,
      Flattened,
    },
    grouped::{
      Counted,
      Grouped,
      KeyFn,
    },
    mapped::Mapped,
    reordered::{
      Reversed,
      Sorted,
      natural_order,
    },
    sliced::Sliced,
    uniquely::{
      Seen,
      SeenFactory,
      SeenHashed,
      SeenKeys,
      SeenValues,
      Uniquely,
    },
    zipped::{
      Zipped,
      ZippedAll,
    },
  },
  source::{
    EnumerableSource,
    MappingSource,
    SequenceSource,
  },
};

/// Wraps any supported source in a chain. Chains pass through unchanged.
pub fn chain<T, S>(source: S) -> Chain<T>
where
  S: Into<Chain<T>>,
{
  source.into()
}

pub struct Chain<T> {
  link: Rc<dyn Link<T>>,
}

impl<T> Clone for Chain<T> {
  fn clone(&self) -> Self {
    Self {
      link: self.link.clone(),
    }
  }
}

impl<T> Chain<T> {
  pub fn from_link(link: impl Link<T> + 'static) -> Self {
    Self {
      link: Rc::new(link),
    }
  }

  pub fn node(&self) -> &dyn Node {
    self.link.as_node()
  }

  pub fn kind(&self) -> LinkKind {
    self.link.kind()
  }

  pub fn previous(&self) -> Option<&dyn Node> {
    self.link.previous()
  }

  /// The source link this chain was built from.
  pub fn start(&self) -> &dyn Node {
    link::start(self.node())
  }

  /// Whether origin indices are still meaningful at this link.
  pub fn saves_indices(&self) -> bool {
    link::saves_indices(self.node())
  }

  pub fn depth(&self) -> usize {
    link::depth(self.node())
  }
}

impl<T: Clone + 'static> Chain<T> {
  pub fn from_sequence(items: impl Into<Rc<[T]>>) -> Self {
    Self::from_link(SequenceSource::new(items))
  }

  pub fn from_mapping<K, I>(entries: I) -> Self
  where
    K: Into<Index>,
    I: IntoIterator<Item = (K, T)>,
  {
    Self::from_link(MappingSource::new(entries))
  }

  pub fn from_enumerable(source: Rc<dyn Enumerable<T>>) -> Self {
    Self::from_link(EnumerableSource::new(source))
  }

  /// A fresh enumerator over the whole pipeline.
  pub fn enumerator(&self) -> BoxEnumerator<T> {
    self.link.enumerator()
  }

  pub fn iter(&self) -> Entries<T> {
    Entries::new(self.enumerator())
  }

  pub fn values(&self) -> Values<T> {
    Values::new(self.enumerator())
  }

  pub fn map<U, F>(&self, callback: F) -> Chain<U>
  where
    U: Clone + 'static,
    F: Fn(&T, &Index) -> U + 'static,
  {
    Chain::from_link(Mapped::new(self.clone(), Rc::new(callback)))
  }

  pub fn filter<F>(&self, predicate: F) -> Self
  where
    F: Fn(&T, &Index) -> bool + 'static,
  {
    Self::from_link(Filtered::new(self.clone(), Rc::new(predicate)))
  }

  pub fn reject<F>(&self, predicate: F) -> Self
  where
    F: Fn(&T, &Index) -> bool + 'static,
  {
    self.filter(move |value, index| !predicate(value, index))
  }

  /// This chain followed by `others` in order. Indices are renumbered from 0.
  pub fn concat<I, S>(&self, others: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<Chain<T>>,
  {
    let others: Rc<[Chain<T>]> = others.into_iter().map(Into::into).collect();
    Self::from_link(Concatenated::new(self.clone(), others))
  }

  pub fn union<I, S>(&self, others: I) -> Self
  where
    T: PartialEq,
    I: IntoIterator<Item = S>,
    S: Into<Chain<T>>,
  {
    self.concat(others).uniq()
  }

  /// Items pulled at positions `range`, forward only.
  pub fn slice(&self, range: impl RangeBounds<usize>) -> Self {
    let begin = match range.start_bound() {
      Bound::Included(&begin) => begin,
      Bound::Excluded(&begin) => begin.saturating_add(1),
      Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
      Bound::Included(&end) => Some(end.saturating_add(1)),
      Bound::Excluded(&end) => Some(end),
      Bound::Unbounded => None,
    };
    Self::from_link(Sliced::new(self.clone(), begin, end))
  }

  pub fn first(&self) -> Option<T> {
    self.values().next()
  }

  pub fn first_n(&self, n: usize) -> Self {
    self.slice(..n)
  }

  pub fn last(&self) -> Option<T> {
    self.values().last()
  }

  pub fn last_n(&self, n: usize) -> Self {
    self.reverse().first_n(n).reverse()
  }

  pub fn zip<U, S>(&self, other: S) -> Chain<(T, U)>
  where
    U: Clone + 'static,
    S: Into<Chain<U>>,
  {
    Chain::from_link(Zipped::new(self.clone(), other.into()))
  }

  pub fn zip_all<I, S>(&self, others: I) -> Chain<Vec<T>>
  where
    I: IntoIterator<Item = S>,
    S: Into<Chain<T>>,
  {
    let others: Rc<[Chain<T>]> = others.into_iter().map(Into::into).collect();
    Chain::from_link(ZippedAll::new(self.clone(), others))
  }

  /// Uses this chain's items as keys for `values`. Later duplicates win.
  pub fn zip_object<V, S>(&self, values: S) -> IndexMap<Index, V>
  where
    T: Into<Index>,
    V: Clone + 'static,
    S: Into<Chain<V>>,
  {
    self
      .zip(values)
      .values()
      .map(|(key, value)| (key.into(), value))
      .collect()
  }

  pub fn flatten(&self) -> Chain<T::Leaf>
  where
    T: Flatten,
  {
    Chain::from_link(Flattened::new(self.clone()))
  }

  /// Buckets `value(item)` under `key(item)`.
  pub fn group<K, V, KF, VF>(&self, key: KF, value: VF) -> Chain<Vec<V>>
  where
    K: Into<Index> + 'static,
    V: Clone + 'static,
    KF: Fn(&T, &Index) -> K + 'static,
    VF: Fn(&T, &Index) -> V + 'static,
  {
    let key: KeyFn<T> =
      Rc::new(move |item: &T, index: &Index| -> Index { key(item, index).into() });
    Chain::from_link(Grouped::new(self.clone(), key, Rc::new(value)))
  }

  pub fn group_by<K, KF>(&self, key: KF) -> Chain<Vec<T>>
  where
    K: Into<Index> + 'static,
    KF: Fn(&T, &Index) -> K + 'static,
  {
    self.group(key, |item: &T, _: &Index| item.clone())
  }

  /// Number of items. Drains the chain without building a link.
  pub fn count(&self) -> usize {
    self.reduce_from(0, |count, _, _| count + 1)
  }

  pub fn count_by<K, KF>(&self, key: KF) -> Chain<usize>
  where
    K: Into<Index> + 'static,
    KF: Fn(&T, &Index) -> K + 'static,
  {
    let key: KeyFn<T> =
      Rc::new(move |item: &T, index: &Index| -> Index { key(item, index).into() });
    Chain::from_link(Counted::new(self.clone(), key))
  }

  /// First occurrences by equality.
  pub fn uniq(&self) -> Self
  where
    T: PartialEq,
  {
    let seen: SeenFactory<T> =
      Rc::new(|| Box::new(SeenValues::<T>::default()) as Box<dyn Seen<T>>);
    Self::from_link(Uniquely::new(self.clone(), seen))
  }

  /// First occurrences by hashed equality.
  pub fn uniq_hashed(&self) -> Self
  where
    T: Hash + Eq,
  {
    let seen: SeenFactory<T> =
      Rc::new(|| Box::new(SeenHashed::<T>::default()) as Box<dyn Seen<T>>);
    Self::from_link(Uniquely::new(self.clone(), seen))
  }

  /// First occurrences by an extracted identifier.
  pub fn uniq_by<K, F>(&self, id: F) -> Self
  where
    K: Hash + Eq + 'static,
    F: Fn(&T, &Index) -> K + 'static,
  {
    let id: Rc<dyn Fn(&T, &Index) -> K> = Rc::new(id);
    let seen: SeenFactory<T> =
      Rc::new(move || Box::new(SeenKeys::new(id.clone())) as Box<dyn Seen<T>>);
    Self::from_link(Uniquely::new(self.clone(), seen))
  }

  pub fn reverse(&self) -> Self {
    Self::from_link(Reversed::new(self.clone()))
  }

  pub fn sort(&self) -> Self
  where
    T: PartialOrd,
  {
    self.sort_by(natural_order::<T>)
  }

  /// Stable sort: items `compare` reports equal keep their upstream order.
  pub fn sort_by<F>(&self, compare: F) -> Self
  where
    F: Fn(&T, &T) -> Ordering + 'static,
  {
    Self::from_link(Sorted::new(self.clone(), Rc::new(compare)))
  }

  pub fn each<F>(&self, mut callback: F)
  where
    F: FnMut(&T, &Index),
  {
    self.enumerator().for_each_entry(&mut callback);
  }

  pub fn to_vec(&self) -> Vec<T> {
    self.values().collect()
  }

  /// Items keyed by their index at this link.
  pub fn to_object(&self) -> IndexMap<Index, T> {
    self.iter().collect()
  }

  pub fn value(&self) -> Vec<T> {
    self.to_vec()
  }

  /// Hands the chain to `factory` and returns whatever it builds.
  pub fn value_with<R>(&self, factory: impl FnOnce(&Self) -> R) -> R {
    factory(self)
  }

  /// Left fold seeded with the first item.
  pub fn reduce<F>(&self, mut callback: F) -> Result<T>
  where
    F: FnMut(T, &T, &Index) -> T,
  {
    let mut enumerator = self.enumerator();
    if !enumerator.move_next() {
      return Err(ChainError::EmptyReduce);
    }
    let mut memo = enumerator.current().cloned().ok_or(ChainError::EmptyReduce)?;
    let mut pulled = 1;
    while enumerator.move_next() {
      if let Some(value) = enumerator.current() {
        memo = callback(memo, value, &enumerator.index_or(pulled));
      }
      pulled += 1;
    }
    Ok(memo)
  }

  pub fn reduce_from<A, F>(&self, initial: A, mut callback: F) -> A
  where
    F: FnMut(A, &T, &Index) -> A,
  {
    let mut enumerator = self.enumerator();
    let mut memo = initial;
    let mut pulled = 0;
    while enumerator.move_next() {
      if let Some(value) = enumerator.current() {
        memo = callback(memo, value, &enumerator.index_or(pulled));
      }
      pulled += 1;
    }
    memo
  }

  pub fn reduce_right<F>(&self, callback: F) -> Result<T>
  where
    F: FnMut(T, &T, &Index) -> T,
  {
    self.reverse().reduce(callback)
  }

  pub fn reduce_right_from<A, F>(&self, initial: A, callback: F) -> A
  where
    F: FnMut(A, &T, &Index) -> A,
  {
    self.reverse().reduce_from(initial, callback)
  }

  pub fn max(&self) -> Result<T>
  where
    T: PartialOrd,
  {
    self.reduce(|memo, value, _| if *value > memo { value.clone() } else { memo })
  }

  pub fn min(&self) -> Result<T>
  where
    T: PartialOrd,
  {
    self.reduce(|memo, value, _| if *value < memo { value.clone() } else { memo })
  }
}

impl<T: Clone + 'static> Enumerable<T> for Chain<T> {
  fn enumerator(&self) -> BoxEnumerator<T> {
    self.link.enumerator()
  }
}

impl<T: Clone + 'static> IntoIterator for &Chain<T> {
  type IntoIter = Entries<T>;
  type Item = (Index, T);

  fn into_iter(self) -> Entries<T> {
    self.iter()
  }
}

impl<T> fmt::Debug for Chain<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut links = Vec::new();
    let mut node = Some(self.node());
    while let Some(current) = node {
      links.push(current.kind().name());
      node = current.previous();
    }
    links.reverse();
    f.debug_struct("Chain").field("links", &links).finish()
  }
}

impl<T: Clone + 'static> From<Vec<T>> for Chain<T> {
  fn from(items: Vec<T>) -> Self {
    Self::from_sequence(items)
  }
}

impl<T: Clone + 'static> From<&[T]> for Chain<T> {
  fn from(items: &[T]) -> Self {
    Self::from_sequence(items)
  }
}

impl<T: Clone + 'static, const N: usize> From<[T; N]> for Chain<T> {
  fn from(items: [T; N]) -> Self {
    Self::from_sequence(Vec::from(items))
  }
}

impl<K: Into<Index>, T: Clone + 'static> From<IndexMap<K, T>> for Chain<T> {
  fn from(entries: IndexMap<K, T>) -> Self {
    Self::from_mapping(entries)
  }
}

impl<T: Clone + 'static> From<Rc<dyn Enumerable<T>>> for Chain<T> {
  fn from(source: Rc<dyn Enumerable<T>>) -> Self {
    Self::from_enumerable(source)
  }
}
