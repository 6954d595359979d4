//! Depth-first recursive flattening.
//!
//! Nested sequences and enumerables are expanded in place to any depth;
//! everything else is a leaf. Output indices are renumbered from 0 because
//! flattening changes cardinality.

use std::rc::Rc;

use smallvec::SmallVec;

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
  source::SequenceEnumerator,
};

/// How a single item takes part in flattening.
pub enum Expansion<T: Flatten> {
  Leaf(T::Leaf),
  /// Items of a nested collection, each expanded again.
  Nested(BoxEnumerator<T>),
}

pub trait Flatten: Clone + 'static {
  type Leaf: Clone + 'static;

  fn expand(&self) -> Expansion<Self>;
}

/// Arbitrarily nested data for typed flattening.
#[derive(Clone)]
pub enum Nested<T> {
  Leaf(T),
  Seq(Vec<Nested<T>>),
  /// An enumerable collection, expanded through its own enumerator.
  Chain(Chain<Nested<T>>),
}

impl<T> From<T> for Nested<T> {
  fn from(value: T) -> Self {
    Nested::Leaf(value)
  }
}

impl<T: Clone + 'static> Flatten for Nested<T> {
  type Leaf = T;

  fn expand(&self) -> Expansion<Self> {
    match self {
      Nested::Leaf(value) => Expansion::Leaf(value.clone()),
      Nested::Seq(items) => {
        Expansion::Nested(Box::new(SequenceEnumerator::new(Rc::from(items.as_slice()))))
      },
      Nested::Chain(chain) => Expansion::Nested(chain.enumerator()),
    }
  }
}

pub struct Flattened<T> {
  previous: Chain<T>,
}

impl<T> Flattened<T> {
  pub fn new(previous: Chain<T>) -> Self {
    Self { previous }
  }
}

impl<T> Node for Flattened<T> {
  fn kind(&self) -> LinkKind {
    LinkKind::Flattened
  }

  fn previous(&self) -> Option<&dyn Node> {
    Some(self.previous.node())
  }
}

impl<T: Flatten> Link<T::Leaf> for Flattened<T> {
  fn enumerator(&self) -> BoxEnumerator<T::Leaf> {
    Box::new(FlattenedEnumerator {
      root:     self.previous.enumerator(),
      nested:   SmallVec::new(),
      current:  None,
      position: None,
    })
  }

  fn as_node(&self) -> &dyn Node {
    self
  }
}

pub struct FlattenedEnumerator<T: Flatten> {
  root:     BoxEnumerator<T>,
  /// Enumerators of the collections currently being expanded, innermost
  /// last.
  nested:   SmallVec<[BoxEnumerator<T>; 4]>,
  current:  Option<T::Leaf>,
  position: Option<usize>,
}

impl<T: Flatten> Enumerator for FlattenedEnumerator<T> {
  type Item = T::Leaf;

  fn current(&self) -> Option<&T::Leaf> {
    self.current.as_ref()
  }

  fn current_index(&self) -> Option<Index> {
    self.current.as_ref()?;
    self.position.map(Index::Position)
  }

  fn move_next(&mut self) -> bool {
    self.current = None;
    loop {
      let level = match self.nested.last_mut() {
        Some(nested) => nested,
        None => &mut self.root,
      };
      if !level.move_next() {
        // An exhausted nested level hands control back to its parent; an
        // empty nested collection therefore yields nothing.
        if self.nested.pop().is_none() {
          return false;
        }
        continue;
      }
      let Some(item) = level.current() else {
        continue;
      };
      match item.expand() {
        Expansion::Leaf(leaf) => {
          self.current = Some(leaf);
          self.position = Some(self.position.map_or(0, |pos| pos + 1));
          return true;
        },
        Expansion::Nested(enumerator) => self.nested.push(enumerator),
      }
    }
  }

  fn reset(&mut self) {
    self.nested.clear();
    self.current = None;
    self.position = None;
    self.root.reset();
  }
}
