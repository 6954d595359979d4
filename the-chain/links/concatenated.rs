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

/// The previous link followed by every extra collection, renumbered from 0.
pub struct Concatenated<T> {
  previous: Chain<T>,
  others:   Rc<[Chain<T>]>,
}

impl<T> Concatenated<T> {
  pub fn new(previous: Chain<T>, others: Rc<[Chain<T>]>) -> Self {
    Self { previous, others }
  }
}

impl<T> Node for Concatenated<T> {
  fn kind(&self) -> LinkKind {
    LinkKind::Concatenated
  }

  fn previous(&self) -> Option<&dyn Node> {
    Some(self.previous.node())
  }
}

impl<T: Clone + 'static> Link<T> for Concatenated<T> {
  fn enumerator(&self) -> BoxEnumerator<T> {
    Box::new(ConcatenatedEnumerator {
      head:       self.previous.enumerator(),
      tail:       None,
      others:     self.others.clone(),
      next_other: 0,
      position:   None,
    })
  }

  fn as_node(&self) -> &dyn Node {
    self
  }
}

pub struct ConcatenatedEnumerator<T> {
  head:       BoxEnumerator<T>,
  /// Enumerator of the extra collection currently being walked.
  tail:       Option<BoxEnumerator<T>>,
  others:     Rc<[Chain<T>]>,
  next_other: usize,
  position:   Option<usize>,
}

impl<T: Clone + 'static> ConcatenatedEnumerator<T> {
  fn active(&self) -> &dyn Enumerator<Item = T> {
    match &self.tail {
      Some(tail) => &**tail,
      None => &*self.head,
    }
  }

  fn advance(&mut self) -> bool {
    if self.tail.is_none() && self.next_other == 0 && self.head.move_next() {
      return true;
    }
    loop {
      if let Some(tail) = self.tail.as_mut()
        && tail.move_next()
      {
        return true;
      }
      let Some(other) = self.others.get(self.next_other) else {
        self.tail = None;
        self.next_other = self.others.len() + 1;
        return false;
      };
      self.tail = Some(other.enumerator());
      self.next_other += 1;
    }
  }
}

impl<T: Clone + 'static> Enumerator for ConcatenatedEnumerator<T> {
  type Item = T;

  fn current(&self) -> Option<&T> {
    self.position?;
    self.active().current()
  }

  fn current_index(&self) -> Option<Index> {
    self.current()?;
    self.position.map(Index::Position)
  }

  fn move_next(&mut self) -> bool {
    if self.advance() {
      self.position = Some(self.position.map_or(0, |pos| pos + 1));
      true
    } else {
      false
    }
  }

  fn reset(&mut self) {
    self.head.reset();
    self.tail = None;
    self.next_other = 0;
    self.position = None;
  }
}
