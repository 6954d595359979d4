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

/// Forward-only `[begin, end)` window over the previous link, counted in
/// pulled items rather than indices.
pub struct Sliced<T> {
  previous: Chain<T>,
  begin:    usize,
  end:      Option<usize>,
}

impl<T> Sliced<T> {
  pub fn new(previous: Chain<T>, begin: usize, end: Option<usize>) -> Self {
    Self {
      previous,
      begin,
      end,
    }
  }
}

impl<T> Node for Sliced<T> {
  fn kind(&self) -> LinkKind {
    LinkKind::Sliced
  }

  fn previous(&self) -> Option<&dyn Node> {
    Some(self.previous.node())
  }
}

impl<T: Clone + 'static> Link<T> for Sliced<T> {
  fn enumerator(&self) -> BoxEnumerator<T> {
    Box::new(SlicedEnumerator {
      previous: self.previous.enumerator(),
      begin:    self.begin,
      end:      self.end,
      pulled:   0,
      done:     false,
    })
  }

  fn as_node(&self) -> &dyn Node {
    self
  }
}

pub struct SlicedEnumerator<T> {
  previous: BoxEnumerator<T>,
  begin:    usize,
  end:      Option<usize>,
  pulled:   usize,
  done:     bool,
}

impl<T> Enumerator for SlicedEnumerator<T> {
  type Item = T;

  fn current(&self) -> Option<&T> {
    if self.done {
      return None;
    }
    self.previous.current()
  }

  fn current_index(&self) -> Option<Index> {
    if self.done {
      return None;
    }
    self.previous.current_index()
  }

  fn move_next(&mut self) -> bool {
    while !self.done {
      // Stop before pulling past the window.
      if self.end.is_some_and(|end| self.pulled >= end) || !self.previous.move_next() {
        self.done = true;
        break;
      }
      let position = self.pulled;
      self.pulled += 1;
      if position >= self.begin {
        return true;
      }
    }
    false
  }

  fn reset(&mut self) {
    self.previous.reset();
    self.pulled = 0;
    self.done = false;
  }
}
