//! Key and value extractors for `map`, `group`, `count_by` and `uniq_by`.
//!
//! Extractors are plain `Fn(&T, &Index) -> O` closures. Items exposing named
//! properties can be selected by name instead, with [`property_mapper`]
//! normalizing "a name or nothing" into a closure.

use std::rc::Rc;

use crate::index::Index;

/// Items with named properties, e.g. JSON objects.
pub trait Properties: Clone + 'static {
  /// The named property, or the type's empty value when it is missing.
  fn property(&self, name: &str) -> Self;
}

/// Selects the named property of every item.
pub fn property<T: Properties>(name: &str) -> impl Fn(&T, &Index) -> T + use<T> {
  let name: Rc<str> = Rc::from(name);
  move |value, _| value.property(&name)
}

/// Hands back the item itself.
pub fn identity<T: Clone + 'static>() -> impl Fn(&T, &Index) -> T + 'static {
  |value, _| value.clone()
}

/// Property selector when a name is given, identity otherwise.
pub fn property_mapper<T: Properties>(name: Option<&str>) -> impl Fn(&T, &Index) -> T + use<T> {
  let name: Option<Rc<str>> = name.map(Rc::from);
  move |value, _| match &name {
    Some(name) => value.property(name),
    None => value.clone(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Clone, PartialEq)]
  enum Field {
    Record(Vec<(&'static str, i32)>),
    Int(i32),
    Missing,
  }

  impl Properties for Field {
    fn property(&self, name: &str) -> Self {
      match self {
        Field::Record(fields) => fields
          .iter()
          .find(|(key, _)| *key == name)
          .map_or(Field::Missing, |(_, value)| Field::Int(*value)),
        _ => Field::Missing,
      }
    }
  }

  #[test]
  fn mapper_without_name_is_identity() {
    let select = property_mapper::<Field>(None);
    assert_eq!(select(&Field::Int(7), &Index::Position(0)), Field::Int(7));
  }

  #[test]
  fn mapper_with_name_selects_property() {
    let record = Field::Record(vec![("id", 1), ("size", 10)]);
    let select = property_mapper::<Field>(Some("size"));
    assert_eq!(select(&record, &Index::Position(0)), Field::Int(10));

    let select = property::<Field>("color");
    assert_eq!(select(&record, &Index::Position(0)), Field::Missing);
  }
}
