//! `serde_json::Value` as a dynamically shaped chain item.
//!
//! Arrays become sequence sources, objects become mapping sources, and
//! anything else is rejected. Arrays flatten; strings and objects are
//! leaves.

use std::rc::Rc;

use serde_json::{
  Map,
  Value,
};

use crate::{
  chain::Chain,
  error::{
    ChainError,
    Result,
  },
  index::Index,
  links::flattened::{
    Expansion,
    Flatten,
  },
  select::Properties,
  source::SequenceEnumerator,
};

pub fn type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

impl Chain<Value> {
  /// Picks the source adapter from the value's shape.
  pub fn from_value(value: Value) -> Result<Self> {
    match value {
      Value::Array(items) => Ok(Self::from_sequence(items)),
      Value::Object(entries) => Ok(Self::from_mapping(entries)),
      other => {
        let type_name = type_name(&other);
        tracing::debug!(type_name, "rejected chain source");
        Err(ChainError::UnsupportedSource { type_name })
      },
    }
  }

  pub fn sequence_from_value(value: Value) -> Result<Self> {
    match value {
      Value::Array(items) => Ok(Self::from_sequence(items)),
      other => Err(ChainError::NotASequence {
        type_name: type_name(&other),
      }),
    }
  }

  pub fn mapping_from_value(value: Value) -> Result<Self> {
    match value {
      Value::Object(entries) => Ok(Self::from_mapping(entries)),
      other => Err(ChainError::NotAMapping {
        type_name: type_name(&other),
      }),
    }
  }

  /// JSON object keyed by each item's index rendered as text.
  pub fn to_json_object(&self) -> Value {
    let mut object = Map::new();
    self.each(|value, index| {
      object.insert(index.to_string(), value.clone());
    });
    Value::Object(object)
  }
}

impl TryFrom<Value> for Chain<Value> {
  type Error = ChainError;

  fn try_from(value: Value) -> Result<Self> {
    Self::from_value(value)
  }
}

impl From<&Value> for Index {
  fn from(value: &Value) -> Self {
    match value {
      Value::Bool(flag) => Index::Flag(*flag),
      Value::String(key) => Index::key(key),
      Value::Number(number) => match number.as_u64().and_then(|pos| usize::try_from(pos).ok()) {
        Some(pos) => Index::Position(pos),
        None => Index::Key(Rc::from(number.to_string())),
      },
      other => Index::Key(Rc::from(other.to_string())),
    }
  }
}

impl From<Value> for Index {
  fn from(value: Value) -> Self {
    Index::from(&value)
  }
}

impl From<Index> for Value {
  fn from(index: Index) -> Self {
    match index {
      Index::Position(pos) => Value::from(pos),
      Index::Key(key) => Value::String(key.to_string()),
      Index::Flag(flag) => Value::Bool(flag),
    }
  }
}

impl Flatten for Value {
  type Leaf = Value;

  fn expand(&self) -> Expansion<Self> {
    match self {
      Value::Array(items) => {
        Expansion::Nested(Box::new(SequenceEnumerator::new(Rc::from(items.as_slice()))))
      },
      leaf => Expansion::Leaf(leaf.clone()),
    }
  }
}

impl Properties for Value {
  fn property(&self, name: &str) -> Self {
    self.get(name).cloned().unwrap_or(Value::Null)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::select::{
    identity,
    property,
    property_mapper,
  };

  #[test]
  fn dispatch_follows_the_value_shape() {
    let chain = Chain::from_value(json!([1, 2])).unwrap();
    assert_eq!(chain.kind(), crate::link::LinkKind::Sequence);

    let chain = Chain::from_value(json!({"a": 1})).unwrap();
    assert_eq!(chain.kind(), crate::link::LinkKind::Mapping);

    assert_eq!(
      Chain::from_value(json!(42)).unwrap_err(),
      ChainError::UnsupportedSource { type_name: "number" }
    );
    assert_eq!(
      Chain::<Value>::try_from(json!("text")).unwrap_err(),
      ChainError::UnsupportedSource { type_name: "string" }
    );
  }

  #[test]
  fn adapters_reject_the_wrong_shape() {
    assert_eq!(
      Chain::sequence_from_value(json!({"a": 1})).unwrap_err(),
      ChainError::NotASequence { type_name: "object" }
    );
    assert_eq!(
      Chain::mapping_from_value(json!([1])).unwrap_err(),
      ChainError::NotAMapping { type_name: "array" }
    );
  }

  #[test]
  fn object_round_trips_with_key_order() {
    let source = json!({"foo": "Foo", "bar": "Bar"});
    let chain = Chain::from_value(source.clone()).unwrap();
    assert_eq!(chain.to_json_object(), source);

    let keys: Vec<String> = chain.to_object().keys().map(ToString::to_string).collect();
    assert_eq!(keys, ["foo", "bar"]);
  }

  #[test]
  fn flatten_keeps_strings_whole() {
    let chain = Chain::from_value(json!([1, [2, [3, 4]], "five", [], {"six": 6}])).unwrap();
    assert_eq!(chain.flatten().to_vec(), vec![
      json!(1),
      json!(2),
      json!(3),
      json!(4),
      json!("five"),
      json!({"six": 6}),
    ]);
  }

  #[test]
  fn count_by_stringifies_only_for_json() {
    let counts = Chain::from_value(json!([1, 2, 3, 4, 5]))
      .unwrap()
      .count_by(|x, _| x.as_i64().is_some_and(|n| n % 2 == 0));

    let object = counts.to_object();
    assert_eq!(object[&Index::Flag(false)], 3);
    assert_eq!(object[&Index::Flag(true)], 2);

    let json = counts.map(|count, _| Value::from(*count)).to_json_object();
    assert_eq!(json, json!({"false": 3, "true": 2}));
  }

  #[test]
  fn group_by_property_name() {
    let rows = json!([
      {"kind": "fruit", "name": "apple"},
      {"kind": "root", "name": "carrot"},
      {"kind": "fruit", "name": "pear"},
    ]);
    let grouped = Chain::from_value(rows)
      .unwrap()
      .group(property::<Value>("kind"), property_mapper::<Value>(Some("name")))
      .to_object();
    assert_eq!(grouped[&Index::key("fruit")], vec![json!("apple"), json!("pear")]);
    assert_eq!(grouped[&Index::key("root")], vec![json!("carrot")]);
  }

  #[test]
  fn map_by_property_and_identity() {
    let chain = Chain::from_value(json!([{"id": 1}, {"id": 2}, {}])).unwrap();
    assert_eq!(chain.map(property::<Value>("id")).to_vec(), vec![
      json!(1),
      json!(2),
      Value::Null
    ]);
    assert_eq!(chain.map(identity::<Value>()).count(), 3);
  }

  #[test]
  fn index_from_values() {
    assert_eq!(Index::from(&json!(true)), Index::Flag(true));
    assert_eq!(Index::from(&json!(3)), Index::Position(3));
    assert_eq!(Index::from(&json!(-1)), Index::key("-1"));
    assert_eq!(Index::from(&json!(1.5)), Index::key("1.5"));
    assert_eq!(Index::from(&json!(u64::MAX)), match usize::try_from(u64::MAX) {
      Ok(pos) => Index::Position(pos),
      Err(_) => Index::key(&u64::MAX.to_string()),
    });
    assert_eq!(Index::from(&json!("k")), Index::key("k"));
    assert_eq!(Value::from(Index::Position(2)), json!(2));
  }

  #[test]
  fn index_serializes_untagged() {
    assert_eq!(serde_json::to_value(Index::Flag(true)).unwrap(), json!(true));
    assert_eq!(serde_json::to_value(Index::key("foo")).unwrap(), json!("foo"));
    assert_eq!(serde_json::to_value(Index::Position(7)).unwrap(), json!(7));
  }
}
