//! Raw document values
//!
//! [`Value`] is the data model every document is parsed into. Sequences come
//! in three kinds (list, tuple, set) and the kind is kept through every
//! conversion, including the YAML bridge where tuples and sets are written
//! as `!tuple` and `!set` tagged sequences.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_yaml::value::{Tag, TaggedValue};
use std::collections::BTreeMap;

/// String-keyed mapping of values, iterated in key order.
pub type Mapping = BTreeMap<String, Value>;

const SET_TAG: &str = "set";
const TUPLE_TAG: &str = "tuple";

/// A parsed document value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// List-like sequence
    Sequence(Vec<Value>),
    /// Fixed, tuple-like sequence
    Tuple(Vec<Value>),
    /// Set-like sequence; elements are unique and keep first-seen order.
    /// Equality compares in that order, so `[a, b]` and `[b, a]` differ.
    Set(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    /// Build a set, dropping repeated elements.
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        let mut unique: Vec<Value> = Vec::new();
        for item in items {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        Value::Set(unique)
    }

    /// An empty mapping value.
    pub fn empty_mapping() -> Self {
        Value::Mapping(Mapping::new())
    }

    /// Parse YAML text into a value.
    pub fn from_yaml_str(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str::<serde_yaml::Value>(source).map(Value::from)
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Tuple(_) => "tuple",
            Value::Set(_) => "set",
            Value::Mapping(_) => "mapping",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Elements of any sequence kind.
    pub fn as_items(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) | Value::Tuple(items) | Value::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Member of a mapping value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|m| m.get(key))
    }

    /// Convert into the generic YAML representation.
    pub fn to_yaml(&self) -> serde_yaml::Value {
        match self {
            Value::Null => serde_yaml::Value::Null,
            Value::Bool(b) => serde_yaml::Value::Bool(*b),
            Value::Integer(i) => serde_yaml::Value::Number((*i).into()),
            Value::Float(f) => serde_yaml::Value::Number((*f).into()),
            Value::String(s) => serde_yaml::Value::String(s.clone()),
            Value::Sequence(items) => yaml_sequence(items),
            Value::Tuple(items) => tagged(TUPLE_TAG, items),
            Value::Set(items) => tagged(SET_TAG, items),
            Value::Mapping(map) => serde_yaml::Value::Mapping(
                map.iter()
                    .map(|(k, v)| (serde_yaml::Value::String(k.clone()), v.to_yaml()))
                    .collect(),
            ),
        }
    }
}

fn yaml_sequence(items: &[Value]) -> serde_yaml::Value {
    serde_yaml::Value::Sequence(items.iter().map(Value::to_yaml).collect())
}

fn tagged(tag: &str, items: &[Value]) -> serde_yaml::Value {
    serde_yaml::Value::Tagged(Box::new(TaggedValue {
        tag: Tag::new(tag),
        value: yaml_sequence(items),
    }))
}

/// Strip `!`, `!!` and the core-schema prefix so `!set`, `!!set` and
/// `tag:yaml.org,2002:set` compare equal.
fn tag_name(tag: &Tag) -> String {
    let raw = tag.to_string();
    let trimmed = raw.trim_start_matches('!');
    trimmed
        .strip_prefix("tag:yaml.org,2002:")
        .unwrap_or(trimmed)
        .to_string()
}

/// Formats without tags (JSON, TOML) write a tagged sequence as a
/// one-entry mapping such as `{"!set": [..]}`. Recognize that shape.
fn tagged_entry(map: &serde_yaml::Mapping) -> Option<&'static str> {
    if map.len() != 1 {
        return None;
    }
    let (key, value) = map.iter().next()?;
    let key = key.as_str()?.strip_prefix('!')?;
    if !value.is_sequence() {
        return None;
    }
    match key.trim_start_matches('!') {
        SET_TAG => Some(SET_TAG),
        TUPLE_TAG => Some(TUPLE_TAG),
        _ => None,
    }
}

fn sequence_of_kind(kind: &str, map: serde_yaml::Mapping) -> Value {
    let items = map
        .into_iter()
        .flat_map(|(_, v)| match v {
            serde_yaml::Value::Sequence(items) => items,
            _ => Vec::new(),
        })
        .map(Value::from);
    if kind == SET_TAG {
        Value::set(items)
    } else {
        Value::Tuple(items.collect())
    }
}

fn key_string(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Sequence(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_yaml::Value::Mapping(map) => match tagged_entry(&map) {
                Some(kind) => sequence_of_kind(kind, map),
                None => Value::Mapping(
                    map.into_iter()
                        .map(|(k, v)| (key_string(k), Value::from(v)))
                        .collect(),
                ),
            },
            serde_yaml::Value::Tagged(tagged) => {
                let TaggedValue { tag, value } = *tagged;
                match (tag_name(&tag).as_str(), value) {
                    (SET_TAG, serde_yaml::Value::Sequence(items)) => {
                        Value::set(items.into_iter().map(Value::from))
                    }
                    // YAML's canonical set form is a mapping with null values
                    (SET_TAG, serde_yaml::Value::Mapping(map)) => {
                        Value::set(map.into_iter().map(|(k, _)| Value::from(k)))
                    }
                    (TUPLE_TAG | "python/tuple", serde_yaml::Value::Sequence(items)) => {
                        Value::Tuple(items.into_iter().map(Value::from).collect())
                    }
                    // Unknown tags degrade to their untagged content
                    (_, inner) => Value::from(inner),
                }
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_yaml().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_yaml::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Mapping(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
