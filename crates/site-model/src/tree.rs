//! Attribute trees over document values
//!
//! A [`Node`] exposes a mapping as named members. Wrapping is structural:
//! nested mappings become nested nodes, every sequence kind stays the same
//! kind with its elements wrapped, and scalars pass through untouched.
//! [`unwrap`] reverses [`wrap`] exactly.

use crate::value::{Mapping, Value};
use std::collections::BTreeMap;

/// A member of a [`Node`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Attr {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Attr>),
    Tuple(Vec<Attr>),
    Set(Vec<Attr>),
    Node(Node),
}

impl Attr {
    pub fn is_null(&self) -> bool {
        matches!(self, Attr::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Attr::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Attr::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Attr::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Attr::Integer(i) => Some(*i as f64),
            Attr::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Attr::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Elements of any sequence kind.
    pub fn as_items(&self) -> Option<&[Attr]> {
        match self {
            Attr::Sequence(items) | Attr::Tuple(items) | Attr::Set(items) => Some(items),
            _ => None,
        }
    }

    /// String elements of a sequence, skipping anything else.
    pub fn strings(&self) -> Vec<&str> {
        self.as_items()
            .map(|items| items.iter().filter_map(Attr::as_str).collect())
            .unwrap_or_default()
    }
}

/// Wrap a value into an attribute.
pub fn wrap(value: Value) -> Attr {
    match value {
        Value::Null => Attr::Null,
        Value::Bool(b) => Attr::Bool(b),
        Value::Integer(i) => Attr::Integer(i),
        Value::Float(f) => Attr::Float(f),
        Value::String(s) => Attr::String(s),
        Value::Sequence(items) => Attr::Sequence(items.into_iter().map(wrap).collect()),
        Value::Tuple(items) => Attr::Tuple(items.into_iter().map(wrap).collect()),
        Value::Set(items) => Attr::Set(items.into_iter().map(wrap).collect()),
        Value::Mapping(map) => Attr::Node(Node::from_mapping(map)),
    }
}

/// Reverse of [`wrap`].
pub fn unwrap(attr: &Attr) -> Value {
    match attr {
        Attr::Null => Value::Null,
        Attr::Bool(b) => Value::Bool(*b),
        Attr::Integer(i) => Value::Integer(*i),
        Attr::Float(f) => Value::Float(*f),
        Attr::String(s) => Value::String(s.clone()),
        Attr::Sequence(items) => Value::Sequence(items.iter().map(unwrap).collect()),
        Attr::Tuple(items) => Value::Tuple(items.iter().map(unwrap).collect()),
        Attr::Set(items) => Value::Set(items.iter().map(unwrap).collect()),
        Attr::Node(node) => Value::Mapping(node.to_mapping()),
    }
}

impl From<Value> for Attr {
    fn from(value: Value) -> Self {
        wrap(value)
    }
}

impl From<&Attr> for Value {
    fn from(attr: &Attr) -> Self {
        unwrap(attr)
    }
}

/// Anything that can be merged into a [`Node`].
///
/// Sources that are not mappings contribute nothing.
pub trait MergeSource {
    fn into_mapping(self) -> Option<Mapping>;
}

impl MergeSource for Mapping {
    fn into_mapping(self) -> Option<Mapping> {
        Some(self)
    }
}

impl MergeSource for Value {
    fn into_mapping(self) -> Option<Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl MergeSource for &Node {
    fn into_mapping(self) -> Option<Mapping> {
        Some(self.to_mapping())
    }
}

impl MergeSource for Node {
    fn into_mapping(self) -> Option<Mapping> {
        Some(self.to_mapping())
    }
}

/// A mapping exposed as named members.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    members: BTreeMap<String, Attr>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap every entry of `mapping`.
    pub fn from_mapping(mapping: Mapping) -> Self {
        let mut node = Self::new();
        node.merge_into(mapping);
        node
    }

    /// Unwrap back into a plain mapping.
    pub fn to_mapping(&self) -> Mapping {
        self.members
            .iter()
            .map(|(key, attr)| (key.clone(), unwrap(attr)))
            .collect()
    }

    /// Set every key of `source` on this node.
    ///
    /// Shallow: a nested mapping in `source` replaces the member wholesale,
    /// it is not merged with what the node already holds under that key.
    pub fn merge_into(&mut self, source: impl MergeSource) {
        if let Some(mapping) = source.into_mapping() {
            for (key, value) in mapping {
                self.members.insert(key, wrap(value));
            }
        }
    }

    /// Set a single member, wrapping the value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.members.insert(key.into(), wrap(value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&Attr> {
        self.members.get(key)
    }

    /// Member or `default`; never fails.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Attr) -> &'a Attr {
        self.members.get(key).unwrap_or(default)
    }

    /// Follow a dotted path through nested nodes (`"meta.nodemeta"`).
    pub fn lookup(&self, path: &str) -> Option<&Attr> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            current = current.as_node()?.get(segment)?;
        }
        Some(current)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Attr> {
        self.members.remove(key)
    }

    /// Members as `(name, attr)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Attr)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl From<Mapping> for Node {
    fn from(mapping: Mapping) -> Self {
        Self::from_mapping(mapping)
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = (&'a String, &'a Attr);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
