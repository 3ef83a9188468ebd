//! Dynamic nested value model.
//!
//! [`Value`] represents an arbitrary nested structure: scalars, text that is
//! treated as a single unit, ordered sequences, sets, mappings and the
//! tabular series column.

use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

use rustc_hash::{FxBuildHasher, FxHashMap};
use serde::{Deserialize, Serialize};

use crate::error::{CommonError, Result};

/// A dynamically typed, possibly nested value.
///
/// Sets keep their insertion order and never hold two equal members.
/// Equality and hashing treat sets and mappings as unordered.
///
/// Deserialization goes through the same checks as [`Value::set`],
/// [`Value::frozenset`] and [`Value::dict`], and additionally rejects
/// repeated set members and mapping keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawValue")]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Set(Vec<Value>),
    FrozenSet(Vec<Value>),
    Dict(Vec<(Value, Value)>),
    /// One-dimensional column of scalars
    Series(Vec<Value>),
}

/// Fieldless tag naming the kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueType {
    None,
    Bool,
    Int,
    Float,
    Str,
    List,
    Tuple,
    Set,
    FrozenSet,
    Dict,
    Series,
}

impl ValueType {
    /// Short lowercase name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::None => "NoneType",
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Str => "str",
            ValueType::List => "list",
            ValueType::Tuple => "tuple",
            ValueType::Set => "set",
            ValueType::FrozenSet => "frozenset",
            ValueType::Dict => "dict",
            ValueType::Series => "series",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Get the type tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::None => ValueType::None,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::Str,
            Value::List(_) => ValueType::List,
            Value::Tuple(_) => ValueType::Tuple,
            Value::Set(_) => ValueType::Set,
            Value::FrozenSet(_) => ValueType::FrozenSet,
            Value::Dict(_) => ValueType::Dict,
            Value::Series(_) => ValueType::Series,
        }
    }

    /// Build a list from anything convertible into values.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a tuple from anything convertible into values.
    pub fn tuple<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Build a series column from anything convertible into values.
    pub fn series<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Series(items.into_iter().map(Into::into).collect())
    }

    /// Build a mutable set, rejecting unhashable members and dropping duplicates.
    pub fn set<I, V>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        unique_hashable(items).map(Value::Set)
    }

    /// Build a frozen set, rejecting unhashable members and dropping duplicates.
    pub fn frozenset<I, V>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        unique_hashable(items).map(Value::FrozenSet)
    }

    /// Build a mapping, rejecting unhashable keys. A repeated key keeps its
    /// first position and takes the last value.
    pub fn dict<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let mut out: Vec<(Value, Value)> = Vec::new();
        let mut index = MemberIndex::default();
        for (key, value) in entries {
            let key = key.into();
            if !key.is_hashable() {
                return Err(CommonError::unhashable(key.value_type().name()));
            }
            let value = value.into();
            let hash = hash_value(&key);
            let existing = index.position(hash, &key, |i| &out[i].0);
            match existing {
                Some(i) => out[i].1 = value,
                None => {
                    index.insert(hash, out.len());
                    out.push((key, value));
                }
            }
        }
        Ok(Value::Dict(out))
    }

    /// Whether this value may be a set member or a mapping key.
    pub fn is_hashable(&self) -> bool {
        match self {
            Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => true,
            Value::Tuple(items) | Value::FrozenSet(items) => items.iter().all(Value::is_hashable),
            Value::List(_) | Value::Set(_) | Value::Dict(_) | Value::Series(_) => false,
        }
    }

    /// Number of direct members for containers, characters for text.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::List(items)
            | Value::Tuple(items)
            | Value::Set(items)
            | Value::FrozenSet(items)
            | Value::Series(items) => Some(items.len()),
            Value::Dict(entries) => Some(entries.len()),
            Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_) => None,
        }
    }

    /// Whether this value has a length of zero.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Consume the value and return its elements in iteration order.
    ///
    /// Mappings yield their keys and text yields one single-character string
    /// per character. Scalars are not iterable.
    pub fn into_elements(self) -> Result<Vec<Value>> {
        match self {
            Value::List(items)
            | Value::Tuple(items)
            | Value::Set(items)
            | Value::FrozenSet(items)
            | Value::Series(items) => Ok(items),
            Value::Dict(entries) => Ok(entries.into_iter().map(|(key, _)| key).collect()),
            Value::Str(s) => Ok(s.chars().map(|c| Value::Str(c.to_string())).collect()),
            other => Err(CommonError::not_iterable(other.value_type().name())),
        }
    }
}

fn unique_hashable<I, V>(items: I) -> Result<Vec<Value>>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let mut out: Vec<Value> = Vec::new();
    let mut index = MemberIndex::default();
    for item in items {
        let item = item.into();
        if !item.is_hashable() {
            return Err(CommonError::unhashable(item.value_type().name()));
        }
        let hash = hash_value(&item);
        if index.position(hash, &item, |i| &out[i]).is_none() {
            index.insert(hash, out.len());
            out.push(item);
        }
    }
    Ok(out)
}

/// Positions of collected members, bucketed by hash.
#[derive(Default)]
struct MemberIndex {
    buckets: FxHashMap<u64, Vec<usize>>,
}

impl MemberIndex {
    fn position<'v>(
        &self,
        hash: u64,
        item: &Value,
        member: impl Fn(usize) -> &'v Value,
    ) -> Option<usize> {
        self.buckets
            .get(&hash)?
            .iter()
            .copied()
            .find(|&i| member(i) == item)
    }

    fn insert(&mut self, hash: u64, position: usize) {
        self.buckets.entry(hash).or_default().push(position);
    }
}

fn hash_value<T: Hash + ?Sized>(value: &T) -> u64 {
    FxBuildHasher.hash_one(value)
}

/// Order-independent combination of member hashes.
fn unordered_hash<'a, T, I>(items: I) -> u64
where
    T: Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(hash_value)
        .fold(0, u64::wrapping_add)
}

fn same_members(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len()
        && a.iter().all(|item| b.contains(item))
        && b.iter().all(|item| a.contains(item))
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::None => state.write_u8(0),
            Value::Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            }
            Value::Int(i) => {
                state.write_u8(2);
                i.hash(state);
            }
            Value::Float(f) => {
                state.write_u8(3);
                // -0.0 == 0.0
                let f = if *f == 0.0 { 0.0 } else { *f };
                f.to_bits().hash(state);
            }
            Value::Str(s) => {
                state.write_u8(4);
                s.hash(state);
            }
            Value::List(items) => {
                state.write_u8(5);
                items.hash(state);
            }
            Value::Tuple(items) => {
                state.write_u8(6);
                items.hash(state);
            }
            Value::Series(items) => {
                state.write_u8(7);
                items.hash(state);
            }
            // sets and frozen sets with the same members are equal
            Value::Set(items) | Value::FrozenSet(items) => {
                state.write_u8(8);
                state.write_usize(items.len());
                state.write_u64(unordered_hash(items));
            }
            Value::Dict(entries) => {
                state.write_u8(9);
                state.write_usize(entries.len());
                state.write_u64(unordered_hash(entries));
            }
        }
    }
}

/// Unchecked mirror of [`Value`] as it appears on the wire.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
enum RawValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Set(Vec<Value>),
    FrozenSet(Vec<Value>),
    Dict(Vec<(Value, Value)>),
    Series(Vec<Value>),
}

impl TryFrom<RawValue> for Value {
    type Error = CommonError;

    fn try_from(raw: RawValue) -> Result<Self> {
        Ok(match raw {
            RawValue::None => Value::None,
            RawValue::Bool(b) => Value::Bool(b),
            RawValue::Int(i) => Value::Int(i),
            RawValue::Float(f) => Value::Float(f),
            RawValue::Str(s) => Value::Str(s),
            RawValue::List(items) => Value::List(items),
            RawValue::Tuple(items) => Value::Tuple(items),
            RawValue::Series(items) => Value::Series(items),
            RawValue::Set(items) => Value::Set(distinct_members(items)?),
            RawValue::FrozenSet(items) => Value::FrozenSet(distinct_members(items)?),
            RawValue::Dict(entries) => {
                let expected = entries.len();
                let dict = Value::dict(entries)?;
                if dict.len() != Some(expected) {
                    return Err(CommonError::invalid_argument("duplicate mapping key"));
                }
                dict
            }
        })
    }
}

fn distinct_members(items: Vec<Value>) -> Result<Vec<Value>> {
    let expected = items.len();
    let members = unique_hashable(items)?;
    if members.len() != expected {
        return Err(CommonError::invalid_argument("duplicate set member"));
    }
    Ok(members)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b))
            | (Value::Tuple(a), Value::Tuple(b))
            | (Value::Series(a), Value::Series(b)) => a == b,
            (Value::Set(a) | Value::FrozenSet(a), Value::Set(b) | Value::FrozenSet(b)) => {
                same_members(a, b)
            }
            (Value::Dict(a), Value::Dict(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key, value)| {
                        b.iter().any(|(other_key, other_value)| {
                            key == other_key && value == other_value
                        })
                    })
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{item}")?;
            }
            Ok(())
        }

        match self {
            Value::None => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Str(s) => write!(f, "'{s}'"),
            Value::List(items) => {
                f.write_str("[")?;
                join(f, items)?;
                f.write_str("]")
            }
            Value::Tuple(items) => {
                f.write_str("(")?;
                join(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Value::Set(items) if items.is_empty() => f.write_str("set()"),
            Value::Set(items) => {
                f.write_str("{")?;
                join(f, items)?;
                f.write_str("}")
            }
            Value::FrozenSet(items) if items.is_empty() => f.write_str("frozenset()"),
            Value::FrozenSet(items) => {
                f.write_str("frozenset({")?;
                join(f, items)?;
                f.write_str("})")
            }
            Value::Dict(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Series(items) => {
                f.write_str("Series([")?;
                join(f, items)?;
                f.write_str("])")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::None,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Dict(
                map.into_iter()
                    .map(|(key, value)| (Value::Str(key), Value::from(value)))
                    .collect(),
            ),
        }
    }
}
