//! Value types for map entries.
//!
//! This module provides the [`Value`] enum that represents everything that can
//! be stored in an [`ObjDict`]. Values are either scalars (null, booleans,
//! numbers, text, dates) or containers (lists, nested maps, plain mappings and
//! opaque objects that expose item access).

use std::{cmp::Ordering, fmt, sync::Arc};

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;

use super::{DictError, Key, ObjDict, access::Indexable};

/// A plain mapping: literal keys only, no options, no path semantics.
pub type PlainMap = IndexMap<Key, Value>;

/// Values that can be stored in an [`ObjDict`].
///
/// # Value Types
///
/// ## Scalars
/// - [`Value::Null`] - The null value; distinct from an absent key
/// - [`Value::Bool`], [`Value::Int`], [`Value::Float`], [`Value::Text`]
/// - [`Value::Date`], [`Value::DateTime`] - Calendar values without a timezone
///
/// ## Containers
/// - [`Value::List`] - An ordered sequence
/// - [`Value::Map`] - A nested [`ObjDict`]
/// - [`Value::Plain`] - A plain mapping (see [`ObjDict::from_entries`])
/// - [`Value::Object`] - Any shared object implementing [`Indexable`]
///
/// # Equality
///
/// `Map` and `Plain` compare equal when their entries do, regardless of
/// insertion order. Objects compare by identity.
///
/// ```
/// # use dotdict::dict::Value;
/// let text = Value::from("hello");
/// assert!(text == "hello");
/// assert!(Value::Int(42) == 42);
/// assert!(!(Value::Int(42) == "42"));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// UTF-8 text
    Text(String),
    /// Calendar date
    Date(NaiveDate),
    /// Date and time of day
    DateTime(NaiveDateTime),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Nested hierarchical map
    Map(ObjDict),
    /// Nested plain mapping
    Plain(PlainMap),
    /// Shared object exposing item access
    Object(Arc<dyn Indexable>),
}

impl Value {
    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for `Map` and `Plain` values
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Plain(_))
    }

    /// Returns true for scalar (non-container) values
    pub fn is_scalar(&self) -> bool {
        !matches!(
            self,
            Value::List(_) | Value::Map(_) | Value::Plain(_) | Value::Object(_)
        )
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Plain(_) => "plain map",
            Value::Object(_) => "object",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float; integers are widened
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a nested map (returns immutable reference)
    pub fn as_map(&self) -> Option<&ObjDict> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable nested map reference
    pub fn as_map_mut(&mut self) -> Option<&mut ObjDict> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the entries of a `Map` or `Plain` value
    pub fn entries(&self) -> Option<&PlainMap> {
        match self {
            Value::Map(map) => Some(map.entries()),
            Value::Plain(plain) => Some(plain),
            _ => None,
        }
    }

    /// Returns the mutable entries of a `Map` or `Plain` value
    pub fn entries_mut(&mut self) -> Option<&mut PlainMap> {
        match self {
            Value::Map(map) => Some(map.entries_mut()),
            Value::Plain(plain) => Some(plain),
            _ => None,
        }
    }

    /// Takes the entries out of an owned `Map` or `Plain` value
    pub(crate) fn into_entries(self) -> Result<PlainMap, Value> {
        match self {
            Value::Map(map) => Ok(map.into_entries()),
            Value::Plain(plain) => Ok(plain),
            other => Err(other),
        }
    }

    /// Orders two values of the same kind; values of different kinds (and
    /// containers) compare equal so stable sorts keep their relative order.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Value::Int(a), Value::Float(b)) => {
                (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (Value::Float(a), Value::Int(b)) => {
                a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal)
            }
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            (Value::List(a), Value::List(b)) => {
                for (x, y) in a.iter().zip(b) {
                    let ord = x.sort_cmp(y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                a.len().cmp(&b.len())
            }
            _ => Ordering::Equal,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (a, b) => match (a.entries(), b.entries()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Date(d) => write!(f, "{d}"),
            Value::DateTime(dt) => write!(f, "{dt}"),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => write!(f, "{map}"),
            Value::Plain(plain) => {
                write!(f, "{{")?;
                for (i, (key, value)) in plain.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Object(obj) => write!(f, "{obj}"),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl From<ObjDict> for Value {
    fn from(value: ObjDict) -> Self {
        Value::Map(value)
    }
}

impl From<PlainMap> for Value {
    fn from(value: PlainMap) -> Self {
        Value::Plain(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// TryFrom implementations for typed retrieval
impl TryFrom<&Value> for i64 {
    type Error = DictError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_int().ok_or_else(|| DictError::TypeMismatch {
            expected: "int".to_string(),
            found: value.type_name().to_string(),
        })
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = DictError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_text().ok_or_else(|| DictError::TypeMismatch {
            expected: "text".to_string(),
            found: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for bool {
    type Error = DictError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| DictError::TypeMismatch {
            expected: "bool".to_string(),
            found: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for f64 {
    type Error = DictError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_float().ok_or_else(|| DictError::TypeMismatch {
            expected: "float".to_string(),
            found: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for String {
    type Error = DictError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        <&str>::try_from(value).map(str::to_string)
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Value::Int(n) if *n == *other as i64)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Float(x) if x == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

impl PartialEq<ObjDict> for Value {
    fn eq(&self, other: &ObjDict) -> bool {
        self.entries() == Some(other.entries())
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
