//! Typed extraction with lenient coercion.
//!
//! [`ObjDict::get_typed`] reads a value and coerces it to a target kind,
//! falling back to a caller-supplied default when the key is absent or the
//! coercion fails. Values read from configuration files and query strings are
//! usually text, so most coercions start by parsing text.

use std::sync::Arc;

use chrono::NaiveTime;

use super::{DictOptions, Key, ObjDict, Value};
use crate::{convert, date::parse_date};

/// Target kinds for [`ObjDict::get_typed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Typed {
    /// Any value rendered through `Display`
    Text,
    Int,
    Float,
    /// Never fails: unrecognized input is `false`
    Bool,
    /// Text is split on `,`; other scalars become a one-element list
    List,
    /// Text is parsed as a JSON object
    Dict,
    Date,
    DateTime,
}

/// Text accepted as `true` by [`Typed::Bool`], compared case-insensitively
const TRUTHY: &[&str] = &["true", "1", "yes", "y", "on", "t"];

impl Typed {
    /// Returns the name used in messages and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Typed::Text => "text",
            Typed::Int => "int",
            Typed::Float => "float",
            Typed::Bool => "bool",
            Typed::List => "list",
            Typed::Dict => "dict",
            Typed::Date => "date",
            Typed::DateTime => "datetime",
        }
    }

    /// Coerces `value` to this kind, or `None` if it cannot be.
    ///
    /// Plain mappings converted for [`Typed::Dict`] get default options.
    pub fn coerce(self, value: &Value) -> Option<Value> {
        self.coerce_with(value, &Arc::new(DictOptions::new()))
    }

    fn coerce_with(self, value: &Value, options: &Arc<DictOptions>) -> Option<Value> {
        match self {
            Typed::Text => match value {
                Value::Text(_) => Some(value.clone()),
                other => Some(Value::Text(other.to_string())),
            },
            Typed::Int => match value {
                Value::Int(_) => Some(value.clone()),
                Value::Float(f) if f.is_finite() => Some(Value::Int(f.trunc() as i64)),
                Value::Bool(b) => Some(Value::Int(i64::from(*b))),
                Value::Text(s) => s.trim().parse().ok().map(Value::Int),
                _ => None,
            },
            Typed::Float => match value {
                Value::Float(_) => Some(value.clone()),
                Value::Int(i) => Some(Value::Float(*i as f64)),
                Value::Text(s) => s.trim().parse().ok().map(Value::Float),
                _ => None,
            },
            Typed::Bool => Some(Value::Bool(match value {
                Value::Bool(b) => *b,
                Value::Int(i) => *i != 0,
                Value::Float(f) => *f != 0.0,
                Value::Text(s) => {
                    let s = s.trim();
                    TRUTHY.iter().any(|t| s.eq_ignore_ascii_case(t))
                }
                _ => false,
            })),
            Typed::List => match value {
                Value::List(_) => Some(value.clone()),
                Value::Text(s) => Some(Value::List(s.split(',').map(Value::from).collect())),
                other => Some(Value::List(vec![other.clone()])),
            },
            Typed::Dict => match value {
                Value::Map(_) => Some(value.clone()),
                Value::Plain(plain) => Some(Value::Map(convert::from_mapping_shared(
                    plain, options, false,
                ))),
                Value::Text(s) => convert::from_json(s).ok().map(Value::Map),
                _ => None,
            },
            Typed::Date => match value {
                Value::Date(_) => Some(value.clone()),
                Value::DateTime(dt) => Some(Value::Date(dt.date())),
                Value::Text(s) => parse_date(s).ok().map(|dt| Value::Date(dt.date())),
                _ => None,
            },
            Typed::DateTime => match value {
                Value::DateTime(_) => Some(value.clone()),
                Value::Date(d) => Some(Value::DateTime(d.and_time(NaiveTime::MIN))),
                Value::Text(s) => parse_date(s).ok().map(Value::DateTime),
                _ => None,
            },
        }
    }
}

impl ObjDict {
    /// Reads `key` (with [`ObjDict::get`] semantics) and coerces it to `typed`.
    ///
    /// Returns `default` unchanged when the key is absent or the value cannot
    /// be coerced.
    ///
    /// ```
    /// # use dotdict::dict::{ObjDict, Typed, Value};
    /// let mut dict = ObjDict::new();
    /// dict.set("limits.max", "42").unwrap();
    /// dict.set("limits.label", "n/a").unwrap();
    ///
    /// assert_eq!(dict.get_typed("limits.max", 0, Typed::Int), Value::Int(42));
    /// assert_eq!(dict.get_typed("limits.label", 7, Typed::Int), Value::Int(7));
    /// assert_eq!(dict.get_typed("limits.min", 1, Typed::Int), Value::Int(1));
    /// ```
    pub fn get_typed(&self, key: impl Into<Key>, default: impl Into<Value>, typed: Typed) -> Value {
        let key = key.into();
        let Some(value) = self.get(&key) else {
            return default.into();
        };
        match typed.coerce_with(&value, &self.shared_options()) {
            Some(coerced) => coerced,
            None => {
                tracing::trace!(
                    key = %key,
                    typed = typed.as_str(),
                    found = value.type_name(),
                    "coercion failed, using default"
                );
                default.into()
            }
        }
    }
}
