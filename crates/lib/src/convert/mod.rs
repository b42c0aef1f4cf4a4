//! Structural conversion between maps, plain mappings and JSON.
//!
//! Maps nest freely with plain mappings ([`Value::Plain`]) when entries are
//! inserted by hand. [`from_mapping`] normalizes a tree so that every nested
//! mapping is a [`Value::Map`] carrying the root's options, and [`to_plain`]
//! goes the other way.
//!
//! JSON output is a projection: dates, date-times and objects have no JSON
//! counterpart and are rendered as described on [`to_json_value`]. Parsing
//! JSON always produces native maps.
//!
//! The [`codec`] and [`file`] submodules build on the JSON text form.

use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::{
    Result,
    dict::{DictOptions, Key, ObjDict, PlainMap, Value},
};

pub mod codec;
pub mod errors;
pub mod file;

pub use codec::{from_compressed, from_urlsafe_text, from_xml};
pub use errors::ConvertError;
pub use file::load_from_file;

/// Text form of [`Value::Date`] in JSON output
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Options for projecting a map onto JSON.
///
/// Field selection and exclusion only apply to top-level keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonOptions {
    /// Emit only these keys, in this order; absent ones are skipped
    pub fields: Option<Vec<Key>>,
    /// Keys to leave out
    pub exclude: Vec<Key>,
    /// Indent with four spaces instead of emitting compact text
    pub pretty: bool,
}

impl JsonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compact output with no projection
    pub fn compact() -> Self {
        Self::default()
    }

    /// Indented output with no projection
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    /// Builder method to select fields
    pub fn with_fields<I, K>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Builder method to exclude fields
    pub fn without<I, K>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        self.exclude.extend(exclude.into_iter().map(Into::into));
        self
    }
}

/// Builds a map from `src`, converting every nested mapping into a map that
/// shares `options`.
///
/// Mapping elements of lists are converted too; other list elements and
/// scalars are copied as-is. With `safe_keys`, dashes in top-level text keys
/// become underscores.
///
/// ```
/// # use dotdict::{convert::from_mapping, dict::{DictOptions, Key, PlainMap, Value}};
/// let mut inner = PlainMap::new();
/// inner.insert(Key::from("x-y"), Value::Int(1));
/// let mut src = PlainMap::new();
/// src.insert(Key::from("some-key"), Value::Plain(inner));
///
/// let dict = from_mapping(&src, DictOptions::new(), true);
/// assert!(matches!(dict.get_item("some_key").unwrap().as_ref(), Value::Map(_)));
/// assert!(dict.contains("some_key.x-y"));
/// ```
pub fn from_mapping(src: &PlainMap, options: DictOptions, safe_keys: bool) -> ObjDict {
    from_mapping_shared(src, &Arc::new(options), safe_keys)
}

pub(crate) fn from_mapping_shared(
    src: &PlainMap,
    options: &Arc<DictOptions>,
    safe_keys: bool,
) -> ObjDict {
    let mut dict = ObjDict::with_shared_options(Arc::clone(options));
    for (key, value) in src {
        let key = match key {
            Key::Text(s) if safe_keys && s.contains('-') => Key::Text(s.replace('-', "_")),
            other => other.clone(),
        };
        dict.entries_mut().insert(key, convert_nested(value, options));
    }
    dict
}

fn convert_nested(value: &Value, options: &Arc<DictOptions>) -> Value {
    match value {
        Value::List(items) => Value::List(
            items
                .iter()
                .map(|item| match item.entries() {
                    Some(entries) => Value::Map(from_mapping_shared(entries, options, false)),
                    None => item.clone(),
                })
                .collect(),
        ),
        other => match other.entries() {
            Some(entries) => Value::Map(from_mapping_shared(entries, options, false)),
            None => other.clone(),
        },
    }
}

/// Converts every nested map into a plain mapping.
///
/// Plain mappings and lists are copied untouched.
pub fn to_plain(dict: &ObjDict) -> PlainMap {
    dict.iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Map(nested) => Value::Plain(to_plain(nested)),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// Projects `dict` onto a JSON object.
///
/// - `Date` becomes `"YYYY/MM/DD"`
/// - `DateTime` becomes seconds since the Unix epoch as a float, reading the
///   naive value as UTC
/// - `Object` becomes its `id()` when it has one, else its display text
/// - non-finite floats become `null`
/// - integer keys become their decimal text
pub fn to_json_value(dict: &ObjDict, options: &JsonOptions) -> JsonValue {
    let selected: Vec<(&Key, &Value)> = match &options.fields {
        Some(fields) => fields
            .iter()
            .filter_map(|field| dict.entries().get_key_value(field))
            .collect(),
        None => dict.iter().collect(),
    };

    let mut object = JsonMap::new();
    for (key, value) in selected {
        if options.exclude.contains(key) {
            continue;
        }
        object.insert(key.to_text(), value_to_json(value));
    }
    JsonValue::Object(object)
}

/// Renders `dict` as JSON text
pub fn to_json_string(dict: &ObjDict, options: &JsonOptions) -> Result<String> {
    let json = to_json_value(dict, options);
    if !options.pretty {
        return serde_json::to_string(&json).map_err(|e| serialization_failed(e).into());
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    json.serialize(&mut serializer).map_err(serialization_failed)?;
    String::from_utf8(buf).map_err(|e| serialization_failed(e).into())
}

fn serialization_failed(err: impl ToString) -> ConvertError {
    ConvertError::SerializationFailed {
        reason: err.to_string(),
    }
}

/// Parses JSON text into a map.
///
/// # Errors
/// `MalformedInput` if the text is not valid JSON or its top level is not an
/// object.
pub fn from_json(text: &str) -> Result<ObjDict> {
    let json: JsonValue = serde_json::from_str(text).map_err(ConvertError::malformed)?;
    from_json_value(json)
}

/// Converts a parsed JSON object into a map with default options
pub fn from_json_value(json: JsonValue) -> Result<ObjDict> {
    match json {
        JsonValue::Object(object) => Ok(object_to_dict(object, &Arc::new(DictOptions::new()))),
        other => Err(ConvertError::malformed(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))
        .into()),
    }
}

fn object_to_dict(object: JsonMap<String, JsonValue>, options: &Arc<DictOptions>) -> ObjDict {
    let mut dict = ObjDict::with_shared_options(Arc::clone(options));
    for (key, value) in object {
        dict.entries_mut()
            .insert(Key::Text(key), json_to_value(value, options));
    }
    dict
}

fn json_to_value(json: JsonValue, options: &Arc<DictOptions>) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
        },
        JsonValue::String(s) => Value::Text(s),
        JsonValue::Array(items) => Value::List(
            items
                .into_iter()
                .map(|item| json_to_value(item, options))
                .collect(),
        ),
        JsonValue::Object(object) => Value::Map(object_to_dict(object, options)),
    }
}

fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

fn entries_to_json(entries: &PlainMap) -> JsonValue {
    JsonValue::Object(
        entries
            .iter()
            .map(|(key, value)| (key.to_text(), value_to_json(value)))
            .collect(),
    )
}

/// Converts a single value with the rules of [`to_json_value`]
pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(i) => JsonValue::Number(Number::from(*i)),
        Value::Float(f) => Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::Date(d) => JsonValue::String(d.format(DATE_FORMAT).to_string()),
        Value::DateTime(dt) => Number::from_f64(epoch_seconds(dt))
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Value::List(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
        Value::Map(nested) => entries_to_json(nested.entries()),
        Value::Plain(plain) => entries_to_json(plain),
        Value::Object(obj) => match obj.id() {
            Some(id) => value_to_json(&id),
            None => JsonValue::String(obj.to_string()),
        },
    }
}

fn epoch_seconds(dt: &NaiveDateTime) -> f64 {
    let utc = dt.and_utc();
    utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_micros()) / 1_000_000.0
}

impl ObjDict {
    /// Builds a map from plain entries with default options, see [`from_mapping`]
    pub fn from_mapping(src: &PlainMap) -> ObjDict {
        from_mapping(src, DictOptions::new(), false)
    }

    /// Copy in which every nested mapping is a fresh map sharing this map's
    /// options
    pub fn deep_copy(&self) -> ObjDict {
        from_mapping_shared(self.entries(), &self.shared_options(), false)
    }

    /// See [`to_plain`]
    pub fn to_plain(&self) -> PlainMap {
        to_plain(self)
    }

    /// See [`to_json_value`]
    pub fn to_json_value(&self, options: &JsonOptions) -> JsonValue {
        to_json_value(self, options)
    }

    /// See [`to_json_string`]
    pub fn to_json_string(&self, options: &JsonOptions) -> Result<String> {
        to_json_string(self, options)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value_to_json(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = JsonValue::deserialize(deserializer)?;
        Ok(json_to_value(json, &Arc::new(DictOptions::new())))
    }
}

impl Serialize for ObjDict {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        entries_to_json(self.entries()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ObjDict {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = JsonValue::deserialize(deserializer)?;
        from_json_value(json).map_err(serde::de::Error::custom)
    }
}
