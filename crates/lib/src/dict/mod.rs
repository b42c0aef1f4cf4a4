//! The hierarchical map.
//!
//! [`ObjDict`] is an insertion-ordered map whose text keys may address nested
//! containers with dots: `dict.get_item("user.profile.name")` reads `user`,
//! then `profile` inside it, then `name`. It also offers an attribute-style
//! surface ([`ObjDict::attr`], [`ObjDict::set_attr`], [`ObjDict::del_attr`])
//! that always treats names literally.
//!
//! # Literal and path keys
//!
//! A key containing `.` is a path for the path-aware operations (`get_item`,
//! `get`, `set_item`, `set`, `delete_item`, `pop`, `contains`). Bulk
//! construction can still store such a key literally; the literal entry stays
//! visible through iteration and [`ObjDict::entries`] but is shadowed by path
//! semantics everywhere else:
//!
//! ```
//! use dotdict::{convert::from_json, dict::{Key, Value}};
//!
//! let dict = from_json(r#"{"a": {"b": "a->b"}, "a.b": "a.b"}"#).unwrap();
//! assert_eq!(dict.get_item("a.b").unwrap().as_ref(), &Value::from("a->b"));
//! assert_eq!(dict.entries().get(&Key::from("a.b")), Some(&Value::from("a.b")));
//! ```
//!
//! Maps built with [`ObjDict::literal`] never split keys.
//!
//! # Missing keys
//!
//! [`ObjDict::get_item`] fails with `KeyNotFound` for absent keys unless a
//! missing-key hook is configured in [`DictOptions`]. [`ObjDict::get`] never
//! consults the hook and never fails.

use std::{
    borrow::Cow,
    collections::HashSet,
    fmt,
    sync::Arc,
};

use crate::Result;

pub mod access;
pub mod errors;
pub mod key;
pub mod options;
pub mod path;
pub mod typed;
pub mod value;

pub use access::{Indexable, resolve};
pub use errors::DictError;
pub use key::{Key, SEPARATOR};
pub use options::{DictOptions, MissingHook};
pub use path::{descend, descend_mut, split_path};
pub use typed::Typed;
pub use value::{PlainMap, Value};

/// A map with dotted path addressing and attribute-style access.
///
/// # Examples
///
/// ```
/// # use dotdict::dict::{ObjDict, Value};
/// let mut dict = ObjDict::new();
/// dict.set("server.http.port", 8080).unwrap();
///
/// assert_eq!(dict.get_or("server.http.port", 0), Value::Int(8080));
/// assert!(dict.contains("server.http"));
/// assert!(!dict.contains("server.https.port"));
///
/// // set_item never creates intermediates
/// assert!(dict.set_item("client.timeout", 30).is_err());
/// ```
#[derive(Clone)]
pub struct ObjDict {
    entries: PlainMap,
    options: Arc<DictOptions>,
}

impl ObjDict {
    /// Creates an empty map with dotted-path semantics
    pub fn new() -> Self {
        Self::with_options(DictOptions::new())
    }

    /// Creates an empty map that treats every key literally
    pub fn literal() -> Self {
        Self::with_options(DictOptions::literal())
    }

    /// Creates an empty map with the given options
    pub fn with_options(options: DictOptions) -> Self {
        Self::with_shared_options(Arc::new(options))
    }

    pub(crate) fn with_shared_options(options: Arc<DictOptions>) -> Self {
        Self::from_parts(PlainMap::new(), options)
    }

    pub(crate) fn from_parts(entries: PlainMap, options: Arc<DictOptions>) -> Self {
        Self { entries, options }
    }

    /// Wraps existing entries without converting nested plain mappings.
    ///
    /// Dotted keys are stored literally.
    pub fn from_entries(entries: PlainMap) -> Self {
        Self {
            entries,
            options: Arc::new(DictOptions::new()),
        }
    }

    /// Creates a map with every key in `keys` bound to a clone of `value`
    pub fn from_keys<I, K>(keys: I, value: impl Into<Value>) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let value = value.into();
        keys.into_iter().map(|key| (key, value.clone())).collect()
    }

    /// Returns the options this map was built with
    pub fn options(&self) -> &DictOptions {
        &self.options
    }

    pub(crate) fn shared_options(&self) -> Arc<DictOptions> {
        Arc::clone(&self.options)
    }

    /// Returns true if dotted keys are interpreted as paths
    pub fn splits_paths(&self) -> bool {
        self.options.split_paths
    }

    /// Get a reference to the underlying entries for literal access
    pub fn entries(&self) -> &PlainMap {
        &self.entries
    }

    /// Get a mutable reference to the underlying entries for literal access
    pub fn entries_mut(&mut self) -> &mut PlainMap {
        &mut self.entries
    }

    /// Consumes the map, returning its entries
    pub fn into_entries(self) -> PlainMap {
        self.entries
    }

    /// Returns the number of top-level entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over all entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Returns an iterator over all keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Returns an iterator over all values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the key as a path if this map interprets it as one
    fn path_of<'k>(&self, key: &'k Key) -> Option<&'k str> {
        match key {
            Key::Text(s) if self.options.split_paths && key.is_dotted() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Gets the value for `key`, resolving dotted keys as paths.
    ///
    /// # Errors
    /// - `KeyNotFound` naming the failing token (or the whole key for
    ///   literal lookups), unless a missing-key hook is configured, in which
    ///   case the hook's result is returned instead
    /// - `NotIndexable` if a path runs through a value without member access;
    ///   this is never routed to the hook
    pub fn get_item(&self, key: impl Into<Key>) -> Result<Cow<'_, Value>> {
        let key = key.into();
        let found = match self.path_of(&key) {
            None => self
                .entries
                .get(&key)
                .map(Cow::Borrowed)
                .ok_or_else(|| DictError::key_not_found(&key)),
            Some(path) => descend(&self.entries, path).and_then(|(container, token)| {
                resolve(container, token)
            }),
        };

        match (found, &self.options.missing) {
            (Err(DictError::KeyNotFound { .. }), Some(hook)) => {
                tracing::trace!(key = %key, "invoking missing-key hook");
                hook(&key).map(Cow::Owned)
            }
            (found, _) => found.map_err(Into::into),
        }
    }

    /// Sets `key` to `value`.
    ///
    /// Dotted keys are resolved up to their last token, which is then set
    /// literally on the container reached. Missing intermediates are not
    /// created; use [`ObjDict::set`] for that.
    pub fn set_item(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        let value = value.into();
        match self.path_of(&key) {
            None => {
                self.entries.insert(key, value);
            }
            Some(path) => {
                let (entries, token) = descend_mut(&mut self.entries, path)?;
                entries.insert(Key::from(token), value);
            }
        }
        Ok(())
    }

    /// Removes `key`, failing with `KeyNotFound` if any segment is absent.
    pub fn delete_item(&mut self, key: impl Into<Key>) -> Result<()> {
        let key = key.into();
        match self.path_of(&key) {
            None => self
                .entries
                .shift_remove(&key)
                .map(|_| ())
                .ok_or_else(|| DictError::key_not_found(&key).into()),
            Some(path) => {
                let (entries, token) = descend_mut(&mut self.entries, path)?;
                entries
                    .shift_remove(&Key::from(token))
                    .map(|_| ())
                    .ok_or_else(|| DictError::key_not_found(token).into())
            }
        }
    }

    /// Gets the value for `key`, or `None` if any part of it is absent.
    ///
    /// Never calls the missing-key hook. Every traversal failure, including
    /// paths that run through scalars, counts as absent.
    pub fn get(&self, key: impl Into<Key>) -> Option<Cow<'_, Value>> {
        let key = key.into();
        match self.path_of(&key) {
            None => self.entries.get(&key).map(Cow::Borrowed),
            Some(path) => descend(&self.entries, path)
                .and_then(|(container, token)| resolve(container, token))
                .ok(),
        }
    }

    /// Gets an owned copy of the value for `key`, or `default` if absent
    pub fn get_or(&self, key: impl Into<Key>, default: impl Into<Value>) -> Value {
        match self.get(key) {
            Some(value) => value.into_owned(),
            None => default.into(),
        }
    }

    /// Returns the value of the first candidate key that is present.
    ///
    /// Presence decides, not the value: a key mapped to `Null` wins over
    /// later candidates.
    pub fn get_any<I, K>(&self, keys: I) -> Option<Cow<'_, Value>>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        keys.into_iter().find_map(|key| self.get(key))
    }

    /// Gets a value with automatic type conversion using TryFrom
    ///
    /// ```
    /// # use dotdict::dict::ObjDict;
    /// let mut dict = ObjDict::new();
    /// dict.set("limits.max", 5).unwrap();
    /// assert_eq!(dict.get_as::<i64>("limits.max"), Some(5));
    /// assert_eq!(dict.get_as::<String>("limits.max"), None);
    /// ```
    pub fn get_as<T>(&self, key: impl Into<Key>) -> Option<T>
    where
        T: for<'v> TryFrom<&'v Value>,
    {
        let value = self.get(key)?;
        T::try_from(value.as_ref()).ok()
    }

    /// Sets `key` to `value`, creating intermediate maps as needed.
    ///
    /// Absent or `Null` intermediates are replaced by empty maps sharing this
    /// map's options; existing mappings are descended into. An intermediate
    /// holding any other value fails with `NotIndexable`.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        let value = value.into();
        let path = match self.path_of(&key) {
            Some(path) => path,
            None => {
                self.entries.insert(key, value);
                return Ok(());
            }
        };
        let (prefix, last) = split_path(path).ok_or_else(|| DictError::InvalidPath {
            path: path.to_string(),
        })?;

        let options = self.shared_options();
        let mut current = &mut self.entries;
        for (i, token) in prefix.iter().enumerate() {
            let slot = current.entry(Key::from(*token)).or_insert(Value::Null);
            if slot.is_null() {
                *slot = Value::Map(ObjDict::with_shared_options(Arc::clone(&options)));
            }
            current = match slot {
                Value::Map(map) => map.entries_mut(),
                Value::Plain(plain) => plain,
                other => {
                    let name = prefix.get(i + 1).copied().unwrap_or(last);
                    return Err(access::not_indexable(name, other).into());
                }
            };
        }
        current.insert(Key::from(last), value);
        Ok(())
    }

    /// Returns true if `key` is present, with the same semantics as [`ObjDict::get`]
    pub fn contains(&self, key: impl Into<Key>) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if `key` is a literal top-level key
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Removes and returns the value for `key`.
    pub fn pop(&mut self, key: impl Into<Key>) -> Result<Value> {
        self.pop_inner(key.into(), None)
    }

    /// Removes and returns the value for `key`, or `default` if it is absent.
    ///
    /// A path whose intermediates are missing also yields `default`; a path
    /// through a non-container still fails with `NotIndexable`.
    pub fn pop_or(&mut self, key: impl Into<Key>, default: impl Into<Value>) -> Result<Value> {
        self.pop_inner(key.into(), Some(default.into()))
    }

    fn pop_inner(&mut self, key: Key, default: Option<Value>) -> Result<Value> {
        match self.path_of(&key) {
            None => match self.entries.shift_remove(&key) {
                Some(value) => Ok(value),
                None => default.ok_or_else(|| DictError::key_not_found(&key).into()),
            },
            Some(path) => {
                let (entries, token) = match descend_mut(&mut self.entries, path) {
                    Ok(found) => found,
                    Err(err @ DictError::KeyNotFound { .. }) => {
                        return default.ok_or_else(|| err.into());
                    }
                    Err(err) => return Err(err.into()),
                };
                entries
                    .shift_remove(&Key::from(token))
                    .or(default)
                    .ok_or_else(|| DictError::key_not_found(token).into())
            }
        }
    }

    /// Removes and returns the most recently inserted entry
    pub fn pop_item(&mut self) -> Result<(Key, Value)> {
        self.entries
            .pop()
            .ok_or_else(|| DictError::key_not_found("pop_item(): map is empty").into())
    }

    /// Finds the first literal `key` anywhere in the tree.
    ///
    /// Own entries are checked first, then each nested mapping depth-first
    /// in insertion order. Dots in `key` have no special meaning.
    pub fn find(&self, key: impl Into<Key>) -> Option<&Value> {
        find_in(&self.entries, &key.into())
    }

    /// Like [`ObjDict::find`], returning an owned `default` when not found
    pub fn find_or(&self, key: impl Into<Key>, default: impl Into<Value>) -> Value {
        self.find(key).cloned().unwrap_or_else(|| default.into())
    }

    /// Attribute-style lookup.
    ///
    /// Always literal. An absent name yields `Ok(None)` unless it is one of
    /// the reserved attribute names in this map's options, which fail with
    /// `AttributeNotFound`.
    pub fn attr(&self, name: &str) -> Result<Option<&Value>> {
        match self.entries.get(&Key::from(name)) {
            Some(value) => Ok(Some(value)),
            None if self.options.is_reserved(name) => Err(DictError::AttributeNotFound {
                name: name.to_string(),
            }
            .into()),
            None => Ok(None),
        }
    }

    /// Attribute-style assignment; always literal, even for dotted names
    pub fn set_attr(&mut self, name: impl Into<Key>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Attribute-style removal; always literal
    pub fn del_attr(&mut self, name: &str) -> Result<Value> {
        self.entries
            .shift_remove(&Key::from(name))
            .ok_or_else(|| {
                DictError::AttributeNotFound {
                    name: name.to_string(),
                }
                .into()
            })
    }

    /// Sorted names of all text keys, for tooling and completion
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .keys()
            .filter_map(Key::as_text)
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    /// Returns the value for `key`, inserting `default` first if it is absent.
    ///
    /// Presence is checked with [`ObjDict::get`] and insertion uses
    /// [`ObjDict::set`], so missing intermediates are created.
    pub fn setdefault(&mut self, key: impl Into<Key>, default: impl Into<Value>) -> Result<Value> {
        let key = key.into();
        if let Some(value) = self.get(&key) {
            return Ok(value.into_owned());
        }
        let default = default.into();
        self.set(key, default.clone())?;
        Ok(default)
    }

    /// Returns the entries whose values differ in `other`.
    ///
    /// Nested mappings are compared recursively and produce nested diffs;
    /// scalar differences record `other`'s value (`Null` when absent). Keys
    /// only present in `other` are not reported.
    pub fn changes(&self, other: &ObjDict) -> ObjDict {
        self.changes_ignoring(other, std::iter::empty::<Key>())
    }

    /// Like [`ObjDict::changes`], skipping the given top-level keys
    pub fn changes_ignoring<I, K>(&self, other: &ObjDict, ignore: I) -> ObjDict
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let ignore: HashSet<Key> = ignore.into_iter().map(Into::into).collect();
        diff_entries(&self.entries, Some(&other.entries), &ignore, &self.options)
    }

    /// Reorders entries by key
    pub fn sort(&mut self, reverse: bool) -> &mut Self {
        self.entries.sort_by(|k1, _, k2, _| {
            if reverse { k2.cmp(k1) } else { k1.cmp(k2) }
        });
        self
    }

    /// Reorders entries by value; values of different kinds keep their order
    pub fn sort_by_value(&mut self, reverse: bool) -> &mut Self {
        self.entries.sort_by(|_, v1, _, v2| {
            if reverse {
                v2.sort_cmp(v1)
            } else {
                v1.sort_cmp(v2)
            }
        });
        self
    }

    /// Returns the keys in sorted order without reordering the map
    pub fn sorted_keys(&self, reverse: bool) -> Vec<Key> {
        let mut keys: Vec<Key> = self.entries.keys().cloned().collect();
        keys.sort();
        if reverse {
            keys.reverse();
        }
        keys
    }

    /// Creates a new map holding only the given literal keys.
    ///
    /// # Errors
    /// `KeyNotFound` for the first key that is absent.
    pub fn subset<I, K>(&self, keys: I) -> Result<ObjDict>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let mut subset = ObjDict::with_shared_options(self.shared_options());
        for key in keys {
            let key = key.into();
            let value = self
                .entries
                .get(&key)
                .ok_or_else(|| DictError::key_not_found(&key))?;
            subset.entries.insert(key, value.clone());
        }
        Ok(subset)
    }

    /// Creates a new map with every text key lowercased
    pub fn lower_keys(&self) -> ObjDict {
        let mut lowered = ObjDict::with_shared_options(self.shared_options());
        for (key, value) in &self.entries {
            let key = match key {
                Key::Text(s) => Key::Text(s.to_lowercase()),
                other => other.clone(),
            };
            lowered.entries.insert(key, value.clone());
        }
        lowered
    }

    /// Sets every entry of `other` on this map with [`ObjDict::set_item`]
    pub fn extend(&mut self, other: &ObjDict) -> Result<&mut Self> {
        for (key, value) in &other.entries {
            self.set_item(key.clone(), value.clone())?;
        }
        Ok(self)
    }

    /// Shallow copy: nested plain mappings stay plain.
    ///
    /// See [`ObjDict::deep_copy`] for a copy that converts them.
    pub fn copy(&self) -> ObjDict {
        self.clone()
    }
}

fn find_in<'a>(entries: &'a PlainMap, key: &Key) -> Option<&'a Value> {
    if let Some(value) = entries.get(key) {
        return Some(value);
    }
    entries
        .values()
        .filter_map(Value::entries)
        .find_map(|nested| find_in(nested, key))
}

fn diff_entries(
    own: &PlainMap,
    other: Option<&PlainMap>,
    ignore: &HashSet<Key>,
    options: &Arc<DictOptions>,
) -> ObjDict {
    let mut changes = ObjDict::with_shared_options(Arc::clone(options));
    for (key, own_value) in own {
        if ignore.contains(key) {
            continue;
        }
        let other_value = other.and_then(|entries| entries.get(key));
        match own_value.entries() {
            Some(nested) => {
                let diff = diff_entries(
                    nested,
                    other_value.and_then(Value::entries),
                    &HashSet::new(),
                    options,
                );
                if !diff.is_empty() {
                    changes.entries.insert(key.clone(), Value::Map(diff));
                }
            }
            None => {
                let other_value = other_value.cloned().unwrap_or(Value::Null);
                if *own_value != other_value {
                    changes.entries.insert(key.clone(), other_value);
                }
            }
        }
    }
    changes
}

impl Default for ObjDict {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ObjDict {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl PartialEq<PlainMap> for ObjDict {
    fn eq(&self, other: &PlainMap) -> bool {
        &self.entries == other
    }
}

impl fmt::Debug for ObjDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl fmt::Display for ObjDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in &self.entries {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl<K, V> FromIterator<(K, V)> for ObjDict
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut dict = ObjDict::new();
        for (key, value) in iter {
            dict.entries.insert(key.into(), value.into());
        }
        dict
    }
}

impl<'a> IntoIterator for &'a ObjDict {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<PlainMap> for ObjDict {
    fn from(entries: PlainMap) -> Self {
        Self::from_entries(entries)
    }
}

// Builder pattern methods
impl ObjDict {
    /// Builder method to set a literal entry and return self
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.set_attr(key, value);
        self
    }
}
