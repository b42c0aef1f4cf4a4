//! Uniform member access across native mappings and arbitrary objects.
//!
//! Path traversal resolves each token through [`resolve`], which looks up
//! native mappings (`Value::Map`, `Value::Plain`) literally and delegates
//! everything stored as [`Value::Object`] to its [`Indexable`] implementation.
//! Literal lookup never consults a map's missing-key hook, so a `KeyNotFound`
//! from a nested map is reported the same way whatever options it carries.

use std::{borrow::Cow, fmt};

use super::{DictError, Key, ObjDict, PlainMap, Value};

/// Item access for values stored as [`Value::Object`].
///
/// Implementors return `KeyNotFound` for names they do not have and may
/// return `NotIndexable` if they cannot be indexed by text at all.
///
/// # Examples
///
/// ```
/// use std::{fmt, sync::Arc};
/// use dotdict::dict::{DictError, Indexable, ObjDict, Value};
///
/// #[derive(Debug)]
/// struct Env;
///
/// impl fmt::Display for Env {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "<env>")
///     }
/// }
///
/// impl Indexable for Env {
///     fn try_get(&self, name: &str) -> Result<Value, DictError> {
///         match name {
///             "home" => Ok(Value::from("/home/alice")),
///             _ => Err(DictError::key_not_found(name)),
///         }
///     }
/// }
///
/// let mut dict = ObjDict::new();
/// dict.set_item("env", Value::Object(Arc::new(Env))).unwrap();
/// assert_eq!(dict.get_item("env.home").unwrap().as_ref(), &Value::from("/home/alice"));
/// assert!(dict.get_item("env.shell").unwrap_err().is_not_found());
/// ```
pub trait Indexable: fmt::Debug + fmt::Display + Send + Sync {
    /// Looks up a member by name.
    fn try_get(&self, name: &str) -> Result<Value, DictError>;

    /// Identifier used in place of the object when projecting to JSON.
    fn id(&self) -> Option<Value> {
        None
    }
}

impl Indexable for ObjDict {
    fn try_get(&self, name: &str) -> Result<Value, DictError> {
        lookup(self.entries(), name).cloned()
    }
}

/// Literal lookup of a text token in a native mapping.
pub(crate) fn lookup<'a>(entries: &'a PlainMap, name: &str) -> Result<&'a Value, DictError> {
    entries
        .get(&Key::from(name))
        .ok_or_else(|| DictError::key_not_found(name))
}

/// Resolves `name` against `container`.
///
/// Borrowed containers yield borrowed members; owned containers (values
/// produced by an object's `try_get`) yield owned members.
pub fn resolve<'a>(container: Cow<'a, Value>, name: &str) -> Result<Cow<'a, Value>, DictError> {
    match container {
        Cow::Borrowed(value) => match value {
            Value::Object(obj) => obj.try_get(name).map(Cow::Owned),
            value => match value.entries() {
                Some(entries) => lookup(entries, name).map(Cow::Borrowed),
                None => Err(not_indexable(name, value)),
            },
        },
        Cow::Owned(value) => match value {
            Value::Object(obj) => obj.try_get(name).map(Cow::Owned),
            value => match value.into_entries() {
                Ok(mut entries) => entries
                    .shift_remove(&Key::from(name))
                    .map(Cow::Owned)
                    .ok_or_else(|| DictError::key_not_found(name)),
                Err(other) => Err(not_indexable(name, &other)),
            },
        },
    }
}

pub(crate) fn not_indexable(name: &str, found: &Value) -> DictError {
    DictError::NotIndexable {
        key: name.to_string(),
        found: found.type_name().to_string(),
    }
}
