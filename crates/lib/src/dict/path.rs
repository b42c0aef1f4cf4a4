//! Dotted path splitting and stepwise descent through nested containers.
//!
//! A dotted key such as `"user.profile.name"` is split on `.` into tokens.
//! [`descend`] walks every token but the last and hands back the container it
//! reached together with the final token, which the caller then reads, writes
//! or removes literally.
//!
//! Splitting is raw: `"a..b"` yields the tokens `"a"`, `""` and `"b"`, and an
//! empty token is looked up like any other key.
//!
//! ```
//! # use dotdict::dict::path::split_path;
//! assert_eq!(split_path("a.b.c"), Some((vec!["a", "b"], "c")));
//! assert_eq!(split_path("plain"), None);
//! ```

use std::borrow::Cow;

use super::{
    DictError, Key, PlainMap, SEPARATOR, Value,
    access::{lookup, not_indexable, resolve},
};

/// Splits `path` into its prefix tokens and final token.
///
/// Returns `None` if `path` contains no separator.
pub fn split_path(path: &str) -> Option<(Vec<&str>, &str)> {
    let (prefix, last) = path.rsplit_once(SEPARATOR)?;
    Some((prefix.split(SEPARATOR).collect(), last))
}

/// Walks `root` along all but the last token of `path`.
///
/// # Errors
/// - `InvalidPath` if `path` has no separator
/// - `KeyNotFound` naming the first token that could not be resolved
/// - `NotIndexable` if an intermediate value does not support member access
pub fn descend<'a, 'p>(
    root: &'a PlainMap,
    path: &'p str,
) -> Result<(Cow<'a, Value>, &'p str), DictError> {
    let (prefix, last) = split_path(path).ok_or_else(|| DictError::InvalidPath {
        path: path.to_string(),
    })?;

    let mut tokens = prefix.into_iter();
    // split_path always yields at least one prefix token
    let first = tokens.next().unwrap_or_default();
    let mut current = Cow::Borrowed(lookup(root, first)?);
    for token in tokens {
        current = resolve(current, token)?;
    }
    Ok((current, last))
}

/// Mutable counterpart of [`descend`].
///
/// The container reached must be a native mapping. Objects cannot be mutated
/// through a shared handle, so meeting a [`Value::Object`] resolves the rest
/// of the prefix read-only (surfacing `KeyNotFound` exactly as [`descend`]
/// would) and then fails with `NotIndexable`.
pub fn descend_mut<'a, 'p>(
    root: &'a mut PlainMap,
    path: &'p str,
) -> Result<(&'a mut PlainMap, &'p str), DictError> {
    let (prefix, last) = split_path(path).ok_or_else(|| DictError::InvalidPath {
        path: path.to_string(),
    })?;

    let mut current = root;
    for (i, token) in prefix.iter().enumerate() {
        let next = current
            .get_mut(&Key::from(*token))
            .ok_or_else(|| DictError::key_not_found(token))?;
        current = match next {
            Value::Map(map) => map.entries_mut(),
            Value::Plain(plain) => plain,
            Value::Object(obj) => {
                let mut reached = Cow::Owned(Value::Object(obj.clone()));
                for rest in &prefix[i + 1..] {
                    reached = resolve(reached, rest)?;
                }
                let name = prefix.get(i + 1).copied().unwrap_or(last);
                return Err(not_indexable(name, &reached));
            }
            other => {
                let name = prefix.get(i + 1).copied().unwrap_or(last);
                return Err(not_indexable(name, other));
            }
        };
    }
    Ok((current, last))
}
