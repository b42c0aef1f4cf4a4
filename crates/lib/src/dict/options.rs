//! Behavior configuration shared by a map and the nested maps created from it.

use std::{collections::BTreeSet, fmt, sync::Arc};

use super::{Key, Value};

/// Fallback invoked by [`ObjDict::get_item`](super::ObjDict::get_item) when a
/// key is absent. Receives the full requested key.
pub type MissingHook = Arc<dyn Fn(&Key) -> crate::Result<Value> + Send + Sync>;

/// Options controlling how an [`ObjDict`](super::ObjDict) interprets keys.
///
/// Options are cheap to clone and are handed down to every nested map the
/// library builds on a map's behalf (`from_mapping`, auto-created
/// intermediates in `set`), so a hook installed at the root applies to the
/// whole tree.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use dotdict::dict::{DictOptions, Key, ObjDict, Value};
///
/// let options = DictOptions::new()
///     .reserve_attribute("as_sql")
///     .with_missing(Arc::new(|_key: &Key| -> dotdict::Result<Value> { Ok(Value::Int(0)) }));
///
/// let dict = ObjDict::with_options(options);
/// assert_eq!(dict.get_item("anything").unwrap().as_ref(), &Value::Int(0));
/// assert!(dict.attr("as_sql").is_err());
/// ```
#[derive(Clone)]
pub struct DictOptions {
    /// Interpret text keys containing `.` as paths
    pub split_paths: bool,
    /// Names for which attribute lookup fails instead of returning `None`
    pub reserved_attributes: BTreeSet<String>,
    /// Missing-key hook used by `get_item`
    pub missing: Option<MissingHook>,
}

impl DictOptions {
    /// Options for the dotted-path variant with no hook and no reserved names.
    pub fn new() -> Self {
        Self {
            split_paths: true,
            reserved_attributes: BTreeSet::new(),
            missing: None,
        }
    }

    /// Options for the no-dots variant: every key is literal.
    pub fn literal() -> Self {
        Self {
            split_paths: false,
            ..Self::new()
        }
    }

    /// Builder method to toggle dotted-path interpretation
    pub fn with_split_paths(mut self, split_paths: bool) -> Self {
        self.split_paths = split_paths;
        self
    }

    /// Builder method to add a reserved attribute name
    pub fn reserve_attribute(mut self, name: impl Into<String>) -> Self {
        self.reserved_attributes.insert(name.into());
        self
    }

    /// Builder method to install a missing-key hook
    pub fn with_missing(mut self, hook: MissingHook) -> Self {
        self.missing = Some(hook);
        self
    }

    /// Returns true if attribute lookup of `name` must fail when absent
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_attributes.contains(name)
    }
}

impl Default for DictOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DictOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictOptions")
            .field("split_paths", &self.split_paths)
            .field("reserved_attributes", &self.reserved_attributes)
            .field("missing", &self.missing.as_ref().map(|_| "<hook>"))
            .finish()
    }
}
