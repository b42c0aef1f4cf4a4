//! Deep merge of two maps.
//!
//! An overlay is applied on top of a base:
//! - `Null` in the overlay deletes the key
//! - a mapping in the overlay is merged into the base's mapping at that key
//!   (into an empty one if the base has no mapping there), and a merge that
//!   ends up empty deletes the key
//! - any other overlay value replaces the base's value
//!
//! Keys keep the base's order, followed by keys only the overlay has.
//! Neither input is modified, and merging the same overlay twice gives the
//! same result as merging it once.

use std::sync::Arc;

use crate::dict::{DictOptions, ObjDict, PlainMap, Value};

/// Merges `overlay` onto `base`, returning a new map with `base`'s options.
///
/// # Examples
/// ```
/// use dotdict::{convert::from_json, merge::merge};
///
/// let base = from_json(r#"{"db": {"host": "localhost", "port": 5432}, "debug": true}"#).unwrap();
/// let overlay = from_json(r#"{"db": {"port": 6543}, "debug": null}"#).unwrap();
///
/// let merged = merge(&base, &overlay);
/// assert_eq!(merged, from_json(r#"{"db": {"host": "localhost", "port": 6543}}"#).unwrap());
/// assert_eq!(merge(&merged, &overlay), merged);
/// ```
pub fn merge(base: &ObjDict, overlay: &ObjDict) -> ObjDict {
    let options = base.shared_options();
    let entries = merge_entries(base.entries(), overlay.entries(), &options);
    ObjDict::from_parts(entries, options)
}

fn merge_entries(base: &PlainMap, overlay: &PlainMap, options: &Arc<DictOptions>) -> PlainMap {
    let empty = PlainMap::new();
    let keys = base
        .keys()
        .chain(overlay.keys().filter(|key| !base.contains_key(*key)));

    let mut merged = PlainMap::new();
    for key in keys {
        let value = match (base.get(key), overlay.get(key)) {
            (_, Some(Value::Null)) => continue,
            (base_value, Some(over)) => match over.entries() {
                Some(over_entries) => {
                    let base_entries = base_value.and_then(Value::entries).unwrap_or(&empty);
                    let nested = merge_entries(base_entries, over_entries, options);
                    if nested.is_empty() {
                        continue;
                    }
                    Value::Map(ObjDict::from_parts(nested, Arc::clone(options)))
                }
                None => over.clone(),
            },
            (Some(base_value), None) => base_value.clone(),
            (None, None) => continue,
        };
        merged.insert(key.clone(), value);
    }
    merged
}

impl ObjDict {
    /// Shorthand for [`merge`]`(self, overlay)`
    pub fn merged(&self, overlay: &ObjDict) -> ObjDict {
        merge(self, overlay)
    }
}
