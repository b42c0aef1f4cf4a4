//! Deep merge integration tests

use dotdict::{ObjDict, Value, merge::merge};

use crate::helpers::*;

#[test]
fn test_merge_is_idempotent() {
    let base = sample_config();
    let overlay = json(r#"{"db": {"port": null, "user": "svc"}, "features": null, "extra": {"a": {"b": 1}}}"#);

    let once = merge(&base, &overlay);
    let twice = merge(&once, &overlay);
    assert_eq!(once, twice);
}

#[test]
fn test_merge_applies_overlay() {
    let base = sample_config();
    let overlay = json(r#"{"db": {"port": null, "user": "svc"}, "features": null, "tags": ["c"]}"#);
    let merged = base.merged(&overlay);

    assert!(!merged.contains("db.port"));
    assert_eq!(merged.get_or("db.user", ""), Value::from("svc"));
    assert_eq!(merged.get_or("db.host", ""), Value::from("localhost"));
    assert!(!merged.contains("features"));
    assert_eq!(merged.get_item("tags").unwrap().as_ref(), &Value::from(vec!["c"]));

    let keys: Vec<String> = merged.keys().map(|k| k.to_text()).collect();
    assert_eq!(keys, ["name", "db", "tags", "ratio"]);
}

#[test]
fn test_merge_cascading_removal() {
    let base = json(r#"{"a": {"x": 10}, "b": {"y": 20}}"#);
    let merged = merge(&base, &json(r#"{"a": {"x": null}, "b": null}"#));
    assert!(merged.is_empty());
}

#[test]
fn test_merge_into_empty() {
    let overlay = json(r#"{"a": {"b": null}, "c": 1}"#);
    let merged = merge(&ObjDict::new(), &overlay);
    assert_eq!(merged, json(r#"{"c": 1}"#));
}

#[test]
fn test_merge_keeps_base_options() {
    let base = ObjDict::literal().with("a.b", 1);
    let merged = merge(&base, &json(r#"{"c": 2}"#));
    assert!(!merged.splits_paths());
    assert_eq!(merged.get_item("a.b").unwrap().as_ref(), &Value::Int(1));
}
