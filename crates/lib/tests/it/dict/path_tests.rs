use dotdict::{
    Key, ObjDict, Value,
    dict::{DictError, PlainMap},
};

use crate::helpers::*;

#[test]
fn test_manual_resolution_matches_path() {
    let config = sample_config();
    let manual = config
        .get_item("db")
        .unwrap()
        .entries()
        .unwrap()
        .get(&Key::from("port"))
        .cloned()
        .unwrap();
    assert_eq!(config.get_item("db.port").unwrap().into_owned(), manual);
}

#[test]
fn test_aliasing_round_trip() {
    let mut dict = aliased_map();
    assert_eq!(dict.get_item("a.b").unwrap().as_ref(), &Value::from("a->b"));

    dict.set_item("a.b", "updated").unwrap();
    assert_eq!(dict.get_item("a.b").unwrap().as_ref(), &Value::from("updated"));
    assert_eq!(
        dict.entries().get(&Key::from("a.b")),
        Some(&Value::from("a.b"))
    );

    assert_eq!(dict.pop("a.b").unwrap(), Value::from("updated"));
    assert!(dict.get("a.b").is_none());
    assert_eq!(dict.iter().count(), 4);
}

#[test]
fn test_set_vs_set_item_on_empty_map() {
    let mut dict = ObjDict::new();
    let err = dict.set_item("x.y.z", 1).unwrap_err();
    assert!(matches!(
        err,
        dotdict::Error::Dict(DictError::KeyNotFound { ref key }) if key == "x"
    ));

    dict.set("x.y.z", 1).unwrap();
    assert!(dict.contains("x"));
    assert!(dict.contains("x.y"));
    assert_eq!(dict.get_or("x.y.z", 0), Value::Int(1));
}

#[test]
fn test_empty_tokens_are_keys() {
    let mut dict = ObjDict::new();
    dict.set("a..b", 1).unwrap();
    let inner = dict.get_item("a").unwrap();
    assert!(inner.entries().unwrap().contains_key(&Key::from("")));
    assert_eq!(dict.get_item("a..b").unwrap().as_ref(), &Value::Int(1));
}

#[test]
fn test_paths_into_list_fail() {
    let config = sample_config();
    let err = config.get_item("tags.0").unwrap_err();
    assert!(err.is_not_indexable());
    assert!(config.get("tags.0").is_none());
}

#[test]
fn test_integer_keys_are_literal() {
    let mut dict = ObjDict::new();
    dict.set_item(1, "one").unwrap();
    dict.set_item("1", "text one").unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.get_item(1).unwrap().as_ref(), &Value::from("one"));
    assert_eq!(dict.get_item("1").unwrap().as_ref(), &Value::from("text one"));
}

#[test]
fn test_plain_mappings_are_traversed() {
    let mut leaf = PlainMap::new();
    leaf.insert(Key::from("c"), Value::Int(3));
    let mut mid = PlainMap::new();
    mid.insert(Key::from("b"), Value::Plain(leaf));

    let mut dict = ObjDict::new();
    dict.set_item("a", Value::Plain(mid)).unwrap();
    assert_eq!(dict.get_item("a.b.c").unwrap().as_ref(), &Value::Int(3));

    dict.set_item("a.b.d", 4).unwrap();
    dict.delete_item("a.b.c").unwrap();
    let keys: Vec<Key> = dict.get_item("a.b").unwrap().entries().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec![Key::from("d")]);
}

#[test]
fn test_contains_and_setdefault() {
    let mut config = sample_config();
    assert!(config.contains("features.beta"));
    assert!(!config.contains("features.gamma"));

    assert_eq!(config.setdefault("features.gamma", true).unwrap(), Value::Bool(true));
    assert_eq!(config.setdefault("features.beta", true).unwrap(), Value::Bool(false));
    assert_eq!(config.setdefault("limits.max", 10).unwrap(), Value::Int(10));
    assert_eq!(config.get_or("limits.max", 0), Value::Int(10));
}
