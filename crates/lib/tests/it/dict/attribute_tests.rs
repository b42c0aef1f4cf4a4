use std::sync::Arc;

use dotdict::{
    Key, ObjDict, Value,
    dict::{DictOptions, MissingHook},
};

use crate::helpers::*;

#[test]
fn test_attr_is_literal() {
    let mut dict = aliased_map();
    assert_eq!(dict.attr("a.b").unwrap(), Some(&Value::from("a.b")));
    assert_eq!(dict.attr("c").unwrap(), Some(&Value::from("c")));
    assert_eq!(dict.attr("missing").unwrap(), None);

    dict.set_attr("x.y", 1);
    assert!(dict.contains_key("x.y"));
    assert!(!dict.contains("x.y"));
    assert_eq!(dict.del_attr("x.y").unwrap(), Value::Int(1));
}

#[test]
fn test_reserved_attributes_fail() {
    let options = DictOptions::new()
        .reserve_attribute("as_sql")
        .reserve_attribute("resolve_expression");
    let dict = ObjDict::with_options(options);

    let err = dict.attr("as_sql").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.key(), Some("as_sql"));
    assert_eq!(dict.attr("anything_else").unwrap(), None);
}

#[test]
fn test_del_attr_absent() {
    let mut dict = ObjDict::new();
    let err = dict.del_attr("nope").unwrap_err();
    assert_eq!(err.module(), "dict");
    assert!(err.is_not_found());
}

#[test]
fn test_hook_applies_to_converted_trees() {
    let hook: MissingHook = Arc::new(|key: &Key| -> dotdict::Result<Value> {
        Ok(Value::Text(format!("default for {key}")))
    });
    let options = DictOptions::new().with_missing(hook);
    let source = sample_config();
    let dict = dotdict::convert::from_mapping(source.entries(), options, false);

    assert_eq!(
        dict.get_item("db.user").unwrap().as_ref(),
        &Value::from("default for db.user")
    );
    let Value::Map(db) = dict.get_item("db").unwrap().into_owned() else {
        panic!("db should be a map");
    };
    assert_eq!(
        db.get_item("user").unwrap().as_ref(),
        &Value::from("default for user")
    );
}

#[test]
fn test_literal_variant_everywhere() {
    let mut dict = ObjDict::literal();
    dict.set("a.b", 1).unwrap();
    dict.set_item("c.d", 2).unwrap();
    assert_eq!(dict.setdefault("e.f", 3).unwrap(), Value::Int(3));
    assert_eq!(dict.field_names(), ["a.b", "c.d", "e.f"]);
    assert_eq!(dict.pop("a.b").unwrap(), Value::Int(1));
    assert!(!dict.splits_paths());
}
