use chrono::NaiveDate;
use dotdict::{
    Key, ObjDict, Value,
    convert::{JsonOptions, from_json, from_mapping, to_json_value, to_plain},
    dict::{DictOptions, PlainMap},
};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_json_round_trip() {
    let config = sample_config();
    let text = config.to_json_string(&JsonOptions::compact()).unwrap();
    assert_eq!(from_json(&text).unwrap(), config);

    let pretty = config.to_json_string(&JsonOptions::pretty()).unwrap();
    assert!(pretty.contains("\n    \"name\": \"billing\""));
    assert_eq!(from_json(&pretty).unwrap(), config);
}

#[test]
fn test_json_keeps_insertion_order() {
    let dict = ObjDict::new().with("zeta", 1).with("alpha", 2);
    assert_eq!(
        dict.to_json_string(&JsonOptions::compact()).unwrap(),
        r#"{"zeta":1,"alpha":2}"#
    );
}

#[test]
fn test_from_json_requires_object() {
    for text in ["[1, 2]", "42", "\"text\"", "null", "{broken"] {
        let err = from_json(text).unwrap_err();
        assert!(err.is_malformed_input(), "input: {text}");
    }
}

#[test]
fn test_numbers() {
    let dict = from_json(r#"{"i": 3, "f": 3.5, "big": 18446744073709551615}"#).unwrap();
    assert_eq!(dict.get_item("i").unwrap().as_ref(), &Value::Int(3));
    assert_eq!(dict.get_item("f").unwrap().as_ref(), &Value::Float(3.5));
    assert!(matches!(dict.get_item("big").unwrap().as_ref(), Value::Float(_)));
}

#[test]
fn test_field_projection() {
    let config = sample_config();
    let projected = to_json_value(
        &config,
        &JsonOptions::new().with_fields(["ratio", "missing", "name"]),
    );
    assert_eq!(projected, json!({"ratio": 0.25, "name": "billing"}));

    let excluded = to_json_value(&config, &JsonOptions::new().without(["db", "tags", "features"]));
    assert_eq!(excluded, json!({"name": "billing", "ratio": 0.25}));
}

#[test]
fn test_special_values() {
    let date = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
    let mut dict = ObjDict::new();
    dict.set("date", date).unwrap();
    dict.set("at", date.and_hms_opt(0, 0, 1).unwrap()).unwrap();
    dict.set("nan", f64::NAN).unwrap();
    dict.set_item(5, "int key").unwrap();

    let json = dict.to_json_value(&JsonOptions::default());
    assert_eq!(json["date"], json!("2023/10/01"));
    assert_eq!(json["at"], json!(1_696_118_401.0));
    assert_eq!(json["nan"], serde_json::Value::Null);
    assert_eq!(json["5"], json!("int key"));
}

#[test]
fn test_from_mapping_converts_nested() {
    let mut item = PlainMap::new();
    item.insert(Key::from("k"), Value::Int(1));
    let mut nested = PlainMap::new();
    nested.insert(Key::from("inner-key"), Value::Bool(true));

    let mut src = PlainMap::new();
    src.insert(Key::from("outer-key"), Value::Plain(nested));
    src.insert(
        Key::from("items"),
        Value::List(vec![Value::Plain(item), Value::Int(2)]),
    );

    let dict = from_mapping(&src, DictOptions::new(), true);
    assert!(dict.contains_key("outer_key"));
    assert!(matches!(dict.get_item("outer_key").unwrap().as_ref(), Value::Map(_)));
    // only top-level keys are rewritten
    assert!(dict.contains("outer_key.inner-key"));

    let items = dict.get_item("items").unwrap();
    let items = items.as_list().unwrap();
    assert!(matches!(items[0], Value::Map(_)));
    assert_eq!(items[1], Value::Int(2));
}

#[test]
fn test_plain_round_trip() {
    let config = sample_config();
    let plain = to_plain(&config);
    assert!(matches!(plain[&Key::from("db")], Value::Plain(_)));
    assert_eq!(ObjDict::from_mapping(&plain), config);
}

#[test]
fn test_copy_and_deep_copy() {
    let mut inner = PlainMap::new();
    inner.insert(Key::from("x"), Value::Int(1));
    let mut dict = ObjDict::new();
    dict.set_item("p", Value::Plain(inner)).unwrap();

    let shallow = dict.copy();
    assert!(matches!(shallow.get_item("p").unwrap().as_ref(), Value::Plain(_)));

    let deep = dict.deep_copy();
    assert!(matches!(deep.get_item("p").unwrap().as_ref(), Value::Map(_)));
    assert_eq!(deep, dict);
}

#[test]
fn test_serde_support() {
    let config = sample_config();
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["db"]["port"], json!(5432));

    let back: ObjDict = serde_json::from_value(value).unwrap();
    assert_eq!(back, config);

    let scalar: Value = serde_json::from_str("[1, \"two\"]").unwrap();
    assert_eq!(scalar, Value::from(vec![Value::Int(1), Value::from("two")]));

    assert!(serde_json::from_str::<ObjDict>("[]").is_err());
}
