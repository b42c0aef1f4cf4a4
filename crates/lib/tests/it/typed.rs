//! Typed extraction integration tests

use chrono::NaiveDate;
use dotdict::{
    ObjDict, Value,
    date::{DateParseError, parse_date},
    dict::Typed,
};

use crate::helpers::*;

fn text_fixture() -> ObjDict {
    json(
        r#"{
            "integer": "42",
            "float": "2.75",
            "bool_true": "True",
            "bool_false": "False",
            "list": "x,y,z",
            "nested_dict": "{\"key\": \"value\"}",
            "date_str": "2023-10-01",
            "datetime_str": "2023-10-01T15:30:00",
            "invalid_number": "invalid"
        }"#,
    )
}

#[test]
fn test_integer_conversion() {
    let dict = text_fixture();
    assert_eq!(dict.get_typed("integer", Value::Null, Typed::Int), Value::Int(42));
    assert_eq!(dict.get_typed("invalid_number", 0, Typed::Int), Value::Int(0));
}

#[test]
fn test_float_conversion() {
    let dict = text_fixture();
    assert_eq!(dict.get_typed("float", Value::Null, Typed::Float), Value::Float(2.75));
    assert_eq!(dict.get_typed("invalid_number", 0.0, Typed::Float), Value::Float(0.0));
}

#[test]
fn test_bool_conversion() {
    let dict = text_fixture();
    assert_eq!(dict.get_typed("bool_true", Value::Null, Typed::Bool), Value::Bool(true));
    assert_eq!(dict.get_typed("bool_false", Value::Null, Typed::Bool), Value::Bool(false));
    assert_eq!(dict.get_typed("invalid_number", true, Typed::Bool), Value::Bool(false));
}

#[test]
fn test_list_conversion() {
    let dict = text_fixture();
    assert_eq!(
        dict.get_typed("list", Value::Null, Typed::List),
        Value::from(vec!["x", "y", "z"])
    );
    assert_eq!(
        dict.get_typed("invalid_number", Vec::<Value>::new(), Typed::List),
        Value::from(vec!["invalid"])
    );
}

#[test]
fn test_dict_conversion() {
    let dict = text_fixture();
    assert_eq!(
        dict.get_typed("nested_dict", Value::Null, Typed::Dict),
        Value::Map(json(r#"{"key": "value"}"#))
    );
    assert_eq!(
        dict.get_typed("invalid_number", ObjDict::new(), Typed::Dict),
        Value::Map(ObjDict::new())
    );
}

#[test]
fn test_date_conversion() {
    let dict = text_fixture();
    let day = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
    assert_eq!(dict.get_typed("date_str", Value::Null, Typed::Date), Value::Date(day));
    assert_eq!(
        dict.get_typed("datetime_str", Value::Null, Typed::DateTime),
        Value::DateTime(day.and_hms_opt(15, 30, 0).unwrap())
    );
    assert_eq!(
        dict.get_typed("invalid_number", "none", Typed::Date),
        Value::from("none")
    );
}

#[test]
fn test_default_for_missing_key() {
    let dict = text_fixture();
    assert_eq!(
        dict.get_typed("non_existent", "fallback", Typed::Text),
        Value::from("fallback")
    );
    assert_eq!(
        dict.get_typed("nested.path.missing", 5, Typed::Int),
        Value::Int(5)
    );
}

#[test]
fn test_numeric_coercion_from_native_values() {
    let config = sample_config();
    assert_eq!(config.get_typed("db.port", 0, Typed::Text), Value::from("5432"));
    assert_eq!(config.get_typed("ratio", 9, Typed::Int), Value::Int(0));
    assert_eq!(config.get_typed("db.port", 0.0, Typed::Float), Value::Float(5432.0));
    assert_eq!(config.get_typed("features.beta", 9, Typed::Int), Value::Int(0));
    assert_eq!(
        config.get_typed("name", Value::Null, Typed::List),
        Value::from(vec!["billing"])
    );
    assert_eq!(config.get_typed("db.port", Value::Null, Typed::List), Value::from(vec![5432]));
}

#[test]
fn test_parse_date_errors() {
    assert_eq!(parse_date(""), Err(DateParseError::Empty));
    assert!(matches!(
        parse_date("next tuesday"),
        Err(DateParseError::UnrecognizedFormat { .. })
    ));
}
