use std::{fmt, sync::Arc};

use dotdict::{
    ObjDict, Value,
    convert::JsonOptions,
    dict::{DictError, Indexable},
};

/// Read-only view of a record, addressed by field name
#[derive(Debug)]
struct Account {
    id: i64,
    owner: &'static str,
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "account #{}", self.id)
    }
}

impl Indexable for Account {
    fn try_get(&self, name: &str) -> Result<Value, DictError> {
        match name {
            "id" => Ok(Value::Int(self.id)),
            "owner" => Ok(Value::from(self.owner)),
            _ => Err(DictError::key_not_found(name)),
        }
    }

    fn id(&self) -> Option<Value> {
        Some(Value::Int(self.id))
    }
}

#[derive(Debug)]
struct Opaque;

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<opaque>")
    }
}

impl Indexable for Opaque {
    fn try_get(&self, name: &str) -> Result<Value, DictError> {
        Err(DictError::NotIndexable {
            key: name.to_string(),
            found: "opaque".to_string(),
        })
    }
}

#[test]
fn test_paths_through_objects() {
    let mut dict = ObjDict::new();
    dict.set("billing.account", Value::Object(Arc::new(Account { id: 7, owner: "ada" })))
        .unwrap();

    assert_eq!(
        dict.get_item("billing.account.owner").unwrap().as_ref(),
        &Value::from("ada")
    );
    assert_eq!(dict.get_or("billing.account.balance", 0), Value::Int(0));
    assert_eq!(
        dict.get_item("billing.account.balance").unwrap_err().key(),
        Some("balance")
    );
}

#[test]
fn test_object_errors_propagate() {
    let mut dict = ObjDict::new();
    dict.set_item("thing", Value::Object(Arc::new(Opaque))).unwrap();
    assert!(dict.get_item("thing.x").unwrap_err().is_not_indexable());
    assert!(!dict.contains("thing.x"));
}

#[test]
fn test_objects_in_json() {
    let mut dict = ObjDict::new();
    dict.set_item("account", Value::Object(Arc::new(Account { id: 7, owner: "ada" })))
        .unwrap();
    dict.set_item("blob", Value::Object(Arc::new(Opaque))).unwrap();

    let json = dict.to_json_string(&JsonOptions::compact()).unwrap();
    assert_eq!(json, r#"{"account":7,"blob":"<opaque>"}"#);
}

#[test]
fn test_objects_compare_by_identity() {
    let shared: Arc<dyn Indexable> = Arc::new(Opaque);
    let a = Value::Object(Arc::clone(&shared));
    let b = Value::Object(shared);
    assert_eq!(a, b);
    assert_ne!(a, Value::Object(Arc::new(Opaque)));
}
