use dotdict::{ObjDict, convert::from_json};

/// A settings tree with both a nested path and a literal dotted key at `a.b`
pub fn aliased_map() -> ObjDict {
    from_json(r#"{"a": {"b": "a->b"}, "1": {"2": {"3": "1->2->3"}}, "a.b": "a.b", "c": "c"}"#)
        .unwrap()
}

/// A small application config
pub fn sample_config() -> ObjDict {
    from_json(
        r#"{
            "name": "billing",
            "db": {"host": "localhost", "port": 5432, "replicas": [{"host": "r1"}, {"host": "r2"}]},
            "features": {"beta": false},
            "tags": ["a", "b"],
            "ratio": 0.25
        }"#,
    )
    .unwrap()
}

/// Parse JSON text that must be an object
pub fn json(text: &str) -> ObjDict {
    from_json(text).unwrap()
}
