use std::fs;

use dotdict::{ObjDict, Value, convert::load_from_file};

use crate::helpers::*;

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = sample_config();
    config.save(&path).unwrap();
    assert!(fs::read_to_string(&path).unwrap().ends_with("}\n"));

    let loaded = load_from_file(&path, false).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.get_item("db.port").unwrap().as_ref(), &Value::Int(5432));
}

#[test]
fn test_empty_file_is_reset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "  \n").unwrap();

    assert!(load_from_file(&path, false).unwrap().is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn test_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/config.json");

    let err = load_from_file(&path, false).unwrap_err();
    assert!(err.is_io_error());
    assert!(load_from_file(&path, true).unwrap().is_empty());
}

#[test]
fn test_non_object_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    assert!(ObjDict::load(&path).unwrap_err().is_malformed_input());
    assert!(load_from_file(&path, true).unwrap().is_empty());
}
