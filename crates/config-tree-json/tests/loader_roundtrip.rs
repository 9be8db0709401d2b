use config_tree::Configuration;
use config_tree_json::JsonConfigLoader;
use serde_json::{json, Value};
use tempfile::TempDir;

fn loader_in(dir: &TempDir) -> JsonConfigLoader {
    JsonConfigLoader::builder()
        .path(dir.path().join("config.json"))
        .build()
}

fn numbered_config() -> Configuration {
    let mut config = Configuration::new();
    config.set("number.zero", 0).unwrap();
    config.set("number.one", 1).unwrap();
    config.set("text.zero", "zero").unwrap();
    config.set("text.one", "one").unwrap();
    config
}

#[test]
fn save_then_load_reproduces_the_configuration() {
    let dir = TempDir::new().unwrap();
    let loader = loader_in(&dir);
    let config = numbered_config();

    loader.save(&config).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.get_i64("number.zero").unwrap(), Some(0));
    assert_eq!(loaded.get_i64("number.one").unwrap(), Some(1));
    assert_eq!(loaded.get_str("text.zero").unwrap(), Some("zero"));
    assert_eq!(loaded.get_str("text.one").unwrap(), Some("one"));
    assert_eq!(loaded, config);
}

#[test]
fn string_values_survive_the_file() {
    for string in ["foo", "banana"] {
        let dir = TempDir::new().unwrap();
        let loader = loader_in(&dir);
        let mut config = Configuration::new();
        config.set("foo", string).unwrap();

        loader.save(&config).unwrap();
        let loaded = loader.load().unwrap();

        assert_eq!(loaded.get_str("foo").unwrap(), Some(string));
    }
}

#[test]
fn explicit_null_survives_and_absent_stays_absent() {
    let dir = TempDir::new().unwrap();
    let loader = loader_in(&dir);
    let mut config = Configuration::new();
    config.set("foo", json!(null)).unwrap();

    loader.save(&config).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.get("foo").unwrap(), Some(&Value::Null));
    assert_eq!(loaded.get("boo").unwrap(), None);
}

#[test]
fn file_is_pretty_printed_utf8_json_with_nulls() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let loader = JsonConfigLoader::new(&path);
    let mut config = Configuration::new();
    config.set("a.b", json!(null)).unwrap();
    config.set("a.c", 1).unwrap();

    loader.save(&config).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    // Pretty printing spans multiple lines and nulls are written out.
    assert!(text.lines().count() > 1);
    assert!(text.contains("null"));
    let reparsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed["a"]["b"], Value::Null);
    assert_eq!(reparsed["a"]["c"], json!(1));
}

#[test]
fn object_payload_survives_the_file() {
    let dir = TempDir::new().unwrap();
    let loader = loader_in(&dir);
    let mut config = Configuration::new();
    config.set("a", json!({"x": 1})).unwrap();

    loader.save(&config).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.get("a").unwrap(), Some(&json!({"x": 1})));
    // Not reinterpreted as a child node.
    assert_eq!(loaded.get("a.x").unwrap(), None);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let loader = loader_in(&dir);
    assert!(matches!(
        loader.load(),
        Err(config_tree_json::LoaderError::Io(_))
    ));
}

#[test]
fn corrupt_file_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    let loader = JsonConfigLoader::new(&path);
    assert!(matches!(
        loader.load(),
        Err(config_tree_json::LoaderError::Json(_))
    ));
}

#[test]
fn copies_and_originals_load_equal() {
    let dir = TempDir::new().unwrap();
    let loader = loader_in(&dir);
    let config = numbered_config();

    loader.save(&config.copy()).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded, config);
}
