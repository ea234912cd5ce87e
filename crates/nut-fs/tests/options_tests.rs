use nut_fs::{Error, OptionsStore};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

fn keys(options: &nut_fs::RawOptions) -> Vec<&str> {
    options.keys().map(String::as_str).collect()
}

#[test]
fn test_load_toml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("options.toml");
    fs::write(
        &file_path,
        r#"upsname = "myups"
driver = "apcsmart"
port = "/dev/ttyS1"
MAXAGE = 15
"#,
    )
    .unwrap();

    let options = OptionsStore::new().load(&file_path).unwrap();

    assert_eq!(keys(&options), vec!["upsname", "driver", "port", "MAXAGE"]);
    assert_eq!(options["MAXAGE"], "15");
}

#[test]
fn test_load_json_preserves_order() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("options.json");
    fs::write(
        &file_path,
        r#"{"upsname": "myups", "driver": "apcsmart", "port": "/dev/ttyS1", "cable": "1234", "desc": "old-apc"}"#,
    )
    .unwrap();

    let options = OptionsStore::new().load(&file_path).unwrap();

    assert_eq!(
        keys(&options),
        vec!["upsname", "driver", "port", "cable", "desc"]
    );
    assert_eq!(options["desc"], "old-apc");
}

#[rstest]
#[case("options.yaml")]
#[case("options.yml")]
fn test_load_yaml(#[case] name: &str) {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(name);
    fs::write(&file_path, "MODE: netserver\nupsmon: master\n").unwrap();

    let options = OptionsStore::new().load(&file_path).unwrap();

    assert_eq!(keys(&options), vec!["MODE", "upsmon"]);
    assert_eq!(options["MODE"], "netserver");
}

#[test]
fn test_load_bool_value_is_stringified() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("options.json");
    fs::write(&file_path, r#"{"flag": true}"#).unwrap();

    let options = OptionsStore::new().load(&file_path).unwrap();
    assert_eq!(options["flag"], "true");
}

#[test]
fn test_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("options.ini");
    fs::write(&file_path, "MODE=standalone").unwrap();

    let result = OptionsStore::new().load(&file_path);
    assert!(matches!(
        result,
        Err(Error::UnsupportedFormat { extension }) if extension == "ini"
    ));
}

#[test]
fn test_nested_table_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("options.toml");
    fs::write(&file_path, "[ups]\ndriver = \"apcsmart\"\n").unwrap();

    let result = OptionsStore::new().load(&file_path);
    assert!(matches!(
        result,
        Err(Error::OptionsParse { format, .. }) if format == "TOML"
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let result = OptionsStore::new().load(&temp.path().join("absent.json"));
    assert_eq!(
        result.unwrap_err().io_kind(),
        Some(std::io::ErrorKind::NotFound)
    );
}
