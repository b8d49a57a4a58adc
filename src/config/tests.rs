#[cfg(test)]
use super::*;
use std::collections::HashMap;
use std::io::Write;

#[test]
fn test_config_from_string() {
    let config_content = r#"
set defaultPort = 8080
app_name = @"TestApp"
server = struct {
    host = @"localhost",
    port = [defaultPort],
    tags = << @"web" @"edge" >>
}
"#;
    let config = Config::parse(config_content).expect("Failed to parse config");

    let app_name: String = config.get("app_name").expect("Failed to get app_name");
    assert_eq!(app_name, "TestApp");

    let host: String = config.get("server.host").expect("Failed to get host");
    assert_eq!(host, "localhost");

    let port: u16 = config.get("server.port").expect("Failed to get port");
    assert_eq!(port, 8080);

    let tags: Vec<String> = config.get("server.tags").expect("Failed to get tags");
    assert_eq!(tags, vec!["web", "edge"]);

    let second: String = config.get("server.tags.1").expect("Failed to index array");
    assert_eq!(second, "edge");

    assert!(config.has("server.host"));
    assert!(!config.has("server.nonexistent"));

    let keys = config.get_keys("server").expect("Failed to get server keys");
    assert_eq!(keys, vec!["host", "port", "tags"]);

    assert_eq!(config.constants().len(), 1);
}

#[test]
fn test_from_str_trait() {
    let config: Config = "port = 1".parse().unwrap();
    assert_eq!(config.get::<u64>("port").unwrap(), 1);
}

#[test]
fn test_type_mismatch() {
    let config = Config::parse("name = @\"x\"").unwrap();
    match config.get::<u32>("name") {
        Err(CfgError::TypeError { message, code, .. }) => {
            assert!(message.contains("Expected number"));
            assert!(message.contains("name"));
            assert_eq!(code, Some(402));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_number_out_of_range() {
    let config = Config::parse("big = 70000").unwrap();
    assert_eq!(config.get::<u16>("big").unwrap_err().code(), Some(403));
    assert_eq!(config.get::<u32>("big").unwrap(), 70000);
}

#[test]
fn test_optional_and_default() {
    let config = Config::parse("port = 80").unwrap();
    assert_eq!(config.get_optional::<u16>("missing").unwrap(), None);
    assert_eq!(config.get_optional::<u16>("port").unwrap(), Some(80));
    assert_eq!(config.get_or("timeout", 30u64), 30);
}

#[test]
fn test_get_keys_on_scalar() {
    let config = Config::parse("port = 80").unwrap();
    assert_eq!(config.get_keys("port").unwrap_err().code(), Some(306));
}

#[test]
fn test_struct_as_map() {
    let config = Config::parse("labels = struct { a = @\"1\", b = @\"2\" }").unwrap();
    let labels: HashMap<String, String> = config.get("labels").unwrap();
    assert_eq!(labels.get("b").map(String::as_str), Some("2"));
}

#[test]
fn test_root_value_and_renderers() {
    let config = Config::parse("a = 1\nb = << 2 >>").unwrap();
    assert_eq!(
        config.root_value().as_struct().map(|f| f.len()),
        Some(2)
    );
    assert_eq!(
        config.to_xml(&XmlOptions::default()).unwrap(),
        r#"<config><a type="number">1</a><b type="array"><item type="number">2</item></b></config>"#
    );
    assert!(config.to_json().unwrap().contains("\"a\": 1"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "\\ service settings\nname = @\"svc\"").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.get::<String>("name").unwrap(), "svc");
    assert!(config.raw_content().starts_with("\\ service"));
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.cfg")).unwrap_err();
    assert!(matches!(err, CfgError::FileError { code: Some(301), .. }));
}
