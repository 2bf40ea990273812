//! Unit tests for the configuration tree

use super::*;

use serde_json::json;

#[test]
fn test_get_string() {
    let config = JsonConfig::new(json!({ "host": "rubygems.org" }));
    assert_eq!(config.get_string("host").unwrap(), "rubygems.org");
}

#[test]
fn test_get_string_missing() {
    let config = JsonConfig::new(json!({}));

    match config.get_string("host").unwrap_err() {
        GemgateError::ConfigMissing { key } => assert_eq!(key, "host"),
        other => panic!("Expected ConfigMissing error, got {:?}", other),
    }
}

#[test]
fn test_optional_string_absent_and_null() {
    let config = JsonConfig::new(json!({ "token": null }));
    assert_eq!(config.get_optional_string("token").unwrap(), None);
    assert_eq!(config.get_optional_string("baseUrl").unwrap(), None);
}

#[test]
fn test_type_mismatch_names_key() {
    let config = JsonConfig::new(json!({ "host": 7 }));

    let err = config.get_string("host").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid type in config for key 'host', got number, wanted string"
    );
}

#[test]
fn test_dotted_keys() {
    let config = JsonConfig::new(json!({
        "integrations": { "rubygems": { "host": "a.com" } }
    }));

    assert_eq!(
        config.get_optional_string("integrations.rubygems.host").unwrap(),
        Some("a.com".to_string())
    );
    assert_eq!(config.get_optional_string("integrations.gitlab.host").unwrap(), None);
}

#[test]
fn test_dotted_key_through_scalar() {
    let config = JsonConfig::new(json!({ "integrations": "nope" }));

    match config.get_optional_string("integrations.rubygems").unwrap_err() {
        GemgateError::ConfigType { key, expected, actual } => {
            assert_eq!(key, "integrations");
            assert_eq!(expected, "object");
            assert_eq!(actual, "string");
        }
        other => panic!("Expected ConfigType error, got {:?}", other),
    }
}

#[test]
fn test_config_array_children_carry_their_path() {
    let config = JsonConfig::new(json!({
        "integrations": {
            "rubygems": [
                { "host": "a.com" },
                { "host": false },
            ]
        }
    }));

    let children = config
        .get_optional_config_array("integrations.rubygems")
        .unwrap()
        .unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].get_string("host").unwrap(), "a.com");

    let err = children[1].get_string("host").unwrap_err();
    assert!(err.to_string().contains("'integrations.rubygems[1].host'"));
}

#[test]
fn test_config_array_rejects_scalars() {
    let config = JsonConfig::new(json!({ "list": [{ "host": "a.com" }, 3] }));

    match config.get_optional_config_array("list").unwrap_err() {
        GemgateError::ConfigType { key, .. } => assert_eq!(key, "list[1]"),
        other => panic!("Expected ConfigType error, got {:?}", other),
    }

    let config = JsonConfig::new(json!({ "list": "a.com" }));
    assert!(config.get_optional_config_array("list").is_err());

    let config = JsonConfig::new(json!({}));
    assert!(config.get_optional_config_array("list").unwrap().is_none());
}

#[test]
fn test_from_toml_str() {
    let toml = r#"
[[integrations.rubygems]]
host = "gems.example.com"
apiBaseUrl = "https://gems.example.com/api/v1"
"#;

    let config = JsonConfig::from_toml_str(toml).unwrap();
    let children = config
        .get_optional_config_array("integrations.rubygems")
        .unwrap()
        .unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].get_string("host").unwrap(), "gems.example.com");
}

#[test]
fn test_from_toml_str_syntax_error() {
    let err = JsonConfig::from_toml_str("host = ").unwrap_err();
    assert!(matches!(err, GemgateError::ConfigParse { .. }));
    assert!(err.is_config_error());
}

#[test]
fn test_from_json_str() {
    let config = JsonConfig::from_json_str(r#"{ "host": "a.com" }"#).unwrap();
    assert_eq!(config.get_string("host").unwrap(), "a.com");

    assert!(JsonConfig::from_json_str("{ host").is_err());
}
