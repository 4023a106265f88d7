use homedeck::config::Config;
use homedeck::icons::IconTheme;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.display.timestamp_format, "%Y-%m-%d %H:%M:%S");
    assert_eq!(config.display.icon_theme, IconTheme::Unicode);
    assert!(config.storage.data_dir.is_none());
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    config.ui.tick_rate_ms = 5;
    assert!(config.validate().is_err());
    config.ui.tick_rate_ms = 5000;
    assert!(config.validate().is_err());
    config.ui.tick_rate_ms = 250;
    assert!(config.validate().is_ok());

    config.display.timestamp_format = "%Q".to_string();
    assert!(config.validate().is_err());
    config.display.timestamp_format = "%d %b %H:%M".to_string();
    assert!(config.validate().is_ok());

    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());
    config.logging.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_config_deserialization() {
    let toml_str = r#"
[display]
icon_theme = "ascii"

[storage]
data_dir = "/tmp/homedeck-data"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.display.icon_theme, IconTheme::Ascii);
    assert_eq!(config.display.timestamp_format, "%Y-%m-%d %H:%M:%S");
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/homedeck-data"));
}

#[test]
fn test_empty_config() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert!(config.validate().is_ok());
}

#[test]
fn test_generate_and_load_default_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# homedeck configuration file"));
    assert!(content.contains("tick_rate_ms = 100"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.ui.tick_rate_ms, 100);
    assert_eq!(loaded.display.icon_theme, IconTheme::Unicode);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_rate_ms = 1\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());
    assert!(Config::load_from_file(dir.path().join("missing.toml")).is_err());
}
