use repo_shell_config::{Config, ConfigError, LogLevel};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.min_panel_width_px, 150.0);
    assert_eq!(config.default_panel_widths, [1.0, 2.0, 1.0]);
    assert_eq!(config.drawer_breakpoint_px, 768.0);
    assert_eq!(config.transient_error_timeout_ms, 5000);
    assert_eq!(config.github_api_base, "https://api.github.com");
    assert_eq!(config.log_level, LogLevel::Off);
    assert!(config.state_directory.is_none());
}

#[test]
fn test_load_creates_default_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("nested").join("config.yaml");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(path.exists());
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "min_panel_width_px: 200.0\nlog_level: debug\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.min_panel_width_px, 200.0);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.default_panel_widths, [1.0, 2.0, 1.0]);
}

#[test]
fn test_save_and_load_roundtrip() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.yaml");

    let mut config = Config::default().with_drawer_breakpoint(900.0);
    config.state_directory = Some("/tmp/repo-shell-state".to_string());
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(!path.with_extension("yaml.tmp").exists());
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "min_panel_width_px: [[[").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse(_))
    ));
}

#[test]
fn test_invalid_values_are_validation_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "default_panel_widths: [1.0, -2.0, 1.0]\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation(_))
    ));
}

#[test]
fn test_state_dir_override() {
    let mut config = Config::default();
    config.state_directory = Some("/var/tmp/shell".to_string());
    assert_eq!(config.state_dir(), std::path::PathBuf::from("/var/tmp/shell"));

    config.state_directory = None;
    assert!(config.state_dir().ends_with("state"));
}
