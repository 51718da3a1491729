use routerjig_settings::{Config, MeasurementSystem, SettingsError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_toml_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::new();
    config.bit.angle = 7.0;
    config.board.width = "9 3/4".to_string();
    config.board.wood = Some("walnut".to_string());
    config.debug = true;
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.board().unwrap().width(), 312);
    assert_eq!(loaded.board().unwrap().wood(), Some("walnut"));
}

#[test]
fn test_json_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.json");

    let config = Config::for_system(MeasurementSystem::Metric);
    config.save_to_file(&path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"system\": \"metric\""));

    let loaded = Config::load_from_file(&path).unwrap();
    assert!(loaded.to_units().unwrap().is_metric());
    assert_eq!(loaded.router_bit().unwrap().width(), 12);
}

#[test]
fn test_invalid_file_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[bit]\nwidth = \"15/32\"\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Configuration(_)));
    assert!(err.to_string().contains("must be even"));

    fs::write(&path, "[bit\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::Toml(_))
    ));
}

#[test]
fn test_invalid_config_is_not_saved() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");

    let mut config = Config::new();
    config.drawing.margin = "-1/4".to_string();
    assert!(config.save_to_file(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_explicit_file_must_exist() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("missing.toml");
    assert!(matches!(
        Config::load_or_default(Some(path.as_path())),
        Err(SettingsError::Io(_))
    ));
}

#[test]
fn test_default_path_location() {
    if let Ok(path) = Config::default_path() {
        assert!(path.ends_with("routerjig/config.toml"));
    }
}
