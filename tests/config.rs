use storyterm::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.notifications.display_ms, 3000);
    assert_eq!(config.notifications.fade_ms, 300);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.file, "storyterm.log");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Zero display duration should fail
    config.notifications.display_ms = 0;
    assert!(config.validate().is_err());

    // Reset and test oversized fade duration
    config.notifications.display_ms = 3000;
    config.notifications.fade_ms = 10_000;
    assert!(config.validate().is_err());

    // Reset and test empty log file with logging enabled
    config.notifications.fade_ms = 300;
    config.logging.enabled = true;
    config.logging.file = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("display_ms = 3000"));
    assert!(toml_str.contains("fade_ms = 300"));
    assert!(toml_str.contains("mouse_enabled = true"));
}

#[test]
fn test_generate_and_reload_default_config() {
    let path = std::env::temp_dir().join("storyterm-test-config.toml");
    Config::generate_default_config(&path).unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.notifications.display_ms, 3000);
    assert!(!config.logging.enabled);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[notifications]
display_ms = 5000

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.notifications.display_ms, 5000);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.notifications.fade_ms, 300); // default value
    assert!(config.ui.mouse_enabled); // default value
    assert_eq!(config.logging.file, "storyterm.log"); // default value
}
