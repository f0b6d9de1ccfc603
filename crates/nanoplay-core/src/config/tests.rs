use super::*;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();

    assert_eq!(config.language, "");
    assert_eq!(config.filter.reserved_titles, ["Program Manager"]);
    assert_eq!(config.filter.denied_classes.len(), 4);
    assert_eq!(config.resize.width, 320);
    assert_eq!(config.resize.height, 240);
    assert!(!config.logging.enabled);
}

#[test]
fn partial_toml_uses_defaults_for_missing_sections() {
    // Arrange
    let toml_str = "[resize]\nwidth = 800\n";

    // Act
    let config = loader::parse(toml_str).unwrap();

    // Assert
    assert_eq!(config.resize.width, 800);
    assert_eq!(config.resize.height, 240); // default
    assert_eq!(config.filter, FilterConfig::default());
}

#[test]
fn filter_lists_can_be_replaced() {
    // Arrange
    let toml_str = r#"
[filter]
denied_classes = ["Shell_TrayWnd", "Progman"]
"#;

    // Act
    let config = loader::parse(toml_str).unwrap();

    // Assert
    assert_eq!(config.filter.denied_classes, ["Shell_TrayWnd", "Progman"]);
    assert_eq!(config.filter.reserved_titles, ["Program Manager"]);
}

#[test]
fn validate_drops_blank_denylist_entries() {
    // Arrange
    let mut config = Config {
        filter: FilterConfig {
            reserved_titles: vec!["".into(), "Program Manager".into()],
            denied_classes: vec!["  ".into(), "Button".into()],
        },
        ..Default::default()
    };

    // Act
    config.validate();

    // Assert
    assert_eq!(config.filter.reserved_titles, ["Program Manager"]);
    assert_eq!(config.filter.denied_classes, ["Button"]);
}

#[test]
fn validate_normalizes_language_and_clamps_log_size() {
    let mut config = Config {
        language: " PT ".into(),
        ..Default::default()
    };
    config.logging.max_file_mb = 0;

    config.validate();

    assert_eq!(config.language, "pt");
    assert_eq!(config.logging.max_file_mb, 1);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let result = loader::parse("[resize]\nwidth = \"wide\"\n");

    assert!(result.is_err());
}
