use super::*;

#[test]
fn test_config_defaults() {
    let config = AppConfig::default();
    assert!(!config.yes);
    assert_eq!(config.log_level, 0);
    assert_eq!(config.net_timeout, 30);
    assert_eq!(config.stats_endpoint, "http://go-search.org/api");
    assert_eq!(config.go_bin, "go");
    assert_eq!(config.dep_bin, "dep");
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_config_merging() {
    let base = AppConfig::default();
    let override_config = AppConfig {
        yes: true,
        log_level: 4,
        color: ColorIntent::Never,
        go_bin: "/opt/go/bin/go".to_string(),
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);
    assert!(merged.yes);
    assert_eq!(merged.log_level, 4);
    assert_eq!(merged.color, ColorIntent::Never);
    assert_eq!(merged.go_bin, "/opt/go/bin/go");
    assert_eq!(merged.dep_bin, "dep");
    assert_eq!(merged.net_timeout, 30);
}

#[test]
fn test_merge_keeps_base_when_other_is_default() {
    let base = AppConfig {
        color: ColorIntent::Never,
        net_timeout: 5,
        ..AppConfig::default()
    };

    let merged = base.merge_with(AppConfig::default());
    assert_eq!(merged.color, ColorIntent::Never);
    assert_eq!(merged.net_timeout, 5);
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let config = AppConfig {
        net_timeout: 0,
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_validate_rejects_empty_program() {
    let config = AppConfig {
        dep_bin: "  ".to_string(),
        ..AppConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("dep-bin"));
}

#[test]
fn test_logger_config_follows_color_intent() {
    let config = AppConfig {
        log_level: 3,
        log_format: LogFormat::Json,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let logger_config = config.to_logger_config();
    assert_eq!(logger_config.level, LogLevel::Debug);
    assert_eq!(logger_config.format, LogFormat::Json);
    assert!(!logger_config.ansi);

    let forced = AppConfig {
        color: ColorIntent::Always,
        ..AppConfig::default()
    };
    assert!(forced.to_logger_config().ansi);
    assert!(forced.color_enabled());
}

#[test]
fn test_deserialize_fills_defaults() {
    let config: AppConfig = serde_json::from_str(r#"{"yes": true, "color": "never"}"#).unwrap();
    assert!(config.yes);
    assert_eq!(config.color, ColorIntent::Never);
    assert_eq!(config.go_bin, "go");
    assert_eq!(config.net_timeout, 30);
}
