use super::*;
use crate::primitives::ColorIntent;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_assemble_applies_environment_then_cli() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };

    let config = AppConfig::assemble(AppConfig::default(), &env).unwrap();
    assert_eq!(config.color, ColorIntent::Never);

    let cli = AppConfig {
        color: ColorIntent::Always,
        ..AppConfig::default()
    };
    let config = AppConfig::assemble(cli, &env).unwrap();
    assert_eq!(config.color, ColorIntent::Always);
}

#[test]
fn test_assemble_lets_force_color_through_ci() {
    let env = EnvironmentConfig {
        ci: Some("true".to_string()),
        force_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };

    let config = AppConfig::assemble(AppConfig::default(), &env).unwrap();
    assert_eq!(config.color, ColorIntent::Always);
    assert!(config.color_enabled());
}

#[test]
fn test_assemble_validates() {
    let cli = AppConfig {
        net_timeout: 0,
        ..AppConfig::default()
    };
    assert!(AppConfig::assemble(cli, &EnvironmentConfig::default()).is_err());
}

#[test]
fn test_missing_env_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join(".env.absent");
    assert!(load_env_files(&[missing]).is_ok());
}

#[test]
fn test_env_file_values_are_loaded() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join(".env");
    fs::write(&file, "DEPGATE_LOADER_TEST_VALUE=from-file\n").unwrap();

    load_env_files(&[&file]).unwrap();
    assert_eq!(
        std::env::var("DEPGATE_LOADER_TEST_VALUE").as_deref(),
        Ok("from-file")
    );
}

#[test]
fn test_malformed_env_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join(".env");
    fs::write(&file, "NOT A VALID LINE 'unterminated\n").unwrap();

    let err = load_env_files(&[&file]).unwrap_err();
    assert!(matches!(err, ConfigError::EnvFileError { .. }));
}
