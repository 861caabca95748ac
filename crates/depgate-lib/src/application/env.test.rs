use super::*;

fn var(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[test]
fn test_empty_environment_has_no_opinion() {
    assert_eq!(EnvironmentConfig::default().color_intent(), None);
}

#[test]
fn test_reads_variables_through_envy() {
    let env_config: EnvironmentConfig = envy::from_iter(vec![
        ("PATH".to_string(), "/usr/bin".to_string()),
        ("NO_COLOR".to_string(), "1".to_string()),
        ("CI".to_string(), "true".to_string()),
    ])
    .unwrap();

    assert_eq!(env_config.no_color.as_deref(), Some("1"));
    assert_eq!(env_config.ci.as_deref(), Some("true"));
    assert!(env_config.force_color.is_none());
    assert_eq!(env_config.color_intent(), Some(ColorIntent::Never));
}

#[test]
fn test_no_color_disables() {
    let env_config = EnvironmentConfig {
        no_color: var("1"),
        ..Default::default()
    };
    assert_eq!(env_config.color_intent(), Some(ColorIntent::Never));
}

#[test]
fn test_empty_no_color_is_ignored() {
    let env_config = EnvironmentConfig {
        no_color: var(""),
        ..Default::default()
    };
    assert_eq!(env_config.color_intent(), None);
}

#[test]
fn test_clicolor_zero_disables() {
    let env_config = EnvironmentConfig {
        clicolor: var("0"),
        ..Default::default()
    };
    assert_eq!(env_config.color_intent(), Some(ColorIntent::Never));

    let env_config = EnvironmentConfig {
        clicolor: var("1"),
        ..Default::default()
    };
    assert_eq!(env_config.color_intent(), None);
}

#[test]
fn test_ci_alone_disables() {
    let env_config = EnvironmentConfig {
        ci: var("true"),
        ..Default::default()
    };
    assert_eq!(env_config.color_intent(), Some(ColorIntent::Never));
}

#[test]
fn test_force_color_overrides_ci() {
    let env_config = EnvironmentConfig {
        ci: var("true"),
        force_color: var("1"),
        ..Default::default()
    };
    assert_eq!(env_config.color_intent(), Some(ColorIntent::Always));
}

#[test]
fn test_force_color_overrides_every_disable() {
    let env_config = EnvironmentConfig {
        no_color: var("1"),
        clicolor: var("0"),
        ci: var("1"),
        force_color: var("3"),
    };
    assert_eq!(env_config.color_intent(), Some(ColorIntent::Always));
}

#[test]
fn test_force_color_false_disables() {
    let env_config = EnvironmentConfig {
        force_color: var("false"),
        ..Default::default()
    };
    assert_eq!(env_config.color_intent(), Some(ColorIntent::Never));
}

#[test]
fn test_unrecognised_force_color_falls_through() {
    let env_config = EnvironmentConfig {
        force_color: var("maybe"),
        ..Default::default()
    };
    assert_eq!(env_config.color_intent(), None);

    let env_config = EnvironmentConfig {
        force_color: var("maybe"),
        ci: var("true"),
        ..Default::default()
    };
    assert_eq!(env_config.color_intent(), Some(ColorIntent::Never));
}
