use super::*;
use crate::dependency::ResolutionError;

#[test]
fn test_forward_missing_program_is_spawn_error() {
    let err = LiveProcessProvider
        .forward("depgate-no-such-program", "get", &["pkg".to_string()])
        .unwrap_err();
    assert!(matches!(err, ForwardingError::Spawn { ref program, .. } if program == "depgate-no-such-program"));
}

#[cfg(unix)]
#[test]
fn test_forward_success_and_failure() {
    assert!(LiveProcessProvider.forward("true", "get", &[]).is_ok());

    let err = LiveProcessProvider
        .forward("false", "ensure", &["pkg".to_string()])
        .unwrap_err();
    assert!(matches!(err, ForwardingError::Failed { ref program, .. } if program == "false"));
    assert!(err.to_string().starts_with("'false' exited with"));
}

#[test]
fn test_yes_mode_confirms_without_input() {
    let provider = LiveInteractiveProvider::new(true, false);
    assert!(provider.confirm("Proceed? [Y/N]").unwrap());
}

#[test]
fn test_session_wires_configured_programs() {
    let config = AppConfig {
        go_bin: "/nonexistent/depgate-go".to_string(),
        dep_bin: "dep-custom".to_string(),
        ..AppConfig::default()
    };

    let session = CommandSession::new(config).unwrap();
    assert_eq!(session.config().app_config().go_bin, "/nonexistent/depgate-go");
    assert_eq!(session.config().app_config().dep_bin, "dep-custom");

    // The resolver runs the configured go program
    let err = session.resolver().resolve("example.com/a/b").unwrap_err();
    assert!(matches!(err, ResolutionError::Spawn { ref program, .. } if program == "/nonexistent/depgate-go"));
}
