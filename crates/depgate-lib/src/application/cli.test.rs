use super::*;
use crate::primitives::ColorIntent;

fn parse(args: &[&str]) -> CliConfig {
    CliConfig::try_parse_from(std::iter::once("depgate").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_forwarded_args_are_kept_verbatim() {
    let config = parse(&["github.com/pkg/errors"]);
    assert_eq!(config.args, vec!["github.com/pkg/errors"]);
    assert!(!config.app_config.yes);
}

#[test]
fn test_own_flags_before_forwarded_args() {
    let config = parse(&["--yes", "--color", "never", "-u", "github.com/pkg/errors"]);
    assert!(config.app_config.yes);
    assert_eq!(config.app_config.color, ColorIntent::Never);
    assert_eq!(config.args, vec!["-u", "github.com/pkg/errors"]);
}

#[test]
fn test_flags_after_package_are_forwarded() {
    let config = parse(&["github.com/pkg/errors", "-v", "--yes"]);
    assert!(!config.app_config.yes);
    assert_eq!(config.args, vec!["github.com/pkg/errors", "-v", "--yes"]);
}

#[test]
fn test_no_args_parses_to_empty() {
    let config = parse(&[]);
    assert!(config.args.is_empty());
}

#[test]
fn test_program_overrides() {
    let config = parse(&["--go-bin", "/usr/local/go/bin/go", "--dep-bin", "dep2", "pkg"]);
    assert_eq!(config.app_config.go_bin, "/usr/local/go/bin/go");
    assert_eq!(config.app_config.dep_bin, "dep2");
}

#[test]
fn test_invalid_color_is_rejected() {
    let result = CliConfig::try_parse_from(["depgate", "--color", "sometimes", "pkg"]);
    assert!(result.is_err());
}
