use super::*;

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            for variant in <$enum_type>::value_variants() {
                let possible_value = variant.to_possible_value();
                assert!(
                    possible_value.is_some(),
                    "PossibleValue should exist for all variants"
                );

                let possible_val = possible_value.unwrap();
                let primary_name = possible_val.get_name();
                let parsed: Result<$enum_type, _> = primary_name.parse();
                assert_eq!(
                    parsed.unwrap(),
                    *variant,
                    "Primary name '{}' should parse back to its variant",
                    primary_name
                );
            }
        }
    };
}

test_enum_completeness!(LogFormat, test_log_format_completeness);
test_enum_completeness!(LogOutput, test_log_output_completeness);
test_enum_completeness!(ColorIntent, test_color_intent_completeness);

#[test]
fn test_log_format_aliases() {
    assert_eq!("txt".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("yaml".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
}

#[test]
fn test_invalid_value_reports_parse_error() {
    let err = "sparkly".parse::<ColorIntent>().unwrap_err();
    match err {
        ConfigError::ParseError { value, reason } => {
            assert_eq!(value, "sparkly");
            assert_eq!(reason, "invalid color intent");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_verbosity_mapping() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(200), LogLevel::Trace);
}

#[test]
fn test_color_intent_resolution() {
    assert!(ColorIntent::Always.resolve(false));
    assert!(!ColorIntent::Never.resolve(true));
    assert!(ColorIntent::Auto.resolve(true));
    assert!(!ColorIntent::Auto.resolve(false));
}

#[test]
fn test_log_context_for_package() {
    let context = LogContext::for_package("resolve", "github.com/foo/bar");
    assert_eq!(context.operation, "resolve");
    assert_eq!(context.package.as_deref(), Some("github.com/foo/bar"));
    assert!(LogContext::new("fetch").package.is_none());
}
