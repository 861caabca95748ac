use super::*;

#[test]
fn test_filter_directives_follow_level() {
    let filter = Logger::filter_directives(LogLevel::Debug);
    assert!(filter.starts_with("depgate=debug,depgate_lib=debug"));
    assert!(filter.contains("reqwest=warn"));
    assert!(filter.ends_with(",debug"));
}

#[test]
fn test_filter_directives_parse() {
    for level in [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        let directives = Logger::filter_directives(level);
        assert!(
            EnvFilter::try_new(&directives).is_ok(),
            "directives should parse: {directives}"
        );
    }
}

#[test]
fn test_logger_init_is_single_shot() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    };

    // Another test binary thread may have installed a subscriber already;
    // either way a second init must not succeed.
    let _ = Logger::init(config.clone());
    assert!(Logger::init(config).is_err());
}

#[test]
fn test_log_macros_without_logger() {
    // Must not panic whether or not the global logger exists
    crate::log_info!("plain message");
    crate::log_debug!("with context", LogContext::for_package("resolve", "example.com/a/b"));
}
