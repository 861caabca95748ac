use super::*;
use crate::application::config::AppConfig;
use crate::application::session_mocks::*;
use crate::dependency::PackageNode;
use crate::display::REPROMPT;
use crate::stats::PackageStats;

const PKG: &str = "github.com/me/pkg";

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Root with three external dependencies: two direct, one indirect
fn large_tree() -> PackageNode {
    PackageNode::internal(PKG)
        .with_child(PackageNode::new("github.com/a/a").with_child(PackageNode::new("github.com/c/c")))
        .with_child(PackageNode::new("github.com/b/b"))
        .with_child(PackageNode::internal("fmt"))
}

/// Root with two external dependencies
fn small_tree() -> PackageNode {
    PackageNode::internal(PKG)
        .with_child(PackageNode::new("github.com/a/a"))
        .with_child(PackageNode::new("github.com/b/b"))
}

fn stats() -> PackageStats {
    PackageStats {
        package: PKG.to_string(),
        star_count: 12,
        imported: vec!["x".to_string(), "y".to_string(), "z".to_string()],
        static_rank: 4,
    }
}

fn forward(program: &str, subcommand: &str, forwarded: &[&str]) -> SessionEvent {
    SessionEvent::Forward {
        program: program.to_string(),
        subcommand: subcommand.to_string(),
        args: args(forwarded),
    }
}

mod package_argument {
    use super::*;

    #[test]
    fn it_picks_the_first_non_flag_argument() {
        assert_eq!(package_from_args(&args(&["-u", "-v", PKG, "extra"])), Some(PKG));
        assert_eq!(package_from_args(&args(&[PKG])), Some(PKG));
    }

    #[test]
    fn it_returns_none_for_flags_only() {
        assert_eq!(package_from_args(&args(&["-u", "--insecure"])), None);
        assert_eq!(package_from_args(&[]), None);
    }

    #[test]
    fn it_runs_nothing_without_a_package() {
        let session = MockCommandSession::new();

        let err = run_gate(&session, &args(&["-u"])).unwrap_err();

        assert_eq!(err.to_string(), "No package specified");
        assert!(matches!(
            err.downcast_ref::<CommandError>(),
            Some(CommandError::MissingPackage)
        ));
        assert!(session.events().is_empty());
        assert!(session.messages().is_empty());
    }
}

mod gate_flow {
    use super::*;

    #[test]
    fn it_forwards_directly_when_footprint_is_small() {
        let session = MockCommandSession::new()
            .with_resolver(MockTreeResolver::new().with_tree(small_tree()));

        let outcome = run_gate(&session, &args(&[PKG])).unwrap();

        assert_eq!(outcome, Outcome::Forwarded);
        assert_eq!(
            session.events(),
            vec![
                forward("go", "get", &[PKG]),
                SessionEvent::Resolve(PKG.to_string()),
                forward("dep", "ensure", &[PKG]),
            ]
        );
        assert_eq!(session.messages(), vec![FETCH_MESSAGE, "", ENSURE_MESSAGE, ""]);
    }

    #[test]
    fn it_reports_and_forwards_when_confirmed() {
        let session = MockCommandSession::new()
            .with_resolver(MockTreeResolver::new().with_tree(large_tree()))
            .with_stats(MockStatsLookup::new().with_stats(stats()))
            .with_interactive(MockInteractiveProvider::new().with_confirm(true));

        let outcome = run_gate(&session, &args(&[PKG])).unwrap();

        assert_eq!(outcome, Outcome::Forwarded);
        let prompt = format!(
            "Are you sure you wish to install {PKG} and all above dependencies? [Y/N]"
        );
        assert_eq!(
            session.events(),
            vec![
                forward("go", "get", &[PKG]),
                SessionEvent::Resolve(PKG.to_string()),
                SessionEvent::Lookup(PKG.to_string()),
                SessionEvent::Confirm(prompt),
                forward("dep", "ensure", &[PKG]),
            ]
        );

        assert_eq!(
            session.messages(),
            vec![
                FETCH_MESSAGE.to_string(),
                String::new(),
                "Direct dependencies (2):".to_string(),
                " github.com/a/a, github.com/b/b".to_string(),
                String::new(),
                "Indirect dependencies (1):".to_string(),
                " github.com/c/c".to_string(),
                String::new(),
                format!(
                    "Package {PKG} has a total of 3 dependencies, of which 2 are direct dependencies and 1 indirect dependencies"
                ),
                " \\- used in 3 other packages, has 12 stars and a ranking of 4".to_string(),
                String::new(),
                ENSURE_MESSAGE.to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn it_stops_before_ensure_when_declined() {
        let session = MockCommandSession::new()
            .with_resolver(MockTreeResolver::new().with_tree(large_tree()))
            .with_stats(MockStatsLookup::new().with_stats(stats()))
            .with_interactive(MockInteractiveProvider::new().with_confirm(false));

        let outcome = run_gate(&session, &args(&[PKG])).unwrap();

        assert_eq!(outcome, Outcome::Declined);
        let calls = session.process_provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, "get");
        assert!(!session.messages().iter().any(|m| m == ENSURE_MESSAGE));
    }

    #[test]
    fn it_forwards_arguments_unmodified() {
        let session = MockCommandSession::new()
            .with_resolver(MockTreeResolver::new().with_tree(small_tree()));
        let forwarded = ["-u", "-v", PKG, "--", "extra"];

        run_gate(&session, &args(&forwarded)).unwrap();

        assert_eq!(
            session.process_provider.get_calls(),
            vec![
                ("go".to_string(), "get".to_string(), args(&forwarded)),
                ("dep".to_string(), "ensure".to_string(), args(&forwarded)),
            ]
        );
    }

    #[test]
    fn it_uses_configured_programs() {
        let session = MockCommandSession::new()
            .with_config(AppConfig {
                go_bin: "go1.22".to_string(),
                dep_bin: "/usr/local/bin/dep".to_string(),
                ..AppConfig::default()
            })
            .with_resolver(MockTreeResolver::new().with_tree(small_tree()));

        run_gate(&session, &args(&[PKG])).unwrap();

        let programs: Vec<String> = session
            .process_provider
            .get_calls()
            .into_iter()
            .map(|(program, _, _)| program)
            .collect();
        assert_eq!(programs, vec!["go1.22", "/usr/local/bin/dep"]);
    }

    #[test]
    fn it_shows_a_spinner_while_resolving() {
        let session = MockCommandSession::new()
            .with_resolver(MockTreeResolver::new().with_tree(small_tree()));

        run_gate(&session, &args(&[PKG])).unwrap();

        let spinner = format!("Resolving dependencies of {PKG}");
        let calls = session.display_provider.get_calls();
        let started = calls
            .iter()
            .position(|c| *c == crate::display::DisplayCall::SpinnerStarted(spinner.clone()));
        let finished = calls
            .iter()
            .position(|c| *c == crate::display::DisplayCall::SpinnerFinished(spinner.clone()));
        assert!(started.unwrap() < finished.unwrap());
    }

    #[test]
    fn it_never_prints_the_reprompt_itself() {
        let session = MockCommandSession::new()
            .with_resolver(MockTreeResolver::new().with_tree(large_tree()))
            .with_stats(MockStatsLookup::new().with_stats(stats()))
            .with_interactive(MockInteractiveProvider::new().with_confirm(true));

        run_gate(&session, &args(&[PKG])).unwrap();
        assert!(!session.messages().iter().any(|m| m == REPROMPT));
    }
}

mod failures {
    use super::*;

    #[test]
    fn fetch_failure_stops_before_resolution() {
        let session = MockCommandSession::new()
            .with_process(MockProcessProvider::new().with_failing_program("go"))
            .with_resolver(MockTreeResolver::new().with_tree(large_tree()));

        let err = run_gate(&session, &args(&[PKG])).unwrap_err();

        assert!(err.to_string().contains("Failed to fetch"));
        assert_eq!(session.events(), vec![forward("go", "get", &[PKG])]);
    }

    #[test]
    fn resolution_failure_is_fatal() {
        let session = MockCommandSession::new().with_resolver(
            MockTreeResolver::new().with_failure(PKG, "cannot find package"),
        );

        let err = run_gate(&session, &args(&[PKG])).unwrap_err();

        assert!(format!("{err:#}").contains("cannot find package"));
        assert_eq!(session.process_provider.get_calls().len(), 1);
        assert!(session.display_provider.get_calls().iter().any(|c| matches!(
            c,
            crate::display::DisplayCall::SpinnerFinished(_)
        )));
    }

    #[test]
    fn lookup_failure_skips_the_gate_and_ensure() {
        let session = MockCommandSession::new()
            .with_resolver(MockTreeResolver::new().with_tree(large_tree()))
            .with_interactive(MockInteractiveProvider::new().with_confirm(true));

        let err = run_gate(&session, &args(&[PKG])).unwrap_err();

        assert!(format!("{err:#}").contains("404"));
        let events = session.events();
        assert!(!events.iter().any(|e| matches!(e, SessionEvent::Confirm(_))));
        assert_eq!(session.process_provider.get_calls().len(), 1);
    }

    #[test]
    fn closed_input_is_fatal() {
        let session = MockCommandSession::new()
            .with_resolver(MockTreeResolver::new().with_tree(large_tree()))
            .with_stats(MockStatsLookup::new().with_stats(stats()));

        let err = run_gate(&session, &args(&[PKG])).unwrap_err();

        assert!(err.to_string().contains("Failed to read confirmation"));
        assert_eq!(session.process_provider.get_calls().len(), 1);
    }

    #[test]
    fn ensure_failure_is_fatal() {
        let session = MockCommandSession::new()
            .with_process(MockProcessProvider::new().with_failing_program("dep"))
            .with_resolver(MockTreeResolver::new().with_tree(small_tree()));

        let err = run_gate(&session, &args(&[PKG])).unwrap_err();

        assert!(err.to_string().contains("Failed to ensure dependencies"));
        assert_eq!(session.process_provider.get_calls().len(), 2);
    }
}
