//! End-to-end tests for the depgate binary
//!
//! The package managers are replaced by small shell scripts that log their
//! invocations, and the stats service by a mockito server.

use assert_cmd::Command;
use predicates::prelude::*;

fn depgate() -> Command {
    Command::new(env!("CARGO_BIN_EXE_depgate"))
}

#[test]
fn test_help_lists_forwarded_args() {
    depgate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dep ensure"))
        .stdout(predicate::str::contains("--yes"));
}

#[test]
fn test_missing_package_fails() {
    depgate()
        .args(["--go-bin", "depgate-missing-go", "-u"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No package specified"));
}

#[cfg(unix)]
mod with_fake_toolchain {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const ROOT: &str = "github.com/acme/tool";

    const LARGE_LISTING: &str = r#"
{"ImportPath": "fmt", "Standard": true}
{"ImportPath": "github.com/c/c", "Imports": ["fmt"], "Module": {"Path": "github.com/c/c"}}
{"ImportPath": "github.com/a/a", "Imports": ["github.com/c/c"], "Module": {"Path": "github.com/a/a"}}
{"ImportPath": "github.com/b/b", "Module": {"Path": "github.com/b/b"}}
{"ImportPath": "github.com/acme/tool", "Imports": ["fmt", "github.com/a/a", "github.com/b/b"], "Module": {"Path": "github.com/acme/tool"}}
"#;

    const SMALL_LISTING: &str = r#"
{"ImportPath": "fmt", "Standard": true}
{"ImportPath": "github.com/a/a", "Imports": ["fmt"], "Module": {"Path": "github.com/a/a"}}
{"ImportPath": "github.com/acme/tool", "Imports": ["fmt", "github.com/a/a"], "Module": {"Path": "github.com/acme/tool"}}
"#;

    /// Scratch directory holding fake `go` and `dep` programs
    struct Toolchain {
        dir: TempDir,
    }

    impl Toolchain {
        fn new(listing: &str, dep_exit: i32) -> Self {
            let dir = TempDir::new().unwrap();
            let log = dir.path().join("calls.log");
            let listing_path = dir.path().join("listing.json");
            fs::write(&listing_path, listing).unwrap();

            write_script(
                &dir.path().join("go"),
                &format!(
                    "case \"$1\" in\n  list) cat '{}' ;;\n  *) echo \"go $*\" >> '{}' ;;\nesac\n",
                    listing_path.display(),
                    log.display()
                ),
            );
            write_script(
                &dir.path().join("dep"),
                &format!("echo \"dep $*\" >> '{}'\nexit {dep_exit}\n", log.display()),
            );

            Self { dir }
        }

        fn program(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        fn calls(&self) -> Vec<String> {
            fs::read_to_string(self.dir.path().join("calls.log"))
                .unwrap_or_default()
                .lines()
                .map(str::to_string)
                .collect()
        }

        fn command(&self) -> Command {
            let mut cmd = depgate();
            cmd.arg("--go-bin")
                .arg(self.program("go"))
                .arg("--dep-bin")
                .arg(self.program("dep"))
                .args(["--color", "never"]);
            cmd
        }
    }

    fn write_script(path: &Path, body: &str) {
        fs::write(path, format!("#!/bin/sh\n{body}")).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn stats_server() -> (mockito::ServerGuard, mockito::Mock) {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("action".into(), "package".into()),
                mockito::Matcher::UrlEncoded("id".into(), ROOT.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"Package": "github.com/acme/tool", "StarCount": 9, "Imported": ["x"], "StaticRank": 3}"#)
            .create();
        (server, mock)
    }

    #[test]
    fn small_footprint_is_forwarded_without_prompt() {
        let toolchain = Toolchain::new(SMALL_LISTING, 0);

        toolchain
            .command()
            .args(["-u", ROOT])
            .assert()
            .success()
            .stdout(predicate::str::contains("Ensuring dependencies are on our GOPATH.."))
            .stdout(predicate::str::contains("Forwarding your request to `dep ensure` .."))
            .stdout(predicate::str::contains("Direct dependencies").not());

        assert_eq!(
            toolchain.calls(),
            vec![format!("go get -u {ROOT}"), format!("dep ensure -u {ROOT}")]
        );
    }

    #[test]
    fn large_footprint_is_reported_and_confirmed() {
        let toolchain = Toolchain::new(LARGE_LISTING, 0);
        let (server, mock) = stats_server();

        toolchain
            .command()
            .arg("--stats-endpoint")
            .arg(format!("{}/api", server.url()))
            .arg(ROOT)
            .write_stdin("maybe\nyes\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Direct dependencies (2):\n github.com/a/a, github.com/b/b"))
            .stdout(predicate::str::contains("Indirect dependencies (1):\n github.com/c/c"))
            .stdout(predicate::str::contains(
                "Package github.com/acme/tool has a total of 3 dependencies, of which 2 are direct dependencies and 1 indirect dependencies",
            ))
            .stdout(predicate::str::contains(
                " \\- used in 1 other packages, has 9 stars and a ranking of 3",
            ))
            .stdout(predicate::str::contains("Please type yes or no and then press enter:"));

        mock.assert();
        assert_eq!(
            toolchain.calls(),
            vec![format!("go get {ROOT}"), format!("dep ensure {ROOT}")]
        );
    }

    #[test]
    fn declining_skips_ensure() {
        let toolchain = Toolchain::new(LARGE_LISTING, 0);
        let (server, _mock) = stats_server();

        toolchain
            .command()
            .arg("--stats-endpoint")
            .arg(format!("{}/api", server.url()))
            .arg(ROOT)
            .write_stdin("N\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("dep ensure` ..").not());

        assert_eq!(toolchain.calls(), vec![format!("go get {ROOT}")]);
    }

    #[test]
    fn yes_flag_skips_the_prompt() {
        let toolchain = Toolchain::new(LARGE_LISTING, 0);
        let (server, _mock) = stats_server();

        toolchain
            .command()
            .arg("--yes")
            .arg("--stats-endpoint")
            .arg(format!("{}/api", server.url()))
            .arg(ROOT)
            .assert()
            .success()
            .stdout(predicate::str::contains("[Y/N]").not());

        assert_eq!(toolchain.calls().len(), 2);
    }

    #[test]
    fn stats_failure_is_fatal_before_the_prompt() {
        let toolchain = Toolchain::new(LARGE_LISTING, 0);
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/api")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create();

        toolchain
            .command()
            .arg("--stats-endpoint")
            .arg(format!("{}/api", server.url()))
            .arg(ROOT)
            .write_stdin("yes\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to look up stats"))
            .stdout(predicate::str::contains("[Y/N]").not());

        assert_eq!(toolchain.calls(), vec![format!("go get {ROOT}")]);
    }

    #[test]
    fn ensure_failure_exits_non_zero() {
        let toolchain = Toolchain::new(SMALL_LISTING, 3);

        toolchain
            .command()
            .arg(ROOT)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to ensure dependencies"));
    }
}
