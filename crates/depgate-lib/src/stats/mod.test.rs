// Tests for the package stats client

use super::*;
use mockito::{Matcher, Server};

const BODY: &str = r#"{
    "Package": "github.com/KyleBanks/depth",
    "Name": "depth",
    "StarCount": 612,
    "Imported": ["github.com/a/one", "github.com/b/two", "github.com/c/three"],
    "StaticRank": 1337
}"#;

fn client_for(server: &Server) -> GoSearchClient {
    GoSearchClient::new(format!("{}/api", server.url()), Duration::from_secs(5)).unwrap()
}

#[test]
fn test_normalize_package_name() {
    assert_eq!(
        normalize_package_name("github.com/KyleBanks/depth/cmd/depth"),
        "github.com/KyleBanks/depth"
    );
    assert_eq!(
        normalize_package_name("github.com/KyleBanks/depth"),
        "github.com/KyleBanks/depth"
    );
    assert_eq!(normalize_package_name("gopkg.in/yaml.v2"), "gopkg.in/yaml.v2");
}

#[test]
fn test_lookup_success_uses_normalized_id() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "package".into()),
            Matcher::UrlEncoded("id".into(), "github.com/KyleBanks/depth".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(BODY)
        .create();

    let stats = client_for(&server)
        .lookup("github.com/KyleBanks/depth/cmd/depth")
        .unwrap();

    mock.assert();
    assert_eq!(stats.package, "github.com/KyleBanks/depth");
    assert_eq!(stats.star_count, 612);
    assert_eq!(stats.static_rank, 1337);
    assert_eq!(stats.imported_by(), 3);
}

#[test]
fn test_lookup_missing_fields_default_to_zero() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"Package": "github.com/x/y"}"#)
        .create();

    let stats = client_for(&server).lookup("github.com/x/y").unwrap();
    assert_eq!(stats.package, "github.com/x/y");
    assert_eq!(stats.star_count, 0);
    assert!(stats.imported.is_empty());
}

#[test]
fn test_lookup_non_success_status() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api")
        .match_query(Matcher::Any)
        .with_status(503)
        .create();

    let err = client_for(&server).lookup("github.com/x/y/z").unwrap_err();
    match err {
        LookupError::UnexpectedStatus { package, status } => {
            assert_eq!(package, "github.com/x/y");
            assert_eq!(status, 503);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_lookup_malformed_body() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create();

    let err = client_for(&server).lookup("github.com/x/y").unwrap_err();
    assert!(matches!(err, LookupError::MalformedResponse { .. }));
}

#[test]
fn test_lookup_connection_refused() {
    // Nothing listens on port 9 locally
    let client = GoSearchClient::new("http://127.0.0.1:9/api", Duration::from_secs(2)).unwrap();
    let err = client.lookup("github.com/x/y").unwrap_err();
    assert!(matches!(err, LookupError::RequestFailed { .. }));
}

#[test]
fn test_invalid_endpoint() {
    let client = GoSearchClient::new("not a url", Duration::from_secs(1)).unwrap();
    let err = client.lookup("github.com/x/y").unwrap_err();
    assert!(matches!(err, LookupError::InvalidEndpoint { .. }));
}
