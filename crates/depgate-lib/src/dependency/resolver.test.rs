// Tests for go list based tree resolution

use super::*;

const LISTING: &str = r#"
{
    "ImportPath": "errors",
    "Standard": true
}
{
    "ImportPath": "fmt",
    "Standard": true,
    "Imports": ["errors"]
}
{
    "ImportPath": "github.com/pkg/errors",
    "Imports": ["fmt"],
    "Module": {"Path": "github.com/pkg/errors"}
}
{
    "ImportPath": "github.com/spf13/pflag",
    "Imports": ["fmt", "github.com/pkg/errors"],
    "Module": {"Path": "github.com/spf13/pflag"}
}
{
    "ImportPath": "github.com/acme/tool/internal/util",
    "Imports": ["github.com/pkg/errors"],
    "Module": {"Path": "github.com/acme/tool"}
}
{
    "ImportPath": "github.com/acme/tool",
    "Imports": ["fmt", "github.com/acme/tool/internal/util", "github.com/spf13/pflag", "C"],
    "Module": {"Path": "github.com/acme/tool"}
}
"#;

fn listing() -> HashMap<String, ListedPackage> {
    parse_listing(LISTING.as_bytes()).unwrap()
}

fn node_count(node: &PackageNode) -> usize {
    1 + node.children.iter().map(node_count).sum::<usize>()
}

fn child_names(node: &PackageNode) -> Vec<&str> {
    node.children.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_parse_listing_reads_concatenated_objects() {
    let packages = listing();
    assert_eq!(packages.len(), 6);
    assert!(packages["fmt"].standard);
    assert_eq!(packages["fmt"].imports, vec!["errors".to_string()]);
    assert!(packages["github.com/acme/tool"].error.is_none());
}

#[test]
fn test_parse_listing_rejects_garbage() {
    let err = parse_listing(b"{\"ImportPath\": \"a\"} not-json").unwrap_err();
    assert!(matches!(err, ResolutionError::InvalidListing { .. }));
}

#[test]
fn test_build_tree_shape() {
    let tree = build_tree("github.com/acme/tool", &listing()).unwrap();

    assert_eq!(tree.name, "github.com/acme/tool");
    assert_eq!(
        child_names(&tree),
        ["fmt", "github.com/acme/tool/internal/util", "github.com/spf13/pflag", "C"]
    );

    // Standard library: internal and never expanded
    let fmt = &tree.children[0];
    assert!(fmt.internal);
    assert!(fmt.children.is_empty());

    // Same module as the root: internal but still expanded
    let util = &tree.children[1];
    assert!(util.internal);
    assert_eq!(child_names(util), ["github.com/pkg/errors"]);

    // Third-party package; its errors import was already expanded under util
    let pflag = &tree.children[2];
    assert!(!pflag.internal);
    assert_eq!(child_names(pflag), ["fmt", "github.com/pkg/errors"]);
    assert!(pflag.children[1].children.is_empty());

    // Unknown pseudo-package
    assert!(tree.children[3].internal);
}

#[test]
fn test_build_tree_then_classify() {
    let tree = build_tree("github.com/acme/tool", &listing()).unwrap();
    let result = crate::dependency::classify(&tree);

    assert_eq!(result.direct, vec!["github.com/spf13/pflag".to_string()]);
    assert_eq!(result.indirect, vec!["github.com/pkg/errors".to_string()]);
}

#[test]
fn test_build_tree_terminates_on_cycles() {
    let cyclic = r#"
        {"ImportPath": "example.com/a/root", "Imports": ["example.com/b/x"]}
        {"ImportPath": "example.com/b/x", "Imports": ["example.com/c/y"]}
        {"ImportPath": "example.com/c/y", "Imports": ["example.com/b/x", "example.com/a/root"]}
    "#;
    let tree = build_tree("example.com/a/root", &parse_listing(cyclic.as_bytes()).unwrap()).unwrap();

    assert_eq!(node_count(&tree), 5);
    let result = crate::dependency::classify(&tree);
    assert_eq!(result.direct, vec!["example.com/b/x".to_string()]);
    assert_eq!(result.indirect, vec!["example.com/c/y".to_string()]);
}

#[test]
fn test_build_tree_handles_deep_import_chains() {
    const DEPTH: usize = 50_000;

    let name = |i: usize| format!("example.com/chain/p{i}");
    let listing: HashMap<String, ListedPackage> = (0..=DEPTH)
        .map(|i| {
            let package = ListedPackage {
                import_path: name(i),
                standard: false,
                imports: if i < DEPTH { vec![name(i + 1)] } else { Vec::new() },
                module: None,
                error: None,
            };
            (name(i), package)
        })
        .collect();

    let tree = build_tree(&name(0), &listing).unwrap();

    let result = crate::dependency::classify(&tree);
    assert_eq!(result.direct, vec![name(1)]);
    assert_eq!(result.indirect.len(), DEPTH - 1);
    assert_eq!(result.indirect.last(), Some(&name(DEPTH)));

    // Taken apart one level at a time so dropping the chain stays shallow
    let mut depth = 0;
    let mut current = Some(tree);
    while let Some(mut node) = current {
        assert_eq!(node.name, name(depth));
        assert!(node.children.len() <= 1);
        current = node.children.pop();
        depth += 1;
    }
    assert_eq!(depth, DEPTH + 1);
}

#[test]
fn test_gopath_project_scope_uses_repository_prefix() {
    let gopath = r#"
        {"ImportPath": "github.com/acme/tool/cmd/tool", "Imports": ["github.com/acme/tool/lib", "github.com/acme/tool/vendor/github.com/x/y"]}
        {"ImportPath": "github.com/acme/tool/lib"}
        {"ImportPath": "github.com/acme/tool/vendor/github.com/x/y"}
    "#;
    let tree = build_tree(
        "github.com/acme/tool/cmd/tool",
        &parse_listing(gopath.as_bytes()).unwrap(),
    )
    .unwrap();

    assert!(tree.children[0].internal);
    assert!(!tree.children[1].internal);
}

#[test]
fn test_build_tree_missing_root() {
    let err = build_tree("example.com/nope/nope", &listing()).unwrap_err();
    assert!(matches!(err, ResolutionError::PackageNotFound { package } if package == "example.com/nope/nope"));
}

#[test]
fn test_build_tree_root_with_load_error() {
    let broken = r#"{"ImportPath": "example.com/x/missing", "Error": {"Err": "cannot find package"}}"#;
    let err = build_tree("example.com/x/missing", &parse_listing(broken.as_bytes()).unwrap())
        .unwrap_err();

    match err {
        ResolutionError::PackageError { package, message } => {
            assert_eq!(package, "example.com/x/missing");
            assert_eq!(message, "cannot find package");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_go_list_resolver_reports_spawn_failure() {
    let resolver = GoListResolver::new("/nonexistent/depgate-test-go");
    let err = resolver.resolve("example.com/a/b").unwrap_err();
    assert!(matches!(err, ResolutionError::Spawn { .. }));
}
