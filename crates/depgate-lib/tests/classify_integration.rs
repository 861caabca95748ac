//! Classification through the public API, from a package listing to the
//! report lines

use depgate_lib::dependency::resolver::{build_tree, parse_listing};
use depgate_lib::dependency::{REPORT_THRESHOLD, classify, total_count};
use depgate_lib::display::{StyleManager, render_summary};
use depgate_lib::PackageNode;

const LISTING: &str = r#"
{"ImportPath": "fmt", "Standard": true}
{"ImportPath": "net/http", "Standard": true, "Imports": ["fmt"]}
{"ImportPath": "github.com/x/shared", "Imports": ["fmt"], "Module": {"Path": "github.com/x/shared"}}
{"ImportPath": "github.com/x/left", "Imports": ["github.com/x/shared"], "Module": {"Path": "github.com/x/left"}}
{"ImportPath": "github.com/x/right", "Imports": ["github.com/x/shared", "net/http"], "Module": {"Path": "github.com/x/right"}}
{"ImportPath": "github.com/me/app/internal/db", "Imports": ["github.com/x/right"], "Module": {"Path": "github.com/me/app"}}
{"ImportPath": "github.com/me/app", "Imports": ["fmt", "github.com/me/app/internal/db", "github.com/x/left"], "Module": {"Path": "github.com/me/app"}}
"#;

#[test]
fn listing_to_classification() {
    let listing = parse_listing(LISTING.as_bytes()).unwrap();
    let tree = build_tree("github.com/me/app", &listing).unwrap();

    let result = classify(&tree);

    assert_eq!(result.direct, vec!["github.com/x/left"]);
    assert_eq!(result.indirect, vec!["github.com/x/right", "github.com/x/shared"]);
    assert_eq!(total_count(&result), 3);
    assert!(total_count(&result) > REPORT_THRESHOLD);
}

#[test]
fn classification_feeds_the_report() {
    let listing = parse_listing(LISTING.as_bytes()).unwrap();
    let tree = build_tree("github.com/me/app", &listing).unwrap();
    let result = classify(&tree);

    let lines = render_summary(&StyleManager::plain(), "github.com/me/app", &result);

    assert_eq!(lines[0], "Direct dependencies (1):");
    assert_eq!(lines[1], " github.com/x/left");
    assert_eq!(lines[3], "Indirect dependencies (2):");
    assert_eq!(lines[4], " github.com/x/right, github.com/x/shared");
    assert!(lines[6].ends_with("of which 1 are direct dependencies and 2 indirect dependencies"));
}

#[test]
fn diamond_and_internal_scenario() {
    // root -> [A(ext), B(int)], B -> C(ext), A -> [C(ext), D(ext)]
    let root = PackageNode::internal("root")
        .with_child(
            PackageNode::new("A")
                .with_child(PackageNode::new("C"))
                .with_child(PackageNode::new("D")),
        )
        .with_child(PackageNode::internal("B").with_child(PackageNode::new("C")));

    let result = classify(&root);

    assert_eq!(result.direct, vec!["A"]);
    assert_eq!(result.indirect, vec!["C", "D"]);
}

#[test]
fn threshold_boundaries() {
    let two = PackageNode::internal("root")
        .with_child(PackageNode::new("A"))
        .with_child(PackageNode::new("B"));
    assert!(!classify(&two).needs_report());

    let three = two.with_child(PackageNode::new("C"));
    assert!(classify(&three).needs_report());
}
