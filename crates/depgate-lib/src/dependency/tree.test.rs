use super::*;

#[test]
fn test_builders_keep_child_order() {
    let node = PackageNode::new("root")
        .with_child(PackageNode::new("b"))
        .with_children([PackageNode::internal("a"), PackageNode::new("c")]);

    let children: Vec<_> = node.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(children, ["b", "a", "c"]);
    assert!(node.children[1].internal);
    assert!(!node.children[0].internal);
}

#[test]
fn test_repository_root() {
    assert_eq!(
        repository_root("github.com/KyleBanks/depth/cmd/depth"),
        "github.com/KyleBanks/depth"
    );
    assert_eq!(
        repository_root("github.com/KyleBanks/depth"),
        "github.com/KyleBanks/depth"
    );
    assert_eq!(repository_root("golang.org/x"), "golang.org/x");
    assert_eq!(repository_root("fmt"), "fmt");
    assert_eq!(repository_root(""), "");
}
