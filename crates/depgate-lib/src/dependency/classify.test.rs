// Tests for dependency classification

use super::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Basic Shapes
// ============================================================================

#[test]
fn test_root_without_children_is_empty() {
    let root = PackageNode::new("example.com/root");
    let result = classify(&root);

    assert!(result.direct.is_empty());
    assert!(result.indirect.is_empty());
    assert_eq!(result.total_count(), 0);
}

#[test]
fn test_single_direct_dependency_skips_report() {
    let root = PackageNode::new("root").with_child(PackageNode::new("A"));
    let result = classify(&root);

    assert_eq!(result.direct, names(&["A"]));
    assert!(result.indirect.is_empty());
    assert_eq!(total_count(&result), 1);
    assert!(!result.needs_report());
}

#[test]
fn test_internal_child_with_shared_descendant() {
    // root -> [A(ext), B(int)]; B -> C; A -> C, D
    let root = PackageNode::new("root").with_children([
        PackageNode::new("A").with_children([PackageNode::new("C"), PackageNode::new("D")]),
        PackageNode::internal("B").with_child(PackageNode::new("C")),
    ]);
    let result = classify(&root);

    assert_eq!(result.direct, names(&["A"]));
    assert_eq!(result.indirect, names(&["C", "D"]));
}

// ============================================================================
// Deduplication
// ============================================================================

#[test]
fn test_diamond_dependency_counted_once() {
    let root = PackageNode::new("root").with_children([
        PackageNode::new("A").with_child(PackageNode::new("P")),
        PackageNode::new("B").with_child(PackageNode::new("P")),
    ]);
    let result = classify(&root);

    assert_eq!(result.direct, names(&["A", "B"]));
    assert_eq!(result.indirect, names(&["P"]));
}

#[test]
fn test_direct_takes_precedence_over_indirect() {
    // B is direct and also reachable through A
    let root = PackageNode::new("root").with_children([
        PackageNode::new("A").with_children([PackageNode::new("B"), PackageNode::new("C")]),
        PackageNode::new("B"),
    ]);
    let result = classify(&root);

    assert_eq!(result.direct, names(&["A", "B"]));
    assert_eq!(result.indirect, names(&["C"]));
}

#[test]
fn test_repeated_direct_children_are_deduplicated() {
    let root = PackageNode::new("root").with_children([
        PackageNode::new("A"),
        PackageNode::new("B"),
        PackageNode::new("A"),
    ]);
    let result = classify(&root);

    assert_eq!(result.direct, names(&["A", "B"]));
}

#[test]
fn test_outputs_are_disjoint_and_unique() {
    let root = PackageNode::new("root").with_children([
        PackageNode::new("A").with_children([
            PackageNode::new("X").with_child(PackageNode::new("Y")),
            PackageNode::new("B"),
        ]),
        PackageNode::new("B").with_children([
            PackageNode::new("Y"),
            PackageNode::new("X").with_child(PackageNode::new("A")),
        ]),
    ]);
    let result = classify(&root);

    let direct: HashSet<_> = result.direct.iter().collect();
    let indirect: HashSet<_> = result.indirect.iter().collect();
    assert_eq!(direct.len(), result.direct.len());
    assert_eq!(indirect.len(), result.indirect.len());
    assert!(direct.is_disjoint(&indirect));
    assert_eq!(result.indirect, names(&["X", "Y"]));
}

// ============================================================================
// Internal Nodes
// ============================================================================

#[test]
fn test_all_children_internal_still_walks_subtrees() {
    let root = PackageNode::new("root").with_children([
        PackageNode::internal("root/util").with_child(PackageNode::new("E")),
        PackageNode::internal("fmt"),
    ]);
    let result = classify(&root);

    assert!(result.direct.is_empty());
    assert_eq!(result.indirect, names(&["E"]));
}

#[test]
fn test_internal_node_does_not_prune_subtree() {
    let root = PackageNode::new("root").with_child(
        PackageNode::new("A").with_child(
            PackageNode::internal("A/internal/x").with_child(PackageNode::new("Z")),
        ),
    );
    let result = classify(&root);

    assert_eq!(result.direct, names(&["A"]));
    assert_eq!(result.indirect, names(&["Z"]));
    assert!(!result.indirect.contains(&"A/internal/x".to_string()));
}

#[test]
fn test_same_name_internal_and_external() {
    // "M" is internal under A but external under B: it still shows up once
    let root = PackageNode::new("root").with_children([
        PackageNode::new("A").with_child(PackageNode::internal("M")),
        PackageNode::new("B").with_child(PackageNode::new("M")),
    ]);
    let result = classify(&root);

    assert_eq!(result.indirect, names(&["M"]));
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_indirect_is_depth_first_pre_order() {
    // A -> [B -> [D, E], C -> [F]]
    let root = PackageNode::new("root").with_child(PackageNode::new("A").with_children([
        PackageNode::new("B").with_children([PackageNode::new("D"), PackageNode::new("E")]),
        PackageNode::new("C").with_child(PackageNode::new("F")),
    ]));
    let result = classify(&root);

    assert_eq!(result.indirect, names(&["B", "D", "E", "C", "F"]));
}

#[test]
fn test_indirect_accumulates_across_direct_children() {
    let root = PackageNode::new("root").with_children([
        PackageNode::new("zeta").with_child(PackageNode::new("z1")),
        PackageNode::new("alpha").with_child(PackageNode::new("a1")),
    ]);
    let result = classify(&root);

    assert_eq!(result.direct, names(&["zeta", "alpha"]));
    assert_eq!(result.indirect, names(&["z1", "a1"]));
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let mut node = PackageNode::new("leaf");
    for depth in (0..50_000).rev() {
        node = PackageNode::new(format!("pkg{depth}")).with_child(node);
    }
    let root = PackageNode::new("root").with_child(node);
    let result = classify(&root);

    assert_eq!(result.direct, names(&["pkg0"]));
    assert_eq!(result.indirect.len(), 50_000);
    assert_eq!(result.indirect.last().map(String::as_str), Some("leaf"));

    // Dropping a 50k-deep owned tree recurses; unwind it iteratively
    let mut stack = vec![root];
    while let Some(mut n) = stack.pop() {
        stack.append(&mut n.children);
    }
}

// ============================================================================
// Report Threshold
// ============================================================================

#[test]
fn test_threshold_boundaries() {
    let two = Classification {
        direct: names(&["A"]),
        indirect: names(&["B"]),
    };
    assert_eq!(two.total_count(), 2);
    assert!(!two.needs_report());

    let three = Classification {
        direct: names(&["A"]),
        indirect: names(&["B", "C"]),
    };
    assert_eq!(three.total_count(), 3);
    assert!(three.needs_report());
}
