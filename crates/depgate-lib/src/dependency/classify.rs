//! Direct / indirect dependency classification
//!
//! Splits a resolved package tree into the root's external first-level
//! imports ("direct") and every external package reachable below them
//! ("indirect"). Internal nodes are excluded from both lists but their
//! subtrees are still walked. Both lists keep first-seen order and never
//! share a name.

use super::tree::PackageNode;
use std::collections::HashSet;
use tracing::trace;

/// Totals above this value warrant a report and confirmation
pub const REPORT_THRESHOLD: usize = 2;

/// Result of classifying a package tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// External packages imported by the root, in import order
    pub direct: Vec<String>,
    /// External packages reachable below the direct layer, depth-first
    /// pre-order, excluding anything in `direct`
    pub indirect: Vec<String>,
}

impl Classification {
    /// Number of distinct dependencies across both tiers
    pub fn total_count(&self) -> usize {
        self.direct.len() + self.indirect.len()
    }

    /// Whether the footprint is large enough to report before forwarding
    pub fn needs_report(&self) -> bool {
        self.total_count() > REPORT_THRESHOLD
    }
}

/// Classify the dependencies of `root`
pub fn classify(root: &PackageNode) -> Classification {
    let mut direct = Vec::new();
    let mut indirect = Vec::new();

    for child in &root.children {
        if !child.internal {
            direct.push(child.name.clone());
        }
        walk_subtree(child, &mut indirect);
    }

    let direct = unique(direct, &[]);
    let indirect = unique(indirect, &direct);

    trace!(
        root = %root.name,
        direct = direct.len(),
        indirect = indirect.len(),
        "Classified dependency tree"
    );

    Classification { direct, indirect }
}

/// Convenience wrapper over [`Classification::total_count`]
pub fn total_count(result: &Classification) -> usize {
    result.total_count()
}

/// Collect external names strictly below `node`, depth-first pre-order
fn walk_subtree(node: &PackageNode, out: &mut Vec<String>) {
    // Children are pushed in reverse so they pop in import order
    let mut stack: Vec<&PackageNode> = node.children.iter().rev().collect();

    while let Some(current) = stack.pop() {
        if !current.internal {
            out.push(current.name.clone());
        }
        stack.extend(current.children.iter().rev());
    }
}

/// Keep the first occurrence of each name, dropping anything in `exclude`
fn unique(names: Vec<String>, exclude: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = exclude.iter().cloned().collect();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    include!("classify.test.rs");
}
