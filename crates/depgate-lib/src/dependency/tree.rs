//! Rooted package tree produced by a resolver

/// A package and the packages it imports, in import order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNode {
    /// Package identifier (import path)
    pub name: String,
    /// Part of the root project or the standard library rather than a
    /// third-party dependency
    pub internal: bool,
    /// Packages this node imports directly
    pub children: Vec<PackageNode>,
}

impl PackageNode {
    /// Create an external package node without children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            internal: false,
            children: Vec::new(),
        }
    }

    /// Create an internal package node without children
    pub fn internal(name: impl Into<String>) -> Self {
        Self {
            internal: true,
            ..Self::new(name)
        }
    }

    /// Append a child
    pub fn with_child(mut self, child: PackageNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children, keeping their order
    pub fn with_children(mut self, children: impl IntoIterator<Item = PackageNode>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Repository-level prefix of an import path: the host segment plus the two
/// path segments after it (`github.com/owner/repo`). Paths with fewer than
/// three segments are returned unchanged.
pub fn repository_root(name: &str) -> &str {
    match name.match_indices('/').nth(2) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    include!("tree.test.rs");
}
