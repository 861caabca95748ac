//! Package tree resolution
//!
//! [`TreeResolver`] is the seam between the classifier and whatever knows how
//! to turn an import path into a tree. [`GoListResolver`] shells out to
//! `go list -e -deps -json` once and rebuilds the tree from the package
//! listing.

use super::tree::{PackageNode, repository_root};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::process::Command;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors raised while resolving a package tree
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("'{program} list' exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to decode package listing: {source}")]
    InvalidListing {
        #[from]
        source: serde_json::Error,
    },

    #[error("Package not found in listing: {package}")]
    PackageNotFound { package: String },

    #[error("Cannot load package {package}: {message}")]
    PackageError { package: String, message: String },
}

/// Resolve a root package identifier into its dependency tree
pub trait TreeResolver {
    fn resolve(&self, root: &str) -> Result<PackageNode, ResolutionError>;
}

/// One entry of `go list -json` output
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListedPackage {
    pub import_path: String,
    #[serde(default)]
    pub standard: bool,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub module: Option<ListedModule>,
    #[serde(default)]
    pub error: Option<ListedError>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListedModule {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListedError {
    pub err: String,
}

/// Resolver backed by the go toolchain
pub struct GoListResolver {
    program: String,
}

impl GoListResolver {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn list(&self, root: &str) -> Result<Vec<u8>, ResolutionError> {
        debug!("Running {} list -e -deps -json {}", self.program, root);

        let output = Command::new(&self.program)
            .args(["list", "-e", "-deps", "-json", root])
            .output()
            .map_err(|source| ResolutionError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ResolutionError::CommandFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

impl TreeResolver for GoListResolver {
    fn resolve(&self, root: &str) -> Result<PackageNode, ResolutionError> {
        let listing = parse_listing(&self.list(root)?)?;
        build_tree(root, &listing)
    }
}

/// Decode a stream of concatenated `go list -json` objects, keyed by import path
pub fn parse_listing(bytes: &[u8]) -> Result<HashMap<String, ListedPackage>, ResolutionError> {
    let mut packages = HashMap::new();
    for package in serde_json::Deserializer::from_slice(bytes).into_iter::<ListedPackage>() {
        let package = package?;
        packages.insert(package.import_path.clone(), package);
    }
    trace!("Decoded {} listed packages", packages.len());
    Ok(packages)
}

/// Rebuild the import tree of `root` from a package listing
///
/// A package's imports are expanded only at its first occurrence; later
/// occurrences are leaves, which keeps the tree finite on import cycles.
/// Standard library packages are never expanded. Imports missing from the
/// listing (the cgo pseudo-package `C`) become internal leaves.
pub fn build_tree(
    root: &str,
    listing: &HashMap<String, ListedPackage>,
) -> Result<PackageNode, ResolutionError> {
    let root_package = listing
        .get(root)
        .ok_or_else(|| ResolutionError::PackageNotFound {
            package: root.to_string(),
        })?;

    if let Some(error) = &root_package.error {
        return Err(ResolutionError::PackageError {
            package: root.to_string(),
            message: error.err.clone(),
        });
    }

    let project = ProjectScope::of(root_package);
    let mut seen = HashSet::from([root.to_string()]);

    let mut tree = PackageNode::internal(root);
    let mut root_imports = root_package.imports.iter();
    let mut stack: Vec<Expansion<'_>> = Vec::new();

    loop {
        let (imports, children) = match stack.last_mut() {
            Some(expansion) => (&mut expansion.imports, &mut expansion.node.children),
            None => (&mut root_imports, &mut tree.children),
        };

        let Some(import) = imports.next() else {
            match stack.pop() {
                Some(done) => match stack.last_mut() {
                    Some(parent) => parent.node.children.push(done.node),
                    None => tree.children.push(done.node),
                },
                None => return Ok(tree),
            }
            continue;
        };

        let Some(listed) = listing.get(import) else {
            trace!("Import {} not in listing, treating as internal", import);
            children.push(PackageNode::internal(import.as_str()));
            continue;
        };

        let node = PackageNode {
            name: import.clone(),
            internal: listed.standard || project.contains(listed),
            children: Vec::new(),
        };

        if !listed.standard && seen.insert(import.clone()) {
            stack.push(Expansion {
                node,
                imports: listed.imports.iter(),
            });
        } else {
            children.push(node);
        }
    }
}

/// A node whose imports are still being expanded
struct Expansion<'a> {
    node: PackageNode,
    imports: std::slice::Iter<'a, String>,
}

/// Identifies packages belonging to the same project as the root
struct ProjectScope {
    module: Option<String>,
    repository: String,
}

impl ProjectScope {
    fn of(root: &ListedPackage) -> Self {
        Self {
            module: root.module.as_ref().map(|m| m.path.clone()),
            repository: repository_root(&root.import_path).to_string(),
        }
    }

    fn contains(&self, package: &ListedPackage) -> bool {
        match (&self.module, &package.module) {
            (Some(root_module), Some(module)) => root_module == &module.path,
            _ => {
                package.import_path == self.repository
                    || package
                        .import_path
                        .strip_prefix(self.repository.as_str())
                        .is_some_and(|rest| rest.starts_with('/') && !rest.contains("/vendor/"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    include!("resolver.test.rs");
}
