//! # Dependency Module
//!
//! Package tree model, tree resolution, and direct/indirect classification.
//!
//! ## Modules
//!
//! - [`tree`] - Owned package tree produced by a resolver
//! - [`resolver`] - Resolver seam and the `go list` backed implementation
//! - [`classify`] - Direct/indirect partitioning with order-preserving dedup

pub mod classify;
pub mod resolver;
pub mod tree;

pub use classify::{Classification, REPORT_THRESHOLD, classify, total_count};
pub use resolver::{GoListResolver, ResolutionError, TreeResolver};
pub use tree::{PackageNode, repository_root};
