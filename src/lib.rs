//! depdiff - Dependency difference library
//!
//! This library computes the difference in declared dependencies between
//! two package.json manifests:
//! - Manifests come from local files, git refs, or the npm registry
//! - Differences are reported per section (dependencies, devDependencies,
//!   peerDependencies) as additions, removals, and version changes
//! - Version changes are classified as major, minor, or patch

pub mod cli;
pub mod diff;
pub mod domain;
pub mod error;
pub mod output;
pub mod progress;
pub mod source;
