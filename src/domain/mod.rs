//! Core domain models for depdiff
//!
//! This module contains the fundamental types used throughout the
//! application:
//! - Comparison scope and its section-name mapping
//! - Difference records and classification kinds
//! - Ordered fragment/section/report aliases

mod record;
mod scope;

pub use record::{DependencyDiff, DiffKind, DiffReport, Fragment, Sections};
pub use scope::Scope;
