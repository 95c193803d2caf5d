//! Dependency difference engine
//!
//! The engine is pure and synchronous: it takes two already-acquired
//! manifest values plus a [`Scope`](crate::domain::Scope), extracts the
//! scope-selected sections from each side, and compares same-named sections
//! pairwise into an ordered [`DiffReport`]. It holds no state between
//! calls.

mod compare;
mod sections;

pub use compare::{classify, compare_fragments};
pub use sections::resolve_sections;

use crate::domain::{DiffReport, Scope};
use crate::error::DiffError;
use sections::have_same_sections;
use serde_json::Value;

/// Computes all differences between the scope-selected sections of two
/// manifests.
///
/// The result contains every section name the scope implies, each mapped to
/// an ordered, possibly empty, list of difference records. Fails when
/// either manifest is not a JSON object, or when the resolved section keys
/// of the two sides disagree.
pub fn get_differences(old: &Value, new: &Value, scope: Scope) -> Result<DiffReport, DiffError> {
    let old_sections = resolve_sections(old, scope)?;
    let new_sections = resolve_sections(new, scope)?;

    if !have_same_sections(&old_sections, &new_sections) {
        return Err(DiffError::section_mismatch(&old_sections, &new_sections));
    }

    let mut report = DiffReport::new();
    for (name, old_fragment) in &old_sections {
        let new_fragment = &new_sections[name];
        report.insert(name.clone(), compare_fragments(old_fragment, new_fragment));
    }

    Ok(report)
}
