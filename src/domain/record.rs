//! Difference records produced by a comparison
//!
//! A comparison yields one [`DependencyDiff`] per package whose declared
//! version differs between the two manifests. Fragments and reports are
//! insertion-ordered maps: the order packages appear in the manifest is the
//! order they appear in the output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single section's package-name to version-specifier mapping
pub type Fragment = IndexMap<String, String>;

/// Sections extracted from a manifest, keyed by section name
pub type Sections = IndexMap<String, Fragment>;

/// Comparison result: section name to ordered difference records
pub type DiffReport = IndexMap<String, Vec<DependencyDiff>>;

/// The bucket describing the size of a version change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Added,
    Removed,
    Major,
    Minor,
    Patch,
}

impl DiffKind {
    /// Plain display label
    pub fn label(&self) -> &'static str {
        match self {
            DiffKind::Added => "added",
            DiffKind::Removed => "removed",
            DiffKind::Major => "major",
            DiffKind::Minor => "minor",
            DiffKind::Patch => "patch",
        }
    }
}

/// One package's difference between the old and new manifest
///
/// Exactly one of `old`/`new` is absent for added/removed packages; both are
/// present for changed ones. `kind` is absent when the two versions could
/// not be classified (serialized as `"type": null`, while absent `old`/`new`
/// keys are omitted entirely).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDiff {
    /// Package name
    pub package: String,
    /// Version specifier on the old side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old: Option<String>,
    /// Version specifier on the new side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new: Option<String>,
    /// Change classification
    #[serde(rename = "type")]
    pub kind: Option<DiffKind>,
}

impl DependencyDiff {
    /// The package exists only in the new manifest
    pub fn is_added(&self) -> bool {
        self.old.is_none()
    }

    /// The package exists only in the old manifest
    pub fn is_removed(&self) -> bool {
        self.new.is_none()
    }

    /// The package exists in both manifests with differing values
    pub fn is_changed(&self) -> bool {
        self.old.is_some() && self.new.is_some()
    }
}
