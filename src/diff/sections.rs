//! Section extraction from raw manifests

use crate::domain::{Fragment, Scope, Sections};
use crate::error::DiffError;
use serde_json::Value;

/// Extracts the sections selected by `scope` from a raw manifest.
///
/// The result contains exactly the section names the scope implies,
/// regardless of what other keys the manifest carries; a section missing
/// from the manifest becomes an empty fragment. Fails when the manifest
/// value is not a JSON object.
pub fn resolve_sections(manifest: &Value, scope: Scope) -> Result<Sections, DiffError> {
    let object = manifest
        .as_object()
        .ok_or_else(|| DiffError::not_an_object(json_type(manifest)))?;

    let mut sections = Sections::new();
    for &name in scope.section_names() {
        let fragment = match object.get(name) {
            Some(Value::Object(entries)) => entries
                .iter()
                .filter_map(|(package, version)| {
                    version.as_str().map(|v| (package.clone(), v.to_string()))
                })
                .collect(),
            _ => Fragment::new(),
        };
        sections.insert(name.to_string(), fragment);
    }

    Ok(sections)
}

/// Compares the section keys of both sides, in order.
pub(crate) fn have_same_sections(old: &Sections, new: &Sections) -> bool {
    old.len() == new.len() && old.keys().zip(new.keys()).all(|(a, b)| a == b)
}

/// Name of a JSON value's type for error messages
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
