//! Git revision source
//!
//! Extracts the manifest committed at a git ref (branch, tag, or commit)
//! in the current repository via `git show`.

use crate::error::SourceError;
use crate::source::{ManifestSource, SourceKind};
use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;

/// Manifest file looked up inside the ref
const MANIFEST_FILE: &str = "package.json";

/// Reads a manifest from a git ref
pub struct GitSource;

#[async_trait]
impl ManifestSource for GitSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Git
    }

    async fn fetch(&self, location: &str) -> Result<Value, SourceError> {
        let spec = format!("{}:{}", location, MANIFEST_FILE);

        let output = Command::new("git")
            .args(["show", &spec])
            .output()
            .await
            .map_err(|e| SourceError::git_show(location, MANIFEST_FILE, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SourceError::git_show(
                location,
                MANIFEST_FILE,
                stderr.trim().to_string(),
            ));
        }

        let content = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&content).map_err(|e| {
            SourceError::json_parse(format!("git ref '{}'", location), e.to_string())
        })
    }
}
