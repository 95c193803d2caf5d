//! Local manifest file source

use crate::error::SourceError;
use crate::source::{ManifestSource, SourceKind};
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

/// Reads a manifest from a file on disk
pub struct FileSource;

#[async_trait]
impl ManifestSource for FileSource {
    fn kind(&self) -> SourceKind {
        SourceKind::File
    }

    async fn fetch(&self, location: &str) -> Result<Value, SourceError> {
        let path = Path::new(location);

        if !path.exists() {
            return Err(SourceError::file_not_found(path));
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SourceError::read_error(path, e))?;

        serde_json::from_str(&content)
            .map_err(|e| SourceError::json_parse(location, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fetch_valid_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"dependencies": {"lodash": "^4.17.21"}}"#).unwrap();

        let manifest = FileSource.fetch(path.to_str().unwrap()).await.unwrap();
        assert_eq!(manifest["dependencies"]["lodash"], "^4.17.21");
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let err = FileSource
            .fetch("/nonexistent/package.json")
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "not json at all").unwrap();

        let err = FileSource.fetch(path.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, SourceError::JsonParse { .. }));
    }

    #[test]
    fn test_kind() {
        assert_eq!(FileSource.kind(), SourceKind::File);
    }
}
