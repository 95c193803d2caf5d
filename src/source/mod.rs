//! Manifest acquisition from files, git refs, and the npm registry
//!
//! Each comparison side is described by a source argument like
//! `./package.json`, `git:v1.2.0`, or `npm:express@4.19.2`. The source
//! kind is sniffed from the prefix; an unprefixed argument is treated as a
//! file path.

mod client;
mod file;
mod git;
mod npm;

pub use client::HttpClient;
pub use file::FileSource;
pub use git::GitSource;
pub use npm::NpmSource;

use crate::error::SourceError;
use async_trait::async_trait;
use serde_json::Value;

/// Where a manifest comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A file on disk
    File,
    /// A git ref (branch, tag, or commit) in the current repository
    Git,
    /// A package published to the npm registry
    Npm,
}

impl SourceKind {
    /// Display name for verbose output
    pub fn display_name(&self) -> &'static str {
        match self {
            SourceKind::File => "file",
            SourceKind::Git => "git",
            SourceKind::Npm => "npm",
        }
    }
}

/// A parsed manifest source: its kind plus the location within that kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub kind: SourceKind,
    pub location: String,
}

/// Parses a raw source argument into a source spec.
///
/// Recognized prefixes, case-insensitive: `npm:`, `git:`, `file:`.
/// Anything else defaults to a file path.
pub fn parse_source(input: &str) -> SourceSpec {
    let lower = input.to_lowercase();

    if lower.starts_with("npm:") {
        SourceSpec {
            kind: SourceKind::Npm,
            location: input[4..].to_string(),
        }
    } else if lower.starts_with("git:") {
        SourceSpec {
            kind: SourceKind::Git,
            location: input[4..].to_string(),
        }
    } else if lower.starts_with("file:") {
        SourceSpec {
            kind: SourceKind::File,
            location: input[5..].to_string(),
        }
    } else {
        SourceSpec {
            kind: SourceKind::File,
            location: input.to_string(),
        }
    }
}

/// Trait for manifest sources
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// The source kind this implementation handles
    fn kind(&self) -> SourceKind;

    /// Fetches the manifest at `location` as a parsed JSON value
    async fn fetch(&self, location: &str) -> Result<Value, SourceError>;
}

/// Creates the manifest source for the given kind
pub fn create_source(kind: SourceKind, client: HttpClient) -> Box<dyn ManifestSource> {
    match kind {
        SourceKind::File => Box::new(FileSource),
        SourceKind::Git => Box::new(GitSource),
        SourceKind::Npm => Box::new(NpmSource::new(client)),
    }
}

/// Fetches the manifest described by `spec`
pub async fn fetch_manifest(spec: &SourceSpec, client: &HttpClient) -> Result<Value, SourceError> {
    create_source(spec.kind, client.clone())
        .fetch(&spec.location)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_npm_prefix() {
        let spec = parse_source("npm:express@4.19.2");
        assert_eq!(spec.kind, SourceKind::Npm);
        assert_eq!(spec.location, "express@4.19.2");
    }

    #[test]
    fn test_parse_source_git_prefix() {
        let spec = parse_source("git:v1.2.0");
        assert_eq!(spec.kind, SourceKind::Git);
        assert_eq!(spec.location, "v1.2.0");
    }

    #[test]
    fn test_parse_source_file_prefix() {
        let spec = parse_source("file:./package.json");
        assert_eq!(spec.kind, SourceKind::File);
        assert_eq!(spec.location, "./package.json");
    }

    #[test]
    fn test_parse_source_prefix_is_case_insensitive() {
        assert_eq!(parse_source("NPM:lodash").kind, SourceKind::Npm);
        assert_eq!(parse_source("Git:main").kind, SourceKind::Git);
        assert_eq!(parse_source("FILE:a.json").kind, SourceKind::File);
    }

    #[test]
    fn test_parse_source_preserves_location_case() {
        let spec = parse_source("GIT:Feature/Branch");
        assert_eq!(spec.location, "Feature/Branch");
    }

    #[test]
    fn test_parse_source_defaults_to_file() {
        let spec = parse_source("./some/dir/package.json");
        assert_eq!(spec.kind, SourceKind::File);
        assert_eq!(spec.location, "./some/dir/package.json");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SourceKind::File.display_name(), "file");
        assert_eq!(SourceKind::Git.display_name(), "git");
        assert_eq!(SourceKind::Npm.display_name(), "npm");
    }

    #[test]
    fn test_create_source_kinds() {
        let client = HttpClient::new().unwrap();
        assert_eq!(
            create_source(SourceKind::File, client.clone()).kind(),
            SourceKind::File
        );
        assert_eq!(
            create_source(SourceKind::Git, client.clone()).kind(),
            SourceKind::Git
        );
        assert_eq!(
            create_source(SourceKind::Npm, client).kind(),
            SourceKind::Npm
        );
    }
}
