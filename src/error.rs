//! Application error types using thiserror
//!
//! Error hierarchy:
//! - DiffError: comparison precondition failures (scope, manifest shape, sections)
//! - SourceError: manifest acquisition failures (file, git, npm registry)
//! - OutputError: output delivery failures

use crate::domain::Sections;
use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Comparison related errors
    #[error(transparent)]
    Diff(#[from] DiffError),

    /// Manifest acquisition related errors
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Output delivery related errors
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors raised by the comparison core
#[derive(Error, Debug)]
pub enum DiffError {
    /// Scope name outside the closed scope set
    #[error("invalid section scope '{value}': expected 'deps', 'dev', 'peer', or 'all'")]
    InvalidScope { value: String },

    /// Manifest value cannot be sectioned
    #[error("manifest is not a JSON object (found {found})")]
    NotAnObject { found: &'static str },

    /// Resolved section keys differ between the two sides
    #[error("manifests do not contain the same sections: [{old}] vs [{new}]")]
    SectionMismatch { old: String, new: String },
}

impl DiffError {
    /// Creates a new InvalidScope error
    pub fn invalid_scope(value: impl Into<String>) -> Self {
        DiffError::InvalidScope {
            value: value.into(),
        }
    }

    /// Creates a new NotAnObject error
    pub fn not_an_object(found: &'static str) -> Self {
        DiffError::NotAnObject { found }
    }

    /// Creates a new SectionMismatch error from the two resolved sides
    pub fn section_mismatch(old: &Sections, new: &Sections) -> Self {
        let join = |sections: &Sections| sections.keys().cloned().collect::<Vec<_>>().join(", ");
        DiffError::SectionMismatch {
            old: join(old),
            new: join(new),
        }
    }
}

/// Errors raised while acquiring a manifest
#[derive(Error, Debug)]
pub enum SourceError {
    /// Manifest file not found
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content could not be parsed as JSON
    #[error("failed to parse JSON from {origin}: {message}")]
    JsonParse { origin: String, message: String },

    /// git could not produce the manifest for a ref
    #[error("failed to read {file} from git ref '{reference}': {message}")]
    GitShow {
        reference: String,
        file: String,
        message: String,
    },

    /// Package not found in the npm registry
    #[error("package '{package}' not found in npm registry")]
    PackageNotFound { package: String },

    /// Requested version missing from the registry's version list
    #[error("version '{version}' of package '{package}' not found in npm registry")]
    VersionNotFound { package: String, version: String },

    /// Network request failed
    #[error("failed to fetch '{package}' from npm registry: {message}")]
    Network { package: String, message: String },

    /// Unusable response from the registry
    #[error("invalid response from npm registry for '{package}': {message}")]
    InvalidResponse { package: String, message: String },

    /// Timeout
    #[error("timeout while fetching '{package}' from npm registry")]
    Timeout { package: String },

    /// Rate limit exceeded
    #[error("rate limit exceeded for npm registry")]
    RateLimitExceeded,
}

impl SourceError {
    /// Creates a new FileNotFound error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        SourceError::FileNotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SourceError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParse error
    pub fn json_parse(origin: impl Into<String>, message: impl Into<String>) -> Self {
        SourceError::JsonParse {
            origin: origin.into(),
            message: message.into(),
        }
    }

    /// Creates a new GitShow error
    pub fn git_show(
        reference: impl Into<String>,
        file: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        SourceError::GitShow {
            reference: reference.into(),
            file: file.into(),
            message: message.into(),
        }
    }

    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>) -> Self {
        SourceError::PackageNotFound {
            package: package.into(),
        }
    }

    /// Creates a new VersionNotFound error
    pub fn version_not_found(package: impl Into<String>, version: impl Into<String>) -> Self {
        SourceError::VersionNotFound {
            package: package.into(),
            version: version.into(),
        }
    }

    /// Creates a new Network error
    pub fn network(package: impl Into<String>, message: impl Into<String>) -> Self {
        SourceError::Network {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(package: impl Into<String>, message: impl Into<String>) -> Self {
        SourceError::InvalidResponse {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>) -> Self {
        SourceError::Timeout {
            package: package.into(),
        }
    }
}

/// Errors raised while delivering rendered output
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to write the output file
    #[error("failed to write output to {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to stdout or stderr
    #[error("failed to write output to {stream}: {source}")]
    StreamWrite {
        stream: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl OutputError {
    /// Creates a new FileWrite error
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OutputError::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Creates a new StreamWrite error
    pub fn stream_write(stream: &'static str, source: std::io::Error) -> Self {
        OutputError::StreamWrite { stream, source }
    }
}
