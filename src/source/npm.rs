//! npm registry source
//!
//! Fetches a published package's manifest from the npm registry.
//! API endpoint: https://registry.npmjs.org/{package}

use crate::error::SourceError;
use crate::source::{HttpClient, ManifestSource, SourceKind};
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// npm registry base URL
const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Matches a spec carrying a version after its last `@`
static VERSIONED_SPEC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+@\d+.?\d*.?\d*").unwrap());

/// Reads a manifest from the npm registry
pub struct NpmSource {
    client: HttpClient,
}

/// npm package metadata response
#[derive(Debug, Deserialize)]
struct NpmPackageResponse {
    /// Per-version manifests, keyed by version string in publish order
    versions: Map<String, Value>,
}

impl NpmSource {
    /// Create a new npm source
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}", NPM_REGISTRY_URL, package)
    }
}

/// Splits `name@version` into its parts. A spec without a version part
/// selects `latest`; a scoped package's leading `@` stays with the name.
fn split_spec(spec: &str) -> (String, String) {
    if !VERSIONED_SPEC_RE.is_match(spec) {
        return (spec.to_string(), "latest".to_string());
    }

    let mut parts: Vec<&str> = spec.split('@').collect();
    let version = parts.pop().unwrap_or_default().to_string();
    (parts.join("@"), version)
}

#[async_trait]
impl ManifestSource for NpmSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Npm
    }

    async fn fetch(&self, location: &str) -> Result<Value, SourceError> {
        let (name, version) = split_spec(location);
        let url = self.build_url(&name);

        let response: NpmPackageResponse = self.client.get_json(&url, &name).await?;

        // `latest` resolves to the most recently listed version
        let version = if version == "latest" {
            match response.versions.keys().last() {
                Some(last) => last.clone(),
                None => {
                    return Err(SourceError::invalid_response(
                        &name,
                        "registry lists no versions",
                    ))
                }
            }
        } else {
            version
        };

        response
            .versions
            .get(&version)
            .cloned()
            .ok_or_else(|| SourceError::version_not_found(&name, &version))
    }
}
