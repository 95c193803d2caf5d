//! Comparison scope for dependency sections
//!
//! A scope selects which package.json sections take part in a comparison:
//! - `deps` -> dependencies
//! - `dev`  -> devDependencies
//! - `peer` -> peerDependencies
//! - `all`  -> all three

use crate::error::DiffError;
use std::fmt;
use std::str::FromStr;

/// All section names, in the order `Scope::All` compares them
const ALL_SECTIONS: [&str; 3] = ["dependencies", "devDependencies", "peerDependencies"];

/// Which dependency sections to compare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Runtime dependencies only
    Deps,
    /// Development dependencies only
    Dev,
    /// Peer dependencies only
    Peer,
    /// All three sections
    All,
}

impl Scope {
    /// Returns the package.json section names this scope selects
    pub fn section_names(&self) -> &'static [&'static str] {
        match self {
            Scope::Deps => &["dependencies"],
            Scope::Dev => &["devDependencies"],
            Scope::Peer => &["peerDependencies"],
            Scope::All => &ALL_SECTIONS,
        }
    }

    /// The CLI name of this scope
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Deps => "deps",
            Scope::Dev => "dev",
            Scope::Peer => "peer",
            Scope::All => "all",
        }
    }
}

impl FromStr for Scope {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deps" => Ok(Scope::Deps),
            "dev" => Ok(Scope::Dev),
            "peer" => Ok(Scope::Peer),
            "all" => Ok(Scope::All),
            other => Err(DiffError::invalid_scope(other)),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
