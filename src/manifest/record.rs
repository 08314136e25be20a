//! Raw manifest record shapes.
//!
//! These are the serde types a manifest file deserializes into before any
//! semantic validation. Version strings stay strings here; the loader parses
//! them so that errors carry the originating manifest path.

use serde::Deserialize;

/// One raw manifest file.
///
/// `versions` and `dependencies` are optional in the file and default to
/// empty. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestRecord {
    /// Unique name of the installed system.
    pub name: String,

    /// Installed versions as `MAJOR.MINOR.PATCH` strings.
    #[serde(default)]
    pub versions: Vec<String>,

    /// Declared dependencies on other systems.
    #[serde(default)]
    pub dependencies: Vec<DependencyRecord>,
}

/// One raw dependency entry: the target system and the minimum acceptable
/// version.
#[derive(Debug, Clone, Deserialize)]
pub struct DependencyRecord {
    pub name: String,
    pub version: String,
}
