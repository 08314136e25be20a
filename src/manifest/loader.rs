//! Manifest loading and per-record validation.
//!
//! The [`ManifestLoader`] consumes discovered records in arrival order and
//! builds the [`Registry`]. All per-run bookkeeping (the visited-directory
//! list, the accumulated registry) lives on the loader itself, constructed
//! fresh per run, so independent runs can coexist in one process.
//!
//! Every failure here is fatal to the whole run: a structurally bad manifest
//! set admits no meaningful consistency analysis, so there is no
//! partial-registry mode.

use std::path::{Path, PathBuf};

use crate::error::{Result, StacklintError};
use crate::manifest::discovery::DiscoveredManifest;
use crate::manifest::record::ManifestRecord;
use crate::registry::{Dependency, Registry, System};
use crate::version::Version;

/// Loads manifests one at a time, validating each and inserting it into the
/// registry.
#[derive(Debug, Default)]
pub struct ManifestLoader {
    visited_directories: Vec<PathBuf>,
    registry: Registry,
}

impl ManifestLoader {
    /// Create a loader with empty per-run state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every discovered manifest in arrival order, stopping at the first
    /// failure.
    pub fn load_all(&mut self, manifests: &[DiscoveredManifest]) -> Result<()> {
        for manifest in manifests {
            self.load(&manifest.path, &manifest.contents)?;
        }
        Ok(())
    }

    /// Load a single raw manifest record.
    ///
    /// Steps, in order: the nesting check against previously accepted
    /// directories, directory bookkeeping, structural parse, version parsing,
    /// identity check, registry insert. The directory is recorded as soon as
    /// the nesting check passes, before content is parsed.
    pub fn load(&mut self, path: &Path, contents: &[u8]) -> Result<()> {
        let directory = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();

        self.check_nesting(path, &directory)?;
        self.visited_directories.push(directory);

        let record: ManifestRecord =
            serde_json::from_slice(contents).map_err(|e| StacklintError::ManifestParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let system = build_system(record, path)?;
        tracing::debug!(
            "loaded system '{}' with {} version(s) from {}",
            system.name,
            system.versions.len(),
            path.display()
        );
        self.registry.insert(system)
    }

    /// Finish loading and hand the completed registry to the checker.
    pub fn into_registry(self) -> Registry {
        self.registry
    }

    /// Fail if `directory` is equal to, a parent of, or a child of any
    /// directory that already produced a manifest.
    ///
    /// Comparison is component-wise, so `/a/lib` is not treated as a parent
    /// of `/a/libextra`. Equal directories count as nested, which also covers
    /// two manifests sitting side by side in one directory.
    fn check_nesting(&self, path: &Path, directory: &Path) -> Result<()> {
        for visited in &self.visited_directories {
            if directory.starts_with(visited) || visited.starts_with(directory) {
                return Err(StacklintError::NestedManifests {
                    path: path.to_path_buf(),
                    directory: directory.to_path_buf(),
                    conflict: visited.clone(),
                    seen: self
                        .visited_directories
                        .iter()
                        .map(|d| d.display().to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                });
            }
        }
        Ok(())
    }
}

/// Convert a parsed record into a validated [`System`], parsing every version
/// string with the manifest path attached for diagnostics.
fn build_system(record: ManifestRecord, path: &Path) -> Result<System> {
    let versions = record
        .versions
        .iter()
        .map(|v| Version::parse(v, path))
        .collect::<Result<Vec<_>>>()?;

    let dependencies = record
        .dependencies
        .into_iter()
        .map(|d| {
            Ok(Dependency {
                version: Version::parse(&d.version, path)?,
                name: d.name,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(System {
        path: path.to_path_buf(),
        name: record.name,
        versions,
        dependencies,
    })
}
