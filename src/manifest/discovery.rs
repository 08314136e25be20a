//! Manifest discovery by filesystem walk.
//!
//! Discovery is the loader's record source: given a root directory it yields
//! every `*.json` file beneath it, recursively, as a path plus the raw file
//! contents. Selection is by extension only; content validation belongs to the
//! loader.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A manifest file found during the walk, before any validation.
#[derive(Debug, Clone)]
pub struct DiscoveredManifest {
    /// Where the file was found.
    pub path: PathBuf,
    /// Raw file contents.
    pub contents: Vec<u8>,
}

/// Recursively collect every `*.json` file under `root`.
///
/// Entries are visited in sorted order per directory so that two runs over the
/// same tree always arrive in the same order. The consistency invariants do
/// not depend on this order; only report ordering does.
pub fn discover_manifests(root: &Path) -> Result<Vec<DiscoveredManifest>> {
    let mut manifests = Vec::new();
    walk(root, &mut manifests)?;
    tracing::debug!(
        "discovered {} manifest(s) under {}",
        manifests.len(),
        root.display()
    );
    Ok(manifests)
}

fn walk(dir: &Path, manifests: &mut Vec<DiscoveredManifest>) -> Result<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            walk(&path, manifests)?;
        } else if path.extension().map(|e| e == "json").unwrap_or(false) {
            tracing::debug!("found manifest {}", path.display());
            let contents = fs::read(&path)?;
            manifests.push(DiscoveredManifest { path, contents });
        }
    }

    Ok(())
}
