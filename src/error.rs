//! Error types for stacklint operations.
//!
//! This module defines [`StacklintError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `StacklintError` covers the fatal tier: structural problems that make the
//!   manifest set itself ill-formed, so the run aborts with no report
//! - Consistency problems in a well-formed set are not errors; they are
//!   collected as [`crate::audit::Finding`]s and reported together
//! - Use `anyhow::Error` (via `StacklintError::Other`) for unexpected errors
//! - All errors should name the offending path(s) so the user can fix the
//!   input without re-running with extra verbosity

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for stacklint operations.
#[derive(Debug, Error)]
pub enum StacklintError {
    /// A version string did not have the `MAJOR.MINOR.PATCH` shape.
    #[error("invalid version '{version}' in {path}: expected three dot-separated non-negative integers")]
    MalformedVersion { version: String, path: PathBuf },

    /// A manifest was discovered in a directory nested with (or equal to)
    /// a directory that already produced a manifest.
    #[error("manifest {path} lives in {directory}, which is the same as, a parent of, or a child of already scanned directory {conflict} (scanned so far: {seen})")]
    NestedManifests {
        path: PathBuf,
        directory: PathBuf,
        conflict: PathBuf,
        seen: String,
    },

    /// Two manifests declared the same system name.
    #[error("system '{name}' is declared twice, first in {first} and again in {second}")]
    DuplicateSystem {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Failed to parse a manifest file.
    #[error("failed to parse manifest {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for stacklint operations.
pub type Result<T> = std::result::Result<T, StacklintError>;
