//! Consistency findings.
//!
//! A [`Finding`] describes one violated consistency invariant, tagged by
//! [`FindingKind`] and carrying enough context (system name, offending
//! versions, dependency) to render a message that locates the problem.

use std::fmt;
use std::path::PathBuf;

use crate::version::{format_version_list, Version};

/// One violated consistency invariant.
#[derive(Debug, Clone)]
pub struct Finding {
    /// What went wrong.
    pub kind: FindingKind,
    /// Manifest of the system the finding is about.
    pub path: PathBuf,
}

impl Finding {
    /// Create a finding for the system loaded from `path`.
    pub fn new(kind: FindingKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

/// The kinds of consistency problem a check run can surface.
#[derive(Debug, Clone)]
pub enum FindingKind {
    /// Two installed versions of one system share a major version, leaving
    /// "the" installed version for that major line ambiguous.
    MajorVersionCollision {
        system: String,
        major: u64,
        versions: Vec<Version>,
    },

    /// A dependency names a system no manifest declares.
    MissingDependency {
        system: String,
        dependency: String,
        required: Version,
    },

    /// A dependency's target is listed but has no installed version.
    DependencyWithoutVersion {
        system: String,
        dependency: String,
        required: Version,
    },

    /// The target is installed, but no installed version satisfies the
    /// required minimum within its major line.
    UnsatisfiedDependency {
        system: String,
        dependency: String,
        required: Version,
        installed: Vec<Version>,
    },
}

impl FindingKind {
    /// Stable identifier for this kind, used in report headers and JSON
    /// output.
    pub fn id(&self) -> &'static str {
        match self {
            FindingKind::MajorVersionCollision { .. } => "major-version-collision",
            FindingKind::MissingDependency { .. } => "missing-dependency",
            FindingKind::DependencyWithoutVersion { .. } => "dependency-without-version",
            FindingKind::UnsatisfiedDependency { .. } => "unsatisfied-dependency",
        }
    }

    /// Name of the system the finding is about.
    pub fn system(&self) -> &str {
        match self {
            FindingKind::MajorVersionCollision { system, .. }
            | FindingKind::MissingDependency { system, .. }
            | FindingKind::DependencyWithoutVersion { system, .. }
            | FindingKind::UnsatisfiedDependency { system, .. } => system,
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingKind::MajorVersionCollision {
                system,
                major,
                versions,
            } => write!(
                f,
                "'{system}' declares more than one installed version with major {major}; \
                 installed versions are [{}]",
                format_version_list(versions)
            ),
            FindingKind::MissingDependency {
                system,
                dependency,
                required,
            } => write!(
                f,
                "'{system}' depends on '{dependency}' (>= {required}), \
                 but '{dependency}' is not installed under any version"
            ),
            FindingKind::DependencyWithoutVersion {
                system,
                dependency,
                required,
            } => write!(
                f,
                "'{system}' depends on '{dependency}' (>= {required}), \
                 but '{dependency}' is listed without any installed version"
            ),
            FindingKind::UnsatisfiedDependency {
                system,
                dependency,
                required,
                installed,
            } => write!(
                f,
                "'{system}' depends on '{dependency}' version {required}, \
                 but the only installed versions are [{}]",
                format_version_list(installed)
            ),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_collision_message_names_versions() {
        let finding = Finding::new(
            FindingKind::MajorVersionCollision {
                system: "app".into(),
                major: 1,
                versions: vec![Version::new(1, 0, 0), Version::new(1, 5, 0)],
            },
            "/deploy/app/manifest.json",
        );

        let msg = finding.to_string();
        assert!(msg.contains("app"));
        assert!(msg.contains("major 1"));
        assert!(msg.contains("1.0.0, 1.5.0"));
    }

    #[test]
    fn missing_dependency_message_names_both_systems() {
        let kind = FindingKind::MissingDependency {
            system: "app".into(),
            dependency: "libcache".into(),
            required: Version::new(2, 0, 0),
        };

        let msg = kind.to_string();
        assert!(msg.contains("'app'"));
        assert!(msg.contains("'libcache'"));
        assert!(msg.contains("2.0.0"));
        assert!(msg.contains("not installed"));
    }

    #[test]
    fn dependency_without_version_message() {
        let kind = FindingKind::DependencyWithoutVersion {
            system: "app".into(),
            dependency: "libcache".into(),
            required: Version::new(1, 0, 0),
        };

        assert!(kind.to_string().contains("without any installed version"));
    }

    #[test]
    fn unsatisfied_dependency_message_lists_installed() {
        let kind = FindingKind::UnsatisfiedDependency {
            system: "app".into(),
            dependency: "libcache".into(),
            required: Version::new(2, 0, 0),
            installed: vec![Version::new(1, 2, 0)],
        };

        let msg = kind.to_string();
        assert!(msg.contains("2.0.0"));
        assert!(msg.contains("[1.2.0]"));
    }

    #[test]
    fn kind_ids_are_stable() {
        let required = Version::new(1, 0, 0);
        assert_eq!(
            FindingKind::MajorVersionCollision {
                system: "s".into(),
                major: 1,
                versions: vec![],
            }
            .id(),
            "major-version-collision"
        );
        assert_eq!(
            FindingKind::MissingDependency {
                system: "s".into(),
                dependency: "d".into(),
                required,
            }
            .id(),
            "missing-dependency"
        );
        assert_eq!(
            FindingKind::DependencyWithoutVersion {
                system: "s".into(),
                dependency: "d".into(),
                required,
            }
            .id(),
            "dependency-without-version"
        );
        assert_eq!(
            FindingKind::UnsatisfiedDependency {
                system: "s".into(),
                dependency: "d".into(),
                required,
                installed: vec![],
            }
            .id(),
            "unsatisfied-dependency"
        );
    }

    #[test]
    fn system_accessor_returns_owner() {
        let kind = FindingKind::MissingDependency {
            system: "owner".into(),
            dependency: "d".into(),
            required: Version::new(1, 0, 0),
        };
        assert_eq!(kind.system(), "owner");
    }
}
