//! Two-pass consistency checking over the completed registry.
//!
//! Pass A looks inside each system for installed versions colliding on major
//! version. Pass B walks each system's dependencies and classifies every one
//! as missing, versionless, unsatisfied, or satisfied. Both passes run to
//! completion over the whole registry so a single run surfaces every problem.

use crate::audit::finding::{Finding, FindingKind};
use crate::registry::Registry;

/// Checks a fully populated registry for consistency problems.
pub struct ConsistencyChecker<'a> {
    registry: &'a Registry,
}

impl<'a> ConsistencyChecker<'a> {
    /// Create a checker over a completed registry.
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Run both passes and return the accumulated findings.
    ///
    /// Ordering is registry insertion order, pass A before pass B, and
    /// manifest declaration order within a system.
    pub fn run(&self) -> Vec<Finding> {
        let mut findings = Vec::new();
        self.check_version_collisions(&mut findings);
        self.check_dependencies(&mut findings);
        tracing::debug!(
            "checked {} system(s), {} finding(s)",
            self.registry.len(),
            findings.len()
        );
        findings
    }

    /// Pass A: repeated major versions within one system.
    ///
    /// Every repeat emits a finding, so three versions sharing a major
    /// produce two findings, not one.
    fn check_version_collisions(&self, findings: &mut Vec<Finding>) {
        for system in self.registry.iter() {
            let mut seen_majors = Vec::new();
            for version in &system.versions {
                if seen_majors.contains(&version.major) {
                    findings.push(Finding::new(
                        FindingKind::MajorVersionCollision {
                            system: system.name.clone(),
                            major: version.major,
                            versions: system.versions.clone(),
                        },
                        &system.path,
                    ));
                }
                seen_majors.push(version.major);
            }
        }
    }

    /// Pass B: dependency satisfaction across systems.
    fn check_dependencies(&self, findings: &mut Vec<Finding>) {
        for system in self.registry.iter() {
            for dependency in &system.dependencies {
                let kind = match self.registry.get(&dependency.name) {
                    None => FindingKind::MissingDependency {
                        system: system.name.clone(),
                        dependency: dependency.name.clone(),
                        required: dependency.version,
                    },
                    Some(target) if target.versions.is_empty() => {
                        FindingKind::DependencyWithoutVersion {
                            system: system.name.clone(),
                            dependency: dependency.name.clone(),
                            required: dependency.version,
                        }
                    }
                    Some(target) => {
                        if target
                            .versions
                            .iter()
                            .any(|v| v.is_compatible_with(&dependency.version))
                        {
                            continue;
                        }
                        FindingKind::UnsatisfiedDependency {
                            system: system.name.clone(),
                            dependency: dependency.name.clone(),
                            required: dependency.version,
                            installed: target.versions.clone(),
                        }
                    }
                };
                findings.push(Finding::new(kind, &system.path));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Dependency, System};
    use crate::version::Version;
    use std::path::PathBuf;

    fn system(name: &str, versions: Vec<Version>, dependencies: Vec<Dependency>) -> System {
        System {
            path: PathBuf::from(format!("/deploy/{name}/manifest.json")),
            name: name.to_string(),
            versions,
            dependencies,
        }
    }

    fn dep(name: &str, version: Version) -> Dependency {
        Dependency {
            name: name.to_string(),
            version,
        }
    }

    fn registry_of(systems: Vec<System>) -> Registry {
        let mut registry = Registry::new();
        for s in systems {
            registry.insert(s).unwrap();
        }
        registry
    }

    #[test]
    fn consistent_registry_has_no_findings() {
        let registry = registry_of(vec![
            system(
                "app",
                vec![Version::new(1, 0, 0)],
                vec![dep("lib", Version::new(1, 0, 0))],
            ),
            system("lib", vec![Version::new(1, 2, 0)], vec![]),
        ]);

        assert!(ConsistencyChecker::new(&registry).run().is_empty());
    }

    #[test]
    fn detects_major_version_collision_once_per_repeat() {
        let registry = registry_of(vec![system(
            "app",
            vec![Version::new(1, 0, 0), Version::new(1, 5, 0)],
            vec![],
        )]);

        let findings = ConsistencyChecker::new(&registry).run();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind.id(), "major-version-collision");
    }

    #[test]
    fn three_versions_on_one_major_emit_two_findings() {
        let registry = registry_of(vec![system(
            "app",
            vec![
                Version::new(1, 0, 0),
                Version::new(1, 5, 0),
                Version::new(1, 9, 0),
            ],
            vec![],
        )]);

        let findings = ConsistencyChecker::new(&registry).run();

        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn distinct_majors_do_not_collide() {
        let registry = registry_of(vec![system(
            "app",
            vec![Version::new(1, 0, 0), Version::new(2, 0, 0)],
            vec![],
        )]);

        assert!(ConsistencyChecker::new(&registry).run().is_empty());
    }

    #[test]
    fn detects_missing_dependency() {
        let registry = registry_of(vec![system(
            "app",
            vec![],
            vec![dep("ghost", Version::new(1, 0, 0))],
        )]);

        let findings = ConsistencyChecker::new(&registry).run();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind.id(), "missing-dependency");
    }

    #[test]
    fn detects_dependency_without_version() {
        let registry = registry_of(vec![
            system("app", vec![], vec![dep("lib", Version::new(1, 0, 0))]),
            system("lib", vec![], vec![]),
        ]);

        let findings = ConsistencyChecker::new(&registry).run();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind.id(), "dependency-without-version");
    }

    #[test]
    fn detects_unsatisfied_dependency() {
        let registry = registry_of(vec![
            system(
                "app",
                vec![Version::new(1, 0, 0)],
                vec![dep("lib", Version::new(2, 0, 0))],
            ),
            system("lib", vec![Version::new(1, 2, 0)], vec![]),
        ]);

        let findings = ConsistencyChecker::new(&registry).run();

        assert_eq!(findings.len(), 1);
        match &findings[0].kind {
            FindingKind::UnsatisfiedDependency {
                required,
                installed,
                ..
            } => {
                assert_eq!(*required, Version::new(2, 0, 0));
                assert_eq!(installed, &vec![Version::new(1, 2, 0)]);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn any_compatible_version_satisfies() {
        // 1.1.0 is too old, 1.3.0 satisfies; no finding.
        let registry = registry_of(vec![
            system(
                "app",
                vec![Version::new(1, 0, 0)],
                vec![dep("lib", Version::new(1, 2, 0))],
            ),
            system(
                "lib",
                vec![Version::new(1, 1, 0), Version::new(1, 3, 0)],
                vec![],
            ),
        ]);

        assert!(ConsistencyChecker::new(&registry).run().is_empty());
    }

    #[test]
    fn both_passes_run_to_completion() {
        // One system with a collision AND a bad dependency: both surface.
        let registry = registry_of(vec![system(
            "app",
            vec![Version::new(1, 0, 0), Version::new(1, 1, 0)],
            vec![dep("ghost", Version::new(1, 0, 0))],
        )]);

        let findings = ConsistencyChecker::new(&registry).run();

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].kind.id(), "major-version-collision");
        assert_eq!(findings[1].kind.id(), "missing-dependency");
    }

    #[test]
    fn findings_follow_registry_insertion_order() {
        let registry = registry_of(vec![
            system("b", vec![], vec![dep("ghost", Version::new(1, 0, 0))]),
            system("a", vec![], vec![dep("ghost", Version::new(1, 0, 0))]),
        ]);

        let findings = ConsistencyChecker::new(&registry).run();

        assert_eq!(findings[0].kind.system(), "b");
        assert_eq!(findings[1].kind.system(), "a");
    }

    #[test]
    fn self_dependency_is_checked_like_any_other() {
        // A system can depend on itself; satisfaction uses its own versions.
        let registry = registry_of(vec![system(
            "app",
            vec![Version::new(1, 0, 0)],
            vec![dep("app", Version::new(1, 0, 0))],
        )]);

        assert!(ConsistencyChecker::new(&registry).run().is_empty());
    }
}
