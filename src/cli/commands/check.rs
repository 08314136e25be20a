//! Check command implementation.
//!
//! The `stacklint check` command (also the default invocation) runs the full
//! audit pipeline: discover manifests under the root, load them into the
//! registry, run both consistency passes, and render the findings.

use std::path::{Path, PathBuf};

use console::style;

use crate::audit::{
    ConsistencyChecker, Finding, HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter,
};
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::manifest::{discover_manifests, ManifestLoader};
use crate::registry::Registry;

use super::dispatcher::{Command, CommandResult, OutputOptions};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
    output: OutputOptions,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs, output: OutputOptions) -> Self {
        Self { args, output }
    }

    /// Run discovery, loading, and both checker passes, returning the
    /// completed registry and its findings.
    fn audit(&self, root: &Path) -> Result<(Registry, Vec<Finding>)> {
        let manifests = discover_manifests(root)?;

        let mut loader = ManifestLoader::new();
        loader.load_all(&manifests)?;
        let registry = loader.into_registry();

        let findings = ConsistencyChecker::new(&registry).run();
        Ok((registry, findings))
    }

    /// Render findings in the requested format to stdout.
    fn render(&self, format: OutputFormat, findings: &[Finding]) -> std::io::Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match format {
            OutputFormat::Human => {
                HumanFormatter::new(self.output.use_color).format(findings, &mut out)
            }
            OutputFormat::Json => JsonFormatter::new().format(findings, &mut out),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> Result<CommandResult> {
        let format: OutputFormat = self.args.format.parse().map_err(anyhow::Error::msg)?;

        let root = self
            .args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        if !root.is_dir() {
            eprintln!("Root directory not found: {}", root.display());
            return Ok(CommandResult::failure(2));
        }

        let (registry, findings) = self.audit(&root)?;

        if self.output.verbose && format == OutputFormat::Human {
            println!(
                "Checked {} system(s) under {}",
                registry.len(),
                root.display()
            );
        }

        if findings.is_empty() {
            match format {
                OutputFormat::Human => {
                    if !self.output.quiet {
                        let message =
                            format!("All {} installed system(s) are consistent", registry.len());
                        if self.output.use_color {
                            println!("{}", style(message).green());
                        } else {
                            println!("{}", message);
                        }
                    }
                }
                // Tooling still gets a document on success.
                OutputFormat::Json => self.render(format, &findings)?,
            }
            return Ok(CommandResult::success());
        }

        self.render(format, &findings)?;
        Ok(CommandResult::failure(1))
    }
}
