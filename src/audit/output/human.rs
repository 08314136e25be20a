//! Human-readable report formatter.
//!
//! Formats findings for terminal display with optional color support.

use std::io::Write;

use console::style;

use super::ReportFormatter;
use crate::audit::finding::Finding;

/// Formats check output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn header(&self, finding: &Finding) -> String {
        if self.use_color {
            format!(
                "{}{}{}{}: {}",
                style("error").red().bold(),
                style("[").dim(),
                finding.kind.id(),
                style("]").dim(),
                finding.kind
            )
        } else {
            format!("error[{}]: {}", finding.kind.id(), finding.kind)
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, findings: &[Finding], writer: &mut W) -> std::io::Result<()> {
        for finding in findings {
            writeln!(writer, "{}", self.header(finding))?;
            writeln!(writer, "  --> {}", finding.path.display())?;
            writeln!(writer)?;
        }

        if !findings.is_empty() {
            writeln!(writer, "Found {} problem(s)", findings.len())?;
        }

        Ok(())
    }
}
