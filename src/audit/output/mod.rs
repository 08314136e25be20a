//! Report output formatting.
//!
//! Findings are rendered by a formatter selected with `--format`:
//!
//! - [`HumanFormatter`] - terminal-oriented text with optional color
//! - [`JsonFormatter`] - machine-readable JSON for tooling integration

use std::io::Write;
use std::str::FromStr;

use crate::audit::finding::Finding;

pub mod human;
pub mod json;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Output format for check reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Terminal-oriented text.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// Renders a findings list to a writer.
pub trait ReportFormatter {
    /// Write the formatted report for `findings`.
    fn format<W: Write>(&self, findings: &[Finding], writer: &mut W) -> std::io::Result<()>;
}
