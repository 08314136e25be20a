//! JSON report formatter.
//!
//! Formats findings as machine-readable JSON for tooling integration.

use std::io::Write;

use serde::Serialize;

use super::ReportFormatter;
use crate::audit::finding::Finding;

/// Formats check output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    findings: Vec<JsonFinding>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFinding {
    kind: String,
    system: String,
    message: String,
    path: String,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    consistent: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, findings: &[Finding], writer: &mut W) -> std::io::Result<()> {
        let json_findings: Vec<_> = findings
            .iter()
            .map(|f| JsonFinding {
                kind: f.kind.id().to_string(),
                system: f.kind.system().to_string(),
                message: f.kind.to_string(),
                path: f.path.display().to_string(),
            })
            .collect();

        let output = JsonOutput {
            summary: JsonSummary {
                total: findings.len(),
                consistent: findings.is_empty(),
            },
            findings: json_findings,
        };

        serde_json::to_writer_pretty(writer, &output).map_err(std::io::Error::other)?;

        Ok(())
    }
}
