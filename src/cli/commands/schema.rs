//! Schema command implementation.
//!
//! The `stacklint schema` command prints the JSON Schema for manifest files,
//! for editor validation and autocomplete.

use crate::cli::args::SchemaArgs;
use crate::error::Result;
use crate::manifest::SchemaGenerator;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand {
    args: SchemaArgs,
}

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new(args: SchemaArgs) -> Self {
        Self { args }
    }

    fn rendered(&self) -> Result<String> {
        let schema = SchemaGenerator::new().generate();
        let text = if self.args.compact {
            serde_json::to_string(&schema)
        } else {
            serde_json::to_string_pretty(&schema)
        };
        Ok(text.map_err(anyhow::Error::from)?)
    }
}

impl Command for SchemaCommand {
    fn execute(&self) -> Result<CommandResult> {
        println!("{}", self.rendered()?);
        Ok(CommandResult::success())
    }
}
