//! JSON Schema generation for manifest files.
//!
//! This module generates a JSON Schema (Draft-07) for the installation
//! manifest file format, enabling IDE autocomplete and validation.

use serde_json::{json, Value};

/// Generates JSON Schema for installation manifests.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete JSON Schema for a manifest file.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "Installation Manifest",
            "description": "Declarative record of one installed system: its name, installed versions, and declared dependencies",
            "type": "object",
            "required": ["name"],
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Unique name of the installed system"
                },
                "versions": self.versions_schema(),
                "dependencies": self.dependencies_schema()
            }
        })
    }

    /// Generate schema for the versions list.
    fn versions_schema(&self) -> Value {
        json!({
            "type": "array",
            "description": "Installed versions of this system",
            "items": {
                "type": "string",
                "pattern": "^[0-9]+\\.[0-9]+\\.[0-9]+$",
                "description": "A MAJOR.MINOR.PATCH version"
            }
        })
    }

    /// Generate schema for the dependencies list.
    fn dependencies_schema(&self) -> Value {
        json!({
            "type": "array",
            "description": "Systems this installation depends on",
            "items": {
                "type": "object",
                "required": ["name", "version"],
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the target system"
                    },
                    "version": {
                        "type": "string",
                        "pattern": "^[0-9]+\\.[0-9]+\\.[0-9]+$",
                        "description": "Minimum acceptable version within its major line"
                    }
                }
            }
        })
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
