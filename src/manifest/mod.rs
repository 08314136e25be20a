//! Manifest discovery, parsing, and loading.
//!
//! A manifest is one JSON file describing an installed system: its name, its
//! installed versions, and its declared dependencies. This module covers the
//! ingestion half of a run:
//!
//! - **Discovery** - Recursive filesystem walk yielding raw manifest records
//! - **Records** - The serde shape of a raw manifest file
//! - **Loader** - Per-record validation and registry construction
//! - **Schema** - JSON Schema for the manifest file format

pub mod discovery;
pub mod loader;
pub mod record;
pub mod schema;

pub use discovery::{discover_manifests, DiscoveredManifest};
pub use loader::ManifestLoader;
pub use record::{DependencyRecord, ManifestRecord};
pub use schema::SchemaGenerator;
