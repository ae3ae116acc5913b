//! # Faultline Manifest
//!
//! Typed records and parsing for the two manifest families hubs serve:
//!
//! - [`FaultDefinition`] models a fault definition manifest, keeping the
//!   fields the composition flow reads typed and everything else verbatim
//! - [`EngineManifest`] wraps an engine manifest document and exposes its
//!   experiment slots
//! - [`parser`] holds the text entry points in both directions
//!
//! Manifest text is hub-authored, so parsing is tolerant of nulls and
//! unknown fields but strict about document shape.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod definition;
pub mod engine;
pub mod env;
pub mod error;
pub mod parser;

pub use definition::{FaultDefinition, FaultExecution, FaultMetadata, FaultSpec};
pub use engine::{EngineManifest, ENGINE_API_VERSION, ENGINE_KIND};
pub use env::EnvDecl;
pub use error::{ManifestError, ManifestKind};
pub use parser::{
    parse_engine_manifest, parse_fault_definition, serialize_engine_manifest,
    serialize_fault_definition,
};

/// Current version of the manifest crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
