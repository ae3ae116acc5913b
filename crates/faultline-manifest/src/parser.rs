//! Manifest text parsing
//!
//! Entry points that turn verbatim manifest text into typed records and
//! back. Text arrives exactly as a hub serves it; all tolerance for odd
//! shapes lives in the record types, not here.

use serde_yaml::Value;

use crate::definition::FaultDefinition;
use crate::engine::EngineManifest;
use crate::error::{ManifestError, ManifestKind};

/// Parse fault definition text into a typed record
pub fn parse_fault_definition(text: &str) -> Result<FaultDefinition, ManifestError> {
    if text.trim().is_empty() {
        return Err(ManifestError::malformed(ManifestKind::Fault, "empty document"));
    }
    serde_yaml::from_str(text)
        .map_err(|err| ManifestError::malformed(ManifestKind::Fault, err.to_string()))
}

/// Parse engine manifest text into a typed record
pub fn parse_engine_manifest(text: &str) -> Result<EngineManifest, ManifestError> {
    if text.trim().is_empty() {
        return Err(ManifestError::malformed(ManifestKind::Engine, "empty document"));
    }
    let value: Value = serde_yaml::from_str(text)
        .map_err(|err| ManifestError::malformed(ManifestKind::Engine, err.to_string()))?;
    EngineManifest::from_value(value)
}

/// Render a fault definition back to YAML text
pub fn serialize_fault_definition(fault: &FaultDefinition) -> Result<String, ManifestError> {
    serde_yaml::to_string(fault)
        .map_err(|err| ManifestError::serialize(ManifestKind::Fault, err.to_string()))
}

/// Render an engine manifest back to YAML text
pub fn serialize_engine_manifest(engine: &EngineManifest) -> Result<String, ManifestError> {
    serde_yaml::to_string(engine.as_value())
        .map_err(|err| ManifestError::serialize(ManifestKind::Engine, err.to_string()))
}
