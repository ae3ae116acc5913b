//! Fault detail payloads
//!
//! The full record fetched for a single fault: its documentation, the fault
//! definition manifest text, and an optional engine manifest template. Texts
//! are carried verbatim; parsing happens downstream.

use serde::{Deserialize, Serialize};

/// Everything a hub serves for one fault
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultDetail {
    /// Rendered documentation for the preview panel
    pub documentation: String,
    /// Fault definition manifest, verbatim YAML text
    pub fault_manifest: String,
    /// Engine manifest template, when the hub ships one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_manifest: Option<String>,
}

impl FaultDetail {
    /// Create a detail record without an engine template
    #[inline]
    #[must_use]
    pub fn new(documentation: impl Into<String>, fault_manifest: impl Into<String>) -> Self {
        Self {
            documentation: documentation.into(),
            fault_manifest: fault_manifest.into(),
            engine_manifest: None,
        }
    }

    /// Attach an engine manifest template
    #[inline]
    #[must_use]
    pub fn with_engine_manifest(mut self, engine_manifest: impl Into<String>) -> Self {
        self.engine_manifest = Some(engine_manifest.into());
        self
    }

    /// Whether the fault manifest text is present
    ///
    /// An empty string means the hub serves no manifest for this fault;
    /// whitespace-only text still counts as present and is left to the
    /// parser to reject.
    #[inline]
    #[must_use]
    pub fn has_fault_manifest(&self) -> bool {
        !self.fault_manifest.is_empty()
    }
}
