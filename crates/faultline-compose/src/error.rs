//! Composition error taxonomy

use thiserror::Error;

use crate::merge::MergeError;
use faultline_catalog::FetchError;
use faultline_manifest::ManifestError;

/// Everything one `select_fault` invocation can fail with
///
/// Failures are local to the invocation; preview state keeps whatever it
/// last applied and the session carries on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComposeError {
    /// The detail fetch failed before anything was parsed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// A manifest could not be decoded
    #[error("manifest rejected: {0}")]
    Manifest(#[from] ManifestError),

    /// The engine merge rejected its input
    #[error("merge failed: {0}")]
    Merge(#[from] MergeError),
}

impl ComposeError {
    /// Whether the failure happened at the transport layer
    #[inline]
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}
