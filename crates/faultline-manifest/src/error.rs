//! Manifest error types

use thiserror::Error;

/// Which manifest family an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// Fault definition manifest
    Fault,
    /// Engine manifest
    Engine,
}

impl std::fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fault => write!(f, "fault"),
            Self::Engine => write!(f, "engine"),
        }
    }
}

/// Errors raised while parsing or serializing manifest text
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ManifestError {
    /// The text is not a well-formed manifest of the expected shape
    #[error("malformed {kind} manifest: {message}")]
    Malformed {
        /// Manifest family being parsed
        kind: ManifestKind,
        /// Underlying parse failure
        message: String,
    },

    /// The record could not be rendered back to YAML
    #[error("failed to serialize {kind} manifest: {message}")]
    Serialize {
        /// Manifest family being serialized
        kind: ManifestKind,
        /// Underlying serialize failure
        message: String,
    },
}

impl ManifestError {
    /// Create a malformed-manifest error
    #[inline]
    pub fn malformed(kind: ManifestKind, message: impl Into<String>) -> Self {
        Self::Malformed {
            kind,
            message: message.into(),
        }
    }

    /// Create a serialization error
    #[inline]
    pub fn serialize(kind: ManifestKind, message: impl Into<String>) -> Self {
        Self::Serialize {
            kind,
            message: message.into(),
        }
    }
}
