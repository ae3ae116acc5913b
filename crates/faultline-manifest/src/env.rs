//! Environment variable declarations
//!
//! The tunables a fault definition exposes and an engine manifest consumes.
//! Declarations keep their YAML shape (`name`/`value` pairs) so they survive
//! a round trip through either manifest unchanged.

use serde::{Deserialize, Serialize};

/// One environment variable declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvDecl {
    /// Variable name, the merge key
    pub name: String,
    /// Variable value; absent when the manifest leaves it unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl EnvDecl {
    /// Create a declaration with a value
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Create a declaration with no value
    #[inline]
    #[must_use]
    pub fn unset(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}
