//! Hub and fault identity
//!
//! Provides [`HubId`] for the hub a catalog was served from and
//! [`FaultRef`] for the fully-qualified coordinates of one fault.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Identifier of the hub a catalog (and its fault details) is served from
///
/// Assigned by the catalog supplier; opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HubId(String);

impl HubId {
    /// Create a hub identifier
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for HubId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HubId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for HubId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Fully-qualified fault coordinates: (hub, category, fault name)
///
/// This is the key a detail fetch is issued against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaultRef {
    hub: HubId,
    category: String,
    fault: String,
}

impl FaultRef {
    /// Create fault coordinates
    #[inline]
    #[must_use]
    pub fn new(hub: HubId, category: impl Into<String>, fault: impl Into<String>) -> Self {
        Self {
            hub,
            category: category.into(),
            fault: fault.into(),
        }
    }

    /// Hub the fault lives in
    #[inline]
    #[must_use]
    pub fn hub(&self) -> &HubId {
        &self.hub
    }

    /// Category the fault is listed under
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Fault name within the category
    #[inline]
    #[must_use]
    pub fn fault(&self) -> &str {
        &self.fault
    }
}

impl Display for FaultRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.hub, self.category, self.fault)
    }
}
