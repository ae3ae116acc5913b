//! Infrastructure variants
//!
//! The closed set of infrastructure types faults can run on, plus the
//! capability flag composition branches on. Adding a variant means
//! extending the enum and answering the capability question once; no
//! call site matches on names.

use serde::{Deserialize, Serialize};

/// Infrastructure a composed fault targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfrastructureKind {
    /// Cluster infrastructure driven through an engine manifest
    Kubernetes,
    /// Host infrastructure driven directly, no engine manifest
    Linux,
}

impl InfrastructureKind {
    /// Whether composition must produce an engine manifest for this variant
    #[inline]
    #[must_use]
    pub const fn uses_engine_manifest(self) -> bool {
        matches!(self, Self::Kubernetes)
    }

    /// Stable lowercase name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kubernetes => "kubernetes",
            Self::Linux => "linux",
        }
    }
}

impl std::fmt::Display for InfrastructureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the active infrastructure type comes from
///
/// Selected elsewhere (navigation context, session settings) and read at
/// composition time; composition never mutates it.
pub trait InfraContext: Send + Sync + std::fmt::Debug {
    /// Infrastructure type in effect for the current session
    fn active(&self) -> InfrastructureKind;
}

impl InfraContext for InfrastructureKind {
    fn active(&self) -> InfrastructureKind {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_flag_per_variant() {
        assert!(InfrastructureKind::Kubernetes.uses_engine_manifest());
        assert!(!InfrastructureKind::Linux.uses_engine_manifest());
    }

    #[test]
    fn serializes_lowercase() {
        let yaml = serde_yaml::to_string(&InfrastructureKind::Kubernetes).unwrap();
        assert_eq!(yaml.trim(), "kubernetes");

        let back: InfrastructureKind = serde_yaml::from_str("linux").unwrap();
        assert_eq!(back, InfrastructureKind::Linux);
    }

    #[test]
    fn a_kind_is_its_own_context() {
        let context: &dyn InfraContext = &InfrastructureKind::Linux;
        assert_eq!(context.active(), InfrastructureKind::Linux);
    }
}
