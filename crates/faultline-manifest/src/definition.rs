//! Fault definition records
//!
//! Typed view of a fault definition manifest. Only the fields the
//! composition flow reads are modeled; everything else is preserved
//! verbatim in flattened maps so a parsed record serializes back without
//! losing hub-authored content.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

use crate::env::EnvDecl;

/// Treat an explicit `null` the same as an absent key
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Metadata block of a fault definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaultMetadata {
    /// Base name of the fault
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Labels, annotations and anything else the hub authored
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FaultMetadata {
    /// Whether the block carries no content
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.extra.is_empty()
    }
}

/// Execution block of a fault definition (`spec.definition`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaultExecution {
    /// Tunables this fault exposes
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub env: Vec<EnvDecl>,
    /// Image, command, permissions and other execution fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FaultExecution {
    /// Whether the block carries no content
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.env.is_empty() && self.extra.is_empty()
    }
}

/// Spec block of a fault definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaultSpec {
    /// Execution block
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "FaultExecution::is_empty"
    )]
    pub definition: FaultExecution,
    /// Remaining spec fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FaultSpec {
    /// Whether the block carries no content
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definition.is_empty() && self.extra.is_empty()
    }
}

/// A parsed fault definition manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaultDefinition {
    /// API version of the custom resource
    #[serde(rename = "apiVersion", default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Resource kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Metadata block
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "FaultMetadata::is_empty"
    )]
    pub metadata: FaultMetadata,
    /// Spec block
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "FaultSpec::is_empty"
    )]
    pub spec: FaultSpec,
    /// Top-level fields outside the modeled shape
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FaultDefinition {
    /// Base name declared in metadata
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    /// Tunables declared under `spec.definition.env`
    #[inline]
    #[must_use]
    pub fn env(&self) -> &[EnvDecl] {
        &self.spec.definition.env
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const POD_DELETE: &str = r"
apiVersion: chaos.faultline.dev/v1alpha1
kind: FaultDefinition
description:
  message: Deletes a pod belonging to a deployment
metadata:
  name: pod-delete
  labels:
    app.kubernetes.io/component: fault-definition
spec:
  definition:
    image: faultline/runner:latest
    env:
      - name: TOTAL_CHAOS_DURATION
        value: '15'
      - name: RAMP_TIME
        value: ''
";

    #[test]
    fn reads_name_and_env() {
        let fault: FaultDefinition = serde_yaml::from_str(POD_DELETE).unwrap();
        assert_eq!(fault.name(), Some("pod-delete"));
        assert_eq!(fault.kind.as_deref(), Some("FaultDefinition"));

        let env = fault.env();
        assert_eq!(env.len(), 2);
        assert_eq!(env[0], EnvDecl::new("TOTAL_CHAOS_DURATION", "15"));
        assert_eq!(env[1], EnvDecl::new("RAMP_TIME", ""));
    }

    #[test]
    fn missing_env_reads_as_empty() {
        let fault: FaultDefinition = serde_yaml::from_str("metadata:\n  name: bare\n").unwrap();
        assert_eq!(fault.name(), Some("bare"));
        assert!(fault.env().is_empty());
    }

    #[test]
    fn null_blocks_are_tolerated() {
        let fault: FaultDefinition =
            serde_yaml::from_str("metadata: null\nspec: null\n").unwrap();
        assert_eq!(fault.name(), None);
        assert!(fault.env().is_empty());

        let fault: FaultDefinition =
            serde_yaml::from_str("spec:\n  definition:\n    env: null\n").unwrap();
        assert!(fault.env().is_empty());
    }

    #[test]
    fn unmodeled_fields_survive_a_round_trip() {
        let fault: FaultDefinition = serde_yaml::from_str(POD_DELETE).unwrap();
        let yaml = serde_yaml::to_string(&fault).unwrap();
        let back: FaultDefinition = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, fault);

        // Fields outside the modeled shape land in the flattened maps
        assert!(fault.extra.contains_key("description"));
        assert!(fault.spec.definition.extra.contains_key("image"));
        assert!(fault.metadata.extra.contains_key("labels"));
    }
}
