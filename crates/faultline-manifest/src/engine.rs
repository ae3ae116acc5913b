//! Engine manifest
//!
//! The engine manifest drives fault execution on a cluster. Hubs author
//! these templates freely, so the record is a thin wrapper over a YAML
//! mapping rather than a fixed struct; accessors expose the experiment
//! slots the composition flow cares about.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::env::EnvDecl;
use crate::error::{ManifestError, ManifestKind};

/// API version stamped on generated engine manifests
pub const ENGINE_API_VERSION: &str = "chaos.faultline.dev/v1alpha1";

/// Resource kind stamped on generated engine manifests
pub const ENGINE_KIND: &str = "FaultEngine";

/// A parsed engine manifest
///
/// Invariant: the wrapped value is always a YAML mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EngineManifest(Value);

// Deserialization goes through `from_value` so embedded manifests, such
// as the `engineCR` field of a composed entry, uphold the mapping
// invariant too.
impl<'de> Deserialize<'de> for EngineManifest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl EngineManifest {
    /// Wrap a parsed YAML document, rejecting anything but a mapping
    pub fn from_value(value: Value) -> Result<Self, ManifestError> {
        if value.is_mapping() {
            Ok(Self(value))
        } else {
            Err(ManifestError::malformed(
                ManifestKind::Engine,
                "document is not a mapping",
            ))
        }
    }

    /// Build a minimal engine manifest with one empty experiment slot
    ///
    /// Used when a fault ships no engine template of its own.
    #[must_use]
    pub fn skeleton(experiment_name: &str) -> Self {
        let mut components = Mapping::new();
        components.insert(Value::from("env"), Value::Sequence(Vec::new()));

        let mut experiment_spec = Mapping::new();
        experiment_spec.insert(Value::from("components"), Value::Mapping(components));

        let mut experiment = Mapping::new();
        experiment.insert(Value::from("name"), Value::from(experiment_name));
        experiment.insert(Value::from("spec"), Value::Mapping(experiment_spec));

        let mut spec = Mapping::new();
        spec.insert(
            Value::from("experiments"),
            Value::Sequence(vec![Value::Mapping(experiment)]),
        );

        let mut root = Mapping::new();
        root.insert(Value::from("apiVersion"), Value::from(ENGINE_API_VERSION));
        root.insert(Value::from("kind"), Value::from(ENGINE_KIND));
        root.insert(Value::from("spec"), Value::Mapping(spec));

        Self(Value::Mapping(root))
    }

    /// Borrow the underlying document
    #[inline]
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Mutably borrow the underlying document
    #[inline]
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.0
    }

    /// Unwrap into the underlying document
    #[inline]
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    fn experiment(&self, index: usize) -> Option<&Value> {
        self.0.get("spec")?.get("experiments")?.get(index)
    }

    /// Name of the experiment at `index`
    #[must_use]
    pub fn experiment_name(&self, index: usize) -> Option<&str> {
        self.experiment(index)?.get("name")?.as_str()
    }

    /// Env entries of the experiment at `index`
    ///
    /// Entries that do not look like `name`/`value` pairs are skipped.
    #[must_use]
    pub fn experiment_env(&self, index: usize) -> Vec<EnvDecl> {
        let Some(entries) = self
            .experiment(index)
            .and_then(|experiment| experiment.get("spec"))
            .and_then(|spec| spec.get("components"))
            .and_then(|components| components.get("env"))
            .and_then(Value::as_sequence)
        else {
            return Vec::new();
        };
        entries
            .iter()
            .filter_map(|entry| serde_yaml::from_value(entry.clone()).ok())
            .collect()
    }
}
