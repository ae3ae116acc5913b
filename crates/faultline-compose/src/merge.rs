//! Engine manifest merge
//!
//! Folds a fault's environment declarations into the first experiment slot
//! of a base engine manifest (`spec.experiments[0].spec.components.env`).
//! Declarations replace same-named entries already present in the template
//! and are appended otherwise; template entries the fault does not declare
//! are kept. Missing intermediate blocks below the experiment slot are
//! created, a missing or empty experiment list is an error.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use faultline_manifest::{EngineManifest, EnvDecl};

/// Errors raised while merging env declarations into an engine manifest
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MergeError {
    /// The manifest has no experiment slot to merge into
    #[error("engine manifest has no experiment slot")]
    MissingExperiments,

    /// A block along the merge path has the wrong shape
    #[error("engine manifest path '{path}' is not a {expected}")]
    InvalidShape {
        /// Path of the offending block
        path: &'static str,
        /// Shape the merge requires there
        expected: &'static str,
    },

    /// An env declaration could not be encoded into the manifest
    #[error("env encode failed: {0}")]
    Encode(String),
}

impl MergeError {
    /// Create a shape error
    #[inline]
    pub(crate) fn invalid_shape(path: &'static str, expected: &'static str) -> Self {
        Self::InvalidShape { path, expected }
    }
}

/// Merges fault env declarations into engine manifests
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineMerger;

impl EngineMerger {
    /// Create a merger
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Merge `env` into the first experiment slot of `base`
    ///
    /// Consumes the base and returns the merged manifest; on error the
    /// base is discarded and no partial merge escapes.
    pub async fn merge(
        &self,
        mut base: EngineManifest,
        env: &[EnvDecl],
    ) -> Result<EngineManifest, MergeError> {
        tracing::debug!("Merging {} env declaration(s) into engine manifest", env.len());
        {
            let doc = base.value_mut();
            let spec = doc.get_mut("spec").ok_or(MergeError::MissingExperiments)?;
            if !spec.is_mapping() {
                return Err(MergeError::invalid_shape("spec", "mapping"));
            }
            let experiments = spec
                .get_mut("experiments")
                .ok_or(MergeError::MissingExperiments)?;
            if experiments.is_null() {
                return Err(MergeError::MissingExperiments);
            }
            let slots = experiments
                .as_sequence_mut()
                .ok_or_else(|| MergeError::invalid_shape("spec.experiments", "sequence"))?;
            let first = slots.first_mut().ok_or(MergeError::MissingExperiments)?;
            let experiment = first
                .as_mapping_mut()
                .ok_or_else(|| MergeError::invalid_shape("spec.experiments[0]", "mapping"))?;

            let experiment_spec =
                ensure_mapping(experiment, "spec", "spec.experiments[0].spec")?;
            let components = ensure_mapping(
                experiment_spec,
                "components",
                "spec.experiments[0].spec.components",
            )?;
            let entries = ensure_sequence(
                components,
                "env",
                "spec.experiments[0].spec.components.env",
            )?;

            for decl in env {
                let value = serde_yaml::to_value(decl)
                    .map_err(|err| MergeError::Encode(err.to_string()))?;
                upsert(entries, &decl.name, value);
            }
        }
        Ok(base)
    }
}

/// Fetch `key` from `parent` as a mapping, creating it when absent or null
fn ensure_mapping<'a>(
    parent: &'a mut Mapping,
    key: &str,
    path: &'static str,
) -> Result<&'a mut Mapping, MergeError> {
    let slot = parent
        .entry(Value::from(key))
        .or_insert_with(|| Value::Mapping(Mapping::new()));
    if slot.is_null() {
        *slot = Value::Mapping(Mapping::new());
    }
    slot.as_mapping_mut()
        .ok_or_else(|| MergeError::invalid_shape(path, "mapping"))
}

/// Fetch `key` from `parent` as a sequence, creating it when absent or null
fn ensure_sequence<'a>(
    parent: &'a mut Mapping,
    key: &str,
    path: &'static str,
) -> Result<&'a mut Vec<Value>, MergeError> {
    let slot = parent
        .entry(Value::from(key))
        .or_insert_with(|| Value::Sequence(Vec::new()));
    if slot.is_null() {
        *slot = Value::Sequence(Vec::new());
    }
    slot.as_sequence_mut()
        .ok_or_else(|| MergeError::invalid_shape(path, "sequence"))
}

/// Replace the entry named `name`, or append when absent
fn upsert(entries: &mut Vec<Value>, name: &str, value: Value) {
    let existing = entries
        .iter()
        .position(|entry| entry.get("name").and_then(Value::as_str) == Some(name));
    match existing {
        Some(index) => entries[index] = value,
        None => entries.push(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultline_manifest::parse_engine_manifest;

    const TEMPLATE: &str = r"
apiVersion: chaos.faultline.dev/v1alpha1
kind: FaultEngine
spec:
  experiments:
    - name: pod-delete
      spec:
        components:
          env:
            - name: TOTAL_CHAOS_DURATION
              value: '15'
            - name: CHAOS_INTERVAL
              value: '10'
";

    #[tokio::test]
    async fn declared_env_replaces_template_entries() {
        let base = parse_engine_manifest(TEMPLATE).unwrap();
        let env = [
            EnvDecl::new("TOTAL_CHAOS_DURATION", "30"),
            EnvDecl::new("FORCE", "true"),
        ];
        let merged = EngineMerger::new().merge(base, &env).await.unwrap();

        let entries = merged.experiment_env(0);
        assert_eq!(
            entries,
            vec![
                EnvDecl::new("TOTAL_CHAOS_DURATION", "30"),
                EnvDecl::new("CHAOS_INTERVAL", "10"),
                EnvDecl::new("FORCE", "true"),
            ]
        );
    }

    #[tokio::test]
    async fn merge_into_skeleton_appends_everything() {
        let base = EngineManifest::skeleton("pod-delete-abc");
        let env = [EnvDecl::new("DURATION", "30")];
        let merged = EngineMerger::new().merge(base, &env).await.unwrap();
        assert_eq!(merged.experiment_env(0), vec![EnvDecl::new("DURATION", "30")]);
        assert_eq!(merged.experiment_name(0), Some("pod-delete-abc"));
    }

    #[tokio::test]
    async fn empty_declarations_leave_template_untouched() {
        let base = parse_engine_manifest(TEMPLATE).unwrap();
        let merged = EngineMerger::new().merge(base.clone(), &[]).await.unwrap();
        assert_eq!(merged, base);
    }

    #[tokio::test]
    async fn missing_experiments_is_an_error() {
        let base = parse_engine_manifest("kind: FaultEngine\nspec: {}\n").unwrap();
        let err = EngineMerger::new()
            .merge(base, &[EnvDecl::new("X", "1")])
            .await
            .unwrap_err();
        assert_eq!(err, MergeError::MissingExperiments);

        let base = parse_engine_manifest("kind: FaultEngine\n").unwrap();
        let err = EngineMerger::new().merge(base, &[]).await.unwrap_err();
        assert_eq!(err, MergeError::MissingExperiments);

        let base = parse_engine_manifest("spec:\n  experiments: []\n").unwrap();
        let err = EngineMerger::new().merge(base, &[]).await.unwrap_err();
        assert_eq!(err, MergeError::MissingExperiments);
    }

    #[tokio::test]
    async fn wrong_shapes_are_rejected_with_their_path() {
        let base = parse_engine_manifest("spec:\n  experiments:\n    key: value\n").unwrap();
        let err = EngineMerger::new().merge(base, &[]).await.unwrap_err();
        assert_eq!(err.to_string(), "engine manifest path 'spec.experiments' is not a sequence");

        let base = parse_engine_manifest("spec:\n  experiments:\n    - just-a-name\n").unwrap();
        let err = EngineMerger::new().merge(base, &[]).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "engine manifest path 'spec.experiments[0]' is not a mapping"
        );

        let base =
            parse_engine_manifest("spec:\n  experiments:\n    - name: x\n      spec: 42\n").unwrap();
        let err = EngineMerger::new().merge(base, &[]).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "engine manifest path 'spec.experiments[0].spec' is not a mapping"
        );
    }

    #[tokio::test]
    async fn missing_blocks_below_the_slot_are_created() {
        let base = parse_engine_manifest("spec:\n  experiments:\n    - name: bare\n").unwrap();
        let merged = EngineMerger::new()
            .merge(base, &[EnvDecl::new("DURATION", "30")])
            .await
            .unwrap();
        assert_eq!(merged.experiment_env(0), vec![EnvDecl::new("DURATION", "30")]);
    }

    #[tokio::test]
    async fn null_env_block_is_replaced() {
        let text = "spec:\n  experiments:\n    - name: x\n      spec:\n        components:\n          env: null\n";
        let base = parse_engine_manifest(text).unwrap();
        let merged = EngineMerger::new()
            .merge(base, &[EnvDecl::new("DURATION", "30")])
            .await
            .unwrap();
        assert_eq!(merged.experiment_env(0), vec![EnvDecl::new("DURATION", "30")]);
    }
}
