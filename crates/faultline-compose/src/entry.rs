//! Composed fault entries
//!
//! The output of one successful click-composition and the sink it is
//! handed to. Ownership of an entry transfers to the sink on emission;
//! composition keeps no reference afterward.

use serde::{Deserialize, Serialize};

use faultline_manifest::{EngineManifest, FaultDefinition};

/// Relative execution weight stamped on every new entry
pub const DEFAULT_WEIGHT: u32 = 10;

/// One fault selection, fully composed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedFaultEntry {
    /// Generated instance name, base fault name plus suffix
    pub fault_name: String,
    /// Parsed fault definition
    #[serde(rename = "faultCR")]
    pub fault_cr: FaultDefinition,
    /// Merged engine manifest, absent for infrastructure without engines
    #[serde(rename = "engineCR", default, skip_serializing_if = "Option::is_none")]
    pub engine_cr: Option<EngineManifest>,
    /// Relative execution weight, always [`DEFAULT_WEIGHT`] at creation
    pub weight: u32,
}

/// Receives composed entries
///
/// Invoked exactly once per successful click-composition, never for a
/// hover. Implementations must not block.
pub trait EntrySink: Send + Sync + std::fmt::Debug {
    /// Take ownership of a freshly composed entry
    fn on_select(&self, entry: ComposedFaultEntry);
}

impl EntrySink for tokio::sync::mpsc::UnboundedSender<ComposedFaultEntry> {
    fn on_select(&self, entry: ComposedFaultEntry) {
        if self.send(entry).is_err() {
            tracing::debug!("Entry channel closed, dropping composed entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultline_manifest::parse_fault_definition;

    fn sample_entry() -> ComposedFaultEntry {
        let fault_cr = parse_fault_definition("metadata:\n  name: pod-delete\n").unwrap();
        ComposedFaultEntry {
            fault_name: "pod-delete-x7f".to_string(),
            fault_cr,
            engine_cr: None,
            weight: DEFAULT_WEIGHT,
        }
    }

    #[test]
    fn serializes_with_cr_field_names() {
        let mut entry = sample_entry();
        entry.engine_cr = Some(EngineManifest::skeleton("pod-delete-x7f"));
        let yaml = serde_yaml::to_string(&entry).unwrap();
        assert!(yaml.contains("faultName: pod-delete-x7f"));
        assert!(yaml.contains("faultCR:"));
        assert!(yaml.contains("engineCR:"));
        assert!(yaml.contains("weight: 10"));

        let back: ComposedFaultEntry = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn absent_engine_cr_is_omitted() {
        let yaml = serde_yaml::to_string(&sample_entry()).unwrap();
        assert!(!yaml.contains("engineCR"));
    }

    #[test]
    fn non_mapping_engine_cr_is_rejected() {
        let yaml = r"
faultName: pod-delete-x7f
faultCR:
  metadata:
    name: pod-delete
engineCR: 42
weight: 10
";
        let err = serde_yaml::from_str::<ComposedFaultEntry>(yaml).unwrap_err();
        assert!(err.to_string().contains("not a mapping"));
    }

    #[tokio::test]
    async fn channel_sender_is_a_sink() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let sink: &dyn EntrySink = &tx;
        sink.on_select(sample_entry());

        let received = rx.recv().await.unwrap();
        assert_eq!(received.fault_name, "pod-delete-x7f");
        assert_eq!(received.weight, DEFAULT_WEIGHT);
    }

    #[test]
    fn closed_channel_drops_silently() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<ComposedFaultEntry>();
        drop(rx);
        tx.on_select(sample_entry());
    }
}
