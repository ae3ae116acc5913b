//! Fault composition orchestrator
//!
//! Drives the end-to-end flow for one user action on a catalog fault:
//! fetch the detail payload, update preview state, and, for a click,
//! parse the manifests, merge engine env, generate the instance name and
//! emit the composed entry. Each call is sequential internally; calls
//! overlap freely and preview consistency comes from the sequence rule
//! in [`PreviewState`].

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use faultline_catalog::{FaultDetailSource, FaultRef, HubId};
use faultline_manifest::{parse_engine_manifest, parse_fault_definition, EngineManifest};

use crate::entry::{ComposedFaultEntry, EntrySink, DEFAULT_WEIGHT};
use crate::error::ComposeError;
use crate::infra::InfraContext;
use crate::merge::EngineMerger;
use crate::naming::{AlphanumericSuffix, SuffixGenerator, DEFAULT_SUFFIX_LENGTH};
use crate::preview::PreviewState;

/// Tunables for the composition flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Characters appended to the base fault name
    pub suffix_length: usize,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            suffix_length: DEFAULT_SUFFIX_LENGTH,
        }
    }
}

impl ComposerConfig {
    /// Create the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the suffix length
    #[inline]
    #[must_use]
    pub fn with_suffix_length(mut self, suffix_length: usize) -> Self {
        self.suffix_length = suffix_length;
        self
    }
}

/// Composes catalog faults into runnable entries
///
/// One composer serves one browsing session against one hub. Preview
/// state is owned by the session and shared in; the composer only takes
/// short locks on it and never holds one across an await.
#[derive(Debug)]
pub struct FaultComposer {
    hub: HubId,
    source: Arc<dyn FaultDetailSource>,
    sink: Arc<dyn EntrySink>,
    infra: Arc<dyn InfraContext>,
    namer: Arc<dyn SuffixGenerator>,
    merger: EngineMerger,
    preview: Arc<Mutex<PreviewState>>,
    config: ComposerConfig,
}

impl FaultComposer {
    /// Create a composer with the default suffix generator and config
    #[must_use]
    pub fn new(
        hub: HubId,
        source: Arc<dyn FaultDetailSource>,
        sink: Arc<dyn EntrySink>,
        infra: Arc<dyn InfraContext>,
        preview: Arc<Mutex<PreviewState>>,
    ) -> Self {
        Self {
            hub,
            source,
            sink,
            infra,
            namer: Arc::new(AlphanumericSuffix::new()),
            merger: EngineMerger::new(),
            preview,
            config: ComposerConfig::default(),
        }
    }

    /// Replace the configuration
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: ComposerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the suffix generator
    #[inline]
    #[must_use]
    pub fn with_suffix_generator(mut self, namer: Arc<dyn SuffixGenerator>) -> Self {
        self.namer = namer;
        self
    }

    /// Hub this composer browses
    #[inline]
    #[must_use]
    pub fn hub(&self) -> &HubId {
        &self.hub
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> ComposerConfig {
        self.config
    }

    /// Handle to the shared preview state
    #[inline]
    #[must_use]
    pub fn preview_state(&self) -> Arc<Mutex<PreviewState>> {
        Arc::clone(&self.preview)
    }

    /// Record the pointer leaving the fault rows
    pub fn hover_exit(&self) {
        tracing::debug!("Hover exit, hiding preview panel");
        self.preview.lock().hover_exit();
    }

    /// Handle one hover (`view_only`) or click on a catalog fault
    ///
    /// Fetches the fault's detail, applies it to preview state under the
    /// newest-completion rule, and for a click composes and emits an
    /// entry. A click on a fault whose manifest text is empty updates the
    /// preview and adds nothing. Errors are local to this call; earlier
    /// preview content stays applied.
    pub async fn select_fault(
        &self,
        category: &str,
        fault: &str,
        view_only: bool,
    ) -> Result<(), ComposeError> {
        let fault_ref = FaultRef::new(self.hub.clone(), category, fault);
        let seq = self.preview.lock().begin(fault_ref.clone());
        tracing::debug!("Fetching detail for {} (request {})", fault_ref, seq);

        let detail = self.source.fetch(&fault_ref).await.map_err(|err| {
            tracing::warn!("Detail fetch failed for {}: {}", fault_ref, err);
            err
        })?;

        let applied = self
            .preview
            .lock()
            .complete(seq, detail.documentation.clone());
        if !applied {
            tracing::debug!("Discarding stale preview for {} (request {})", fault_ref, seq);
        }

        if view_only {
            return Ok(());
        }
        if !detail.has_fault_manifest() {
            tracing::debug!("Empty fault manifest for {}, nothing to add", fault_ref);
            return Ok(());
        }

        let fault_cr = parse_fault_definition(&detail.fault_manifest)?;
        let base_name = fault_cr.name().unwrap_or_default();
        let suffix = self.namer.suffix(base_name, self.config.suffix_length);
        let fault_name = format!("{base_name}-{suffix}");

        let infra = self.infra.active();
        let engine_cr = if infra.uses_engine_manifest() {
            let base = match detail.engine_manifest.as_deref() {
                Some(text) if !text.trim().is_empty() => parse_engine_manifest(text)?,
                _ => EngineManifest::skeleton(&fault_name),
            };
            let merged = self.merger.merge(base, fault_cr.env()).await.map_err(|err| {
                tracing::warn!("Engine merge failed for {}: {}", fault_ref, err);
                err
            })?;
            Some(merged)
        } else {
            None
        };

        let entry = ComposedFaultEntry {
            fault_name: fault_name.clone(),
            fault_cr,
            engine_cr,
            weight: DEFAULT_WEIGHT,
        };
        tracing::info!("Composed entry '{}' from {} for {}", fault_name, fault_ref, infra);
        self.sink.on_select(entry);
        Ok(())
    }
}
