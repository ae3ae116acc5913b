//! Testing utilities for the faultline workspace
//!
//! Shared fakes, fixtures, and a tracing initializer for test debugging.

#![allow(missing_docs)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use faultline_catalog::{
    Catalog, Category, FaultDetail, FaultDetailSource, FaultRef, FaultSummary, FetchError,
};
use faultline_compose::{
    ComposedFaultEntry, EntrySink, InfraContext, InfrastructureKind, SuffixGenerator,
};

/// Two-sided gate for holding a scripted fetch open at a known point.
///
/// The source side calls `pass` and blocks until the test side calls
/// `open`; the test side can first `wait_entered` to know the fetch is
/// parked. Notify permits make the handshake safe in either call order.
#[derive(Debug, Clone, Default)]
pub struct FetchGate {
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block the fetch until the gate is opened
    pub async fn pass(&self) {
        self.entered.notify_one();
        self.release.notified().await;
    }

    /// Wait until a fetch is parked at the gate
    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }

    /// Let the parked fetch proceed
    pub fn open(&self) {
        self.release.notify_one();
    }
}

#[derive(Debug, Clone)]
enum Script {
    Ready(FaultDetail),
    Fail(String),
    Gated { detail: FaultDetail, gate: FetchGate },
}

/// Detail source that replays scripted outcomes keyed by fault name
#[derive(Debug, Default)]
pub struct ScriptedDetailSource {
    scripts: Mutex<HashMap<String, Script>>,
}

impl ScriptedDetailSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ready(self, fault: &str, detail: FaultDetail) -> Self {
        self.scripts.lock().insert(fault.to_string(), Script::Ready(detail));
        self
    }

    pub fn with_failure(self, fault: &str, message: &str) -> Self {
        self.scripts
            .lock()
            .insert(fault.to_string(), Script::Fail(message.to_string()));
        self
    }

    /// Script a fetch that parks at `gate` before returning `detail`
    pub fn with_gated(self, fault: &str, detail: FaultDetail, gate: FetchGate) -> Self {
        self.scripts
            .lock()
            .insert(fault.to_string(), Script::Gated { detail, gate });
        self
    }
}

#[async_trait]
impl FaultDetailSource for ScriptedDetailSource {
    async fn fetch(&self, fault: &FaultRef) -> Result<FaultDetail, FetchError> {
        let script = self.scripts.lock().get(fault.fault()).cloned();
        match script {
            Some(Script::Ready(detail)) => Ok(detail),
            Some(Script::Fail(message)) => Err(FetchError::transport(message)),
            Some(Script::Gated { detail, gate }) => {
                gate.pass().await;
                Ok(detail)
            }
            None => Err(FetchError::not_found(fault)),
        }
    }
}

/// Sink that records every emitted entry
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<ComposedFaultEntry>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<ComposedFaultEntry> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl EntrySink for RecordingSink {
    fn on_select(&self, entry: ComposedFaultEntry) {
        self.entries.lock().push(entry);
    }
}

/// Deterministic suffix generator: 000, 001, 002, ...
#[derive(Debug, Default)]
pub struct CountingSuffix {
    counter: AtomicU64,
}

impl CountingSuffix {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SuffixGenerator for CountingSuffix {
    fn suffix(&self, _seed: &str, length: usize) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{n:0length$}")
    }
}

/// Infrastructure context tests can switch mid-scenario
#[derive(Debug)]
pub struct SwitchableInfra {
    kind: Mutex<InfrastructureKind>,
}

impl SwitchableInfra {
    pub fn new(kind: InfrastructureKind) -> Self {
        Self { kind: Mutex::new(kind) }
    }

    pub fn set(&self, kind: InfrastructureKind) {
        *self.kind.lock() = kind;
    }
}

impl InfraContext for SwitchableInfra {
    fn active(&self) -> InfrastructureKind {
        *self.kind.lock()
    }
}

/// Detail payload for a pod-delete fault with an engine template
pub fn pod_delete_detail() -> FaultDetail {
    let fault_manifest = r"
apiVersion: chaos.faultline.dev/v1alpha1
kind: FaultDefinition
metadata:
  name: pod-delete
spec:
  definition:
    image: faultline/runner:latest
    env:
      - name: TOTAL_CHAOS_DURATION
        value: '15'
      - name: CHAOS_INTERVAL
        value: '5'
";
    let engine_manifest = r"
apiVersion: chaos.faultline.dev/v1alpha1
kind: FaultEngine
spec:
  experiments:
    - name: pod-delete
      spec:
        components:
          env:
            - name: TOTAL_CHAOS_DURATION
              value: '30'
";
    FaultDetail::new("Deletes a pod belonging to a deployment", fault_manifest)
        .with_engine_manifest(engine_manifest)
}

/// Smallest useful detail payload: a named fault, no engine template
pub fn minimal_detail(name: &str) -> FaultDetail {
    FaultDetail::new(
        format!("docs for {name}"),
        format!("metadata:\n  name: {name}"),
    )
}

/// Small two-category catalog
pub fn sample_catalog() -> Catalog {
    Catalog::new()
        .with_category(
            Category::new("pod-chaos")
                .with_fault(FaultSummary::new("pod-delete").with_display_name("Pod Delete"))
                .with_fault(FaultSummary::new("pod-cpu-hog")),
        )
        .with_category(
            Category::new("network-chaos").with_fault(
                FaultSummary::new("pod-network-loss").with_display_name("Pod Network Loss"),
            ),
        )
}

/// Install a fmt subscriber for test debugging; safe to call repeatedly
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
