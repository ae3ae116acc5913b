//! # Faultline Compose
//!
//! Turns a fault selected from the catalog into a runnable entry:
//!
//! - [`FaultComposer`] orchestrates fetch, parse, merge, naming and emission
//! - [`PreviewState`] tracks hover and click intent so only clicks compose
//! - [`EngineMerger`] folds fault env declarations into engine manifests
//! - [`InfrastructureKind`] is the closed variant set composition branches on
//! - [`EntrySink`] receives finished [`ComposedFaultEntry`] values
//!
//! Composition is asynchronous and per-call sequential; overlapping calls
//! are reconciled through preview sequence numbers, never cancelled.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod composer;
pub mod entry;
pub mod error;
pub mod infra;
pub mod merge;
pub mod naming;
pub mod preview;

pub use composer::{ComposerConfig, FaultComposer};
pub use entry::{ComposedFaultEntry, EntrySink, DEFAULT_WEIGHT};
pub use error::ComposeError;
pub use infra::{InfraContext, InfrastructureKind};
pub use merge::{EngineMerger, MergeError};
pub use naming::{AlphanumericSuffix, SuffixGenerator, DEFAULT_SUFFIX_LENGTH};
pub use preview::{PreviewPhase, PreviewState, RequestSeq};

/// Current version of the compose crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
