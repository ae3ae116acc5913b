//! Detail-fetch contract
//!
//! Seam between the catalog model and whatever backend actually serves
//! fault details. Implementations may hit a hub over the network, read a
//! local checkout, or replay scripted fixtures in tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::detail::FaultDetail;
use crate::hub::FaultRef;

/// Errors a detail fetch can surface
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The backend could not be reached or answered abnormally
    #[error("transport failure: {0}")]
    Transport(String),

    /// The hub has no such fault
    #[error("fault not found: {0}")]
    NotFound(String),
}

impl FetchError {
    /// Create a transport error
    #[inline]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create a not-found error for a fault reference
    #[inline]
    pub fn not_found(fault: &FaultRef) -> Self {
        Self::NotFound(fault.to_string())
    }
}

/// Asynchronous source of fault details
///
/// One fetch per selection; callers decide how results are applied. A slow
/// or failed fetch must never block a later one.
#[async_trait]
pub trait FaultDetailSource: Send + Sync + std::fmt::Debug {
    /// Fetch the full detail record for a fault
    async fn fetch(&self, fault: &FaultRef) -> Result<FaultDetail, FetchError>;
}
