//! # Faultline Catalog
//!
//! Catalog model and detail-fetch contract for fault hubs:
//!
//! - [`HubId`] and [`FaultRef`] address faults across hubs
//! - [`Catalog`], [`Category`] and [`FaultSummary`] model the browsable listing
//! - [`FaultDetail`] carries documentation and manifest texts for one fault
//! - [`FaultDetailSource`] is the async seam to whatever backend serves details
//!
//! The crate holds no networking and no parsing; it defines the shapes and
//! the contract the composition layer builds on.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod catalog;
pub mod detail;
pub mod fetch;
pub mod hub;

pub use catalog::{Catalog, Category, FaultSummary};
pub use detail::FaultDetail;
pub use fetch::{FaultDetailSource, FetchError};
pub use hub::{FaultRef, HubId};

/// Current version of the catalog crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
