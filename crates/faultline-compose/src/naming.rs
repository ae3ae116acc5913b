//! Instance name suffixes
//!
//! Composed entries get a short generated suffix appended to the fault's
//! base name so the same fault can appear more than once in an experiment.
//! Suffixes only need to be visually distinct; uniqueness within one
//! experiment is the caller's concern.

use rand::distr::{Alphanumeric, SampleString};

/// Suffix length used when none is configured
pub const DEFAULT_SUFFIX_LENGTH: usize = 3;

/// Produces instance-name suffixes
///
/// `seed` is the base name the suffix will be appended to; deterministic
/// implementations may derive from it, the default ignores it.
pub trait SuffixGenerator: Send + Sync + std::fmt::Debug {
    /// Generate a suffix of `length` characters
    fn suffix(&self, seed: &str, length: usize) -> String;
}

/// Default generator: random lowercase alphanumeric characters
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphanumericSuffix;

impl AlphanumericSuffix {
    /// Create the default generator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SuffixGenerator for AlphanumericSuffix {
    fn suffix(&self, _seed: &str, length: usize) -> String {
        Alphanumeric
            .sample_string(&mut rand::rng(), length)
            .to_lowercase()
    }
}
