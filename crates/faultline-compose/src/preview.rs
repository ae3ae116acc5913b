//! Preview and selection state
//!
//! Session-scoped record of what the user is previewing: the hovered
//! fault, whether a detail fetch is in flight, and whether the preview
//! panel shows. Overlapping fetches are serialized by monotonic request
//! sequence numbers; a completion older than one already applied is
//! discarded, so the newest arrived payload always wins. Nothing here is
//! async; the composer holds the state behind a mutex and keeps every
//! critical section short.

use faultline_catalog::FaultRef;

/// Monotonic tag for one detail fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Raw sequence value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the preview currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewPhase {
    /// Nothing hovered, nothing in flight
    #[default]
    Idle,
    /// A detail fetch is in flight
    Loading,
    /// The newest arrived payload is on display
    Ready,
}

/// Preview and selection state for one browsing session
///
/// Constructed at session start, discarded on navigation away. Mutated
/// only by interaction events (`begin`, `hover_exit`) and by fetch
/// completion (`complete`).
#[derive(Debug, Default)]
pub struct PreviewState {
    phase: PreviewPhase,
    hovered: Option<FaultRef>,
    next_seq: u64,
    applied_seq: u64,
    panel_visible: bool,
    documentation: Option<String>,
}

impl PreviewState {
    /// Create idle state for a new session
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hover or click on `fault` and tag its fetch
    ///
    /// Panel visibility is untouched; a new hover does not hide what a
    /// previous fetch already put on display.
    pub fn begin(&mut self, fault: FaultRef) -> RequestSeq {
        self.next_seq += 1;
        self.phase = PreviewPhase::Loading;
        self.hovered = Some(fault);
        RequestSeq(self.next_seq)
    }

    /// Apply a fetch completion, unless a newer one already landed
    ///
    /// Returns whether the payload was applied. An applied completion
    /// shows the panel even if the pointer has since left the fault row.
    pub fn complete(&mut self, seq: RequestSeq, documentation: String) -> bool {
        if seq.0 <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq.0;
        self.documentation = Some(documentation);
        self.phase = PreviewPhase::Ready;
        self.panel_visible = true;
        true
    }

    /// Record the pointer leaving the fault row
    ///
    /// Hides the panel and clears the hover; the last applied
    /// documentation is kept for the next time the panel shows.
    pub fn hover_exit(&mut self) {
        self.phase = PreviewPhase::Idle;
        self.hovered = None;
        self.panel_visible = false;
    }

    /// Current phase
    #[inline]
    #[must_use]
    pub fn phase(&self) -> PreviewPhase {
        self.phase
    }

    /// Fault currently hovered, if any
    #[inline]
    #[must_use]
    pub fn hovered(&self) -> Option<&FaultRef> {
        self.hovered.as_ref()
    }

    /// Whether the preview panel should show
    #[inline]
    #[must_use]
    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    /// Documentation of the newest applied completion
    #[inline]
    #[must_use]
    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }
}
