// SPDX-License-Identifier: GPL-3.0-only

//! Render-sink collaborator interface.
//!
//! The core never draws. It emits invalidation signals through a
//! [`RenderSink`] the host supplies, and the host's rendering component
//! decides what a redraw actually means. Whether the host can redraw a
//! single key is a property of the host environment, resolved once at
//! startup and injected as a [`RedrawCapability`] rather than re-probed
//! per call.

/// Host redraw support, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawCapability {
    /// Whether the host can redraw a single key by index. Without this,
    /// single-key invalidation hints are dropped rather than widened to a
    /// full redraw.
    pub key_redraw: bool,
}

impl Default for RedrawCapability {
    fn default() -> Self {
        Self { key_redraw: true }
    }
}

/// Receives invalidation signals from the core.
pub trait RenderSink {
    /// The whole keyboard needs redrawing (focus ring moved, layout
    /// replaced, shift display changed).
    fn invalidate_all(&mut self);

    /// Only the key at `index` needs redrawing.
    fn invalidate_key(&mut self, index: usize);
}

// ============================================================================
// Tests
// ============================================================================
