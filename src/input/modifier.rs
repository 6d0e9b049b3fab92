// SPDX-License-Identifier: GPL-3.0-only

//! Modifier state for d-pad keyboard layouts.
//!
//! Tracks caps-lock, the Cangjie "simplified" toggle, and the escape-key
//! state. Each toggle is gated by a capability predicate on the active
//! layout: caps-lock only means anything on an English layout, simplified
//! mode only on a Cangjie layout, escape only on a layout that has an
//! escape key. A toggle attempted on an incapable layout is a no-op that
//! reports "not applied".
//!
//! Stored toggle values deliberately outlive capability: switching to a
//! symbols layout does not clear `caps_lock`, it only suspends its effect,
//! so returning to an English layout resumes the user's earlier choice.
//! The stored value and the capability snapshot are separate things and
//! are only ever evaluated together.

use crate::layout::LayoutProvider;
use crate::render::{RedrawCapability, RenderSink};

/// Modifier flags plus the displayed shift state.
///
/// `shifted` is what the renderer shows on the shift key; it can be forced
/// high by an external cursor-capitalization hint without touching the
/// user's caps-lock choice.
#[derive(Debug, Clone)]
pub struct ModifierState {
    /// Stored caps-lock value (meaningful on English layouts)
    caps_lock: bool,
    /// Stored simplified-mode value (meaningful on Cangjie layouts)
    simplified: bool,
    /// Stored escape-key value (meaningful on layouts with an escape key)
    escape: bool,
    /// Currently displayed shift state
    shifted: bool,
    /// Host redraw support, injected once at startup
    redraw: RedrawCapability,
}

impl Default for ModifierState {
    fn default() -> Self {
        Self::new(RedrawCapability::default())
    }
}

impl ModifierState {
    /// Creates a modifier state with all flags off.
    #[must_use]
    pub fn new(redraw: RedrawCapability) -> Self {
        Self {
            caps_lock: false,
            simplified: false,
            escape: false,
            shifted: false,
            redraw,
        }
    }

    /// Stored caps-lock value.
    #[must_use]
    pub fn caps_lock(&self) -> bool {
        self.caps_lock
    }

    /// Stored simplified-mode value.
    #[must_use]
    pub fn simplified(&self) -> bool {
        self.simplified
    }

    /// Stored escape-key value.
    #[must_use]
    pub fn escape(&self) -> bool {
        self.escape
    }

    /// Currently displayed shift state.
    #[must_use]
    pub fn is_shifted(&self) -> bool {
        self.shifted
    }

    /// Toggles caps-lock against the displayed shift state.
    ///
    /// Caps-lock becomes the inverse of whatever the shift key currently
    /// displays, and the display follows the new value. This means a shift
    /// forced high by a cursor hint is taken over as a lock, matching
    /// what the user sees.
    ///
    /// Returns `false` without changing anything on a non-English layout.
    pub fn toggle_caps_lock(&mut self, layout: &dyn LayoutProvider) -> bool {
        if !layout.is_english() {
            tracing::debug!("Ignoring caps-lock toggle on non-English layout");
            return false;
        }
        self.caps_lock = !self.shifted;
        self.shifted = self.caps_lock;
        true
    }

    /// Applies an external cursor-capitalization hint.
    ///
    /// The displayed shift state becomes `caps_lock OR hint`, so a
    /// start-of-sentence hint can force a visual capital without
    /// overwriting the user's caps-lock choice. No-op on layouts where
    /// caps-lock does not apply.
    pub fn update_cursor_caps(&mut self, layout: &dyn LayoutProvider, external_caps: bool) {
        if !layout.is_english() {
            return;
        }
        self.shifted = self.caps_lock || external_caps;
    }

    /// Toggles simplified mode against the displayed shift state.
    ///
    /// Identical in shape to [`toggle_caps_lock`](Self::toggle_caps_lock)
    /// but gated on the Cangjie capability and stored independently of
    /// caps-lock.
    pub fn toggle_simplified(&mut self, layout: &dyn LayoutProvider) -> bool {
        if !layout.is_cangjie() {
            tracing::debug!("Ignoring simplified-mode toggle on non-Cangjie layout");
            return false;
        }
        self.simplified = !self.shifted;
        self.shifted = self.simplified;
        true
    }

    /// Attempts to set the escape-key state through the layout.
    ///
    /// The requested value is stored either way so it can be re-applied to
    /// a future layout. When the layout reports an actual change, a
    /// single-key invalidation for the escape key is emitted through the
    /// render sink, gated by the injected redraw capability; a host
    /// without single-key redraw gets no signal at all, never a full
    /// redraw.
    ///
    /// Returns whether the layout reported a change.
    pub fn set_escape(
        &mut self,
        layout: &mut dyn LayoutProvider,
        enabled: bool,
        sink: &mut dyn RenderSink,
    ) -> bool {
        self.escape = enabled;
        if !layout.set_escape(enabled) {
            return false;
        }

        if self.redraw.key_redraw {
            if let Some(index) = layout.escape_key_index() {
                sink.invalidate_key(index);
            }
        } else {
            tracing::debug!("Host lacks single-key redraw; dropping escape invalidation");
        }
        true
    }
}

// ============================================================================
// Tests
// ============================================================================
