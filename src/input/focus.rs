// SPDX-License-Identifier: GPL-3.0-only

//! Directional focus navigation over a key layout.
//!
//! A d-pad user moves a focus ring between keys with up/down/left/right
//! and confirms with a select action. LEFT/RIGHT walk the row-major key
//! sequence directly; UP/DOWN have to jump between rows whose keys do not
//! line up in a uniform grid, which is where the layout's nearest-key
//! ranking and the column-overlap rule come in.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutProvider;

/// A directional navigation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Move focus to the row above
    Up,
    /// Move focus to the row below
    Down,
    /// Move focus to the previous key
    Left,
    /// Move focus to the next key
    Right,
}

/// Tracks which key currently holds the focus ring.
///
/// The index is always within `[0, len - 1]` for a non-empty layout; a
/// destructive layout swap clamps it rather than failing. The focus ring is
/// only considered active once a navigation event has occurred.
#[derive(Debug, Clone, Default)]
pub struct FocusNavigator {
    /// Index of the focused key in the layout's key sequence
    index: usize,
    /// Whether the focus ring is active (drawn by the host)
    visible: bool,
}

impl FocusNavigator {
    /// Creates a navigator focused on the first key, with the focus ring
    /// inactive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the currently focused key.
    #[must_use]
    pub fn focus_index(&self) -> usize {
        self.index
    }

    /// Whether the focus ring is active.
    #[must_use]
    pub fn is_focus_visible(&self) -> bool {
        self.visible
    }

    /// Activates or deactivates the focus ring without moving focus.
    pub fn set_focus_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Re-validates the focus index against a replacement layout.
    ///
    /// Clamps the index into the new layout's range; visibility is left
    /// alone so a visible focus ring survives a mode change.
    pub fn set_layout(&mut self, layout: &dyn LayoutProvider) {
        let len = layout.keys().len();
        if len == 0 {
            self.index = 0;
            return;
        }
        if self.index >= len {
            tracing::debug!(
                old_index = self.index,
                clamped = len - 1,
                "Clamping focus index for smaller layout"
            );
            self.index = len - 1;
        }
    }

    /// Code of the currently focused key, without moving focus.
    ///
    /// Returns `None` on an empty layout. If the host swapped layouts
    /// without re-validating, the lookup is clamped instead of failing.
    #[must_use]
    pub fn activate(&self, layout: &dyn LayoutProvider) -> Option<i32> {
        let keys = layout.keys();
        if keys.is_empty() {
            return None;
        }
        let index = self.index.min(keys.len() - 1);
        Some(keys[index].code)
    }

    /// Moves focus one step in `direction` and returns the new index.
    ///
    /// A no-op on an empty layout. Any move marks the focus ring active.
    ///
    /// LEFT/RIGHT wrap around the row-major key sequence. UP/DOWN consult
    /// the layout's nearest-key ranking, queried from the focused key's
    /// top-left corner, and take the first candidate on the correct side of
    /// the current index whose horizontal span overlaps the focused key's.
    /// DOWN at the last key and UP at the first key wrap immediately, and
    /// either direction wraps when no candidate overlaps.
    pub fn move_focus(&mut self, layout: &dyn LayoutProvider, direction: Direction) -> usize {
        let keys = layout.keys();
        if keys.is_empty() {
            return self.index;
        }
        let last = keys.len() - 1;
        self.index = self.index.min(last);
        self.visible = true;

        match direction {
            Direction::Right => {
                self.index = if self.index >= last { 0 } else { self.index + 1 };
            }
            Direction::Left => {
                self.index = if self.index == 0 { last } else { self.index - 1 };
            }
            Direction::Down => {
                if self.index >= last {
                    self.index = 0;
                } else {
                    self.index = self.scan_down(layout);
                }
            }
            Direction::Up => {
                if self.index == 0 {
                    self.index = last;
                } else {
                    self.index = self.scan_up(layout, last);
                }
            }
        }

        self.index
    }

    /// Finds the next key in the row below, or wraps to the first key.
    fn scan_down(&self, layout: &dyn LayoutProvider) -> usize {
        let keys = layout.keys();
        let focused = keys[self.index].bounds;

        for candidate in layout.nearest_keys(focused.x, focused.y) {
            if candidate > self.index && focused.column_overlaps(&keys[candidate].bounds) {
                return candidate;
            }
        }
        0
    }

    /// Finds the next key in the row above, or wraps to the last key.
    ///
    /// The ranking is scanned back to front so the chosen key is the
    /// farthest-ranked candidate that still overlaps, mirroring the
    /// downward scan's front-to-back order.
    fn scan_up(&self, layout: &dyn LayoutProvider, last: usize) -> usize {
        let keys = layout.keys();
        let focused = keys[self.index].bounds;

        for candidate in layout.nearest_keys(focused.x, focused.y).into_iter().rev() {
            if candidate < self.index && focused.column_overlaps(&keys[candidate].bounds) {
                return candidate;
            }
        }
        last
    }
}

// ============================================================================
// Tests
// ============================================================================
