// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard controller tying the core pieces together.
//!
//! [`SoftKeyboard`] owns a layout, a [`FocusNavigator`] and a
//! [`ModifierState`], and turns host input events into focus moves, key
//! emissions, and invalidation signals. It is deliberately thin: all logic
//! lives in the navigator and modifier state, the controller only routes
//! between them and the host's sinks.

use crate::action::ActionSink;
use crate::input::keycode::{KEYCODE_MODE_CHANGE_LETTER, KEYCODE_OPTIONS};
use crate::input::{full_width_code, Direction, FocusNavigator, ModifierState};
use crate::layout::LayoutProvider;
use crate::render::{RedrawCapability, RenderSink};

/// A host input event after d-pad decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A directional press
    Move(Direction),
    /// The confirm/select press
    Select,
}

/// D-pad driven keyboard controller.
///
/// Generic over the layout source so hosts that implement
/// [`LayoutProvider`] themselves can plug in directly; most callers use
/// the crate's [`Layout`](crate::layout::Layout).
#[derive(Debug)]
pub struct SoftKeyboard<L: LayoutProvider> {
    layout: L,
    navigator: FocusNavigator,
    modifiers: ModifierState,
}

impl<L: LayoutProvider> SoftKeyboard<L> {
    /// Creates a controller over `layout`.
    ///
    /// `redraw` is the host's redraw support, resolved once at startup.
    #[must_use]
    pub fn new(layout: L, redraw: RedrawCapability) -> Self {
        Self {
            layout,
            navigator: FocusNavigator::new(),
            modifiers: ModifierState::new(redraw),
        }
    }

    /// The active layout.
    #[must_use]
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// The modifier state.
    #[must_use]
    pub fn modifiers(&self) -> &ModifierState {
        &self.modifiers
    }

    /// Index of the focused key.
    #[must_use]
    pub fn focus_index(&self) -> usize {
        self.navigator.focus_index()
    }

    /// Whether the focus ring is active.
    #[must_use]
    pub fn is_focus_visible(&self) -> bool {
        self.navigator.is_focus_visible()
    }

    /// Handles a decoded input event.
    ///
    /// A directional press moves focus and requests a full redraw so the
    /// host repaints the focus ring. A select press emits the focused
    /// key's code to the action sink, but only once the focus ring is
    /// active; a stray confirm before any navigation does nothing.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        render: &mut dyn RenderSink,
        actions: &mut dyn ActionSink,
    ) {
        match event {
            InputEvent::Move(direction) => {
                if self.layout.keys().is_empty() {
                    return;
                }
                self.navigator.move_focus(&self.layout, direction);
                render.invalidate_all();
            }
            InputEvent::Select => {
                if !self.navigator.is_focus_visible() {
                    return;
                }
                if let Some(code) = self.navigator.activate(&self.layout) {
                    actions.on_key(code);
                }
            }
        }
    }

    /// Replaces the layout on a keyboard mode change.
    ///
    /// The stored escape value is re-applied to the new layout (which may
    /// refuse it), the focus index is clamped into the new range, and the
    /// stored modifier values are left alone so capability-gated toggles
    /// resume when a capable layout returns.
    pub fn set_layout(&mut self, mut layout: L) {
        let escape = self.modifiers.escape();
        if layout.set_escape(escape) {
            tracing::debug!(escape, "Carried escape state onto replacement layout");
        }
        self.navigator.set_layout(&layout);
        self.layout = layout;
    }

    /// Handles a long press on the focused key.
    ///
    /// On a symbols layout, a key with a printable-ASCII code emits its
    /// full-width form. A mode-change-to-letters key emits the options
    /// code instead of switching. Returns whether the long press was
    /// consumed; an unconsumed long press falls back to the host's own
    /// handling (key popups and the like, outside this crate).
    pub fn long_press(&mut self, actions: &mut dyn ActionSink) -> bool {
        let Some(code) = self.navigator.activate(&self.layout) else {
            return false;
        };

        if self.layout.is_symbols() {
            if let Some(full_width) = full_width_code(code) {
                actions.on_key(full_width);
                return true;
            }
        }
        if code == KEYCODE_MODE_CHANGE_LETTER {
            actions.on_key(KEYCODE_OPTIONS);
            return true;
        }
        false
    }

    /// Toggles caps-lock; requests a redraw when the display changed.
    pub fn toggle_caps_lock(&mut self, render: &mut dyn RenderSink) -> bool {
        let applied = self.modifiers.toggle_caps_lock(&self.layout);
        if applied {
            render.invalidate_all();
        }
        applied
    }

    /// Toggles simplified mode; requests a redraw when the display changed.
    pub fn toggle_simplified(&mut self, render: &mut dyn RenderSink) -> bool {
        let applied = self.modifiers.toggle_simplified(&self.layout);
        if applied {
            render.invalidate_all();
        }
        applied
    }

    /// Applies an external cursor-capitalization hint.
    ///
    /// Requests a redraw only when the displayed shift state actually
    /// changed, so cursor movement inside a sentence stays cheap.
    pub fn update_cursor_caps(&mut self, external_caps: bool, render: &mut dyn RenderSink) {
        let before = self.modifiers.is_shifted();
        self.modifiers.update_cursor_caps(&self.layout, external_caps);
        if self.modifiers.is_shifted() != before {
            render.invalidate_all();
        }
    }

    /// Sets the escape-key state through the modifier state machine.
    pub fn set_escape(&mut self, enabled: bool, render: &mut dyn RenderSink) -> bool {
        self.modifiers.set_escape(&mut self.layout, enabled, render)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Key, KeyBounds, Layout, LayoutKind};

    #[derive(Debug, Default)]
    struct RecordingSink {
        all: usize,
        keys: Vec<usize>,
    }

    impl RenderSink for RecordingSink {
        fn invalidate_all(&mut self) {
            self.all += 1;
        }

        fn invalidate_key(&mut self, index: usize) {
            self.keys.push(index);
        }
    }

    #[derive(Debug, Default)]
    struct RecordingActions {
        codes: Vec<i32>,
    }

    impl ActionSink for RecordingActions {
        fn on_key(&mut self, code: i32) {
            self.codes.push(code);
        }
    }

    fn row_layout(kind: LayoutKind, codes: &[i32]) -> Layout {
        let keys = codes
            .iter()
            .enumerate()
            .map(|(i, &code)| Key::new("k", code, KeyBounds::new(i as i32 * 10, 0, 10, 10)))
            .collect();
        Layout::new("row", kind, keys)
    }

    fn escape_layout(enable_escape_key: bool) -> Layout {
        let mut keys = vec![Key::new("a", 97, KeyBounds::new(0, 0, 10, 10))];
        if enable_escape_key {
            let mut esc = Key::new("esc", 27, KeyBounds::new(10, 0, 10, 10));
            esc.is_escape = true;
            keys.push(esc);
        }
        Layout::new("esc", LayoutKind::English, keys)
    }

    /// Test 1: select before any navigation emits nothing
    #[test]
    fn test_select_inert_before_navigation() {
        let layout = row_layout(LayoutKind::English, &[97, 98]);
        let mut kb = SoftKeyboard::new(layout, RedrawCapability::default());
        let mut render = RecordingSink::default();
        let mut actions = RecordingActions::default();

        kb.handle_event(InputEvent::Select, &mut render, &mut actions);
        assert!(
            actions.codes.is_empty(),
            "Select without an active focus ring must not emit"
        );
    }

    /// Test 2: move then select emits the focused key's code
    #[test]
    fn test_move_then_select_emits_code() {
        let layout = row_layout(LayoutKind::English, &[97, 98]);
        let mut kb = SoftKeyboard::new(layout, RedrawCapability::default());
        let mut render = RecordingSink::default();
        let mut actions = RecordingActions::default();

        kb.handle_event(InputEvent::Move(Direction::Right), &mut render, &mut actions);
        assert_eq!(render.all, 1, "A focus move should request a full redraw");

        kb.handle_event(InputEvent::Select, &mut render, &mut actions);
        assert_eq!(actions.codes, vec![98]);
    }

    /// Test 3: replacing the layout clamps focus and keeps modifiers
    #[test]
    fn test_set_layout_clamps_and_keeps_modifiers() {
        let big = row_layout(LayoutKind::English, &[97, 98, 99, 100, 101]);
        let mut kb = SoftKeyboard::new(big, RedrawCapability::default());
        let mut render = RecordingSink::default();
        let mut actions = RecordingActions::default();

        for _ in 0..4 {
            kb.handle_event(InputEvent::Move(Direction::Right), &mut render, &mut actions);
        }
        assert_eq!(kb.focus_index(), 4);
        assert!(kb.toggle_caps_lock(&mut render));

        kb.set_layout(row_layout(LayoutKind::Symbols, &[33, 34, 35]));
        assert_eq!(kb.focus_index(), 2, "Focus should clamp to the new last key");
        assert!(
            kb.modifiers().caps_lock(),
            "Stored caps-lock must survive the layout switch"
        );
        assert!(
            !kb.toggle_caps_lock(&mut render),
            "Caps-lock is inert on the symbols layout"
        );
    }

    /// Test 4: the escape state carries onto a capable replacement layout
    #[test]
    fn test_escape_carries_across_layouts() {
        let mut kb = SoftKeyboard::new(escape_layout(true), RedrawCapability::default());
        let mut render = RecordingSink::default();

        assert!(kb.set_escape(true, &mut render));
        assert_eq!(render.keys, vec![1]);

        // Through a layout without an escape key and back.
        kb.set_layout(escape_layout(false));
        kb.set_layout(escape_layout(true));
        assert!(
            kb.layout().escape_enabled(),
            "Escape state should be re-applied to the capable layout"
        );
    }

    /// Test 5: long press on a symbols key emits the full-width form
    #[test]
    fn test_long_press_full_width() {
        let layout = row_layout(LayoutKind::Symbols, &['!' as i32, '?' as i32]);
        let mut kb = SoftKeyboard::new(layout, RedrawCapability::default());
        let mut render = RecordingSink::default();
        let mut actions = RecordingActions::default();

        kb.handle_event(InputEvent::Move(Direction::Right), &mut render, &mut actions);
        assert!(kb.long_press(&mut actions), "Long press should be consumed");
        assert_eq!(actions.codes, vec!['?' as i32 + 0xFEE0]);
    }

    /// Test 6: long press outside a symbols layout is not consumed
    #[test]
    fn test_long_press_ignored_on_letters() {
        let layout = row_layout(LayoutKind::English, &[97, 98]);
        let mut kb = SoftKeyboard::new(layout, RedrawCapability::default());
        let mut actions = RecordingActions::default();

        assert!(!kb.long_press(&mut actions));
        assert!(actions.codes.is_empty());
    }

    /// Test 7: long press on the mode-change key opens options
    #[test]
    fn test_long_press_mode_change_opens_options() {
        let layout = row_layout(LayoutKind::English, &[KEYCODE_MODE_CHANGE_LETTER]);
        let mut kb = SoftKeyboard::new(layout, RedrawCapability::default());
        let mut actions = RecordingActions::default();

        assert!(kb.long_press(&mut actions));
        assert_eq!(actions.codes, vec![KEYCODE_OPTIONS]);
    }

    /// Test 8: cursor hint redraws only on a display change
    #[test]
    fn test_cursor_caps_redraw_is_conditional() {
        let layout = row_layout(LayoutKind::English, &[97]);
        let mut kb = SoftKeyboard::new(layout, RedrawCapability::default());
        let mut render = RecordingSink::default();

        kb.update_cursor_caps(true, &mut render);
        assert_eq!(render.all, 1, "Display change should redraw");

        kb.update_cursor_caps(true, &mut render);
        assert_eq!(render.all, 1, "Unchanged display should not redraw again");
    }

    /// Test 9: events on an empty layout do nothing
    #[test]
    fn test_empty_layout_events() {
        let layout = Layout::new("empty", LayoutKind::English, Vec::new());
        let mut kb = SoftKeyboard::new(layout, RedrawCapability::default());
        let mut render = RecordingSink::default();
        let mut actions = RecordingActions::default();

        kb.handle_event(InputEvent::Move(Direction::Down), &mut render, &mut actions);
        kb.handle_event(InputEvent::Select, &mut render, &mut actions);
        assert_eq!(render.all, 0);
        assert!(actions.codes.is_empty());
    }
}
