// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard layout module.
//!
//! A layout is an ordered, row-major sequence of positioned keys plus a
//! handful of capability predicates (English, Cangjie, symbols, escape).
//! The focus navigator and modifier state machine only ever see layouts
//! through the [`LayoutProvider`] trait, so hosts can bring their own
//! geometry source; [`Layout`] is the concrete implementation built by the
//! JSON definition parser.
//!
//! Layouts are replaced wholesale on a keyboard mode change. Nothing here
//! is mutable except the escape-key state, which the layout itself owns
//! through [`LayoutProvider::set_escape`].

// Sub-modules
pub mod parser;
pub mod spatial;
pub mod types;

// Re-export public API
pub use parser::{load_layout, parse_layout};
pub use spatial::SpatialIndex;
pub use types::{
    Key, KeyBounds, Layout, LayoutKind, LayoutProvider, ParseError, ValidationIssue,
};

// ============================================================================
// Module Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test 1: a parsed layout serves nearest-key queries
    #[test]
    fn test_parsed_layout_nearest_keys() {
        let json = r#"{
            "name": "test",
            "kind": "english",
            "rows": [
                { "keys": [ { "label": "a", "code": 97, "width": 10 } ] },
                { "keys": [
                    { "label": "b", "code": 98, "width": 5 },
                    { "label": "c", "code": 99, "width": 5 }
                ] }
            ]
        }"#;
        let layout = parse_layout(json).expect("Should parse layout");

        // Query from key "a"'s top-left corner: a's own center is nearest,
        // then b (under a's left half), then c.
        let ranked = layout.nearest_keys(0, 0);
        assert_eq!(ranked, vec![0, 1, 2]);
    }

    /// Test 2: escape index survives cloning the layout
    #[test]
    fn test_layout_clone_keeps_escape_state() {
        let json = r#"{
            "name": "test",
            "kind": "other",
            "rows": [
                { "keys": [
                    { "label": "x", "code": 120, "width": 10 },
                    { "label": "esc", "code": 27, "width": 10, "is_escape": true }
                ] }
            ]
        }"#;
        let mut layout = parse_layout(json).expect("Should parse layout");
        assert!(layout.set_escape(true));

        let clone = layout.clone();
        assert!(clone.escape_enabled());
        assert_eq!(clone.escape_key_index(), Some(1));
    }
}
