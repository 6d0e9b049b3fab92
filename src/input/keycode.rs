// SPDX-License-Identifier: GPL-3.0-only

//! Key code constants and derived code mappings.
//!
//! Key codes are plain `i32` values: positive codes are Unicode scalar
//! values, negative codes are function keys the host dispatches on. The
//! one derived mapping the core performs is the full-width substitution
//! for long-pressed symbol keys.

/// Shift / caps-lock function key.
pub const KEYCODE_SHIFT: i32 = -1;

/// Switch between letter and symbol layouts.
pub const KEYCODE_MODE_CHANGE: i32 = -2;

/// Delete / backspace function key.
pub const KEYCODE_DELETE: i32 = -5;

/// Open the options/settings surface (long-press of mode change).
pub const KEYCODE_OPTIONS: i32 = -100;

/// Switch to the letter layout specifically.
pub const KEYCODE_MODE_CHANGE_LETTER: i32 = -200;

/// Offset from an ASCII code to its full-width form.
///
/// U+FF01..=U+FF5E are the full-width forms of U+0021..=U+007E; the
/// distance between the two blocks is constant.
pub const FULL_WIDTH_OFFSET: i32 = 0xFEE0;

/// First ASCII code with a full-width form.
const FULL_WIDTH_ASCII_FIRST: i32 = 0x21;

/// Last ASCII code with a full-width form.
const FULL_WIDTH_ASCII_LAST: i32 = 0x7E;

/// Maps an ASCII key code to its full-width equivalent.
///
/// Returns `None` for codes outside `0x21..=0x7E` (function keys, space,
/// and anything already beyond ASCII have no full-width form).
#[must_use]
pub fn full_width_code(code: i32) -> Option<i32> {
    if (FULL_WIDTH_ASCII_FIRST..=FULL_WIDTH_ASCII_LAST).contains(&code) {
        Some(code + FULL_WIDTH_OFFSET)
    } else {
        None
    }
}

// ============================================================================
// Tests
// ============================================================================
