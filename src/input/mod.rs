// SPDX-License-Identifier: GPL-3.0-only

//! Input handling for d-pad keyboard navigation.
//!
//! This module holds the two pieces of real logic in the crate:
//!
//! - **Focus navigation**: moving the focus ring between keys with
//!   up/down/left/right, including the nearest-key row jump for layouts
//!   whose rows do not form a uniform grid.
//! - **Modifier state**: caps-lock, the Cangjie simplified toggle, and the
//!   escape key, each gated by a layout capability and persistent across
//!   layouts that lack the capability.
//!
//! Everything is synchronous call-and-return on the host's input-dispatch
//! thread; there is no shared state and nothing to cancel.
//!
//! # Example
//!
//! ```rust,ignore
//! use padboard::input::{Direction, FocusNavigator, ModifierState};
//!
//! let mut nav = FocusNavigator::new();
//! nav.move_focus(&layout, Direction::Down);
//!
//! if let Some(code) = nav.activate(&layout) {
//!     actions.on_key(code);
//! }
//! ```

// Sub-modules
pub mod focus;
pub mod keycode;
pub mod modifier;

// Re-export public API
pub use focus::{Direction, FocusNavigator};
pub use keycode::{full_width_code, FULL_WIDTH_OFFSET};
pub use modifier::ModifierState;

// ============================================================================
// Module Tests
// ============================================================================
