// SPDX-License-Identifier: GPL-3.0-only

//! Action-sink collaborator interface.
//!
//! When the user confirms the focused key (or triggers a long-press
//! equivalent), the core emits the resulting key code here. Text insertion,
//! commit logic, and anything else that happens with the code is the
//! host's business.

/// Receives key codes emitted by the core.
pub trait ActionSink {
    /// A key was activated and produced `code`.
    fn on_key(&mut self, code: i32);
}
