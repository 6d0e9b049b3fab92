// SPDX-License-Identifier: GPL-3.0-only

//! Padboard - directional-pad focus navigation for soft keyboards
//!
//! This crate provides the navigation core for on-screen keyboards driven
//! by d-pad input devices: the user moves a focus ring between keys with
//! up/down/left/right and confirms with a select action, rather than
//! tapping keys directly. Rendering, platform widgets, and event plumbing
//! stay in the host; the crate is pure logic over a key-layout snapshot.
//!
//! # Architecture
//!
//! Two components carry the logic:
//!
//! 1. **FocusNavigator**: given the keys' 2-D geometry and the current
//!    focus index, computes the next focus index for a directional move.
//!    Vertical moves work on irregular rows by scanning the layout's
//!    nearest-key ranking for a horizontally overlapping key.
//!
//! 2. **ModifierState**: caps-lock, the Cangjie simplified toggle, and the
//!    escape key, each gated by a capability predicate on the active
//!    layout and persistent across layouts that lack the capability.
//!
//! The host talks to the core through three narrow seams: a
//! [`LayoutProvider`](layout::LayoutProvider) supplying key geometry and
//! capabilities, a [`RenderSink`](render::RenderSink) receiving
//! invalidation hints, and an [`ActionSink`](action::ActionSink) receiving
//! emitted key codes. [`SoftKeyboard`](keyboard::SoftKeyboard) bundles the
//! pieces for hosts that want a ready-made controller.
//!
//! # Modules
//!
//! - `layout`: key/layout data model, JSON definition parser, proximity index
//! - `input`: focus navigation, modifier state, key-code mappings
//! - `keyboard`: controller routing host events through the core
//! - `render`: render-sink collaborator interface
//! - `action`: action-sink collaborator interface

pub mod action;
pub mod input;
pub mod keyboard;
pub mod layout;
pub mod render;

pub use action::ActionSink;
pub use input::{Direction, FocusNavigator, ModifierState};
pub use keyboard::{InputEvent, SoftKeyboard};
pub use layout::{Key, KeyBounds, Layout, LayoutKind, LayoutProvider, ParseError};
pub use render::{RedrawCapability, RenderSink};

// ============================================================================
// Integration Tests
// ============================================================================
