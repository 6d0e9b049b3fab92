// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for keyboard layouts.
//!
//! This module defines the key and layout data model used by the focus
//! navigator and modifier state machine, the `LayoutProvider` trait that
//! hosts implement when they supply their own layout source, and the error
//! type for layout definition parsing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::layout::spatial::SpatialIndex;

// ============================================================================
// Error Handling Types
// ============================================================================

/// A validation issue discovered while building a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Human-readable description of the issue
    pub message: String,
    /// Path to the field that caused the issue (e.g., "rows[1].keys[2]")
    pub field_path: String,
    /// Optional suggestion for how to fix the issue
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Creates a new validation issue.
    pub fn new(message: impl Into<String>, field_path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_path: field_path.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion to the validation issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_path, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

/// Error type for layout definition parsing.
///
/// Wraps the different error sources with context fields for helpful
/// error messages. Navigation and modifier operations never produce this
/// error; it only surfaces when loading a layout definition.
#[derive(Debug)]
pub enum ParseError {
    /// I/O error occurred while reading a layout definition file
    IoError {
        /// The underlying I/O error
        source: std::io::Error,
        /// Optional file path that caused the error
        file_path: Option<String>,
    },

    /// JSON parsing error
    JsonError {
        /// The underlying JSON parsing error
        source: serde_json::Error,
        /// Optional file path being parsed
        file_path: Option<String>,
        /// Line number where the error occurred (from serde_json)
        line_number: Option<usize>,
    },

    /// Validation errors found while building the layout
    ValidationError {
        /// List of validation issues found
        issues: Vec<ValidationIssue>,
    },
}

impl ParseError {
    /// Creates an I/O error with file path context.
    pub fn io_error_with_path(source: std::io::Error, file_path: impl Into<String>) -> Self {
        Self::IoError {
            source,
            file_path: Some(file_path.into()),
        }
    }

    /// Creates a JSON parsing error with context.
    pub fn json_error(source: serde_json::Error) -> Self {
        let line_number = source.line().into();
        Self::JsonError {
            source,
            file_path: None,
            line_number,
        }
    }

    /// Creates a JSON parsing error with file path.
    pub fn json_error_with_path(source: serde_json::Error, file_path: impl Into<String>) -> Self {
        let line_number = source.line().into();
        Self::JsonError {
            source,
            file_path: Some(file_path.into()),
            line_number,
        }
    }

    /// Creates a validation error from a list of issues.
    pub fn validation_error(issues: Vec<ValidationIssue>) -> Self {
        Self::ValidationError { issues }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::IoError { source, file_path } => {
                write!(f, "I/O error")?;
                if let Some(path) = file_path {
                    write!(f, " reading file '{}'", path)?;
                }
                write!(f, ": {}", source)
            }
            ParseError::JsonError {
                source,
                file_path,
                line_number,
            } => {
                write!(f, "JSON parsing error")?;
                if let Some(path) = file_path {
                    write!(f, " in file '{}'", path)?;
                }
                if let Some(line) = line_number {
                    write!(f, " at line {}", line)?;
                }
                write!(f, ": {}", source)
            }
            ParseError::ValidationError { issues } => {
                write!(f, "Layout validation failed with {} issue(s):", issues.len())?;
                for issue in issues {
                    write!(f, "\n  {}", issue)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::IoError { source, .. } => Some(source),
            ParseError::JsonError { source, .. } => Some(source),
            ParseError::ValidationError { .. } => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            source: err,
            file_path: None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::json_error(err)
    }
}

// ============================================================================
// Key Geometry
// ============================================================================

/// Bounding box of a key in layout coordinates.
///
/// The y axis grows downward, matching screen coordinates. All values are
/// integer layout units; pixel mapping is the renderer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBounds {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width of the key
    pub width: i32,
    /// Height of the key
    pub height: i32,
}

impl KeyBounds {
    /// Creates a new bounding box.
    #[must_use]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[must_use]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Horizontal center of the key.
    #[must_use]
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Vertical center of the key.
    #[must_use]
    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    /// Tests whether this key sits directly above or below `candidate`,
    /// judged by horizontal extent alone.
    ///
    /// True when this key's left edge falls within the candidate's span, or
    /// this key's right edge falls within the candidate's span. Edges are
    /// half-open: a key whose left edge equals another key's right edge does
    /// not overlap it. This approximates "same column" without requiring a
    /// uniform grid.
    #[must_use]
    pub fn column_overlaps(&self, candidate: &KeyBounds) -> bool {
        let left_inside = self.x >= candidate.x && self.x < candidate.right();
        let right_inside = self.right() > candidate.x && self.right() <= candidate.right();
        left_inside || right_inside
    }
}

// ============================================================================
// Keys
// ============================================================================

/// A single key in a keyboard layout.
///
/// Keys are immutable for the lifetime of a layout; changing the key set
/// means replacing the whole layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    /// Display label shown on the key
    pub label: String,

    /// Primary key code emitted on activation. Negative codes are reserved
    /// for function keys (mode change, options, delete and so on).
    pub code: i32,

    /// Position and size in layout coordinates
    pub bounds: KeyBounds,

    /// Whether this key toggles a modifier (caps-lock, simplified mode)
    #[serde(default)]
    pub is_modifier: bool,

    /// Whether this is the layout's escape key
    #[serde(default)]
    pub is_escape: bool,
}

impl Key {
    /// Creates a plain character key.
    #[must_use]
    pub fn new(label: impl Into<String>, code: i32, bounds: KeyBounds) -> Self {
        Self {
            label: label.into(),
            code,
            bounds,
            is_modifier: false,
            is_escape: false,
        }
    }
}

// ============================================================================
// Layout Capabilities
// ============================================================================

/// The input-method family a layout belongs to.
///
/// The kind drives the capability predicates that gate modifier toggles:
/// caps-lock only applies to English layouts, simplified mode only to
/// Cangjie layouts, and the full-width long-press mapping only to symbol
/// layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// English letters
    English,
    /// Cangjie input method
    Cangjie,
    /// Symbols and punctuation
    Symbols,
    /// Anything else (digits, host-specific panels)
    Other,
}

// ============================================================================
// Layout Provider Trait
// ============================================================================

/// The layout interface consumed by the focus navigator and modifier state.
///
/// [`Layout`] is the crate's concrete implementation; hosts that already
/// maintain their own key geometry can implement this trait directly
/// instead of converting into [`Layout`].
pub trait LayoutProvider {
    /// The ordered key sequence, left-to-right, top-to-bottom.
    ///
    /// The order is an invariant supplied by the layout source; LEFT/RIGHT
    /// navigation traverses it directly and is never recomputed from
    /// geometry.
    fn keys(&self) -> &[Key];

    /// Whether this is an English layout (caps-lock capable).
    fn is_english(&self) -> bool;

    /// Whether this is a Cangjie layout (simplified-mode capable).
    fn is_cangjie(&self) -> bool;

    /// Whether this is a symbols layout (full-width long-press capable).
    fn is_symbols(&self) -> bool;

    /// Whether the layout contains an escape key.
    fn has_escape(&self) -> bool;

    /// Key indices ranked by proximity to the point `(x, y)`.
    ///
    /// Vertical navigation scans this ranking for the next row; the metric
    /// is the layout's own (typically distance to key centers).
    fn nearest_keys(&self, x: i32, y: i32) -> Vec<usize>;

    /// Attempts to set the escape-key state.
    ///
    /// Returns `true` when the stored state changed. A layout without an
    /// escape key always refuses and returns `false`.
    fn set_escape(&mut self, enabled: bool) -> bool;

    /// Index of the escape key, when the layout has one.
    fn escape_key_index(&self) -> Option<usize>;
}

// ============================================================================
// Concrete Layout
// ============================================================================

/// A positioned keyboard layout with a pre-built spatial index.
///
/// Replaced wholesale when the keyboard mode changes (letters to symbols
/// and so on); focus and modifier state are re-validated against the new
/// layout's capabilities at that point.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Layout name (from the definition file, informational)
    name: String,
    /// Input-method family
    kind: LayoutKind,
    /// Keys in row-major order
    keys: Vec<Key>,
    /// Index of the escape key, if present
    escape_index: Option<usize>,
    /// Current escape-key state
    escape_enabled: bool,
    /// Proximity index over key centers
    index: SpatialIndex,
}

impl Layout {
    /// Builds a layout from positioned keys.
    ///
    /// The key order must already be row-major; the parser guarantees this
    /// for definitions it produces.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: LayoutKind, keys: Vec<Key>) -> Self {
        let escape_index = keys.iter().position(|k| k.is_escape);
        let index = SpatialIndex::build(&keys);
        Self {
            name: name.into(),
            kind,
            keys,
            escape_index,
            escape_enabled: false,
            index,
        }
    }

    /// Layout name from the definition.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input-method family of this layout.
    #[must_use]
    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    /// Current escape-key state.
    #[must_use]
    pub fn escape_enabled(&self) -> bool {
        self.escape_enabled
    }
}

impl LayoutProvider for Layout {
    fn keys(&self) -> &[Key] {
        &self.keys
    }

    fn is_english(&self) -> bool {
        self.kind == LayoutKind::English
    }

    fn is_cangjie(&self) -> bool {
        self.kind == LayoutKind::Cangjie
    }

    fn is_symbols(&self) -> bool {
        self.kind == LayoutKind::Symbols
    }

    fn has_escape(&self) -> bool {
        self.escape_index.is_some()
    }

    fn nearest_keys(&self, x: i32, y: i32) -> Vec<usize> {
        self.index.nearest(x, y)
    }

    fn set_escape(&mut self, enabled: bool) -> bool {
        if self.escape_index.is_none() {
            return false;
        }
        if self.escape_enabled == enabled {
            return false;
        }
        self.escape_enabled = enabled;
        true
    }

    fn escape_key_index(&self) -> Option<usize> {
        self.escape_index
    }
}

// ============================================================================
// Tests
// ============================================================================
