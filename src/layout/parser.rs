// SPDX-License-Identifier: GPL-3.0-only

//! JSON layout definition parser.
//!
//! Layout definitions describe keys row by row with widths only; this
//! module computes the absolute key geometry (x/y positions, row-major key
//! order) that the navigator relies on, and validates the definition before
//! building a [`Layout`].
//!
//! # Definition Format
//!
//! ```json
//! {
//!     "name": "english",
//!     "kind": "english",
//!     "key_height": 10,
//!     "rows": [
//!         {
//!             "keys": [
//!                 { "label": "q", "code": 113, "width": 10 },
//!                 { "label": "w", "code": 119, "width": 10 }
//!             ]
//!         }
//!     ]
//! }
//! ```
//!
//! Row-major order falls out of the definition shape: keys are laid out
//! left to right within a row, rows top to bottom.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::layout::types::{
    Key, KeyBounds, Layout, LayoutKind, ParseError, ValidationIssue,
};

/// Key height used when a row does not override it.
const DEFAULT_KEY_HEIGHT: i32 = 10;

// ============================================================================
// Definition Types
// ============================================================================

/// A key as written in a layout definition file.
#[derive(Debug, Clone, Deserialize)]
struct KeyDef {
    label: String,
    code: i32,
    width: i32,
    /// Horizontal gap inserted before this key
    #[serde(default)]
    gap: i32,
    #[serde(default)]
    is_modifier: bool,
    #[serde(default)]
    is_escape: bool,
}

/// A row of keys in a layout definition file.
#[derive(Debug, Clone, Deserialize)]
struct RowDef {
    /// Row height override; falls back to the layout's `key_height`
    height: Option<i32>,
    keys: Vec<KeyDef>,
}

/// A complete layout definition file.
#[derive(Debug, Clone, Deserialize)]
struct LayoutDef {
    name: String,
    kind: LayoutKind,
    /// Default key height for rows without an override
    key_height: Option<i32>,
    rows: Vec<RowDef>,
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses a layout definition from a JSON string.
///
/// # Errors
///
/// Returns [`ParseError::JsonError`] for malformed JSON and
/// [`ParseError::ValidationError`] when the definition is structurally
/// valid but describes an unusable layout (non-positive sizes, more than
/// one escape key).
pub fn parse_layout(json: &str) -> Result<Layout, ParseError> {
    let def: LayoutDef = serde_json::from_str(json)?;
    build_layout(def)
}

/// Loads and parses a layout definition from a file.
///
/// # Errors
///
/// Returns [`ParseError::IoError`] when the file cannot be read, otherwise
/// the same errors as [`parse_layout`], all annotated with the file path.
pub fn load_layout(path: impl AsRef<Path>) -> Result<Layout, ParseError> {
    let path = path.as_ref();
    let display_path = path.display().to_string();

    let contents = fs::read_to_string(path)
        .map_err(|e| ParseError::io_error_with_path(e, display_path.clone()))?;

    let def: LayoutDef = serde_json::from_str(&contents)
        .map_err(|e| ParseError::json_error_with_path(e, display_path))?;

    build_layout(def)
}

/// Validates a definition and computes absolute key geometry.
fn build_layout(def: LayoutDef) -> Result<Layout, ParseError> {
    let issues = validate(&def);
    if !issues.is_empty() {
        return Err(ParseError::validation_error(issues));
    }

    let default_height = def.key_height.unwrap_or(DEFAULT_KEY_HEIGHT);
    let mut keys = Vec::new();
    let mut y = 0;

    for row in &def.rows {
        if row.keys.is_empty() {
            tracing::warn!(layout = %def.name, "Skipping empty row in layout definition");
            continue;
        }

        let height = row.height.unwrap_or(default_height);
        let mut x = 0;

        for key_def in &row.keys {
            x += key_def.gap;
            let bounds = KeyBounds::new(x, y, key_def.width, height);
            keys.push(Key {
                label: key_def.label.clone(),
                code: key_def.code,
                bounds,
                is_modifier: key_def.is_modifier,
                is_escape: key_def.is_escape,
            });
            x += key_def.width;
        }

        y += height;
    }

    tracing::debug!(
        layout = %def.name,
        keys = keys.len(),
        rows = def.rows.len(),
        "Built layout from definition"
    );

    Ok(Layout::new(def.name, def.kind, keys))
}

/// Collects validation issues for a definition.
fn validate(def: &LayoutDef) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Some(height) = def.key_height {
        if height <= 0 {
            issues.push(
                ValidationIssue::new("key_height must be positive", "key_height")
                    .with_suggestion("Use a positive layout unit such as 10"),
            );
        }
    }

    let mut escape_count = 0;

    for (row_idx, row) in def.rows.iter().enumerate() {
        if let Some(height) = row.height {
            if height <= 0 {
                issues.push(ValidationIssue::new(
                    "row height must be positive",
                    format!("rows[{}].height", row_idx),
                ));
            }
        }

        for (key_idx, key) in row.keys.iter().enumerate() {
            let path = format!("rows[{}].keys[{}]", row_idx, key_idx);

            if key.width <= 0 {
                issues.push(
                    ValidationIssue::new("key width must be positive", path.clone())
                        .with_suggestion("Use a positive layout unit such as 10"),
                );
            }
            if key.gap < 0 {
                issues.push(ValidationIssue::new("key gap must not be negative", path.clone()));
            }
            if key.is_escape {
                escape_count += 1;
                if escape_count > 1 {
                    issues.push(
                        ValidationIssue::new("layout has more than one escape key", path)
                            .with_suggestion("Mark only a single key with is_escape"),
                    );
                }
            }
        }
    }

    issues
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::LayoutProvider;
    use std::io::Write;

    const TWO_ROW_LAYOUT: &str = r#"{
        "name": "test",
        "kind": "english",
        "key_height": 10,
        "rows": [
            { "keys": [ { "label": "a", "code": 97, "width": 10 } ] },
            { "keys": [
                { "label": "b", "code": 98, "width": 5 },
                { "label": "c", "code": 99, "width": 5 }
            ] }
        ]
    }"#;

    /// Test 1: geometry is computed row-major from widths and heights
    #[test]
    fn test_parse_computes_geometry() {
        let layout = parse_layout(TWO_ROW_LAYOUT).expect("Should parse layout");
        let keys = layout.keys();
        assert_eq!(keys.len(), 3);

        assert_eq!(keys[0].bounds, KeyBounds::new(0, 0, 10, 10));
        assert_eq!(keys[1].bounds, KeyBounds::new(0, 10, 5, 10));
        assert_eq!(keys[2].bounds, KeyBounds::new(5, 10, 5, 10));

        assert_eq!(layout.name(), "test");
        assert!(layout.is_english());
    }

    /// Test 2: gaps shift keys right without affecting the next row
    #[test]
    fn test_parse_applies_gaps() {
        let json = r#"{
            "name": "gapped",
            "kind": "other",
            "rows": [
                { "keys": [
                    { "label": "a", "code": 97, "width": 10 },
                    { "label": "b", "code": 98, "width": 10, "gap": 5 }
                ] },
                { "keys": [ { "label": "c", "code": 99, "width": 10 } ] }
            ]
        }"#;
        let layout = parse_layout(json).expect("Should parse layout");
        let keys = layout.keys();

        assert_eq!(keys[0].bounds.x, 0);
        assert_eq!(keys[1].bounds.x, 15, "Gap should shift the second key");
        assert_eq!(keys[2].bounds.x, 0, "Next row should restart at x = 0");
    }

    /// Test 3: non-positive width is a validation error
    #[test]
    fn test_parse_rejects_bad_width() {
        let json = r#"{
            "name": "bad",
            "kind": "english",
            "rows": [
                { "keys": [ { "label": "a", "code": 97, "width": 0 } ] }
            ]
        }"#;
        let err = parse_layout(json).expect_err("Zero width should fail validation");
        match err {
            ParseError::ValidationError { issues } => {
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].field_path, "rows[0].keys[0]");
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    /// Test 4: more than one escape key is a validation error
    #[test]
    fn test_parse_rejects_duplicate_escape() {
        let json = r#"{
            "name": "bad",
            "kind": "english",
            "rows": [
                { "keys": [
                    { "label": "esc", "code": 27, "width": 10, "is_escape": true },
                    { "label": "esc2", "code": 27, "width": 10, "is_escape": true }
                ] }
            ]
        }"#;
        let err = parse_layout(json).expect_err("Duplicate escape keys should fail");
        match err {
            ParseError::ValidationError { issues } => {
                assert!(issues[0].message.contains("escape"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    /// Test 5: malformed JSON reports a JSON error, not a panic
    #[test]
    fn test_parse_malformed_json() {
        let err = parse_layout("{ not json").expect_err("Malformed JSON should fail");
        assert!(matches!(err, ParseError::JsonError { .. }));
    }

    /// Test 6: loading from a file annotates errors with the path
    #[test]
    fn test_load_layout_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Should create temp file");
        file.write_all(TWO_ROW_LAYOUT.as_bytes())
            .expect("Should write layout");

        let layout = load_layout(file.path()).expect("Should load layout from file");
        assert_eq!(layout.keys().len(), 3);
    }

    /// Test 7: missing file reports an I/O error with the path
    #[test]
    fn test_load_layout_missing_file() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("missing.json");

        let err = load_layout(&path).expect_err("Missing file should fail");
        match err {
            ParseError::IoError { file_path, .. } => {
                assert!(file_path.expect("Path should be set").contains("missing.json"));
            }
            other => panic!("Expected IoError, got {:?}", other),
        }
    }
}
