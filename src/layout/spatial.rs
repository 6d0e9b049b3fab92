// SPDX-License-Identifier: GPL-3.0-only

//! Proximity index over key geometry.
//!
//! Vertical navigation needs the layout's keys ranked by distance to a
//! query point. The index is built once per layout from the key centers;
//! queries sort the precomputed centers by squared distance, so no square
//! roots are involved and ties break toward the lower key index.

use crate::layout::types::Key;

/// Precomputed key centers for nearest-key queries.
#[derive(Debug, Clone, Default)]
pub struct SpatialIndex {
    /// Center point of each key, in key order
    centers: Vec<(i32, i32)>,
}

impl SpatialIndex {
    /// Builds the index from a positioned key sequence.
    #[must_use]
    pub fn build(keys: &[Key]) -> Self {
        let centers = keys
            .iter()
            .map(|k| (k.bounds.center_x(), k.bounds.center_y()))
            .collect();
        Self { centers }
    }

    /// Number of indexed keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Key indices ranked by squared distance from `(x, y)` to each key
    /// center, nearest first. Equidistant keys keep ascending index order.
    #[must_use]
    pub fn nearest(&self, x: i32, y: i32) -> Vec<usize> {
        let mut ranked: Vec<usize> = (0..self.centers.len()).collect();
        ranked.sort_by_key(|&i| self.squared_distance(i, x, y));
        ranked
    }

    fn squared_distance(&self, index: usize, x: i32, y: i32) -> i64 {
        let (cx, cy) = self.centers[index];
        let dx = i64::from(cx) - i64::from(x);
        let dy = i64::from(cy) - i64::from(y);
        dx * dx + dy * dy
    }
}

// ============================================================================
// Tests
// ============================================================================
