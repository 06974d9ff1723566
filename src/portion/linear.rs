// ABOUTME: Linear area-to-grams portion estimation fallback strategy
// ABOUTME: grams = bounding-box area in pixels x per-food empirical multiplier, clamped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

use crate::portion::{clamp_portion, MultiplierTable};
use platesense_core::models::Detection;

/// The guaranteed-available fallback strategy.
///
/// `grams = bbox_area_px * multiplier(food)`, clamped to the trusted portion
/// range. The area is taken in the coordinate space the detector reported,
/// so the multiplier table must have been derived at a comparable working
/// resolution.
#[derive(Debug, Clone)]
pub struct LinearEstimator {
    multipliers: MultiplierTable,
}

impl LinearEstimator {
    /// Create an estimator over a multiplier table.
    #[must_use]
    pub const fn new(multipliers: MultiplierTable) -> Self {
        Self { multipliers }
    }

    /// Estimate the portion weight in grams.
    ///
    /// A degenerate zero-area box yields zero grams before clamping and is
    /// therefore reported at the minimum trusted portion.
    #[must_use]
    pub fn estimate(&self, detection: &Detection) -> f64 {
        let area = detection.bounding_box.area_pixels();
        let multiplier = self.multipliers.multiplier(&detection.food_name);
        clamp_portion(area * multiplier)
    }
}

impl Default for LinearEstimator {
    fn default() -> Self {
        Self::new(MultiplierTable::builtin())
    }
}
