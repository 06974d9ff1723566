// ABOUTME: Reference-weight portion estimation with size buckets and confidence weighting
// ABOUTME: Average serving weight x normalized-area bucket x confidence multiplier, clamped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

use crate::portion::{clamp_portion, ReferenceTable};
use platesense_core::constants::{
    CONFIDENCE_WEIGHT_BASE, CONFIDENCE_WEIGHT_SPAN, LARGE_SIZE_MULTIPLIER, MEDIUM_AREA_UPPER,
    MEDIUM_SIZE_MULTIPLIER, SMALL_AREA_UPPER, SMALL_SIZE_MULTIPLIER,
};
use platesense_core::models::{Detection, ImageDimensions};
use serde::{Deserialize, Serialize};

/// Size bucket for a detected region, by fraction of image area covered.
///
/// Bucket boundaries are fixed policy, not configurable per food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeCategory {
    /// Under 10% of the image
    Small,
    /// 10% to 30% of the image
    Medium,
    /// 30% of the image or more
    Large,
}

impl SizeCategory {
    /// Bucket a normalized area (bounding-box area / image area).
    #[must_use]
    pub fn from_normalized_area(normalized_area: f64) -> Self {
        if normalized_area < SMALL_AREA_UPPER {
            Self::Small
        } else if normalized_area < MEDIUM_AREA_UPPER {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// Base-weight multiplier for this bucket.
    #[must_use]
    pub const fn weight_multiplier(self) -> f64 {
        match self {
            Self::Small => SMALL_SIZE_MULTIPLIER,
            Self::Medium => MEDIUM_SIZE_MULTIPLIER,
            Self::Large => LARGE_SIZE_MULTIPLIER,
        }
    }
}

/// One reference-strategy estimate with its intermediate quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortionBreakdown {
    /// Estimated portion weight in grams, clamped
    pub grams: f64,
    /// Size bucket the region fell into
    pub size_category: SizeCategory,
    /// Bounding-box area divided by image area
    pub normalized_area: f64,
}

/// The richer default strategy.
///
/// `grams = serving_weight(food) * size_multiplier * (0.8 + 0.4 * confidence)`,
/// clamped to the trusted portion range. Needs the per-food average serving
/// weight table; the orchestrator degrades to [`LinearEstimator`] when none
/// is available.
///
/// [`LinearEstimator`]: crate::portion::LinearEstimator
#[derive(Debug, Clone)]
pub struct ReferenceEstimator {
    weights: ReferenceTable,
}

impl ReferenceEstimator {
    /// Create an estimator over a serving-weight table.
    #[must_use]
    pub const fn new(weights: ReferenceTable) -> Self {
        Self { weights }
    }

    /// Estimate the portion for one detection, reporting the intermediate
    /// size bucket and normalized area alongside the grams.
    #[must_use]
    pub fn estimate(&self, detection: &Detection, image: ImageDimensions) -> PortionBreakdown {
        let normalized_area = detection.bounding_box.area_pixels() / image.pixel_area();
        let size_category = SizeCategory::from_normalized_area(normalized_area);
        let confidence_multiplier = detection
            .confidence
            .mul_add(CONFIDENCE_WEIGHT_SPAN, CONFIDENCE_WEIGHT_BASE);
        let base_weight = self.weights.serving_weight(&detection.food_name);

        let grams =
            clamp_portion(base_weight * size_category.weight_multiplier() * confidence_multiplier);
        PortionBreakdown {
            grams,
            size_category,
            normalized_area,
        }
    }
}
