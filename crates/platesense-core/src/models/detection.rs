// ABOUTME: Detector-side input models for food region detections
// ABOUTME: BoundingBox, Detection with validation, ImageDimensions, DetectionFault
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle delimiting a detected food region.
///
/// Coordinates are pixels in the detector's working coordinate space,
/// `(x1, y1)` top-left and `(x2, y2)` bottom-right. Serialized as a
/// `[x1, y1, x2, y2]` array to match the detector wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct BoundingBox {
    /// Left edge
    pub x1: i32,
    /// Top edge
    pub y1: i32,
    /// Right edge
    pub x2: i32,
    /// Bottom edge
    pub y2: i32,
}

impl BoundingBox {
    /// Create a bounding box from corner coordinates.
    #[must_use]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Box area in pixels. Zero for degenerate (zero-width or zero-height)
    /// boxes; negative extents are clamped to zero rather than producing a
    /// negative area.
    #[must_use]
    pub fn area_pixels(&self) -> f64 {
        let width = f64::from(self.x2.saturating_sub(self.x1)).max(0.0);
        let height = f64::from(self.y2.saturating_sub(self.y1)).max(0.0);
        width * height
    }

    /// Whether the box is inverted (`x2 < x1` or `y2 < y1`).
    ///
    /// Degenerate zero-area boxes are not inverted: a detector may
    /// legitimately emit a collapsed box, which the estimator clamps to the
    /// minimum portion instead of rejecting.
    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.x2 < self.x1 || self.y2 < self.y1
    }
}

impl From<[i32; 4]> for BoundingBox {
    fn from([x1, y1, x2, y2]: [i32; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<BoundingBox> for [i32; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.x1, bbox.y1, bbox.x2, bbox.y2]
    }
}

/// One recognized food region produced by the external detector.
///
/// Immutable once received: the pipeline enriches a copy into a
/// [`FoodLineItem`](crate::models::FoodLineItem) and never mutates the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Detected food class, matched case-insensitively against nutrition tables
    #[serde(rename = "class_name")]
    pub food_name: String,
    /// Detector confidence score in `[0, 1]`
    pub confidence: f64,
    /// Bounding box in the detector's working coordinate space
    #[serde(rename = "bbox")]
    pub bounding_box: BoundingBox,
}

impl Detection {
    /// Create a detection from its raw parts.
    #[must_use]
    pub fn new(food_name: impl Into<String>, confidence: f64, bounding_box: BoundingBox) -> Self {
        Self {
            food_name: food_name.into(),
            confidence,
            bounding_box,
        }
    }

    /// Check the upstream input contract.
    ///
    /// # Errors
    /// Returns [`ValidationError::ConfidenceOutOfRange`] for a confidence
    /// outside `[0, 1]` and [`ValidationError::InvertedBoundingBox`] for an
    /// inverted box. These are detector bugs and the caller decides whether
    /// to skip the detection or fail the request.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(ValidationError::ConfidenceOutOfRange {
                value: self.confidence,
            });
        }
        if self.bounding_box.is_inverted() {
            return Err(ValidationError::InvertedBoundingBox {
                x1: self.bounding_box.x1,
                y1: self.bounding_box.y1,
                x2: self.bounding_box.x2,
                y2: self.bounding_box.y2,
            });
        }
        Ok(())
    }
}

/// Dimensions of the image the detector was run on.
///
/// Callers must pass the detector's working resolution, not the original
/// upload resolution; normalized bounding-box areas silently skew otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ImageDimensions {
    /// Create image dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total image area in pixels.
    #[must_use]
    pub fn pixel_area(self) -> f64 {
        f64::from(self.width) * f64::from(self.height)
    }

    /// Whether either dimension is zero.
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// One rejected detection, recorded by the orchestrator instead of aborting
/// the rest of the meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionFault {
    /// Index of the detection in the input list
    pub index: usize,
    /// Food name the detector reported for the rejected region
    pub food_name: String,
    /// Human-readable rejection reason
    pub reason: String,
}
