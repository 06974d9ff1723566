// ABOUTME: Domain data models for the detection-to-nutrition pipeline
// ABOUTME: Detection inputs, nutrition profiles, line items, and meal results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

//! Domain models.
//!
//! Split by direction of data flow: [`detection`] holds what the external
//! detector produces (immutable once received), [`nutrition`] holds what the
//! pipeline derives and exposes downstream.

/// Detector-side inputs: bounding boxes, detections, image dimensions
pub mod detection;

/// Nutrition-side outputs: profiles, line items, meal results
pub mod nutrition;

pub use detection::{BoundingBox, Detection, DetectionFault, ImageDimensions};
pub use nutrition::{FoodLineItem, MacroTotals, MealAnalysis, MealResult, NutritionProfile};
