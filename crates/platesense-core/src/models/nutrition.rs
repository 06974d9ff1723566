// ABOUTME: Nutrition-side output models for the detection-to-nutrition pipeline
// ABOUTME: NutritionProfile, MacroTotals, FoodLineItem, MealResult, MealAnalysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

use crate::constants::REFERENCE_SERVING_GRAMS;
use crate::models::detection::{BoundingBox, DetectionFault, ImageDimensions};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro content per 100 g of a named food.
///
/// Values are per reference serving, never per portion; scaling to a portion
/// happens through [`NutritionProfile::scale`]. All fields are non-negative,
/// enforced where external data enters (the knowledge-base loader), not per
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionProfile {
    /// Energy in kcal per 100 g
    pub calories: f64,
    /// Protein in grams per 100 g
    pub protein_g: f64,
    /// Carbohydrates in grams per 100 g
    pub carbs_g: f64,
    /// Fat in grams per 100 g
    pub fat_g: f64,
}

impl NutritionProfile {
    /// Create a per-100g profile.
    #[must_use]
    pub const fn new(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Scale this per-100g profile to a portion weight.
    ///
    /// Linear and unrounded: doubling `grams` doubles every field. Rounding
    /// is the aggregator's concern.
    #[must_use]
    pub fn scale(&self, grams: f64) -> Self {
        let factor = grams / REFERENCE_SERVING_GRAMS;
        Self {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
        }
    }
}

/// Summed macro content of a meal, in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Total protein in grams
    #[serde(rename = "protein")]
    pub protein_g: f64,
    /// Total carbohydrates in grams
    #[serde(rename = "carbs")]
    pub carbs_g: f64,
    /// Total fat in grams
    #[serde(rename = "fat")]
    pub fat_g: f64,
}

/// One detection enriched with its estimated portion and scaled nutrition.
///
/// Derived, never persisted by the core. All nutrition values are rounded to
/// one decimal, confidence to two; the original bounding box is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLineItem {
    /// Food name as reported by the detector
    pub food_name: String,
    /// Estimated portion weight in grams
    pub portion_grams: f64,
    /// Energy for this portion in kcal
    pub calories: f64,
    /// Protein for this portion in grams
    #[serde(rename = "protein")]
    pub protein_g: f64,
    /// Carbohydrates for this portion in grams
    #[serde(rename = "carbs")]
    pub carbs_g: f64,
    /// Fat for this portion in grams
    #[serde(rename = "fat")]
    pub fat_g: f64,
    /// Original detector confidence, rounded to two decimals
    pub confidence: f64,
    /// Original bounding box
    #[serde(rename = "bbox")]
    pub bounding_box: BoundingBox,
}

/// Aggregated nutrition for one meal photograph.
///
/// Items appear in input detection order. Totals are the rounded sums of the
/// unrounded per-item values (see [`crate::rounding`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealResult {
    /// Total energy in kcal, rounded to one decimal
    pub total_calories: f64,
    /// Total macros, each rounded to one decimal
    pub total_macros: MacroTotals,
    /// Per-detection line items in input order
    pub food_items: Vec<FoodLineItem>,
}

impl MealResult {
    /// The empty meal: zero totals, no items.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// One full pipeline run: the meal result plus run metadata.
///
/// The meal payload is flattened so the serialized shape matches the
/// downstream response contract, with the analysis metadata alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealAnalysis {
    /// Unique id for this analysis run
    pub analysis_id: Uuid,
    /// When the analysis ran
    pub analyzed_at: DateTime<Utc>,
    /// The detector's working image dimensions
    pub image: ImageDimensions,
    /// Aggregated nutrition for the meal
    #[serde(flatten)]
    pub meal: MealResult,
    /// Detections rejected for input contract violations, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faults: Vec<DetectionFault>,
}
