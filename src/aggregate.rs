// ABOUTME: Nutrition aggregation - portion-scaled macro lookup and meal totals
// ABOUTME: Infallible per-item lookup, one documented rounding pass, input order preserved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

//! The nutrition aggregator.
//!
//! Folds `(detection, grams)` pairs into a [`MealResult`]: per-item profile
//! lookup (infallible, unknown foods resolve to the default profile), linear
//! scaling to the portion weight, one rounding pass per item, and running
//! totals accumulated over the *unrounded* values so the meal total never
//! drifts from double rounding.

use crate::knowledge::KnowledgeBase;
use platesense_core::models::{Detection, FoodLineItem, MacroTotals, MealResult};
use platesense_core::rounding::{round1, round2};

/// Aggregate estimated portions into a meal result.
///
/// Items keep their input order. No pair can fail: lookup misses degrade to
/// the default profile and every numeric step is total.
#[must_use]
pub fn aggregate(knowledge: &KnowledgeBase, portions: &[(Detection, f64)]) -> MealResult {
    let mut total_calories = 0.0;
    let mut total_protein = 0.0;
    let mut total_carbs = 0.0;
    let mut total_fat = 0.0;
    let mut food_items = Vec::with_capacity(portions.len());

    for (detection, grams) in portions {
        let profile = knowledge.lookup(&detection.food_name);
        let scaled = profile.scale(*grams);

        total_calories += scaled.calories;
        total_protein += scaled.protein_g;
        total_carbs += scaled.carbs_g;
        total_fat += scaled.fat_g;

        food_items.push(FoodLineItem {
            food_name: detection.food_name.clone(),
            portion_grams: round1(*grams),
            calories: round1(scaled.calories),
            protein_g: round1(scaled.protein_g),
            carbs_g: round1(scaled.carbs_g),
            fat_g: round1(scaled.fat_g),
            confidence: round2(detection.confidence),
            bounding_box: detection.bounding_box,
        });
    }

    MealResult {
        total_calories: round1(total_calories),
        total_macros: MacroTotals {
            protein_g: round1(total_protein),
            carbs_g: round1(total_carbs),
            fat_g: round1(total_fat),
        },
        food_items,
    }
}
