// ABOUTME: Tests for nutrition aggregation - scaling, rounding policy, infallible lookups
// ABOUTME: Validates empty input, linearity before rounding, and totals from unrounded values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use platesense::aggregate::aggregate;
use platesense::knowledge::KnowledgeBase;
use platesense_core::models::{BoundingBox, Detection, MealResult, NutritionProfile};
use std::collections::HashMap;

fn detection(food: &str, confidence: f64) -> Detection {
    Detection::new(food, confidence, BoundingBox::new(0, 0, 100, 100))
}

#[test]
fn test_aggregate_empty_is_zero_result() {
    let kb = KnowledgeBase::builtin();
    let result = aggregate(&kb, &[]);
    assert_eq!(result, MealResult::empty());
    assert!(result.food_items.is_empty());
    assert!(result.total_calories.abs() < f64::EPSILON);
}

#[test]
fn test_aggregate_scales_profile_to_portion() {
    let kb = KnowledgeBase::builtin();
    // dosa: 133 kcal / 4.5 p / 18 c / 4.5 f per 100 g, at 500 g.
    let result = aggregate(&kb, &[(detection("dosa", 0.85), 500.0)]);

    let item = &result.food_items[0];
    assert!((item.portion_grams - 500.0).abs() < f64::EPSILON);
    assert!((item.calories - 665.0).abs() < f64::EPSILON);
    assert!((item.protein_g - 22.5).abs() < f64::EPSILON);
    assert!((item.carbs_g - 90.0).abs() < f64::EPSILON);
    assert!((item.fat_g - 22.5).abs() < f64::EPSILON);
    assert!((result.total_calories - 665.0).abs() < f64::EPSILON);
}

#[test]
fn test_scaling_linearity_before_rounding() {
    let profile = NutritionProfile::new(133.0, 4.5, 18.0, 4.5);
    let single = profile.scale(120.0);
    let double = profile.scale(240.0);
    assert!((double.calories - 2.0 * single.calories).abs() < 1e-9);
    assert!((double.protein_g - 2.0 * single.protein_g).abs() < 1e-9);
    assert!((double.carbs_g - 2.0 * single.carbs_g).abs() < 1e-9);
    assert!((double.fat_g - 2.0 * single.fat_g).abs() < 1e-9);
}

#[test]
fn test_unknown_food_degrades_to_default_profile() {
    let kb = KnowledgeBase::builtin();
    // Default rice profile at 150 g: 195 kcal, 42 g carbs.
    let result = aggregate(&kb, &[(detection("xyz", 0.5), 150.0)]);

    let item = &result.food_items[0];
    assert!((item.calories - 195.0).abs() < f64::EPSILON);
    assert!((item.carbs_g - 42.0).abs() < f64::EPSILON);
    assert!((result.total_calories - 195.0).abs() < f64::EPSILON);
}

#[test]
fn test_totals_sum_unrounded_values() {
    // Two portions of 0.25 kcal each: items round to 0.3 apiece, but the
    // total is round(0.5) = 0.5, not 0.3 + 0.3.
    let mut kb = KnowledgeBase::builtin();
    let mut entries = HashMap::new();
    entries.insert("tiny".to_owned(), NutritionProfile::new(1.0, 0.0, 0.0, 0.0));
    kb.merge(entries);

    let portions = vec![(detection("tiny", 0.9), 25.0), (detection("tiny", 0.9), 25.0)];
    let result = aggregate(&kb, &portions);

    assert!((result.food_items[0].calories - 0.3).abs() < f64::EPSILON);
    assert!((result.food_items[1].calories - 0.3).abs() < f64::EPSILON);
    assert!((result.total_calories - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_items_keep_input_order_and_confidence() {
    let kb = KnowledgeBase::builtin();
    let portions = vec![
        (detection("idly", 0.918), 105.0),
        (detection("sambar", 0.784), 140.0),
    ];
    let result = aggregate(&kb, &portions);

    assert_eq!(result.food_items[0].food_name, "idly");
    assert_eq!(result.food_items[1].food_name, "sambar");
    // Confidence is rounded to two decimals, bounding box preserved.
    assert!((result.food_items[0].confidence - 0.92).abs() < f64::EPSILON);
    assert!((result.food_items[1].confidence - 0.78).abs() < f64::EPSILON);
    assert_eq!(result.food_items[0].bounding_box, BoundingBox::new(0, 0, 100, 100));
}

#[test]
fn test_totals_accumulate_across_items() {
    let kb = KnowledgeBase::builtin();
    // chicken 65 has zero carbs; pair it with satham to check each macro sum.
    let portions = vec![
        (detection("chicken 65", 0.9), 100.0),
        (detection("satham", 0.9), 100.0),
    ];
    let result = aggregate(&kb, &portions);

    assert!((result.total_calories - 295.0).abs() < f64::EPSILON);
    assert!((result.total_macros.protein_g - 33.7).abs() < f64::EPSILON);
    assert!((result.total_macros.carbs_g - 28.0).abs() < f64::EPSILON);
    assert!((result.total_macros.fat_g - 3.9).abs() < f64::EPSILON);
}
