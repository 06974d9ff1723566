// ABOUTME: Tests for portion estimation - clamping, both strategies, deterministic selection
// ABOUTME: Validates size buckets, confidence weighting, and the documented scenario values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use platesense::portion::{
    LinearEstimator, PortionEstimator, ReferenceEstimator, ReferenceTable, SizeCategory,
};
use platesense_core::constants::{MAX_PORTION_GRAMS, MIN_PORTION_GRAMS};
use platesense_core::models::{BoundingBox, Detection, ImageDimensions};

const IMAGE: ImageDimensions = ImageDimensions::new(640, 640);

fn detection(food: &str, confidence: f64, bbox: [i32; 4]) -> Detection {
    Detection::new(food, confidence, BoundingBox::from(bbox))
}

#[test]
fn test_linear_dosa_scenario_clamps_at_upper_bound() {
    // 200x100 box = 20000 px^2, dosa multiplier 0.025 -> exactly 500 g.
    let estimator = LinearEstimator::default();
    let grams = estimator.estimate(&detection("dosa", 0.85, [100, 100, 300, 200]));
    assert!((grams - 500.0).abs() < 1e-9);
}

#[test]
fn test_linear_unknown_food_uses_default_multiplier() {
    // 100x100 box = 10000 px^2 at the 0.015 default -> 150 g.
    let estimator = LinearEstimator::default();
    let grams = estimator.estimate(&detection("xyz", 0.5, [0, 0, 100, 100]));
    assert!((grams - 150.0).abs() < 1e-9);
}

#[test]
fn test_linear_zero_area_box_clamps_to_minimum() {
    let estimator = LinearEstimator::default();
    let grams = estimator.estimate(&detection("dosa", 0.9, [50, 50, 50, 50]));
    assert!((grams - MIN_PORTION_GRAMS).abs() < f64::EPSILON);
}

#[test]
fn test_linear_huge_box_clamps_to_maximum() {
    let estimator = LinearEstimator::default();
    let grams = estimator.estimate(&detection("tea", 0.9, [0, 0, 640, 640]));
    assert!((grams - MAX_PORTION_GRAMS).abs() < f64::EPSILON);
}

#[test]
fn test_size_category_bucket_boundaries() {
    assert_eq!(SizeCategory::from_normalized_area(0.05), SizeCategory::Small);
    // Boundaries are half-open: exactly 10% is already medium.
    assert_eq!(SizeCategory::from_normalized_area(0.10), SizeCategory::Medium);
    assert_eq!(SizeCategory::from_normalized_area(0.29), SizeCategory::Medium);
    assert_eq!(SizeCategory::from_normalized_area(0.30), SizeCategory::Large);
    assert_eq!(SizeCategory::from_normalized_area(1.0), SizeCategory::Large);
}

#[test]
fn test_reference_dosa_breakdown() {
    // 20000 / 409600 = 0.0488 -> small bucket; 0.8 + 0.85 * 0.4 = 1.14;
    // 86 g * 0.6 * 1.14 = 58.824 g.
    let estimator = ReferenceEstimator::new(ReferenceTable::builtin());
    let breakdown = estimator.estimate(&detection("dosa", 0.85, [100, 100, 300, 200]), IMAGE);

    assert_eq!(breakdown.size_category, SizeCategory::Small);
    assert!((breakdown.normalized_area - 0.048_828_125).abs() < 1e-12);
    assert!((breakdown.grams - 58.824).abs() < 1e-6);
}

#[test]
fn test_reference_confidence_weighting_endpoints() {
    // Unknown food -> 100 g base; 256x320 box = 81920 px^2 -> 0.2 -> medium.
    let estimator = ReferenceEstimator::new(ReferenceTable::builtin());
    let bbox = [0, 0, 256, 320];

    let low = estimator.estimate(&detection("mystery", 0.0, bbox), IMAGE);
    let high = estimator.estimate(&detection("mystery", 1.0, bbox), IMAGE);

    assert_eq!(low.size_category, SizeCategory::Medium);
    assert!((low.grams - 80.0).abs() < 1e-9);
    assert!((high.grams - 120.0).abs() < 1e-9);
}

#[test]
fn test_reference_zero_area_box_clamps_to_minimum() {
    // appalam: 15 g * 0.6 (small) * 0.8 (confidence 0) = 7.2 -> clamped.
    let estimator = ReferenceEstimator::new(ReferenceTable::builtin());
    let breakdown = estimator.estimate(&detection("appalam", 0.0, [10, 10, 10, 10]), IMAGE);
    assert!((breakdown.grams - MIN_PORTION_GRAMS).abs() < f64::EPSILON);
}

#[test]
fn test_reference_large_portion_clamps_to_maximum() {
    // paneer briyani: 300 g * 1.4 (large) * 1.2 (confidence 1) = 504 -> clamped.
    let estimator = ReferenceEstimator::new(ReferenceTable::builtin());
    let breakdown = estimator.estimate(&detection("paneer briyani", 1.0, [0, 0, 640, 640]), IMAGE);
    assert!((breakdown.grams - MAX_PORTION_GRAMS).abs() < f64::EPSILON);
}

#[test]
fn test_estimate_always_within_bounds() {
    let estimators = [
        PortionEstimator::select(Some(ReferenceTable::builtin())),
        PortionEstimator::select(None),
    ];
    let cases = [
        detection("dosa", 0.0, [0, 0, 0, 0]),
        detection("dosa", 1.0, [0, 0, 640, 640]),
        detection("unknown", 0.5, [0, 0, 1, 1]),
        detection("tea", 1.0, [0, 0, 639, 639]),
        detection("podi", 0.0, [600, 600, 640, 640]),
    ];
    for estimator in &estimators {
        for case in &cases {
            let grams = estimator.estimate(case, IMAGE);
            assert!((MIN_PORTION_GRAMS..=MAX_PORTION_GRAMS).contains(&grams));
        }
    }
}

#[test]
fn test_selection_prefers_reference_table() {
    let estimator = PortionEstimator::select(Some(ReferenceTable::builtin()));
    assert_eq!(estimator.strategy_name(), "reference-weight");
}

#[test]
fn test_selection_degrades_without_reference_table() {
    let estimator = PortionEstimator::select(None);
    assert_eq!(estimator.strategy_name(), "linear-multiplier");
}

#[test]
fn test_selection_degrades_on_empty_reference_table() {
    let empty = ReferenceTable::from_entries(Vec::new());
    let estimator = PortionEstimator::select(Some(empty));
    assert_eq!(estimator.strategy_name(), "linear-multiplier");
}

#[test]
fn test_selection_is_deterministic() {
    let first = PortionEstimator::select(None);
    let second = PortionEstimator::select(None);
    let det = detection("sambar", 0.7, [10, 10, 200, 200]);
    assert!((first.estimate(&det, IMAGE) - second.estimate(&det, IMAGE)).abs() < f64::EPSILON);
}
