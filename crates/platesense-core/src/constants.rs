// ABOUTME: Numeric policy constants for portion estimation and nutrition scaling
// ABOUTME: Clamp bounds, fallback multipliers, size-bucket thresholds, confidence weighting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

//! Numeric policy for the portion estimator, shared between crates so that
//! estimation code and its tests agree on a single source of truth.

/// Lower bound on a single-detection portion estimate, in grams.
///
/// No strategy is trusted below this from one bounding box alone.
pub const MIN_PORTION_GRAMS: f64 = 10.0;

/// Upper bound on a single-detection portion estimate, in grams.
pub const MAX_PORTION_GRAMS: f64 = 500.0;

/// Area-to-grams multiplier for foods without a multiplier-table entry.
pub const DEFAULT_AREA_MULTIPLIER: f64 = 0.015;

/// Whole-serving weight assumed for foods without a reference-table entry.
pub const DEFAULT_SERVING_WEIGHT_G: f64 = 100.0;

/// Normalized bounding-box area below which a portion counts as small.
pub const SMALL_AREA_UPPER: f64 = 0.10;

/// Normalized bounding-box area below which a portion counts as medium.
///
/// Anything at or above this fraction of the image is a large portion.
pub const MEDIUM_AREA_UPPER: f64 = 0.30;

/// Base-weight multiplier for small portions.
pub const SMALL_SIZE_MULTIPLIER: f64 = 0.6;

/// Base-weight multiplier for medium portions.
pub const MEDIUM_SIZE_MULTIPLIER: f64 = 1.0;

/// Base-weight multiplier for large portions.
pub const LARGE_SIZE_MULTIPLIER: f64 = 1.4;

/// Confidence weighting intercept: a zero-confidence detection scales to 80%.
pub const CONFIDENCE_WEIGHT_BASE: f64 = 0.8;

/// Confidence weighting span: a full-confidence detection scales to 120%.
pub const CONFIDENCE_WEIGHT_SPAN: f64 = 0.4;

/// Grams per reference serving used when scaling nutrition profiles.
pub const REFERENCE_SERVING_GRAMS: f64 = 100.0;
