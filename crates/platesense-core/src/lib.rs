// ABOUTME: Core types and constants for the PlateSense nutrition estimation pipeline
// ABOUTME: Foundation crate with domain models, error types, numeric policy, and rounding helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

#![deny(unsafe_code)]

//! # `PlateSense` Core
//!
//! Foundation crate providing shared types for the `PlateSense`
//! detection-to-nutrition pipeline. This crate holds no policy and performs
//! no I/O; it is designed to change infrequently.
//!
//! ## Modules
//!
//! - **models**: Domain types (`Detection`, `NutritionProfile`, `MealResult`, ...)
//! - **errors**: Structured error types for validation and pipeline faults
//! - **constants**: Numeric policy shared between crates (clamp bounds, bucket thresholds)
//! - **rounding**: The single, documented rounding policy for payload values

/// Numeric policy shared between crates (clamp bounds, bucket thresholds)
pub mod constants;

/// Structured error types for validation and pipeline faults
pub mod errors;

/// Domain data models for detections and nutrition results
pub mod models;

/// Decimal rounding helpers implementing the payload rounding policy
pub mod rounding;

pub use errors::{KnowledgeBaseError, PipelineError, ValidationError};
pub use models::{
    BoundingBox, Detection, DetectionFault, FoodLineItem, ImageDimensions, MacroTotals,
    MealAnalysis, MealResult, NutritionProfile,
};
