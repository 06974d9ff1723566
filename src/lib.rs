// ABOUTME: Main library entry point for the PlateSense nutrition estimation core
// ABOUTME: Knowledge base, portion estimation strategies, aggregation, and pipeline orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

#![deny(unsafe_code)]

//! # `PlateSense`
//!
//! The detection-to-nutrition core of a meal-photo calorie estimator.
//! Detections from an external food detector go in (class label, confidence,
//! bounding box); per-item portion weights, per-item macros, and a meal total
//! come out.
//!
//! The HTTP layer, image decoding, the detection model itself, and history
//! persistence are external collaborators: this crate assumes detections have
//! already been produced and exposes a pure, synchronous pipeline over them.
//!
//! ## Architecture
//!
//! - **knowledge**: food-name to per-100g macro profile table with a built-in
//!   fallback and atomic hot updates
//! - **portion**: bounding-box geometry to grams, two interchangeable
//!   strategies behind one estimator
//! - **aggregate**: portion-scaled nutrition lookup and meal totals
//! - **pipeline**: the orchestrator sequencing estimator and aggregator
//! - **config** / **logging**: environment-driven setup for the embedding
//!   service
//!
//! ## Example
//!
//! ```rust
//! use platesense::pipeline::MealPipeline;
//! use platesense_core::models::{BoundingBox, Detection, ImageDimensions};
//!
//! # fn main() -> Result<(), platesense_core::errors::PipelineError> {
//! let pipeline = MealPipeline::with_builtin_tables();
//! let detections = vec![Detection::new(
//!     "dosa",
//!     0.85,
//!     BoundingBox::new(100, 100, 300, 200),
//! )];
//!
//! let analysis = pipeline.analyze(&detections, ImageDimensions::new(640, 640))?;
//! println!("{} kcal", analysis.meal.total_calories);
//! # Ok(())
//! # }
//! ```

/// Portion-scaled nutrition lookup and meal totals
pub mod aggregate;

/// Environment-driven configuration for external nutrition data
pub mod config;

/// Food-name to macro-profile knowledge base with atomic hot updates
pub mod knowledge;

/// Logging configuration and structured logging setup
pub mod logging;

/// Pipeline orchestration: detections in, meal analysis out
pub mod pipeline;

/// Portion-size estimation strategies from bounding-box geometry
pub mod portion;
