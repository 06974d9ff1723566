// ABOUTME: Portion-size estimation from bounding-box geometry
// ABOUTME: Two interchangeable strategies behind one estimator with a single selection point
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

//! Portion estimation.
//!
//! Maps one [`Detection`] to an estimated weight in grams, always clamped to
//! `[MIN_PORTION_GRAMS, MAX_PORTION_GRAMS]`. Two strategies exist:
//!
//! - [`ReferenceEstimator`] - per-food average serving weights scaled by a
//!   normalized-area size bucket and a confidence weight. The richer default.
//! - [`LinearEstimator`] - a per-food linear area-to-grams multiplier. The
//!   guaranteed-available fallback.
//!
//! Strategy choice happens exactly once, in [`PortionEstimator::select`]:
//! within a pipeline every detection goes through the same strategy, and a
//! missing or empty reference table degrades to the linear strategy
//! deterministically (logged, never raised).

/// Linear area-to-grams fallback strategy
pub mod linear;

/// Reference-weight strategy with size buckets and confidence weighting
pub mod reference;

/// Built-in per-food weight and multiplier tables
pub mod tables;

pub use linear::LinearEstimator;
pub use reference::{PortionBreakdown, ReferenceEstimator, SizeCategory};
pub use tables::{MultiplierTable, ReferenceTable};

use platesense_core::constants::{MAX_PORTION_GRAMS, MIN_PORTION_GRAMS};
use platesense_core::models::{Detection, ImageDimensions};
use tracing::{debug, warn};

/// Clamp a raw strategy output to the trusted portion range.
pub(crate) fn clamp_portion(grams: f64) -> f64 {
    grams.clamp(MIN_PORTION_GRAMS, MAX_PORTION_GRAMS)
}

/// The portion estimator: one selected strategy applied to every detection.
#[derive(Debug, Clone)]
pub enum PortionEstimator {
    /// Reference-weight strategy (size bucket x confidence weighting)
    Reference(ReferenceEstimator),
    /// Linear area-multiplier fallback
    Linear(LinearEstimator),
}

impl PortionEstimator {
    /// Select a strategy once for the lifetime of a pipeline.
    ///
    /// The reference strategy is used when a non-empty reference weight table
    /// is available; otherwise the estimator degrades to the linear strategy
    /// with its built-in multiplier table. The degradation is logged here and
    /// nowhere else, so it is deterministic per configuration rather than
    /// surfacing mid-meal.
    #[must_use]
    pub fn select(reference: Option<ReferenceTable>) -> Self {
        match reference {
            Some(table) if !table.is_empty() => {
                debug!(foods = table.len(), "using reference-weight portion strategy");
                Self::Reference(ReferenceEstimator::new(table))
            }
            Some(_) => {
                warn!("reference weight table is empty, degrading to linear portion strategy");
                Self::Linear(LinearEstimator::default())
            }
            None => {
                warn!("no reference weight table available, using linear portion strategy");
                Self::Linear(LinearEstimator::default())
            }
        }
    }

    /// Estimate the portion weight in grams for one detection.
    ///
    /// The detection is assumed validated (see [`Detection::validate`]); the
    /// result is always within the trusted portion range, degenerate
    /// zero-area boxes included.
    #[must_use]
    pub fn estimate(&self, detection: &Detection, image: ImageDimensions) -> f64 {
        match self {
            Self::Reference(estimator) => estimator.estimate(detection, image).grams,
            Self::Linear(estimator) => estimator.estimate(detection),
        }
    }

    /// Name of the selected strategy, for logging and diagnostics.
    #[must_use]
    pub const fn strategy_name(&self) -> &'static str {
        match self {
            Self::Reference(_) => "reference-weight",
            Self::Linear(_) => "linear-multiplier",
        }
    }
}

impl Default for PortionEstimator {
    /// The default selection: built-in reference table.
    fn default() -> Self {
        Self::select(Some(ReferenceTable::builtin()))
    }
}
