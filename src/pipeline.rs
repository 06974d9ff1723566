// ABOUTME: Pipeline orchestration - detections through portion estimation into aggregation
// ABOUTME: Per-item fault isolation, one knowledge snapshot per run, stamped meal analyses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

//! The pipeline orchestrator.
//!
//! Sequences the portion estimator and the nutrition aggregator over all
//! detections of one image. Purely sequential and synchronous; the only
//! state read is one knowledge-base snapshot taken at the start of the run,
//! so a run is an idempotent function of its inputs and the table state.

use crate::aggregate::aggregate;
use crate::knowledge::SharedKnowledgeBase;
use crate::portion::{PortionEstimator, ReferenceTable};
use chrono::Utc;
use platesense_core::errors::PipelineError;
use platesense_core::models::{Detection, DetectionFault, ImageDimensions, MealAnalysis};
use tracing::{debug, warn};
use uuid::Uuid;

/// The detection-to-nutrition pipeline for one detector's output space.
#[derive(Debug, Clone)]
pub struct MealPipeline {
    knowledge: SharedKnowledgeBase,
    estimator: PortionEstimator,
}

impl MealPipeline {
    /// Create a pipeline over a shared knowledge base and a selected
    /// portion strategy.
    #[must_use]
    pub const fn new(knowledge: SharedKnowledgeBase, estimator: PortionEstimator) -> Self {
        Self {
            knowledge,
            estimator,
        }
    }

    /// Convenience constructor wiring the built-in nutrition table and the
    /// built-in reference weight table.
    #[must_use]
    pub fn with_builtin_tables() -> Self {
        Self::new(
            SharedKnowledgeBase::default(),
            PortionEstimator::select(Some(ReferenceTable::builtin())),
        )
    }

    /// The shared knowledge base, for hot updates by the embedding service.
    #[must_use]
    pub const fn knowledge(&self) -> &SharedKnowledgeBase {
        &self.knowledge
    }

    /// Analyze one image's detections into a stamped meal analysis.
    ///
    /// Malformed detections (inverted box, confidence outside `[0, 1]`) are
    /// rejected per item: they become [`DetectionFault`] entries and never
    /// abort the remaining detections. An empty detection list yields a
    /// zero-total result.
    ///
    /// # Errors
    /// Returns [`PipelineError::InvalidImageDimensions`] when either image
    /// dimension is zero - with no usable image area, every normalized-area
    /// estimate would be nonsense, so the whole call is a caller bug.
    pub fn analyze(
        &self,
        detections: &[Detection],
        image: ImageDimensions,
    ) -> Result<MealAnalysis, PipelineError> {
        if image.is_degenerate() {
            return Err(PipelineError::InvalidImageDimensions {
                width: image.width,
                height: image.height,
            });
        }

        let knowledge = self.knowledge.snapshot();
        let mut portions = Vec::with_capacity(detections.len());
        let mut faults = Vec::new();

        for (index, detection) in detections.iter().enumerate() {
            match detection.validate() {
                Ok(()) => {
                    let grams = self.estimator.estimate(detection, image);
                    portions.push((detection.clone(), grams));
                }
                Err(reason) => {
                    warn!(
                        index,
                        food = %detection.food_name,
                        %reason,
                        "rejecting malformed detection"
                    );
                    faults.push(DetectionFault {
                        index,
                        food_name: detection.food_name.clone(),
                        reason: reason.to_string(),
                    });
                }
            }
        }

        let meal = aggregate(&knowledge, &portions);
        debug!(
            items = meal.food_items.len(),
            rejected = faults.len(),
            strategy = self.estimator.strategy_name(),
            total_calories = meal.total_calories,
            "meal analysis complete"
        );

        Ok(MealAnalysis {
            analysis_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            image,
            meal,
            faults,
        })
    }
}

impl Default for MealPipeline {
    fn default() -> Self {
        Self::with_builtin_tables()
    }
}
