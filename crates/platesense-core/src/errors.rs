// ABOUTME: Structured error types for the detection-to-nutrition pipeline
// ABOUTME: Per-detection validation faults, whole-call pipeline errors, knowledge-base load errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

//! Error taxonomy for the pipeline core.
//!
//! Three tiers, matching how failures are recovered:
//!
//! - [`ValidationError`] - one malformed detection; isolated per item by the
//!   orchestrator, never aborts the rest of a meal.
//! - [`PipelineError`] - the whole call is unusable (caller contract
//!   violation such as a zero-area image).
//! - [`KnowledgeBaseError`] - internal to the knowledge-base loader; the
//!   public load API recovers by substituting the built-in table, so this
//!   never reaches pipeline callers.

use thiserror::Error;

/// Input contract violation on a single detection.
///
/// These are upstream detector bugs: the core rejects the detection
/// explicitly rather than computing nonsense from it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Confidence score outside the unit interval
    #[error("confidence {value} is outside [0, 1]")]
    ConfidenceOutOfRange {
        /// The offending confidence value
        value: f64,
    },

    /// Inverted bounding box (`x2 < x1` or `y2 < y1`)
    #[error("inverted bounding box [{x1}, {y1}, {x2}, {y2}]")]
    InvertedBoundingBox {
        /// Left edge
        x1: i32,
        /// Top edge
        y1: i32,
        /// Right edge
        x2: i32,
        /// Bottom edge
        y2: i32,
    },
}

/// Whole-call pipeline failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Image dimensions under which no bounding box can be normalized
    #[error("degenerate image dimensions {width}x{height}")]
    InvalidImageDimensions {
        /// Reported image width in pixels
        width: u32,
        /// Reported image height in pixels
        height: u32,
    },
}

/// Failure while parsing an external nutrition table.
///
/// Collected in one place so the soft-fallback decision (abandon the load,
/// return the built-in table) lives in exactly one caller.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    /// The source file could not be read
    #[error("failed to read nutrition table: {0}")]
    Io(#[from] std::io::Error),

    /// A required column is absent from the header row
    #[error("nutrition table header is missing column '{column}'")]
    MissingColumn {
        /// Name of the absent column
        column: &'static str,
    },

    /// A data row is missing fields or carries a non-numeric value
    #[error("nutrition table row {line}: invalid value '{value}' for '{field}'")]
    InvalidField {
        /// 1-based line number of the offending row
        line: usize,
        /// Column the value belongs to
        field: &'static str,
        /// The raw, unparseable value
        value: String,
    },

    /// The table parsed but contains no data rows
    #[error("nutrition table has no data rows")]
    Empty,
}
