// ABOUTME: Decimal rounding helpers implementing the single payload rounding policy
// ABOUTME: Half-away-from-zero at one and two decimal places
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

//! Payload rounding policy.
//!
//! All user-facing nutrition values are rounded half-away-from-zero
//! (`f64::round` at shifted scale). Per-item values are rounded to one
//! decimal (confidence to two); meal totals are computed from the
//! *unrounded* per-item values and rounded once at the end, so totals never
//! accumulate double-rounding drift.

/// Round to one decimal place, half away from zero.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
