// ABOUTME: Built-in per-food portion tables for the 43 detector food classes
// ABOUTME: Average whole-serving weights and empirical area-to-grams multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

//! Per-food portion tables.
//!
//! Two tables back the two estimation strategies: [`ReferenceTable`] holds
//! typical whole-serving weights in grams, [`MultiplierTable`] holds
//! empirical area-to-grams multipliers derived from typical plate
//! photography. Both are plain data with normalized (lowercase, trimmed)
//! keys; custom tables can be built from any entry source.

use platesense_core::constants::{DEFAULT_AREA_MULTIPLIER, DEFAULT_SERVING_WEIGHT_G};
use std::collections::HashMap;

/// Average whole-serving weight in grams per food class.
const SERVING_WEIGHTS_G: &[(&str, f64)] = &[
    ("appalam", 15.0),
    ("appam", 50.0),
    ("banana", 120.0),
    ("boiled egg", 50.0),
    ("butter milk", 200.0),
    ("channa masala", 180.0),
    ("chicken 65", 150.0),
    ("dosa", 86.0),
    ("gravy", 200.0),
    ("idiyappam", 100.0),
    ("idly", 105.0),
    ("kaara chutney", 40.0),
    ("kesari", 100.0),
    ("koozh", 150.0),
    ("kuruma", 180.0),
    ("masiyal", 100.0),
    ("medu vadai", 65.0),
    ("moor kolambu", 200.0),
    ("mushroom briyani", 280.0),
    ("paal kolukattai", 50.0),
    ("paneer briyani", 300.0),
    ("paniyaram", 40.0),
    ("parupu vadai", 60.0),
    ("payasam", 100.0),
    ("pickle", 30.0),
    ("pidi kolukattai", 45.0),
    ("podi", 20.0),
    ("pongal", 180.0),
    ("poori", 60.0),
    ("poorna kolukattai", 50.0),
    ("pulisatham", 150.0),
    ("puthina chutney", 35.0),
    ("raita", 100.0),
    ("rasam", 150.0),
    ("salad", 120.0),
    ("sambar", 140.0),
    ("satham", 180.0),
    ("soup", 200.0),
    ("tea", 150.0),
    ("thayir", 100.0),
    ("thengai chutney", 40.0),
    ("thovaiyal", 80.0),
    ("uthapam", 90.0),
];

/// Empirical area-to-grams multiplier per food class.
const AREA_MULTIPLIERS: &[(&str, f64)] = &[
    ("appalam", 0.010),
    ("appam", 0.015),
    ("banana", 0.008),
    ("boiled egg", 0.012),
    ("butter milk", 0.025),
    ("channa masala", 0.020),
    ("chicken 65", 0.018),
    ("dosa", 0.025),
    ("gravy", 0.020),
    ("idiyappam", 0.016),
    ("idly", 0.008),
    ("kaara chutney", 0.015),
    ("kesari", 0.018),
    ("koozh", 0.020),
    ("kuruma", 0.020),
    ("masiyal", 0.018),
    ("medu vadai", 0.012),
    ("moor kolambu", 0.020),
    ("mushroom briyani", 0.030),
    ("paal kolukattai", 0.012),
    ("paneer briyani", 0.030),
    ("paniyaram", 0.015),
    ("parupu vadai", 0.012),
    ("payasam", 0.018),
    ("pickle", 0.008),
    ("pidi kolukattai", 0.012),
    ("podi", 0.005),
    ("pongal", 0.020),
    ("poori", 0.015),
    ("poorna kolukattai", 0.012),
    ("pulisatham", 0.020),
    ("puthina chutney", 0.015),
    ("raita", 0.018),
    ("rasam", 0.022),
    ("salad", 0.020),
    ("sambar", 0.020),
    ("satham", 0.020),
    ("soup", 0.025),
    ("tea", 0.030),
    ("thayir", 0.018),
    ("thengai chutney", 0.015),
    ("thovaiyal", 0.015),
    ("uthapam", 0.020),
];

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn build_table(entries: impl IntoIterator<Item = (String, f64)>) -> HashMap<String, f64> {
    entries
        .into_iter()
        .map(|(name, value)| (normalize(&name), value))
        .collect()
}

fn builtin_table(data: &[(&str, f64)]) -> HashMap<String, f64> {
    data.iter()
        .map(|&(name, value)| (name.to_owned(), value))
        .collect()
}

/// Typical whole-serving weight per food, in grams.
///
/// Backs the reference-weight strategy; foods without an entry fall back to
/// [`DEFAULT_SERVING_WEIGHT_G`].
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    weights: HashMap<String, f64>,
}

impl ReferenceTable {
    /// Build a table from raw entries, normalizing keys.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            weights: build_table(entries),
        }
    }

    /// The built-in 43-food serving-weight table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            weights: builtin_table(SERVING_WEIGHTS_G),
        }
    }

    /// Serving weight for a food, or the default for unknown foods.
    #[must_use]
    pub fn serving_weight(&self, food_name: &str) -> f64 {
        self.weights
            .get(&normalize(food_name))
            .copied()
            .unwrap_or(DEFAULT_SERVING_WEIGHT_G)
    }

    /// Number of foods with their own entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Empirical area-to-grams multiplier per food.
///
/// Backs the linear strategy; foods without an entry fall back to
/// [`DEFAULT_AREA_MULTIPLIER`].
#[derive(Debug, Clone)]
pub struct MultiplierTable {
    multipliers: HashMap<String, f64>,
}

impl MultiplierTable {
    /// Build a table from raw entries, normalizing keys.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            multipliers: build_table(entries),
        }
    }

    /// The built-in 43-food multiplier table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            multipliers: builtin_table(AREA_MULTIPLIERS),
        }
    }

    /// Area multiplier for a food, or the default for unknown foods.
    #[must_use]
    pub fn multiplier(&self, food_name: &str) -> f64 {
        self.multipliers
            .get(&normalize(food_name))
            .copied()
            .unwrap_or(DEFAULT_AREA_MULTIPLIER)
    }

    /// Number of foods with their own entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }
}
