// ABOUTME: Nutrition knowledge base mapping normalized food names to per-100g macro profiles
// ABOUTME: CSV loading with soft fallback, infallible lookup, atomic shared hot updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

//! The nutrition knowledge base.
//!
//! A read-mostly table from normalized food name to [`NutritionProfile`]
//! per 100 g, with one designated default profile so lookups are infallible.
//! Loading from an external CSV fails softly: a missing or malformed source
//! abandons the whole load and substitutes the built-in table, so no partial
//! database is ever exposed.
//!
//! [`SharedKnowledgeBase`] wraps the table for concurrent pipelines: readers
//! take an `Arc` snapshot, writers build the new table and swap it
//! atomically, so a running meal analysis never observes a half-merged table.

use platesense_core::errors::KnowledgeBaseError;
use platesense_core::models::NutritionProfile;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

/// Key under which the designated default profile is always present.
pub const DEFAULT_FOOD_NAME: &str = "rice";

/// The designated default profile: plain cooked rice per 100 g.
///
/// Returned by [`KnowledgeBase::lookup`] for any food the table does not
/// know, and inserted under [`DEFAULT_FOOD_NAME`] in every table.
pub const DEFAULT_PROFILE: NutritionProfile = NutritionProfile::new(130.0, 2.7, 28.0, 0.3);

/// Built-in per-100g profiles for the 43 foods the detector is trained on.
const BUILTIN_PROFILES: &[(&str, NutritionProfile)] = &[
    ("appalam", NutritionProfile::new(372.0, 14.1, 58.4, 11.8)),
    ("appam", NutritionProfile::new(105.0, 2.1, 20.0, 1.8)),
    ("banana", NutritionProfile::new(89.0, 1.1, 22.8, 0.3)),
    ("boiled egg", NutritionProfile::new(155.0, 13.0, 1.1, 11.0)),
    ("butter milk", NutritionProfile::new(40.0, 3.1, 4.6, 0.9)),
    ("channa masala", NutritionProfile::new(164.0, 8.9, 27.4, 2.8)),
    ("chicken 65", NutritionProfile::new(165.0, 31.0, 0.0, 3.6)),
    ("dosa", NutritionProfile::new(133.0, 4.5, 18.0, 4.5)),
    ("gravy", NutritionProfile::new(150.0, 8.0, 12.0, 8.0)),
    ("idiyappam", NutritionProfile::new(349.0, 8.5, 78.2, 0.6)),
    ("idly", NutritionProfile::new(58.0, 2.8, 8.9, 0.39)),
    ("kaara chutney", NutritionProfile::new(165.0, 2.5, 6.0, 16.0)),
    ("kesari", NutritionProfile::new(320.0, 4.5, 65.0, 6.8)),
    ("koozh", NutritionProfile::new(76.0, 2.1, 13.0, 1.8)),
    ("kuruma", NutritionProfile::new(180.0, 8.0, 12.0, 8.0)),
    ("masiyal", NutritionProfile::new(100.0, 3.0, 15.0, 2.0)),
    ("medu vadai", NutritionProfile::new(245.0, 8.0, 25.0, 14.0)),
    ("moor kolambu", NutritionProfile::new(85.0, 4.2, 12.0, 2.8)),
    ("mushroom briyani", NutritionProfile::new(200.0, 6.0, 35.0, 4.0)),
    ("paal kolukattai", NutritionProfile::new(98.0, 1.8, 20.0, 1.2)),
    ("paneer briyani", NutritionProfile::new(300.0, 18.0, 35.0, 12.0)),
    ("paniyaram", NutritionProfile::new(120.0, 4.0, 16.0, 4.0)),
    ("parupu vadai", NutritionProfile::new(245.0, 8.0, 25.0, 14.0)),
    ("payasam", NutritionProfile::new(180.0, 4.2, 35.0, 3.8)),
    ("pickle", NutritionProfile::new(216.0, 2.6, 23.4, 13.1)),
    ("pidi kolukattai", NutritionProfile::new(98.0, 1.8, 20.0, 1.2)),
    ("podi", NutritionProfile::new(508.0, 26.1, 28.1, 36.2)),
    ("pongal", NutritionProfile::new(156.0, 4.2, 24.0, 5.1)),
    ("poori", NutritionProfile::new(297.0, 11.0, 61.0, 3.7)),
    ("poorna kolukattai", NutritionProfile::new(98.0, 1.8, 20.0, 1.2)),
    ("pulisatham", NutritionProfile::new(165.0, 3.8, 32.0, 2.1)),
    ("puthina chutney", NutritionProfile::new(165.0, 2.5, 6.0, 16.0)),
    ("raita", NutritionProfile::new(100.0, 3.1, 14.0, 2.3)),
    ("rasam", NutritionProfile::new(45.0, 2.1, 8.0, 0.8)),
    ("salad", NutritionProfile::new(25.0, 1.5, 5.0, 0.2)),
    ("sambar", NutritionProfile::new(85.0, 4.2, 12.0, 2.8)),
    ("satham", NutritionProfile::new(130.0, 2.7, 28.0, 0.3)),
    ("soup", NutritionProfile::new(45.0, 2.1, 8.0, 0.8)),
    ("tea", NutritionProfile::new(1.0, 0.1, 0.2, 0.0)),
    ("thayir", NutritionProfile::new(59.0, 10.0, 3.6, 0.4)),
    ("thengai chutney", NutritionProfile::new(165.0, 2.5, 6.0, 16.0)),
    ("thovaiyal", NutritionProfile::new(80.0, 3.0, 15.0, 2.0)),
    ("uthapam", NutritionProfile::new(120.0, 4.0, 16.0, 4.0)),
];

/// CSV header columns, in the order the loader resolves them.
const COLUMNS: [&str; 5] = [
    "food_name",
    "calories_per_100g",
    "protein_per_100g",
    "carbs_per_100g",
    "fat_per_100g",
];

/// Normalize a food name for table keying: lowercase, trimmed.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// The food-name to per-100g macro profile table.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    foods: HashMap<String, NutritionProfile>,
    default_profile: NutritionProfile,
}

impl KnowledgeBase {
    /// Build a table from raw entries, normalizing keys.
    ///
    /// The designated default profile is inserted under
    /// [`DEFAULT_FOOD_NAME`] when absent, so it is a real food-class entry in
    /// every table.
    #[must_use]
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, NutritionProfile)>,
        default_profile: NutritionProfile,
    ) -> Self {
        let mut foods: HashMap<String, NutritionProfile> = entries
            .into_iter()
            .map(|(name, profile)| (normalize(&name), profile))
            .collect();
        foods
            .entry(DEFAULT_FOOD_NAME.to_owned())
            .or_insert(default_profile);
        Self {
            foods,
            default_profile,
        }
    }

    /// The built-in table: 43 detector food classes plus the default profile.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_PROFILES
                .iter()
                .map(|&(name, profile)| (name.to_owned(), profile)),
            DEFAULT_PROFILE,
        )
    }

    /// Load a table from a CSV file, falling back to the built-in table.
    ///
    /// Rows are `food_name,calories_per_100g,protein_per_100g,carbs_per_100g,
    /// fat_per_100g`. A missing file, missing column, or unparseable or
    /// negative numeric field abandons the entire load: the built-in table is
    /// returned and the problem is logged, so callers never see a partial
    /// database.
    #[must_use]
    pub fn load_csv(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::parse_csv(path) {
            Ok(kb) => {
                info!(path = %path.display(), foods = kb.len(), "loaded nutrition table");
                kb
            }
            Err(error) => {
                warn!(
                    path = %path.display(),
                    %error,
                    "failed to load nutrition table, using built-in table"
                );
                Self::builtin()
            }
        }
    }

    fn parse_csv(path: &Path) -> Result<Self, KnowledgeBaseError> {
        let raw = fs::read_to_string(path)?;
        let mut lines = raw.lines().enumerate();

        let (_, header) = lines.next().ok_or(KnowledgeBaseError::Empty)?;
        let header_fields: Vec<&str> = header.split(',').map(str::trim).collect();
        let mut indices = [0_usize; 5];
        for (slot, column) in indices.iter_mut().zip(COLUMNS) {
            *slot = header_fields
                .iter()
                .position(|&field| field == column)
                .ok_or(KnowledgeBaseError::MissingColumn { column })?;
        }

        let mut entries = Vec::new();
        for (line_idx, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let line_no = line_idx + 1;
            let name = Self::field(&fields, indices[0], line_no, COLUMNS[0])?.to_owned();
            let mut values = [0.0_f64; 4];
            for (value, (&index, &column)) in values
                .iter_mut()
                .zip(indices[1..].iter().zip(COLUMNS[1..].iter()))
            {
                let raw_value = Self::field(&fields, index, line_no, column)?;
                let parsed: f64 =
                    raw_value
                        .parse()
                        .map_err(|_| KnowledgeBaseError::InvalidField {
                            line: line_no,
                            field: column,
                            value: raw_value.to_owned(),
                        })?;
                // Per-100g values are non-negative by contract.
                if !parsed.is_finite() || parsed < 0.0 {
                    return Err(KnowledgeBaseError::InvalidField {
                        line: line_no,
                        field: column,
                        value: raw_value.to_owned(),
                    });
                }
                *value = parsed;
            }
            entries.push((
                name,
                NutritionProfile::new(values[0], values[1], values[2], values[3]),
            ));
        }

        if entries.is_empty() {
            return Err(KnowledgeBaseError::Empty);
        }
        Ok(Self::from_entries(entries, DEFAULT_PROFILE))
    }

    fn field<'a>(
        fields: &[&'a str],
        index: usize,
        line: usize,
        column: &'static str,
    ) -> Result<&'a str, KnowledgeBaseError> {
        fields
            .get(index)
            .copied()
            .ok_or_else(|| KnowledgeBaseError::InvalidField {
                line,
                field: column,
                value: String::new(),
            })
    }

    /// Look up the profile for a food name. Infallible: unknown names resolve
    /// to the designated default profile.
    #[must_use]
    pub fn lookup(&self, food_name: &str) -> &NutritionProfile {
        self.foods
            .get(&normalize(food_name))
            .unwrap_or(&self.default_profile)
    }

    /// The designated default profile.
    #[must_use]
    pub const fn default_profile(&self) -> &NutritionProfile {
        &self.default_profile
    }

    /// Add or overwrite entries, normalizing keys. Never removes.
    pub fn merge(&mut self, entries: HashMap<String, NutritionProfile>) {
        let added = entries.len();
        for (name, profile) in entries {
            self.foods.insert(normalize(&name), profile);
        }
        debug!(added, total = self.foods.len(), "merged nutrition entries");
    }

    /// Number of known foods, the default entry included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the table is empty (it never is for built tables).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Whether a food name resolves to its own entry rather than the default.
    #[must_use]
    pub fn contains(&self, food_name: &str) -> bool {
        self.foods.contains_key(&normalize(food_name))
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Shared handle for concurrent pipelines with atomic hot updates.
///
/// Readers take a cheap [`Arc`] snapshot once per pipeline run; writers build
/// the replacement table and swap the `Arc` while holding the write lock, so
/// updates serialize and a lookup never observes a half-merged table.
#[derive(Debug, Clone)]
pub struct SharedKnowledgeBase {
    inner: Arc<RwLock<Arc<KnowledgeBase>>>,
}

impl SharedKnowledgeBase {
    /// Wrap a table for sharing.
    #[must_use]
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(knowledge))),
        }
    }

    /// Current table snapshot. Later merges do not affect it.
    #[must_use]
    pub fn snapshot(&self) -> Arc<KnowledgeBase> {
        match self.inner.read() {
            Ok(guard) => Arc::clone(&guard),
            // A poisoned lock only means a writer panicked mid-swap; the Arc
            // inside is still a complete table.
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replace the whole table atomically.
    pub fn replace(&self, knowledge: KnowledgeBase) {
        let next = Arc::new(knowledge);
        match self.inner.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }

    /// Merge entries into a copy of the current table and swap it in.
    ///
    /// The clone-merge-swap runs under the write lock, so concurrent merges
    /// serialize and every merge's entries land in the table. Either the
    /// full merge becomes visible or nothing does; concurrent snapshots keep
    /// reading the previous table until the swap.
    pub fn merge(&self, entries: HashMap<String, NutritionProfile>) {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut next = (**guard).clone();
        next.merge(entries);
        *guard = Arc::new(next);
    }
}

impl Default for SharedKnowledgeBase {
    fn default() -> Self {
        Self::new(KnowledgeBase::builtin())
    }
}
