// ABOUTME: Environment-driven configuration for external nutrition data sources
// ABOUTME: Resolves the nutrition CSV path and builds the knowledge base from it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

//! Environment-only configuration.
//!
//! The core carries no config files; the embedding service points it at
//! external data through environment variables, and every missing or broken
//! source degrades to built-in data rather than failing startup.

use crate::knowledge::KnowledgeBase;
use std::env;
use std::path::PathBuf;

/// Environment variable naming the nutrition CSV source.
pub const NUTRITION_DB_ENV: &str = "PLATESENSE_NUTRITION_DB";

/// Location of the external nutrition table, if any.
#[derive(Debug, Clone, Default)]
pub struct NutritionDataConfig {
    /// Path to a `food_name,calories_per_100g,...` CSV file
    pub csv_path: Option<PathBuf>,
}

impl NutritionDataConfig {
    /// Read the configuration from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            csv_path: env::var(NUTRITION_DB_ENV).ok().map(PathBuf::from),
        }
    }

    /// Build the knowledge base this configuration describes.
    ///
    /// No path configured, or a path that fails to load, yields the built-in
    /// table (the load path logs the degradation).
    #[must_use]
    pub fn load(&self) -> KnowledgeBase {
        self.csv_path
            .as_ref()
            .map_or_else(KnowledgeBase::builtin, KnowledgeBase::load_csv)
    }
}
