// ABOUTME: Tests for the env-driven logging configuration
// ABOUTME: Validates defaults and that every config knob is read from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use platesense::logging::{LogFormat, LoggingConfig};
use std::env;

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);
}

// Single env-mutating test: process environment is global, so all env knobs
// are exercised here rather than split across parallel test threads.
#[test]
fn test_from_env_reads_every_knob() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "true");

    let config = LoggingConfig::from_env();

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("LOG_INCLUDE_LOCATION");

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
}
