// ABOUTME: Logging configuration and structured logging setup for the pipeline core
// ABOUTME: Env-driven level and format selection over tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateSense

//! Structured logging setup.
//!
//! The core itself only emits `tracing` events; this module gives the
//! embedding service one place to initialize a subscriber consistent with
//! how the pipeline logs (env-filtered levels, JSON for production).

use anyhow::Result;
use std::env;
use tracing_subscriber::{fmt, EnvFilter};

/// Log output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format for production logging
    Json,
    /// Human-readable format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (`RUST_LOG` syntax)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables.
    ///
    /// `RUST_LOG` sets the filter, `LOG_FORMAT` one of `json`, `pretty`,
    /// `compact`; `LOG_INCLUDE_LOCATION=true` (or `1`) adds source file and
    /// line numbers to each event.
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };
        let include_location = matches!(
            env::var("LOG_INCLUDE_LOCATION").as_deref(),
            Ok("true" | "1")
        );
        Self {
            level,
            format,
            include_location,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// # Errors
/// Returns an error when the level filter does not parse or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.level)?;
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    match config.format {
        LogFormat::Json => builder.json().try_init().map_err(anyhow::Error::msg)?,
        LogFormat::Compact => builder.compact().try_init().map_err(anyhow::Error::msg)?,
        LogFormat::Pretty => builder.try_init().map_err(anyhow::Error::msg)?,
    }
    Ok(())
}
