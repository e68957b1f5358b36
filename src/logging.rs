// ABOUTME: Logging configuration and structured logging setup for the calculator
// ABOUTME: Configures filter directives and output format from IMPASTO_LOG and IMPASTO_LOG_FORMAT
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Impasto Contributors

//! Structured logging setup with environment-driven configuration.
//!
//! The calculator core reports skipped updates through `tracing` events; this
//! module wires those events to stderr so recipe output on stdout stays clean
//! and pipeable.

use std::env;
use std::io;

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::env_vars;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives applied when `IMPASTO_LOG` is unset
    pub level: String,
    /// Output format for log events
    pub format: LogFormat,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Pretty format for development
    #[default]
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
    /// `JSON` format for machine-readable logging
    Json,
}

impl LogFormat {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "compact" => Self::Compact,
            "json" => Self::Json,
            _ => Self::Pretty, // Default fallback for unrecognized values
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var(env_vars::LOG).unwrap_or_else(|_| "info".into());
        let format = env::var(env_vars::LOG_FORMAT)
            .map(|raw| LogFormat::from_str_or_default(&raw))
            .unwrap_or_default();

        Self { level, format }
    }

    /// Initialize the global tracing subscriber with this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when a subscriber has already been installed or the
    /// filter directives fail to parse into a usable filter.
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_from_env(env_vars::LOG)
            .unwrap_or_else(|_| EnvFilter::new(&self.level));

        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Pretty => {
                registry
                    .with(fmt::layer().with_target(true).with_writer(io::stderr))
                    .try_init()?;
            }
            LogFormat::Compact => {
                registry
                    .with(
                        fmt::layer()
                            .compact()
                            .with_target(false)
                            .with_writer(io::stderr),
                    )
                    .try_init()?;
            }
            LogFormat::Json => {
                registry
                    .with(fmt::layer().with_target(true).with_writer(io::stderr).json())
                    .try_init()?;
            }
        }

        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
