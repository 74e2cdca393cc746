// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Installs a global `tracing` subscriber writing to stderr, as text or JSON, filtered by the
//! configured level and the per-crate debug flags.

use anyhow::{Context, Result};
use cellforge_config::{LogFormat, LoggingConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::cli::CrateDebugFlags;

/// Filter directives combining the configured level with the debug flags.
pub fn filter_directives(logging: &LoggingConfig, debug_flags: &CrateDebugFlags) -> String {
    debug_flags
        .clone()
        .with_default_level(logging.level.as_str())
        .to_filter_string()
}

/// Initialize console logging
///
/// # Errors
/// Fails if the filter directives do not parse or a global subscriber is already installed.
pub fn init_logging(logging: &LoggingConfig, debug_flags: &CrateDebugFlags) -> Result<()> {
    let filter = filter_directives(logging, debug_flags);
    let env_filter = EnvFilter::try_new(&filter)
        .with_context(|| format!("Invalid log filter: {filter}"))?;

    let console_layer: Box<dyn Layer<Registry> + Send + Sync> = match logging.format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json()
            .with_filter(env_filter)
            .boxed(),
    };

    Registry::default()
        .with(console_layer)
        .try_init()
        .context("Failed to install the global tracing subscriber")?;

    tracing::debug!(filter = %filter, format = %logging.format, "Logging initialized");
    Ok(())
}
