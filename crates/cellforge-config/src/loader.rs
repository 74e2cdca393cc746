// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Values are layered in this order, later layers winning:
//! 1. Built-in defaults
//! 2. TOML file
//! 3. Environment variables
//! 4. CLI arguments

use crate::{CellforgeConfig, ConfigError, ConfigResult};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "cellforge.toml";

/// Find the cellforge configuration file
///
/// Search order:
/// 1. `CELLFORGE_CONFIG_PATH` environment variable
/// 2. Current working directory: `./cellforge.toml`
/// 3. Parent directories, up to 5 levels
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("CELLFORGE_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by CELLFORGE_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        let mut current = cwd.as_path();
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent;
                }
                None => break,
            }
        }
    }

    if let Some(path) = search_paths.iter().find(|path| path.exists()) {
        return Ok(path.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");
    Err(ConfigError::FileNotFound(format!(
        "'{CONFIG_FILE_NAME}' not found in any of these locations:\n{search_list}\n\nSet CELLFORGE_CONFIG_PATH to specify a custom location."
    )))
}

/// Load configuration from a TOML file and apply overrides
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if the config file is not found, cannot be read or contains invalid TOML
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<CellforgeConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };
    let content = fs::read_to_string(&config_file)?;
    let config: CellforgeConfig = toml::from_str(&content)?;
    Ok(with_overrides(config, cli_args))
}

/// Like [`load_config`] without an explicit path, but starts from the built-in defaults when
/// no config file can be found.
pub fn load_config_or_default(
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<CellforgeConfig> {
    match load_config(None, cli_args) {
        Err(ConfigError::FileNotFound(_)) => {
            Ok(with_overrides(CellforgeConfig::default(), cli_args))
        }
        other => other,
    }
}

fn with_overrides(
    mut config: CellforgeConfig,
    cli_args: Option<&HashMap<String, String>>,
) -> CellforgeConfig {
    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }
    config
}

fn parse_flag(value: &str) -> bool {
    let value = value.to_lowercase();
    value == "true" || value == "1" || value == "yes"
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `CELLFORGE_LOG_LEVEL` -> `logging.level`
/// - `CELLFORGE_LOG_FORMAT` -> `logging.format`
/// - `CELLFORGE_INCLUDE_NESTED` -> `inspect.include_nested`
/// - `CELLFORGE_OUTPUT_FORMAT` -> `inspect.output_format`
/// - `CELLFORGE_MAX_GENOME_BYTES` -> `inspect.max_genome_bytes`
///
/// Values that do not parse are ignored.
pub fn apply_environment_overrides(config: &mut CellforgeConfig) {
    if let Ok(value) = env::var("CELLFORGE_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("CELLFORGE_LOG_FORMAT") {
        if let Ok(format) = value.parse() {
            config.logging.format = format;
        }
    }
    if let Ok(value) = env::var("CELLFORGE_INCLUDE_NESTED") {
        config.inspect.include_nested = parse_flag(&value);
    }
    if let Ok(value) = env::var("CELLFORGE_OUTPUT_FORMAT") {
        if let Ok(format) = value.parse() {
            config.inspect.output_format = format;
        }
    }
    if let Ok(value) = env::var("CELLFORGE_MAX_GENOME_BYTES") {
        if let Ok(limit) = value.parse::<u64>() {
            config.inspect.max_genome_bytes = limit;
        }
    }
}

/// Apply CLI argument overrides to configuration
///
/// Recognized keys: `log_level`, `log_format`, `include_nested`, `output_format`,
/// `max_genome_bytes`.
pub fn apply_cli_overrides(config: &mut CellforgeConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(format) = cli_args.get("log_format").and_then(|v| v.parse().ok()) {
        config.logging.format = format;
    }
    if let Some(value) = cli_args.get("include_nested") {
        config.inspect.include_nested = parse_flag(value);
    }
    if let Some(format) = cli_args.get("output_format").and_then(|v| v.parse().ok()) {
        config.inspect.output_format = format;
    }
    if let Some(limit) = cli_args
        .get("max_genome_bytes")
        .and_then(|v| v.parse::<u64>().ok())
    {
        config.inspect.max_genome_bytes = limit;
    }
}
