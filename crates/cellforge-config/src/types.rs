// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! Each struct maps to a section of `cellforge.toml`. Every section and field is optional in
//! the file and falls back to its default.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CellforgeConfig {
    pub logging: LoggingConfig,
    pub inspect: InspectConfig,
}

/// Console log output
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Genome inspection settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Count the nodes of embedded genomes as well
    pub include_nested: bool,
    pub output_format: OutputFormat,
    /// Genome files larger than this are rejected before reading
    pub max_genome_bytes: u64,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            include_nested: true,
            output_format: OutputFormat::Text,
            max_genome_bytes: 64 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

macro_rules! impl_lowercase_format {
    ($name:ident) => {
        impl FromStr for $name {
            type Err = String;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.to_lowercase().as_str() {
                    "text" => Ok($name::Text),
                    "json" => Ok($name::Json),
                    other => Err(format!("unknown format '{other}', expected 'text' or 'json'")),
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                match self {
                    $name::Text => write!(f, "text"),
                    $name::Json => write!(f, "json"),
                }
            }
        }
    };
}

impl_lowercase_format!(LogFormat);
impl_lowercase_format!(OutputFormat);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CellforgeConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.inspect.include_nested);
        assert_eq!(config.inspect.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: CellforgeConfig = toml::from_str("[inspect]\noutput_format = \"json\"\n").unwrap();
        assert_eq!(config.inspect.output_format, OutputFormat::Json);
        assert!(config.inspect.include_nested);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(CellforgeConfig::default()).unwrap();
        assert_eq!(json["logging"]["format"], "text");
        assert_eq!(json["inspect"]["include_nested"], true);
    }
}
