// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Genome Inspection Tool

Prints structural statistics and a node listing of an encoded genome file.

Usage:
  cargo run --bin inspect_genome -- <genome.bin> [--json] [--no-nested] [--debug-{crate}]

Settings come from `cellforge.toml` (if found), then `CELLFORGE_*` environment variables,
then the command line.
*/

use anyhow::{Context, Result};
use cellforge::config::{
    load_config, load_config_or_default, validate_config, CellforgeConfig, ConfigResult,
};
use cellforge::inspect::{read_genome_file, InspectReport};
use cellforge::observability::{debug_flags_help, init_logging, parse_debug_flags};
use cellforge::serialization::{
    convert_node_address_to_node_index, convert_node_index_to_node_address,
};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// Inspect an encoded cellforge genome
#[derive(Parser, Debug)]
#[command(name = "inspect_genome", version, author, long_about = None, after_help = debug_flags_help())]
struct Args {
    /// Path to the encoded genome file
    genome: PathBuf,

    /// Path to a cellforge.toml (searched for when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Do not count the nodes of embedded genomes
    #[arg(long, default_value_t = false)]
    no_nested: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Reject genome files larger than this many bytes
    #[arg(long)]
    max_genome_bytes: Option<u64>,

    /// Print the index of the node containing this byte offset
    #[arg(long)]
    address: Option<usize>,

    /// Print the byte offset where the node with this index starts
    #[arg(long)]
    index: Option<usize>,
}

impl Args {
    fn config_overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();
        if self.json {
            overrides.insert("output_format".to_string(), "json".to_string());
        }
        if self.no_nested {
            overrides.insert("include_nested".to_string(), "false".to_string());
        }
        if let Some(level) = &self.log_level {
            overrides.insert("log_level".to_string(), level.clone());
        }
        if let Some(max_bytes) = self.max_genome_bytes {
            overrides.insert("max_genome_bytes".to_string(), max_bytes.to_string());
        }
        overrides
    }

    fn load_config(&self) -> ConfigResult<CellforgeConfig> {
        let overrides = self.config_overrides();
        match &self.config {
            Some(path) => load_config(Some(path.as_path()), Some(&overrides)),
            None => load_config_or_default(Some(&overrides)),
        }
    }
}

fn main() -> Result<()> {
    // Debug flags are read by the observability crate; keep them away from clap.
    let args = Args::parse_from(std::env::args().filter(|arg| !arg.starts_with("--debug-")));

    let config = args.load_config().context("Failed to load configuration")?;
    validate_config(&config).context("Invalid configuration")?;

    init_logging(&config.logging, &parse_debug_flags())?;
    debug!(?config, "configuration loaded");

    let bytes = read_genome_file(&args.genome, config.inspect.max_genome_bytes)?;
    info!(path = %args.genome.display(), num_bytes = bytes.len(), "inspecting genome");

    let report = InspectReport::from_bytes(&bytes, config.inspect.include_nested)
        .with_context(|| format!("Failed to decode genome file {}", args.genome.display()))?;
    println!("{}", report.render(config.inspect.output_format)?);

    if let Some(address) = args.address {
        let index = convert_node_address_to_node_index(&bytes, address)
            .context("Failed to resolve node address")?;
        println!("Byte offset {address} belongs to node {index}");
    }
    if let Some(index) = args.index {
        let address = convert_node_index_to_node_address(&bytes, index)
            .context("Failed to resolve node index")?;
        println!("Node {index} starts at byte offset {address}");
    }

    Ok(())
}
