// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # cellforge-observability
//!
//! Console logging setup for cellforge tools, with per-crate debug flag support.
//!
//! ```rust,no_run
//! use cellforge_config::LoggingConfig;
//! use cellforge_observability::{init_logging, parse_debug_flags};
//!
//! let flags = parse_debug_flags();
//! init_logging(&LoggingConfig::default(), &flags).expect("logging already initialized");
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Known cellforge crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "cellforge",
    "cellforge-genome",
    "cellforge-serialization",
    "cellforge-config",
    "cellforge-observability",
    "inspect-genome",
];
