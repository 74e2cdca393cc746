// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Global subscriber installation. Kept in its own test binary because the subscriber is
//! process-wide.

use cellforge_config::{LogFormat, LoggingConfig};
use cellforge_observability::{init_logging, CrateDebugFlags};

#[test]
fn test_init_logging_installs_once() {
    let logging = LoggingConfig {
        level: "debug".to_string(),
        format: LogFormat::Json,
    };
    let flags = CrateDebugFlags::default();

    init_logging(&logging, &flags).unwrap();
    tracing::info!(answer = 42, "logged through the installed subscriber");

    let second = init_logging(&logging, &flags);
    assert!(second.is_err());
}

#[test]
fn test_invalid_level_is_rejected_before_install() {
    let logging = LoggingConfig {
        level: "cellforge=loud".to_string(),
        format: LogFormat::Text,
    };
    let err = init_logging(&logging, &CrateDebugFlags::default()).unwrap_err();
    assert!(err.to_string().contains("Invalid log filter"));
}
