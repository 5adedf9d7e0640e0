// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io;

use askai::error::{AskError, EXIT_FAILURE, EXIT_INTERRUPTED, EXIT_SUCCESS, EXIT_USAGE};

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let error: AskError = io_error.into();

    match error {
        AskError::Io(_) => {} // Expected
        _ => panic!("Expected Io error, got different error type"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AskError = json_error.into();
    assert!(matches!(error, AskError::Json(_)));
}

#[test]
fn test_config_error_display() {
    let error = AskError::Config("no providers are registered".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: no providers are registered"
    );
}

#[test]
fn test_exit_code_constants() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_FAILURE, 1);
    assert_eq!(EXIT_USAGE, 2);
    assert_eq!(EXIT_INTERRUPTED, 130);
}
