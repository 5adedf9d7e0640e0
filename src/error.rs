// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for askai
//!
//! Every failure a command can hit is a variant here, so callers match on
//! the kind instead of parsing messages.

use thiserror::Error;

/// Process exit code for a successful run
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit code for any handled failure
pub const EXIT_FAILURE: i32 = 1;

/// Process exit code for argument parser failures
pub const EXIT_USAGE: i32 = 2;

/// Process exit code after a user interrupt (128 + SIGINT)
pub const EXIT_INTERRUPTED: i32 = 130;

/// Main error type for askai operations
#[derive(Error, Debug)]
pub enum AskError {
    /// Model name did not resolve through the provider's tables
    #[error("Unknown model '{model}'. Available: {}", .available.join(", "))]
    UnknownModel {
        model: String,
        available: Vec<String>,
    },

    /// Provider is not in the registry
    #[error("Unknown provider '{name}'. Available: {}", .available.join(", "))]
    UnknownProvider {
        name: String,
        available: Vec<String>,
    },

    /// `--list-models` was given a blank provider name
    #[error("--list-models requires a provider name")]
    MissingProviderName,

    /// The provider's CLI binary is not on PATH
    #[error("{0} CLI not found. Please install it first.")]
    ProviderUnavailable(String),

    /// Flags that parse individually but make no sense together
    #[error("{0}")]
    InvalidArguments(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AskError {
    /// Exit code the binary should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

/// Result type alias for askai operations
pub type Result<T> = std::result::Result<T, AskError>;
