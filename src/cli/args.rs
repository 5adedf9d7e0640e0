// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments for askai.

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;

use crate::error::{AskError, Result};

const AFTER_HELP: &str = "\
examples:
  askai \"what is python?\"                    # Use default provider/model
  askai -m sonnet \"explain async/await\"      # Specify model
  askai -p claude -m opus \"complex question\" # Both provider and model
  askai --list-providers                     # List available providers
  askai --list-models claude                 # List models for a provider
  askai --config-path                        # Show config file location
  askai --version                            # Show version

configuration:
  Default provider and models are stored in ~/.config/askai/config.json
  ($XDG_CONFIG_HOME/askai/config.json when set). Edit it directly or use
  the --config-* flags.";

/// askai - context-free, one-shot LLM queries with concise answers
#[derive(Parser, Debug, Default)]
#[command(name = "askai")]
#[command(version, about = "Context-free, one-shot LLM queries with concise answers")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// The question or prompt to ask the LLM
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    #[arg(required_unless_present_any = [
        "list_providers",
        "list_models",
        "config_path",
        "config_show",
        "config_reset",
    ])]
    pub prompt: Option<String>,

    /// LLM provider to use (default: from config or 'claude')
    #[arg(short, long, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// Model to use (default: provider's default for concise responses)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// List available providers and exit
    #[arg(long)]
    pub list_providers: bool,

    /// List available models for a provider and exit
    #[arg(long, value_name = "PROVIDER")]
    pub list_models: Option<String>,

    /// Show configuration file path and exit
    #[arg(long)]
    pub config_path: bool,

    /// Show current configuration and exit
    #[arg(long)]
    pub config_show: bool,

    /// Reset configuration to defaults
    #[arg(long)]
    pub config_reset: bool,

    /// Enable verbose output (show command being executed)
    #[arg(short, long)]
    pub verbose: bool,

    /// Show the command that would be executed without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH", hide = true)]
    pub config: Option<PathBuf>,
}

/// A single informational or configuration action that replaces a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoAction {
    ListProviders,
    ListModels(String),
    ConfigPath,
    ConfigShow,
    ConfigReset,
}

impl Cli {
    /// Whether any of the `--config-*` flags is set
    pub fn has_config_flag(&self) -> bool {
        self.config_path || self.config_show || self.config_reset
    }

    /// Reject flag combinations that parse but are inconsistent.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref provider) = self.list_models {
            if provider.trim().is_empty() {
                return Err(AskError::MissingProviderName);
            }
        }

        if self.dry_run && self.has_config_flag() {
            return Err(AskError::InvalidArguments(
                "--dry-run cannot be used with configuration flags".to_string(),
            ));
        }

        Ok(())
    }

    /// The informational action to run instead of a query, if any.
    ///
    /// When several are given the first in listing order wins.
    pub fn info_action(&self) -> Option<InfoAction> {
        if self.list_providers {
            Some(InfoAction::ListProviders)
        } else if let Some(ref provider) = self.list_models {
            Some(InfoAction::ListModels(provider.clone()))
        } else if self.config_path {
            Some(InfoAction::ConfigPath)
        } else if self.config_show {
            Some(InfoAction::ConfigShow)
        } else if self.config_reset {
            Some(InfoAction::ConfigReset)
        } else {
            None
        }
    }
}
