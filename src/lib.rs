// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! askai - context-free, one-shot LLM queries with concise answers.
//!
//! The `askai` binary forwards a prompt to an installed LLM command-line
//! tool (currently `claude`), prefixed with a conciseness instruction.
//!
//! - `cli`: argument parsing and flag validation
//! - `config`: the JSON settings file under `~/.config/askai`
//! - `llm`: the provider trait, the built-in providers and their registry
//! - `commands`: listing/config actions and the query runner

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod llm;

pub use error::{AskError, Result};
