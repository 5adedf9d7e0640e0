// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! One-shot query: resolve provider and model, then run the provider CLI

use std::io::Write;
use std::process::Command;

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::{AskError, Result, EXIT_FAILURE, EXIT_SUCCESS};
use crate::llm::{Invocation, ProviderRegistry};

/// Resolve provider and model and build the command to run.
///
/// Precedence for both: explicit flag, then the config file, then the
/// built-in default. Fails before building anything when the provider CLI
/// is not installed.
pub fn plan_invocation(
    prompt: &str,
    requested_provider: Option<&str>,
    requested_model: Option<&str>,
    settings: &Settings,
    registry: &ProviderRegistry,
) -> Result<Invocation> {
    let provider_name = registry.resolve_provider_name(requested_provider, settings)?;
    let provider = registry.create(&provider_name)?;

    if !provider.is_available() {
        return Err(AskError::ProviderUnavailable(provider_name));
    }

    let model = requested_model
        .map(str::to_string)
        .or_else(|| settings.default_model(&provider_name))
        .unwrap_or_else(|| provider.default_model().to_string());

    tracing::debug!(provider = %provider_name, model = %model, "resolved invocation");

    let command = provider.build_command(prompt, Some(&model))?;

    Ok(Invocation {
        provider: provider_name,
        model,
        command,
    })
}

/// Run a command with inherited stdio and return its exit code.
///
/// A child that ends without an exit code (killed by a signal) maps to 1.
pub fn execute(command: &[String]) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| AskError::InvalidArguments("empty command".to_string()))?;

    tracing::debug!(program = %program, "spawning provider CLI");
    let status = Command::new(program).args(args).status()?;

    Ok(status.code().unwrap_or(EXIT_FAILURE))
}

/// Answer the query described by `cli`.
///
/// The assembled command goes to `diagnostics` in verbose and dry-run mode.
/// Returns the exit code for the process.
pub fn run_query(
    cli: &Cli,
    settings: &Settings,
    registry: &ProviderRegistry,
    diagnostics: &mut impl Write,
) -> Result<i32> {
    let prompt = cli.prompt.as_deref().ok_or_else(|| {
        AskError::InvalidArguments("the following arguments are required: prompt".to_string())
    })?;

    let invocation = plan_invocation(
        prompt,
        cli.provider.as_deref(),
        cli.model.as_deref(),
        settings,
        registry,
    )?;

    if cli.verbose || cli.dry_run {
        writeln!(diagnostics, "Command: {}", invocation.display_command())?;
    }

    if cli.dry_run {
        return Ok(EXIT_SUCCESS);
    }

    execute(&invocation.command)
}
