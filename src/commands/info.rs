// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Informational and configuration actions
//!
//! Each action writes to the supplied stream and returns; none of them
//! touches a provider CLI beyond a PATH lookup.

use std::io::Write;

use crate::cli::InfoAction;
use crate::config::Settings;
use crate::error::Result;
use crate::llm::ProviderRegistry;

/// Run one informational action.
pub fn run_info_action(
    action: &InfoAction,
    settings: &mut Settings,
    registry: &ProviderRegistry,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        InfoAction::ListProviders => list_providers(registry, out),
        InfoAction::ListModels(provider) => list_models(registry, provider, out),
        InfoAction::ConfigPath => show_config_path(settings, out),
        InfoAction::ConfigShow => show_config(settings, out),
        InfoAction::ConfigReset => reset_config(settings, out),
    }
}

/// List every registered provider with an availability mark.
pub fn list_providers(registry: &ProviderRegistry, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Available providers:")?;
    for provider in registry.all() {
        let mark = if provider.is_available() { "✓" } else { "✗" };
        writeln!(out, "  {} {}", mark, provider.summary())?;
    }
    Ok(())
}

/// List the models of one provider, marking its default.
///
/// Availability of the provider CLI does not matter here.
pub fn list_models(registry: &ProviderRegistry, provider_name: &str, out: &mut impl Write) -> Result<()> {
    let provider = registry.create(provider_name)?;
    let default = provider.default_model().to_string();

    writeln!(out, "Available models for {}:", provider_name)?;
    for model in provider.available_models() {
        let marker = if model == default { " (default)" } else { "" };
        writeln!(out, "  - {}{}", model, marker)?;
    }
    Ok(())
}

pub fn show_config_path(settings: &Settings, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Configuration file: {}", settings.path().display())?;
    Ok(())
}

pub fn show_config(settings: &Settings, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", settings)?;
    Ok(())
}

/// Reset the configuration to defaults, then print it.
pub fn reset_config(settings: &mut Settings, out: &mut impl Write) -> Result<()> {
    settings.reset();
    writeln!(out, "Configuration reset to defaults")?;
    writeln!(out, "{}", settings)?;
    Ok(())
}
