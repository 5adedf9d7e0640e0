// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Provider registry
//!
//! Maps provider names to constructors. Adding a provider means adding one
//! entry to [`ProviderRegistry::builtin`].

use crate::config::Settings;
use crate::error::{AskError, Result};
use crate::llm::provider::CliProvider;
use crate::llm::providers::ClaudeProvider;

/// Constructor for a boxed provider
pub type ProviderConstructor = fn() -> Box<dyn CliProvider>;

/// Name-keyed table of known providers, in listing order
#[derive(Clone)]
pub struct ProviderRegistry {
    entries: Vec<(&'static str, ProviderConstructor)>,
}

fn claude() -> Box<dyn CliProvider> {
    Box::new(ClaudeProvider::new())
}

impl ProviderRegistry {
    /// Registry holding every provider shipped with askai
    pub fn builtin() -> Self {
        Self::from_entries(vec![("claude", claude as ProviderConstructor)])
    }

    /// Registry from an explicit table
    pub fn from_entries(entries: Vec<(&'static str, ProviderConstructor)>) -> Self {
        Self { entries }
    }

    /// All provider names, in listing order
    pub fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Whether the registry has no providers at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create a provider by name
    pub fn create(&self, name: &str) -> Result<Box<dyn CliProvider>> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, construct)| construct())
            .ok_or_else(|| AskError::UnknownProvider {
                name: name.to_string(),
                available: self.names(),
            })
    }

    /// Create every registered provider, in listing order
    pub fn all(&self) -> Vec<Box<dyn CliProvider>> {
        self.entries
            .iter()
            .map(|(_, construct)| construct())
            .collect()
    }

    /// Pick the provider name: explicit request, then the configured default.
    pub fn resolve_provider_name(&self, requested: Option<&str>, settings: &Settings) -> Result<String> {
        if let Some(name) = requested {
            return Ok(name.to_string());
        }
        if self.is_empty() {
            return Err(AskError::Config("no providers are registered".to_string()));
        }
        Ok(settings.default_provider())
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
