// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Provider trait and related types
//!
//! A provider wraps an externally installed LLM command-line tool. It never
//! talks to a network itself; it only turns a prompt and a model choice into
//! the argv for that tool.

use crate::error::Result;

/// Capabilities every wrapped CLI tool must offer
pub trait CliProvider: Send + Sync {
    /// Provider name, identical to the external command name (e.g., "claude")
    fn name(&self) -> &str;

    /// Short model name used when none is requested
    fn default_model(&self) -> &str;

    /// Canonical short model names, in declaration order
    fn available_models(&self) -> Vec<String>;

    /// Whether the external tool can be found on PATH
    fn is_available(&self) -> bool;

    /// Build the argv for a one-shot, context-free query.
    ///
    /// `model` falls back to [`CliProvider::default_model`] when `None`.
    /// Fails with an unknown-model error when the name does not resolve.
    fn build_command(&self, prompt: &str, model: Option<&str>) -> Result<Vec<String>>;

    /// Check if a short model name is supported
    fn validate_model(&self, model: &str) -> bool {
        self.available_models().iter().any(|m| m == model)
    }

    /// One-line description for provider listings
    fn summary(&self) -> String {
        format!(
            "{} (default: {}, available: {})",
            self.name(),
            self.default_model(),
            self.available_models().join(", ")
        )
    }
}

/// A resolved provider invocation, ready to print or execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Provider that built the command
    pub provider: String,
    /// Model name as requested (alias or short name)
    pub model: String,
    /// Full argv, program name first
    pub command: Vec<String>,
}

impl Invocation {
    /// The argv joined by single spaces, as shown by `--verbose` and `--dry-run`.
    pub fn display_command(&self) -> String {
        self.command.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AskError;

    struct EchoProvider;

    impl CliProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        fn default_model(&self) -> &str {
            "small"
        }

        fn available_models(&self) -> Vec<String> {
            vec!["small".to_string(), "large".to_string()]
        }

        fn is_available(&self) -> bool {
            true
        }

        fn build_command(&self, prompt: &str, model: Option<&str>) -> Result<Vec<String>> {
            let model = model.unwrap_or(self.default_model());
            if !self.validate_model(model) {
                return Err(AskError::UnknownModel {
                    model: model.to_string(),
                    available: self.available_models(),
                });
            }
            Ok(vec!["echo".into(), model.into(), prompt.into()])
        }
    }

    #[test]
    fn test_validate_model_default_method() {
        let provider = EchoProvider;
        assert!(provider.validate_model("small"));
        assert!(provider.validate_model("large"));
        assert!(!provider.validate_model("medium"));
    }

    #[test]
    fn test_summary_default_method() {
        assert_eq!(
            EchoProvider.summary(),
            "echo (default: small, available: small, large)"
        );
    }

    #[test]
    fn test_trait_object_usage() {
        let provider: Box<dyn CliProvider> = Box::new(EchoProvider);
        let command = provider.build_command("hi", None).unwrap();
        assert_eq!(command, vec!["echo", "small", "hi"]);
    }

    #[test]
    fn test_invocation_display_command() {
        let invocation = Invocation {
            provider: "echo".into(),
            model: "small".into(),
            command: vec!["echo".into(), "--model".into(), "a b".into()],
        };
        assert_eq!(invocation.display_command(), "echo --model a b");
    }
}
