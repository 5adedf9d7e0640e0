// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Claude Code CLI provider
//!
//! Command format: `claude --model <model-id> "<prompt>"`

use crate::error::{AskError, Result};
use crate::llm::provider::CliProvider;

/// External command name, also the provider name
const CLAUDE_COMMAND: &str = "claude";

const MODEL_FLAG: &str = "--model";

/// Prepended to every prompt to keep answers short
pub const CONCISE_INSTRUCTION: &str = "Answer concisely in under 100 words: ";

const DEFAULT_MODEL: &str = "haiku";

/// Short name -> model id accepted by `claude --model`
const MODELS: &[(&str, &str)] = &[
    ("haiku", "claude-haiku-4-5-20251001"),
    ("sonnet", "claude-sonnet-4-5-20250929"),
    ("opus", "claude-opus-4-1-20250805"),
];

/// Alias -> short name. Every target must be a key of `MODELS`.
const MODEL_ALIASES: &[(&str, &str)] = &[
    ("haiku", "haiku"),
    ("sonnet", "sonnet"),
    ("opus", "opus"),
    ("haiku-4", "haiku"),
    ("haiku-4-5", "haiku"),
    ("4-5-haiku", "haiku"),
    ("sonnet-4", "sonnet"),
    ("sonnet-4-5", "sonnet"),
    ("4-5-sonnet", "sonnet"),
    ("opus-4", "opus"),
    ("opus-4-1", "opus"),
    ("4-1-opus", "opus"),
];

/// Claude Code CLI adapter
#[derive(Debug, Clone, Default)]
pub struct ClaudeProvider;

impl ClaudeProvider {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a model name or alias to the full model id.
    ///
    /// Matching is case-insensitive and follows at most one alias hop.
    pub fn resolve_model(&self, model: Option<&str>) -> Result<&'static str> {
        let requested = model.unwrap_or(DEFAULT_MODEL).to_lowercase();

        let short = MODEL_ALIASES
            .iter()
            .find(|(alias, _)| *alias == requested)
            .map(|(_, short)| *short)
            .unwrap_or(requested.as_str());

        MODELS
            .iter()
            .find(|(name, _)| *name == short)
            .map(|(_, id)| *id)
            .ok_or_else(|| AskError::UnknownModel {
                model: short.to_string(),
                available: self.available_models(),
            })
    }
}

impl CliProvider for ClaudeProvider {
    fn name(&self) -> &str {
        CLAUDE_COMMAND
    }

    fn default_model(&self) -> &str {
        DEFAULT_MODEL
    }

    fn available_models(&self) -> Vec<String> {
        MODELS.iter().map(|(name, _)| name.to_string()).collect()
    }

    fn is_available(&self) -> bool {
        which::which(CLAUDE_COMMAND).is_ok()
    }

    fn build_command(&self, prompt: &str, model: Option<&str>) -> Result<Vec<String>> {
        let model_id = self.resolve_model(model)?;
        tracing::debug!(model = ?model, model_id, "resolved claude model");

        Ok(vec![
            CLAUDE_COMMAND.to_string(),
            MODEL_FLAG.to_string(),
            model_id.to_string(),
            format!("{CONCISE_INSTRUCTION}{prompt}"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matches_command() {
        assert_eq!(ClaudeProvider::new().name(), "claude");
    }

    #[test]
    fn test_default_model_is_haiku() {
        assert_eq!(ClaudeProvider::new().default_model(), "haiku");
    }

    #[test]
    fn test_available_models_in_declaration_order() {
        assert_eq!(
            ClaudeProvider::new().available_models(),
            vec!["haiku", "sonnet", "opus"]
        );
    }

    #[test]
    fn test_every_alias_targets_a_model() {
        for (alias, short) in MODEL_ALIASES {
            assert!(
                MODELS.iter().any(|(name, _)| name == short),
                "alias {alias} points at unknown model {short}"
            );
        }
    }

    #[test]
    fn test_aliases_and_short_names_resolve_to_model_ids() {
        let provider = ClaudeProvider::new();
        for (alias, short) in MODEL_ALIASES {
            let (_, id) = MODELS.iter().find(|(name, _)| name == short).unwrap();
            assert_eq!(provider.resolve_model(Some(*alias)).unwrap(), *id);
            assert_eq!(provider.resolve_model(Some(*short)).unwrap(), *id);
        }
    }

    #[test]
    fn test_build_command_default_model() {
        let command = ClaudeProvider::new()
            .build_command("what is python?", None)
            .unwrap();
        assert_eq!(
            command,
            vec![
                "claude",
                "--model",
                "claude-haiku-4-5-20251001",
                "Answer concisely in under 100 words: what is python?",
            ]
        );
    }

    #[test]
    fn test_build_command_with_alias() {
        let command = ClaudeProvider::new()
            .build_command("q", Some("sonnet-4-5"))
            .unwrap();
        assert_eq!(command[2], "claude-sonnet-4-5-20250929");
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        let provider = ClaudeProvider::new();
        for name in ["HAIKU", "Haiku", "haiku"] {
            assert_eq!(
                provider.resolve_model(Some(name)).unwrap(),
                "claude-haiku-4-5-20251001"
            );
        }
        assert_eq!(
            provider.resolve_model(Some("OPUS-4-1")).unwrap(),
            "claude-opus-4-1-20250805"
        );
    }

    #[test]
    fn test_full_model_id_is_not_accepted() {
        let err = ClaudeProvider::new()
            .resolve_model(Some("claude-haiku-4-5-20251001"))
            .unwrap_err();
        assert!(matches!(err, AskError::UnknownModel { .. }));
    }

    #[test]
    fn test_unknown_model_lists_short_names_only() {
        let err = ClaudeProvider::new()
            .build_command("q", Some("GPT-4"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown model 'gpt-4'. Available: haiku, sonnet, opus"
        );
        assert!(!err.to_string().contains("claude-"));
    }

    #[test]
    fn test_validate_model_uses_short_names() {
        let provider = ClaudeProvider::new();
        assert!(provider.validate_model("opus"));
        assert!(!provider.validate_model("opus-4"));
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            ClaudeProvider::new().summary(),
            "claude (default: haiku, available: haiku, sonnet, opus)"
        );
    }
}
