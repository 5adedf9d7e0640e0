// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use askai::cli::{Cli, InfoAction};
use clap::Parser;

#[test]
fn test_parse_prompt() {
    let cli = Cli::try_parse_from(["askai", "What is Rust?"]).expect("Valid command parsing");
    assert_eq!(cli.prompt.as_deref(), Some("What is Rust?"));
    assert!(cli.info_action().is_none());
}

#[test]
fn test_parse_prompt_with_model() {
    let cli = Cli::try_parse_from(["askai", "-m", "sonnet", "explain async/await"])
        .expect("Valid command parsing");
    assert_eq!(cli.model.as_deref(), Some("sonnet"));
    assert_eq!(cli.prompt.as_deref(), Some("explain async/await"));
}

#[test]
fn test_parse_list_providers() {
    let cli = Cli::try_parse_from(["askai", "--list-providers"]).expect("Valid command parsing");
    assert_eq!(cli.info_action(), Some(InfoAction::ListProviders));
}

#[test]
fn test_parse_list_models() {
    let cli =
        Cli::try_parse_from(["askai", "--list-models", "claude"]).expect("Valid command parsing");
    assert_eq!(
        cli.info_action(),
        Some(InfoAction::ListModels("claude".to_string()))
    );
}

#[test]
fn test_parse_config_flags() {
    let cli = Cli::try_parse_from(["askai", "--config-path"]).expect("Valid command parsing");
    assert_eq!(cli.info_action(), Some(InfoAction::ConfigPath));
    let cli = Cli::try_parse_from(["askai", "--config-show"]).expect("Valid command parsing");
    assert_eq!(cli.info_action(), Some(InfoAction::ConfigShow));
    let cli = Cli::try_parse_from(["askai", "--config-reset"]).expect("Valid command parsing");
    assert_eq!(cli.info_action(), Some(InfoAction::ConfigReset));
}

#[test]
fn test_parse_verbose_and_dry_run() {
    let cli = Cli::try_parse_from(["askai", "-v", "--dry-run", "q"]).expect("Valid command parsing");
    assert!(cli.verbose);
    assert!(cli.dry_run);
}

#[test]
fn test_parse_without_prompt_fails() {
    assert!(Cli::try_parse_from(["askai"]).is_err());
    assert!(Cli::try_parse_from(["askai", "-m", "opus"]).is_err());
}

#[test]
fn test_parse_unknown_flag_fails() {
    assert!(Cli::try_parse_from(["askai", "--no-such-flag", "q"]).is_err());
}
