// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! askai - one-shot LLM queries from the terminal
//!
//! Entry point for the askai CLI application.

use std::io::{self, IsTerminal};

use clap::Parser;

use askai::cli::Cli;
use askai::commands;
use askai::config::Settings;
use askai::error::{Result, EXIT_INTERRUPTED, EXIT_SUCCESS};
use askai::llm::ProviderRegistry;

fn main() {
    // Usage errors exit here with code 2
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}

fn init_tracing(verbose: bool) {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` shows resolution details; `RUST_LOG` still takes precedence.
    if verbose {
        if let Ok(parsed) = "askai=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<i32> {
    // Reject inconsistent flags before the config file is touched
    cli.validate()?;

    let path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let mut settings = Settings::load_from(path);
    let registry = ProviderRegistry::builtin();

    if let Some(action) = cli.info_action() {
        let mut stdout = io::stdout().lock();
        commands::run_info_action(&action, &mut settings, &registry, &mut stdout)?;
        return Ok(EXIT_SUCCESS);
    }

    install_interrupt_handler();

    // Not locked: the interrupt handler writes to stderr from another thread
    let mut stderr = io::stderr();
    commands::run_query(cli, &settings, &registry, &mut stderr)
}

/// Exit with the conventional interrupt code on Ctrl+C.
///
/// The provider CLI shares our process group and receives the same signal.
fn install_interrupt_handler() {
    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\nInterrupted");
        std::process::exit(EXIT_INTERRUPTED);
    }) {
        tracing::debug!("could not install interrupt handler: {}", e);
    }
}
