// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Command handlers
//!
//! `info` covers the listing and `--config-*` actions, `ask` resolves and
//! runs a provider CLI for a prompt.

pub mod ask;
pub mod info;

pub use ask::{execute, plan_invocation, run_query};
pub use info::{
    list_models, list_providers, reset_config, run_info_action, show_config, show_config_path,
};
