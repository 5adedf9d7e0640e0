// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI provider implementations

pub mod claude;

pub use claude::ClaudeProvider;
