// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! LLM module for askai
//!
//! Provides the abstraction over external LLM command-line tools.

pub mod provider;
pub mod providers;
pub mod registry;

pub use provider::*;
pub use registry::ProviderRegistry;
