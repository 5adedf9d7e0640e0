// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for askai
//!
//! Settings live in `$XDG_CONFIG_HOME/askai/config.json` (or
//! `~/.config/askai/config.json`). The file is a flat JSON object; keys the
//! current version does not know about are kept and written back untouched.

use serde_json::{json, Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};

mod io;
mod merge;

pub use merge::merge_with_defaults;

/// Provider used when neither the CLI nor the file names one.
pub const DEFAULT_PROVIDER: &str = "claude";

/// Word limit used when the file does not carry `max_response_words`.
pub const DEFAULT_MAX_RESPONSE_WORDS: u64 = 100;

/// User configuration, bound to the file it was loaded from.
///
/// Constructed once at startup and passed to whatever needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    path: PathBuf,
    values: Map<String, Value>,
}

impl Settings {
    /// Compiled-in default mapping.
    pub fn defaults() -> Map<String, Value> {
        let value = json!({
            "default_provider": DEFAULT_PROVIDER,
            "default_models": {
                "claude": "haiku",
                "gemini": "gemini-flash",
            },
            "max_response_words": DEFAULT_MAX_RESPONSE_WORDS,
        });

        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    /// Create in-memory settings holding the defaults, without touching disk.
    pub fn with_defaults(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: Self::defaults(),
        }
    }

    /// Create in-memory settings from an already merged mapping.
    pub fn from_values(path: impl Into<PathBuf>, values: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            values,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full mapping.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Look up a dotted key such as `default_models.claude`.
    ///
    /// Returns `None` at the first missing segment or when an intermediate
    /// value is not an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut current = self.values.get(first)?;

        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }

        Some(current)
    }

    /// Set a dotted key, creating intermediate objects as needed.
    ///
    /// Intermediate values that are not objects are replaced by empty
    /// objects. When `persist` is true the file is rewritten.
    pub fn set(&mut self, key: &str, value: impl Into<Value>, persist: bool) {
        let segments: Vec<&str> = key.split('.').collect();
        let (leaf, parents) = match segments.split_last() {
            Some(split) => split,
            None => return,
        };

        let mut current = &mut self.values;
        for segment in parents {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            current = match entry {
                Value::Object(map) => map,
                _ => return,
            };
        }
        current.insert(leaf.to_string(), value.into());

        if persist {
            self.save();
        }
    }

    /// Name of the default provider.
    pub fn default_provider(&self) -> String {
        self.get("default_provider")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PROVIDER)
            .to_string()
    }

    /// Stored default model for `provider`, if any.
    pub fn default_model(&self, provider: &str) -> Option<String> {
        self.get(&format!("default_models.{provider}"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Configured upper bound on answer length.
    pub fn max_response_words(&self) -> u64 {
        self.get("max_response_words")
            .and_then(Value::as_u64)
            .unwrap_or(DEFAULT_MAX_RESPONSE_WORDS)
    }

    pub fn set_default_provider(&mut self, provider: &str) {
        self.set("default_provider", provider, true);
    }

    pub fn set_default_model(&mut self, provider: &str, model: &str) {
        self.set(&format!("default_models.{provider}"), model, true);
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string_pretty(&self.values).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
