// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{AskError, Result};

use super::merge::merge_with_defaults;
use super::Settings;

const APP_DIR: &str = "askai";
const CONFIG_FILE: &str = "config.json";

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        config_path_from(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir())
    }

    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Load settings from a specific path.
    ///
    /// A missing file is created with the defaults. An unreadable or
    /// malformed file is reported and the defaults are used in memory
    /// without overwriting it.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, writing defaults");
            let settings = Self::with_defaults(path);
            settings.save();
            return settings;
        }

        match read_mapping(&path) {
            Ok(loaded) => Self::from_values(path, merge_with_defaults(loaded)),
            Err(e) => {
                tracing::warn!(
                    "Failed to load config from {}: {}. Using default configuration.",
                    path.display(),
                    e
                );
                Self::with_defaults(path)
            }
        }
    }

    /// Persist settings, reporting failures as a warning.
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            tracing::warn!("Failed to save config to {}: {}", self.path.display(), e);
        }
    }

    /// Persist settings as pretty, key-sorted JSON readable only by the owner.
    ///
    /// The file is written next to the target and renamed into place, so a
    /// failed write leaves the previous contents intact.
    pub fn try_save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.values)?;
        let staging = staging_path(&self.path);
        std::fs::write(&staging, content)?;
        restrict_permissions(&staging)?;

        if let Err(e) = std::fs::rename(&staging, &self.path) {
            let _ = std::fs::remove_file(&staging);
            return Err(e.into());
        }
        Ok(())
    }

    /// Replace everything, in memory and on disk, with the defaults.
    pub fn reset(&mut self) {
        self.values = Self::defaults();
        self.save();
    }
}

/// Resolve the config file location from `XDG_CONFIG_HOME` and the home dir.
pub(super) fn config_path_from(xdg_config_home: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    let base = match xdg_config_home {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => home.unwrap_or_else(|| PathBuf::from(".")).join(".config"),
    };
    base.join(APP_DIR).join(CONFIG_FILE)
}

fn read_mapping(path: &Path) -> Result<serde_json::Map<String, Value>> {
    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&content)? {
        Value::Object(map) => Ok(map),
        other => Err(AskError::Config(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from(CONFIG_FILE));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
