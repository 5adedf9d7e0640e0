// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde_json::{Map, Value};

use super::Settings;

/// Lay a loaded mapping over the compiled-in defaults.
///
/// Keys missing from `loaded` come from the defaults, object values are
/// merged key-by-key, and keys the defaults do not know are kept.
pub fn merge_with_defaults(loaded: Map<String, Value>) -> Map<String, Value> {
    match deep_merge(Value::Object(Settings::defaults()), Value::Object(loaded)) {
        Value::Object(map) => map,
        _ => Settings::defaults(),
    }
}

/// Deep-merge two JSON values.
/// `base` supplies fallbacks, `overlay` values take priority.
pub(super) fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = if let Some(base_val) = base_map.remove(&key) {
                    deep_merge(base_val, overlay_val)
                } else {
                    overlay_val
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_base, overlay) => overlay,
    }
}
