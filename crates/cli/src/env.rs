// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// Default log filter when `KJ_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolve the registry directory:
/// `--registry` > KJ_REGISTRY_DIR > XDG_DATA_HOME/kj/blocks > platform data dir/kj/blocks
pub fn registry_dir(flag: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = flag {
        return Some(dir);
    }
    if let Some(dir) = std::env::var("KJ_REGISTRY_DIR").ok().filter(|s| !s.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    if let Some(xdg) = std::env::var("XDG_DATA_HOME").ok().filter(|s| !s.is_empty()) {
        return Some(PathBuf::from(xdg).join("kj/blocks"));
    }
    dirs::data_local_dir().map(|dir| dir.join("kj/blocks"))
}

/// Tracing filter directives from `KJ_LOG`
pub fn log_filter() -> String {
    std::env::var("KJ_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
