// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use kj_core::ConfigError;
use thiserror::Error;

/// Errors that can occur in registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("block '{name}' already exists (use overwrite to replace it)")]
    AlreadyExists { name: String },
    #[error("block '{name}' not found")]
    NotFound { name: String },
    #[error("block '{name}' has unsupported schema version {version}")]
    UnsupportedVersion { name: String, version: u32 },
    #[error("block '{name}' is unreadable: {source}")]
    Corrupt { name: String, source: serde_json::Error },
    #[error("block file for '{name}' holds block '{found}'")]
    NameMismatch { name: String, found: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
