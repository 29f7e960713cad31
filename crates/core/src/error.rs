// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while building or rendering blocks.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown image pull policy '{0}' (expected Always, IfNotPresent or Never)")]
    UnknownPullPolicy(String),
    #[error("invalid block name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },
    #[error("finished_job_ttl {0}s exceeds the Kubernetes limit of {max}s", max = i32::MAX)]
    TtlOutOfRange(u32),
    #[error("failed to render manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
