// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container image pull policy.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether the runtime re-fetches the image before each run.
///
/// Serialized in the Kubernetes form (`IfNotPresent`). The symbolic
/// constant form (`IF_NOT_PRESENT`) is accepted on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImagePullPolicy {
    #[serde(alias = "ALWAYS")]
    Always,
    #[default]
    #[serde(alias = "IF_NOT_PRESENT")]
    IfNotPresent,
    #[serde(alias = "NEVER")]
    Never,
}

impl ImagePullPolicy {
    pub const ALL: [ImagePullPolicy; 3] = [Self::Always, Self::IfNotPresent, Self::Never];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "Always",
            Self::IfNotPresent => "IfNotPresent",
            Self::Never => "Never",
        }
    }

    /// Value for `docker run --pull`.
    pub fn docker_pull(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::IfNotPresent => "missing",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ImagePullPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ImagePullPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Always" | "ALWAYS" => Ok(Self::Always),
            "IfNotPresent" | "IF_NOT_PRESENT" => Ok(Self::IfNotPresent),
            "Never" | "NEVER" => Ok(Self::Never),
            other => Err(ConfigError::UnknownPullPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "pull_policy_tests.rs"]
mod tests;
