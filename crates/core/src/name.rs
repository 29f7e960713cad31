// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry key for a stored block.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Longest accepted name, matching the Kubernetes DNS label limit.
pub const MAX_NAME_LEN: usize = 63;

/// A validated block name.
///
/// Lowercase ASCII letters, digits and `-`; must not start or end with `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlockName(String);

impl BlockName {
    pub fn parse(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("name must not be empty")
        } else if name.len() > MAX_NAME_LEN {
            Some("name must be at most 63 characters")
        } else if !name.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            Some("only lowercase letters, digits and '-' are allowed")
        } else if name.starts_with('-') || name.ends_with('-') {
            Some("name must not start or end with '-'")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ConfigError::InvalidName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BlockName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BlockName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for BlockName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BlockName {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<BlockName> for String {
    fn from(name: BlockName) -> Self {
        name.0
    }
}

impl PartialEq<str> for BlockName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BlockName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
#[path = "name_tests.rs"]
mod tests;
