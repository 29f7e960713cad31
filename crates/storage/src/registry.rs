// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The registry contract shared by every backend.

use crate::RegistryError;
use chrono::{DateTime, Utc};
use kj_core::{BlockName, Infrastructure};
use serde::{Deserialize, Serialize};

/// A block as held by a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredBlock {
    pub name: BlockName,
    /// 1 on first save, incremented by each overwrite
    pub revision: u64,
    pub saved_at: DateTime<Utc>,
    pub infrastructure: Infrastructure,
}

/// Named storage for infrastructure blocks.
///
/// `save` with `overwrite == false` must fail with
/// [`RegistryError::AlreadyExists`] and leave the existing block untouched.
/// With `overwrite == true` the existing block is replaced entirely.
pub trait Registry {
    fn save(&self, name: &str, block: Infrastructure, overwrite: bool) -> Result<(), RegistryError>;

    fn load(&self, name: &str) -> Result<StoredBlock, RegistryError>;

    fn delete(&self, name: &str) -> Result<(), RegistryError>;

    /// All stored blocks, sorted by name.
    fn list(&self) -> Result<Vec<StoredBlock>, RegistryError>;
}

/// Decide what a save produces given what is already stored under `name`.
pub(crate) fn next_revision(
    name: &BlockName,
    prior: Option<&StoredBlock>,
    block: Infrastructure,
    overwrite: bool,
) -> Result<StoredBlock, RegistryError> {
    let revision = match prior {
        Some(_) if !overwrite => {
            return Err(RegistryError::AlreadyExists { name: name.to_string() });
        }
        Some(prior) => prior.revision + 1,
        None => 1,
    };

    Ok(StoredBlock { name: name.clone(), revision, saved_at: Utc::now(), infrastructure: block })
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
