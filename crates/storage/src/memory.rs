// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process registry backend.

use crate::registry::next_revision;
use crate::{Registry, RegistryError, StoredBlock};
use kj_core::{BlockName, Infrastructure, Launchable};
use parking_lot::Mutex;
use std::collections::BTreeMap;

/// Registry held in memory; contents are lost when dropped.
#[derive(Default)]
pub struct MemoryRegistry {
    blocks: Mutex<BTreeMap<BlockName, StoredBlock>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Registry for MemoryRegistry {
    fn save(&self, name: &str, block: Infrastructure, overwrite: bool) -> Result<(), RegistryError> {
        let name = BlockName::parse(name)?;
        let mut blocks = self.blocks.lock();
        let stored = next_revision(&name, blocks.get(&name), block, overwrite)?;
        tracing::info!(
            name = %stored.name,
            kind = %stored.infrastructure.kind(),
            revision = stored.revision,
            "saved block in memory"
        );
        blocks.insert(name, stored);
        Ok(())
    }

    fn load(&self, name: &str) -> Result<StoredBlock, RegistryError> {
        let name = BlockName::parse(name)?;
        self.blocks
            .lock()
            .get(&name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound { name: name.to_string() })
    }

    fn delete(&self, name: &str) -> Result<(), RegistryError> {
        let name = BlockName::parse(name)?;
        match self.blocks.lock().remove(&name) {
            Some(_) => {
                tracing::info!(%name, "deleted block from memory");
                Ok(())
            }
            None => Err(RegistryError::NotFound { name: name.to_string() }),
        }
    }

    fn list(&self) -> Result<Vec<StoredBlock>, RegistryError> {
        Ok(self.blocks.lock().values().cloned().collect())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
