// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem registry backend.
//!
//! Each block is one JSON document at `<root>/<name>.json`. Writes land in
//! a hidden temporary sibling first and are renamed into place, so a reader
//! never observes a half-written block.

use crate::registry::next_revision;
use crate::{Registry, RegistryError, StoredBlock};
use chrono::{DateTime, Utc};
use kj_core::{BlockName, Infrastructure, Launchable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Current on-disk schema version
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

const EXTENSION: &str = "json";

/// On-disk form of a [`StoredBlock`].
#[derive(Debug, Serialize, Deserialize)]
struct BlockDocument {
    /// Schema version for migrations
    #[serde(rename = "v")]
    version: u32,
    name: BlockName,
    revision: u64,
    saved_at: DateTime<Utc>,
    infrastructure: Infrastructure,
}

/// Only the version, read before committing to the full layout.
#[derive(Deserialize)]
struct VersionProbe {
    #[serde(rename = "v")]
    version: u32,
}

impl From<BlockDocument> for StoredBlock {
    fn from(doc: BlockDocument) -> Self {
        StoredBlock {
            name: doc.name,
            revision: doc.revision,
            saved_at: doc.saved_at,
            infrastructure: doc.infrastructure,
        }
    }
}

impl From<&StoredBlock> for BlockDocument {
    fn from(block: &StoredBlock) -> Self {
        BlockDocument {
            version: CURRENT_SCHEMA_VERSION,
            name: block.name.clone(),
            revision: block.revision,
            saved_at: block.saved_at,
            infrastructure: block.infrastructure.clone(),
        }
    }
}

/// Registry persisted as a directory of JSON documents.
pub struct FileRegistry {
    root: PathBuf,
}

impl FileRegistry {
    /// Open (creating if needed) a registry rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, RegistryError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn block_path(&self, name: &BlockName) -> PathBuf {
        self.root.join(format!("{name}.{EXTENSION}"))
    }

    fn temp_path(&self, name: &BlockName) -> PathBuf {
        self.root.join(format!(".{name}.{EXTENSION}.tmp"))
    }

    /// Read a block, `Ok(None)` when no file exists for `name`.
    fn read(&self, name: &BlockName) -> Result<Option<StoredBlock>, RegistryError> {
        let content = match fs::read_to_string(self.block_path(name)) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let corrupt = |source| RegistryError::Corrupt { name: name.to_string(), source };
        let probe: VersionProbe = serde_json::from_str(&content).map_err(corrupt)?;
        if probe.version != CURRENT_SCHEMA_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                name: name.to_string(),
                version: probe.version,
            });
        }

        let doc: BlockDocument = serde_json::from_str(&content).map_err(corrupt)?;
        if doc.name != *name {
            return Err(RegistryError::NameMismatch {
                name: name.to_string(),
                found: doc.name.to_string(),
            });
        }
        Ok(Some(doc.into()))
    }

    fn write(&self, block: &StoredBlock) -> Result<(), RegistryError> {
        let tmp = self.temp_path(&block.name);
        let json = serde_json::to_vec_pretty(&BlockDocument::from(block))?;

        let mut file = fs::File::create(&tmp)?;
        file.write_all(&json)?;
        file.sync_all()?;
        drop(file);

        if let Err(e) = fs::rename(&tmp, self.block_path(&block.name)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl Registry for FileRegistry {
    fn save(&self, name: &str, block: Infrastructure, overwrite: bool) -> Result<(), RegistryError> {
        let name = BlockName::parse(name)?;
        let prior = self.read(&name)?;
        let stored = next_revision(&name, prior.as_ref(), block, overwrite)?;
        self.write(&stored)?;
        tracing::info!(
            name = %stored.name,
            kind = %stored.infrastructure.kind(),
            revision = stored.revision,
            "saved block"
        );
        Ok(())
    }

    fn load(&self, name: &str) -> Result<StoredBlock, RegistryError> {
        let name = BlockName::parse(name)?;
        tracing::debug!(%name, root = %self.root.display(), "loading block");
        self.read(&name)?.ok_or_else(|| RegistryError::NotFound { name: name.to_string() })
    }

    fn delete(&self, name: &str) -> Result<(), RegistryError> {
        let name = BlockName::parse(name)?;
        match fs::remove_file(self.block_path(&name)) {
            Ok(()) => {
                tracing::info!(%name, "deleted block");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(RegistryError::NotFound { name: name.to_string() })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self) -> Result<Vec<StoredBlock>, RegistryError> {
        let mut blocks = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let Ok(name) = BlockName::parse(stem) else {
                tracing::warn!(path = %path.display(), "skipping file with invalid block name");
                continue;
            };
            match self.read(&name) {
                Ok(Some(block)) => blocks.push(block),
                Ok(None) => {}
                Err(
                    e @ (RegistryError::Corrupt { .. }
                    | RegistryError::NameMismatch { .. }
                    | RegistryError::UnsupportedVersion { .. }),
                ) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "skipping unreadable block file"
                    );
                }
                Err(e) => return Err(e),
            }
        }
        blocks.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(blocks)
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
