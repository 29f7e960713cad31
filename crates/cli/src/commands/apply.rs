// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kj apply`: save every block declared in a file or directory.

use anyhow::{Context, Result};
use kj_storage::Registry;
use std::path::Path;

use crate::exit_error::{ExitError, EXIT_FAILURE};
use crate::output::{print_saved, OutputFormat};

/// Blocks are saved in file order; the first failure stops the run and
/// leaves earlier saves in place.
pub fn handle(
    registry: &impl Registry,
    path: &Path,
    overwrite: bool,
    format: OutputFormat,
) -> Result<()> {
    let blocks = kj_blockfile::load_blocks(path)?;
    if blocks.is_empty() {
        return Err(ExitError::new(
            EXIT_FAILURE,
            format!("no blocks declared in {}", path.display()),
        )
        .into());
    }

    let mut saved = Vec::with_capacity(blocks.len());
    for block in blocks {
        let name = block.name.as_str();
        registry
            .save(name, block.infrastructure, overwrite)
            .with_context(|| format!("failed to save block '{name}'"))?;
        saved.push(registry.load(name)?);
    }
    tracing::info!(path = %path.display(), count = saved.len(), "applied block file");

    print_saved(&saved, format)
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod tests;
