// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kj show`, `kj list`, `kj delete` and `kj preview`.

use anyhow::{Context, Result};
use kj_core::Launchable;
use kj_storage::Registry;

use crate::output::{print_block, print_block_list, OutputFormat};

pub fn show(registry: &impl Registry, name: &str, format: OutputFormat) -> Result<()> {
    let block = registry.load(name)?;
    print_block(&block, format)
}

pub fn list(registry: &impl Registry, format: OutputFormat) -> Result<()> {
    let blocks = registry.list()?;
    print_block_list(&blocks, format)
}

pub fn delete(registry: &impl Registry, name: &str, format: OutputFormat) -> Result<()> {
    registry.delete(name)?;
    match format {
        OutputFormat::Text => println!("Deleted block '{name}'"),
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "name": name, "deleted": true }))
        }
    }
    Ok(())
}

/// Print what launching the block would run: a Kubernetes job manifest,
/// a `docker run` line, or a shell command. Always plain text.
pub fn preview(registry: &impl Registry, name: &str) -> Result<()> {
    println!("{}", render_preview(registry, name)?);
    Ok(())
}

fn render_preview(registry: &impl Registry, name: &str) -> Result<String> {
    let block = registry.load(name)?;
    block.infrastructure.preview().with_context(|| format!("cannot preview block '{name}'"))
}

#[cfg(test)]
#[path = "block_tests.rs"]
mod tests;
