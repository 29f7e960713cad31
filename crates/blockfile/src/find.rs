// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Block file discovery and loading

use crate::parser::{parse_blocks, Block, Format, ParseError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading block files
#[derive(Debug, Error)]
pub enum BlockFileError {
    #[error("{}: unsupported block file format (expected .hcl, .toml or .json)", path.display())]
    UnknownFormat { path: PathBuf },
    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("{}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },
    #[error("block '{name}' declared in both {} and {}", first.display(), second.display())]
    DuplicateName { name: String, first: PathBuf, second: PathBuf },
}

/// Load blocks from a single file, or from every block file under a
/// directory (recursively, in path order).
pub fn load_blocks(path: &Path) -> Result<Vec<Block>, BlockFileError> {
    if !path.is_dir() {
        let format = format_for_path(path)
            .ok_or_else(|| BlockFileError::UnknownFormat { path: path.to_path_buf() })?;
        return load_file(path, format);
    }

    let mut files = collect_block_files(path)
        .map_err(|source| BlockFileError::Io { path: path.to_path_buf(), source })?;
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut origin: HashMap<String, PathBuf> = HashMap::new();
    let mut blocks = Vec::new();
    for (file, format) in files {
        for block in load_file(&file, format)? {
            if let Some(first) = origin.insert(block.name.to_string(), file.clone()) {
                return Err(BlockFileError::DuplicateName {
                    name: block.name.to_string(),
                    first,
                    second: file,
                });
            }
            blocks.push(block);
        }
    }
    Ok(blocks)
}

fn load_file(path: &Path, format: Format) -> Result<Vec<Block>, BlockFileError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| BlockFileError::Io { path: path.to_path_buf(), source })?;
    let blocks = parse_blocks(&content, format)
        .map_err(|source| BlockFileError::Parse { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), count = blocks.len(), "loaded block file");
    Ok(blocks)
}

/// Recursively collect all block files (`.hcl`, `.toml`, `.json`) under `dir`.
fn collect_block_files(dir: &Path) -> Result<Vec<(PathBuf, Format)>, std::io::Error> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in std::fs::read_dir(&current)?.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if let Some(format) = format_for_path(&path) {
                files.push((path, format));
            }
        }
    }
    Ok(files)
}

pub fn format_for_path(path: &Path) -> Option<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Some(Format::Toml),
        Some("hcl") => Some(Format::Hcl),
        Some("json") => Some(Format::Json),
        _ => None,
    }
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
