// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use kj_core::{Infrastructure, Launchable};
use kj_storage::StoredBlock;
use std::fmt::Write;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a single stored block.
pub fn print_block(block: &StoredBlock, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", format_block(block)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(block)?),
    }
    Ok(())
}

/// Print every stored block, one row each.
pub fn print_block_list(blocks: &[StoredBlock], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text if blocks.is_empty() => println!("No blocks saved"),
        OutputFormat::Text => print!("{}", format_block_table(blocks)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(blocks)?),
    }
    Ok(())
}

/// Print the outcome of one or more saves.
///
/// Text prints one line per block; JSON prints a single array.
pub fn print_saved(blocks: &[StoredBlock], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for block in blocks {
                let verb = if block.revision == 1 { "Saved" } else { "Replaced" };
                println!(
                    "{} block '{}' ({}, revision {})",
                    verb,
                    crate::color::header(block.name.as_str()),
                    crate::color::muted(&block.infrastructure.kind().to_string()),
                    block.revision
                );
            }
        }
        OutputFormat::Json => {
            let summaries: Vec<serde_json::Value> = blocks
                .iter()
                .map(|block| {
                    serde_json::json!({
                        "name": block.name,
                        "kind": block.infrastructure.kind(),
                        "revision": block.revision,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
    }
    Ok(())
}

/// Render a block as aligned `key: value` lines.
pub fn format_block(block: &StoredBlock) -> String {
    let mut rows: Vec<(&str, String)> = vec![
        ("Name", block.name.to_string()),
        ("Kind", block.infrastructure.kind().to_string()),
        ("Revision", block.revision.to_string()),
        ("Saved", block.saved_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
    ];

    match &block.infrastructure {
        Infrastructure::KubernetesJob(job) => {
            rows.push(("Namespace", job.namespace().to_string()));
            rows.push(("Image", job.image().to_string()));
            rows.push(("Pull policy", job.image_pull_policy().to_string()));
            if let Some(name) = job.name() {
                rows.push(("Job name", name.to_string()));
            }
            if let Some(account) = job.service_account_name() {
                rows.push(("Service account", account.to_string()));
            }
            if let Some(ttl) = job.finished_job_ttl() {
                rows.push(("Finished TTL", format!("{ttl}s")));
            }
        }
        Infrastructure::DockerContainer(container) => {
            rows.push(("Image", container.image().to_string()));
            rows.push(("Pull policy", container.image_pull_policy().to_string()));
            if !container.networks().is_empty() {
                rows.push(("Networks", container.networks().join(", ")));
            }
            rows.push(("Auto remove", container.auto_remove().to_string()));
        }
        Infrastructure::Process(process) => {
            if let Some(dir) = process.working_dir() {
                rows.push(("Working dir", dir.display().to_string()));
            }
        }
    }

    let command = block.infrastructure.command();
    if !command.is_empty() {
        rows.push(("Command", command.join(" ")));
    }

    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0) + 1;
    let mut out = String::new();
    for (key, value) in &rows {
        let _ = writeln!(out, "{:<width$} {}", format!("{key}:"), value, width = width);
    }

    if let Infrastructure::KubernetesJob(job) = &block.infrastructure {
        if !job.labels().is_empty() {
            out.push_str("Labels:\n");
            for (key, value) in job.labels() {
                let _ = writeln!(out, "  {key}={value}");
            }
        }
    }

    let env = block.infrastructure.env();
    if !env.is_empty() {
        out.push_str("Env:\n");
        for (key, value) in env {
            let _ = writeln!(out, "  {key}={value}");
        }
    }
    out
}

/// Render blocks as a `NAME KIND REVISION SAVED` table.
pub fn format_block_table(blocks: &[StoredBlock]) -> String {
    let name_w = blocks.iter().map(|b| b.name.as_str().len()).max().unwrap_or(0).max(4);
    let kind_w = blocks
        .iter()
        .map(|b| b.infrastructure.kind().to_string().len())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_w$}  {:<kind_w$}  {:>8}  SAVED",
        "NAME",
        "KIND",
        "REVISION",
        name_w = name_w,
        kind_w = kind_w,
    );
    for block in blocks {
        let _ = writeln!(
            out,
            "{:<name_w$}  {:<kind_w$}  {:>8}  {}",
            block.name.as_str(),
            block.infrastructure.kind().to_string(),
            block.revision,
            block.saved_at.format("%Y-%m-%d %H:%M:%S"),
            name_w = name_w,
            kind_w = kind_w,
        );
    }
    out
}
