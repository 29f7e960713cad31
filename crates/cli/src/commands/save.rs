// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kj save`: build one block from flags and save it.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use kj_core::{DockerContainer, Env, ImagePullPolicy, Infrastructure, KubernetesJob, Process};
use kj_storage::Registry;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::output::{print_saved, OutputFormat};

/// Flags shared by every block kind.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Block name (lowercase letters, digits and '-')
    pub name: String,

    /// Environment variable for the launched job (repeatable)
    #[arg(long = "env", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub env: Vec<(String, String)>,

    /// Replace an existing block with the same name
    #[arg(long)]
    pub overwrite: bool,
}

#[derive(Subcommand, Debug)]
pub enum SaveCommand {
    /// Save a Kubernetes job block
    KubernetesJob {
        #[command(flatten)]
        common: CommonArgs,

        /// Container image (registry/name:tag)
        #[arg(long)]
        image: String,

        /// Namespace the job runs in
        #[arg(long, default_value = kj_core::kubernetes::DEFAULT_NAMESPACE)]
        namespace: String,

        /// Always, IfNotPresent or Never
        #[arg(long, default_value = "IfNotPresent")]
        pull_policy: ImagePullPolicy,

        /// Label for the job metadata (repeatable)
        #[arg(long = "label", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        labels: Vec<(String, String)>,

        /// Prefix for the generated job name
        #[arg(long)]
        job_name: Option<String>,

        /// Service account for the job's pod
        #[arg(long)]
        service_account: Option<String>,

        /// Seconds to keep the job after it finishes
        #[arg(
            long,
            value_name = "SECONDS",
            value_parser = clap::value_parser!(u32).range(..=i64::from(i32::MAX))
        )]
        finished_job_ttl: Option<u32>,

        /// Container arguments (after `--`)
        #[arg(last = true)]
        command: Vec<String>,
    },

    /// Save a Docker container block
    DockerContainer {
        #[command(flatten)]
        common: CommonArgs,

        /// Container image (registry/name:tag)
        #[arg(long)]
        image: String,

        /// Always, IfNotPresent or Never
        #[arg(long, default_value = "IfNotPresent")]
        pull_policy: ImagePullPolicy,

        /// Network to attach (repeatable)
        #[arg(long = "network")]
        networks: Vec<String>,

        /// Remove the container when it exits
        #[arg(long)]
        auto_remove: bool,

        /// Container arguments (after `--`)
        #[arg(last = true)]
        command: Vec<String>,
    },

    /// Save a local process block
    Process {
        #[command(flatten)]
        common: CommonArgs,

        /// Directory to run the command in
        #[arg(long)]
        working_dir: Option<PathBuf>,

        /// Command to run (after `--`)
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },
}

impl SaveCommand {
    /// Build the block these flags describe.
    pub fn into_block(self) -> (CommonArgs, Infrastructure) {
        match self {
            SaveCommand::KubernetesJob {
                common,
                image,
                namespace,
                pull_policy,
                labels,
                job_name,
                service_account,
                finished_job_ttl,
                command,
            } => {
                let mut builder = KubernetesJob::builder(image)
                    .namespace(namespace)
                    .image_pull_policy(pull_policy)
                    .env(to_env(&common.env))
                    .labels(labels.into_iter().collect::<BTreeMap<_, _>>())
                    .command(command);
                if let Some(job_name) = job_name {
                    builder = builder.name(job_name);
                }
                if let Some(account) = service_account {
                    builder = builder.service_account_name(account);
                }
                if let Some(ttl) = finished_job_ttl {
                    builder = builder.finished_job_ttl(ttl);
                }
                let block = Infrastructure::from(builder.build());
                (common, block)
            }
            SaveCommand::DockerContainer {
                common,
                image,
                pull_policy,
                networks,
                auto_remove,
                command,
            } => {
                let container = DockerContainer::builder(image)
                    .image_pull_policy(pull_policy)
                    .env(to_env(&common.env))
                    .networks(networks)
                    .auto_remove(auto_remove)
                    .command(command)
                    .build();
                let block = Infrastructure::from(container);
                (common, block)
            }
            SaveCommand::Process { common, working_dir, command } => {
                let mut builder = Process::builder(command).env(to_env(&common.env));
                if let Some(dir) = working_dir {
                    builder = builder.working_dir(dir);
                }
                let block = Infrastructure::from(builder.build());
                (common, block)
            }
        }
    }
}

pub fn handle(registry: &impl Registry, command: SaveCommand, format: OutputFormat) -> Result<()> {
    let (common, block) = command.into_block();
    registry
        .save(&common.name, block, common.overwrite)
        .with_context(|| format!("failed to save block '{}'", common.name))?;
    let stored = registry.load(&common.name)?;
    print_saved(&[stored], format)
}

/// Later values win when a key repeats.
fn to_env(pairs: &[(String, String)]) -> Env {
    pairs.iter().cloned().collect()
}

/// Parse a `KEY=VALUE` flag. The value may itself contain `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        Some(_) => Err(format!("empty key in '{s}'")),
        None => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

#[cfg(test)]
#[path = "save_tests.rs"]
mod tests;
