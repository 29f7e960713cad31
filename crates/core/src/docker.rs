// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Docker container launch configuration.

use crate::infrastructure::{shell_line, Env, InfrastructureKind, Launchable};
use crate::{ConfigError, ImagePullPolicy};
use serde::{Deserialize, Serialize};

/// How to launch a job as a local Docker container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerContainer {
    /// Container image (e.g., "prefecthq/prefect:2-python3.9")
    image: String,
    #[serde(default)]
    image_pull_policy: ImagePullPolicy,
    #[serde(default, skip_serializing_if = "Env::is_empty")]
    env: Env,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    command: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    networks: Vec<String>,
    #[serde(default)]
    auto_remove: bool,
}

impl DockerContainer {
    pub fn new(image: impl Into<String>) -> Self {
        Self::builder(image).build()
    }

    pub fn builder(image: impl Into<String>) -> DockerContainerBuilder {
        DockerContainerBuilder {
            image: image.into(),
            image_pull_policy: ImagePullPolicy::default(),
            env: Env::new(),
            command: Vec::new(),
            networks: Vec::new(),
            auto_remove: false,
        }
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn image_pull_policy(&self) -> ImagePullPolicy {
        self.image_pull_policy
    }

    pub fn networks(&self) -> &[String] {
        &self.networks
    }

    pub fn auto_remove(&self) -> bool {
        self.auto_remove
    }

    /// Arguments of the equivalent `docker run` invocation.
    pub fn run_args(&self) -> Vec<String> {
        let mut args = vec!["docker".to_string(), "run".to_string()];
        if self.auto_remove {
            args.push("--rm".to_string());
        }
        args.push(format!("--pull={}", self.image_pull_policy.docker_pull()));
        for network in &self.networks {
            args.push(format!("--network={network}"));
        }
        for (key, value) in &self.env {
            args.push("--env".to_string());
            args.push(format!("{key}={value}"));
        }
        args.push(self.image.clone());
        args.extend(self.command.iter().cloned());
        args
    }
}

impl Launchable for DockerContainer {
    fn kind(&self) -> InfrastructureKind {
        InfrastructureKind::DockerContainer
    }

    fn env(&self) -> &Env {
        &self.env
    }

    fn command(&self) -> &[String] {
        &self.command
    }

    fn preview(&self) -> Result<String, ConfigError> {
        let args = self.run_args();
        Ok(shell_line(args.iter().map(String::as_str)))
    }
}

pub struct DockerContainerBuilder {
    image: String,
    image_pull_policy: ImagePullPolicy,
    env: Env,
    command: Vec<String>,
    networks: Vec<String>,
    auto_remove: bool,
}

impl DockerContainerBuilder {
    crate::setters! {
        set {
            image_pull_policy: ImagePullPolicy,
            env: Env,
            command: Vec<String>,
            networks: Vec<String>,
            auto_remove: bool,
        }
    }

    pub fn env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> DockerContainer {
        DockerContainer {
            image: self.image,
            image_pull_policy: self.image_pull_policy,
            env: self.env,
            command: self.command,
            networks: self.networks,
            auto_remove: self.auto_remove,
        }
    }
}

#[cfg(test)]
#[path = "docker_tests.rs"]
mod tests;
