// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local process launch configuration.

use crate::infrastructure::{shell_line, shell_quote, Env, InfrastructureKind, Launchable};
use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How to launch a job as a plain local process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    command: Vec<String>,
    #[serde(default, skip_serializing_if = "Env::is_empty")]
    env: Env,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    working_dir: Option<PathBuf>,
}

impl Process {
    pub fn new(command: Vec<String>) -> Self {
        Self::builder(command).build()
    }

    pub fn builder(command: Vec<String>) -> ProcessBuilder {
        ProcessBuilder { command, env: Env::new(), working_dir: None }
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }
}

impl Launchable for Process {
    fn kind(&self) -> InfrastructureKind {
        InfrastructureKind::Process
    }

    fn env(&self) -> &Env {
        &self.env
    }

    fn command(&self) -> &[String] {
        &self.command
    }

    fn preview(&self) -> Result<String, ConfigError> {
        let mut parts = Vec::new();
        if let Some(dir) = &self.working_dir {
            parts.push(format!("cd {} &&", shell_quote(&dir.display().to_string())));
        }
        for (key, value) in &self.env {
            parts.push(format!("{key}={}", shell_quote(value)));
        }
        if !self.command.is_empty() {
            parts.push(shell_line(self.command.iter().map(String::as_str)));
        }
        Ok(parts.join(" "))
    }
}

pub struct ProcessBuilder {
    command: Vec<String>,
    env: Env,
    working_dir: Option<PathBuf>,
}

impl ProcessBuilder {
    crate::setters! {
        set {
            env: Env,
        }
        option {
            working_dir: PathBuf,
        }
    }

    pub fn env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Process {
        Process { command: self.command, env: self.env, working_dir: self.working_dir }
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
