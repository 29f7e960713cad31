// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Infrastructure blocks and the capabilities they share.
//!
//! Each backend is its own value type with its own field set. The
//! [`Infrastructure`] enum is what gets persisted; its `type` tag selects
//! the backend:
//!
//! ```json
//! { "type": "kubernetes-job", "namespace": "prod", "image": "..." }
//! ```

use crate::{ConfigError, DockerContainer, KubernetesJob, Process};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Environment injected into the launched process. Keys are unique; order
/// carries no meaning and serializes sorted.
pub type Env = BTreeMap<String, String>;

/// Which backend a block targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InfrastructureKind {
    KubernetesJob,
    DockerContainer,
    Process,
}

crate::simple_display! {
    InfrastructureKind {
        KubernetesJob => "kubernetes-job",
        DockerContainer => "docker-container",
        Process => "process",
    }
}

/// What every infrastructure block can describe about its launch.
///
/// Nothing here launches anything; `preview` only renders.
pub trait Launchable {
    fn kind(&self) -> InfrastructureKind;

    fn env(&self) -> &Env;

    /// Command override; empty means the image or platform default.
    fn command(&self) -> &[String];

    /// Human-readable rendering of what would be launched.
    fn preview(&self) -> Result<String, ConfigError>;
}

/// A block of any supported backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Infrastructure {
    KubernetesJob(KubernetesJob),
    DockerContainer(DockerContainer),
    Process(Process),
}

impl Infrastructure {
    fn as_launchable(&self) -> &dyn Launchable {
        match self {
            Self::KubernetesJob(job) => job,
            Self::DockerContainer(container) => container,
            Self::Process(process) => process,
        }
    }

    pub fn as_kubernetes_job(&self) -> Option<&KubernetesJob> {
        match self {
            Self::KubernetesJob(job) => Some(job),
            _ => None,
        }
    }
}

impl Launchable for Infrastructure {
    fn kind(&self) -> InfrastructureKind {
        self.as_launchable().kind()
    }

    fn env(&self) -> &Env {
        self.as_launchable().env()
    }

    fn command(&self) -> &[String] {
        self.as_launchable().command()
    }

    fn preview(&self) -> Result<String, ConfigError> {
        self.as_launchable().preview()
    }
}

impl From<KubernetesJob> for Infrastructure {
    fn from(job: KubernetesJob) -> Self {
        Self::KubernetesJob(job)
    }
}

impl From<DockerContainer> for Infrastructure {
    fn from(container: DockerContainer) -> Self {
        Self::DockerContainer(container)
    }
}

impl From<Process> for Infrastructure {
    fn from(process: Process) -> Self {
        Self::Process(process)
    }
}

/// Quote a word for a POSIX shell when it contains anything unsafe.
pub(crate) fn shell_quote(word: &str) -> String {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:=@%+,".contains(c));
    if safe {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Join words into a single shell line.
pub(crate) fn shell_line<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    words.into_iter().map(shell_quote).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "infrastructure_tests.rs"]
mod tests;
