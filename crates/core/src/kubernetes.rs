// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Kubernetes job launch configuration.
//!
//! Block form:
//! ```hcl
//! kubernetes_job "prod" {
//!   namespace         = "prod"
//!   image             = "prefecthq/prefect:2-python3.9"
//!   image_pull_policy = "IfNotPresent"
//!   env = { PREFECT_LOGGING_LEVEL = "DEBUG" }
//! }
//! ```

use crate::infrastructure::{Env, InfrastructureKind, Launchable};
use crate::{ConfigError, ImagePullPolicy};
use k8s_openapi::api::batch::v1::{Job, JobSpec};
use k8s_openapi::api::core::v1::{Container, EnvVar, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_NAMESPACE: &str = "default";

/// `generateName` prefix when the block sets no `name`.
pub const DEFAULT_JOB_PREFIX: &str = "kj-job";

/// Name of the single container in the job's pod.
pub const CONTAINER_NAME: &str = "job";

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

/// How to launch a job on Kubernetes.
///
/// Fields are fixed at construction. Use [`KubernetesJob::new`] for the four
/// core fields or [`KubernetesJob::builder`] for the optional ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesJob {
    #[serde(default = "default_namespace")]
    namespace: String,
    image: String,
    #[serde(default)]
    image_pull_policy: ImagePullPolicy,
    #[serde(default, skip_serializing_if = "Env::is_empty")]
    env: Env,
    /// Prefix for the generated Kubernetes job name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    command: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    service_account_name: Option<String>,
    /// Seconds the cluster keeps a finished job before deleting it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    finished_job_ttl: Option<u32>,
}

impl KubernetesJob {
    pub fn new(
        namespace: impl Into<String>,
        image: impl Into<String>,
        image_pull_policy: ImagePullPolicy,
        env: Env,
    ) -> Self {
        Self::builder(image)
            .namespace(namespace)
            .image_pull_policy(image_pull_policy)
            .env(env)
            .build()
    }

    pub fn builder(image: impl Into<String>) -> KubernetesJobBuilder {
        KubernetesJobBuilder {
            namespace: default_namespace(),
            image: image.into(),
            image_pull_policy: ImagePullPolicy::default(),
            env: Env::new(),
            name: None,
            command: Vec::new(),
            labels: BTreeMap::new(),
            service_account_name: None,
            finished_job_ttl: None,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn image_pull_policy(&self) -> ImagePullPolicy {
        self.image_pull_policy
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    pub fn service_account_name(&self) -> Option<&str> {
        self.service_account_name.as_deref()
    }

    pub fn finished_job_ttl(&self) -> Option<u32> {
        self.finished_job_ttl
    }

    /// Build the `batch/v1` Job this block describes.
    pub fn job_manifest(&self) -> Result<Job, ConfigError> {
        let prefix = self.name.as_deref().unwrap_or(DEFAULT_JOB_PREFIX);
        let ttl_seconds_after_finished = self
            .finished_job_ttl
            .map(|ttl| i32::try_from(ttl).map_err(|_| ConfigError::TtlOutOfRange(ttl)))
            .transpose()?;

        let env: Vec<EnvVar> = self
            .env
            .iter()
            .map(|(name, value)| EnvVar {
                name: name.clone(),
                value: Some(value.clone()),
                ..Default::default()
            })
            .collect();

        let container = Container {
            name: CONTAINER_NAME.to_string(),
            image: Some(self.image.clone()),
            image_pull_policy: Some(self.image_pull_policy.as_str().to_string()),
            env: if env.is_empty() { None } else { Some(env) },
            args: if self.command.is_empty() { None } else { Some(self.command.clone()) },
            ..Default::default()
        };

        Ok(Job {
            metadata: ObjectMeta {
                namespace: Some(self.namespace.clone()),
                generate_name: Some(format!("{prefix}-")),
                labels: if self.labels.is_empty() { None } else { Some(self.labels.clone()) },
                ..Default::default()
            },
            spec: Some(JobSpec {
                parallelism: Some(1),
                completions: Some(1),
                backoff_limit: Some(0),
                ttl_seconds_after_finished,
                template: PodTemplateSpec {
                    metadata: None,
                    spec: Some(PodSpec {
                        containers: vec![container],
                        restart_policy: Some("Never".to_string()),
                        service_account_name: self.service_account_name.clone(),
                        ..Default::default()
                    }),
                },
                ..Default::default()
            }),
            ..Default::default()
        })
    }
}

impl Launchable for KubernetesJob {
    fn kind(&self) -> InfrastructureKind {
        InfrastructureKind::KubernetesJob
    }

    fn env(&self) -> &Env {
        &self.env
    }

    fn command(&self) -> &[String] {
        &self.command
    }

    fn preview(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(&self.job_manifest()?)?)
    }
}

pub struct KubernetesJobBuilder {
    namespace: String,
    image: String,
    image_pull_policy: ImagePullPolicy,
    env: Env,
    name: Option<String>,
    command: Vec<String>,
    labels: BTreeMap<String, String>,
    service_account_name: Option<String>,
    finished_job_ttl: Option<u32>,
}

impl KubernetesJobBuilder {
    crate::setters! {
        into {
            namespace: String,
        }
        set {
            image_pull_policy: ImagePullPolicy,
            env: Env,
            command: Vec<String>,
            labels: BTreeMap<String, String>,
        }
        option {
            name: String,
            service_account_name: String,
            finished_job_ttl: u32,
        }
    }

    /// Add one environment variable, replacing an earlier value for `key`.
    pub fn env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> KubernetesJob {
        KubernetesJob {
            namespace: self.namespace,
            image: self.image,
            image_pull_policy: self.image_pull_policy,
            env: self.env,
            name: self.name,
            command: self.command,
            labels: self.labels,
            service_account_name: self.service_account_name,
            finished_job_ttl: self.finished_job_ttl,
        }
    }
}

#[cfg(test)]
#[path = "kubernetes_tests.rs"]
mod tests;
