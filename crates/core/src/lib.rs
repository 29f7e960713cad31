// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kj-core: infrastructure block types for the kj CLI

pub mod macros;

pub mod docker;
pub mod error;
pub mod infrastructure;
pub mod kubernetes;
pub mod name;
pub mod process;
pub mod pull_policy;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use docker::{DockerContainer, DockerContainerBuilder};
pub use error::ConfigError;
pub use infrastructure::{Env, Infrastructure, InfrastructureKind, Launchable};
pub use kubernetes::{KubernetesJob, KubernetesJobBuilder};
pub use name::BlockName;
pub use process::{Process, ProcessBuilder};
pub use pull_policy::ImagePullPolicy;
