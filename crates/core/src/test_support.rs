// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Proptest strategies and fixtures shared with other crates' tests.

use crate::{Env, ImagePullPolicy, Infrastructure, KubernetesJob, Process};
use proptest::prelude::*;

pub fn arb_pull_policy() -> impl Strategy<Value = ImagePullPolicy> {
    prop_oneof![
        Just(ImagePullPolicy::Always),
        Just(ImagePullPolicy::IfNotPresent),
        Just(ImagePullPolicy::Never),
    ]
}

pub fn arb_env() -> impl Strategy<Value = Env> {
    prop::collection::btree_map("[A-Z][A-Z0-9_]{0,15}", "[ -~]{0,24}", 0..6)
}

pub fn arb_kubernetes_job() -> impl Strategy<Value = KubernetesJob> {
    (
        "[a-z][a-z0-9-]{0,20}",
        "[a-z0-9]{1,10}/[a-z0-9-]{1,12}:[a-z0-9.-]{1,10}",
        arb_pull_policy(),
        arb_env(),
    )
        .prop_map(|(namespace, image, policy, env)| {
            KubernetesJob::new(namespace, image, policy, env)
        })
}

/// A Prefect 2 job in the `prod` namespace with S3 and debug logging
/// enabled.
pub fn prod_job() -> KubernetesJob {
    KubernetesJob::builder("prefecthq/prefect:2-python3.9")
        .namespace("prod")
        .image_pull_policy(ImagePullPolicy::IfNotPresent)
        .env_var("EXTRA_PIP_PACKAGES", "s3fs")
        .env_var("PREFECT_LOGGING_LEVEL", "DEBUG")
        .build()
}

pub fn echo_process() -> Infrastructure {
    Process::new(vec!["echo".to_string(), "hello".to_string()]).into()
}
