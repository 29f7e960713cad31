// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kj save` behavior against an on-disk registry.

use crate::prelude::*;

#[test]
fn saving_prod_job_stores_every_field() {
    let ws = Workspace::new();
    ws.kj().args(PROD_SAVE).passes().stdout_has("Saved block 'prod' (kubernetes-job, revision 1)");

    let doc = ws.stored("prod");
    assert_eq!(doc["v"], 1);
    assert_eq!(doc["name"], "prod");
    assert_eq!(doc["revision"], 1);
    let block = &doc["infrastructure"];
    assert_eq!(block["type"], "kubernetes-job");
    assert_eq!(block["namespace"], "prod");
    assert_eq!(block["image"], "prefecthq/prefect:2-python3.9");
    assert_eq!(block["image_pull_policy"], "IfNotPresent");
    assert_eq!(block["env"]["EXTRA_PIP_PACKAGES"], "s3fs");
    assert_eq!(block["env"]["PREFECT_LOGGING_LEVEL"], "DEBUG");
}

#[test]
fn saving_existing_name_fails_and_keeps_record() {
    let ws = Workspace::new();
    ws.kj().args(PROD_SAVE).passes();
    let before = ws.stored("prod");

    ws.kj()
        .args(&["save", "kubernetes-job", "prod", "--image", "busybox"])
        .fails()
        .code(2)
        .stderr_has("already exists");

    assert_eq!(ws.stored("prod"), before);
}

#[test]
fn overwrite_replaces_record_and_bumps_revision() {
    let ws = Workspace::new();
    ws.kj().args(PROD_SAVE).passes();

    ws.kj()
        .args(&["save", "kubernetes-job", "prod", "--image", "busybox", "--overwrite"])
        .passes()
        .stdout_has("Replaced block 'prod' (kubernetes-job, revision 2)");

    let block = &ws.stored("prod")["infrastructure"];
    assert_eq!(block["image"], "busybox");
    assert_eq!(block["namespace"], "default");
    assert!(block.get("env").is_none());
}

#[test]
fn pull_policy_alias_is_stored_canonically() {
    let ws = Workspace::new();
    ws.kj()
        .args(&["save", "kubernetes-job", "j", "--image", "busybox", "--pull-policy", "ALWAYS"])
        .passes();
    assert_eq!(ws.stored("j")["infrastructure"]["image_pull_policy"], "Always");
}

#[test]
fn invalid_name_is_rejected() {
    let ws = Workspace::new();
    ws.kj().args(&["save", "kubernetes-job", "Prod_1", "--image", "busybox"]).fails().code(1);
    assert!(!ws.registry().join("Prod_1.json").exists());
}

#[test]
fn json_output_summarizes_saved_block() {
    let ws = Workspace::new();
    let run = ws.kj().args(&["-o", "json"]).args(PROD_SAVE).passes();
    let summary = run.stdout_json();
    assert_eq!(summary[0]["name"], "prod");
    assert_eq!(summary[0]["kind"], "kubernetes-job");
    assert_eq!(summary[0]["revision"], 1);
}

#[test]
fn registry_dir_can_come_from_environment() {
    let ws = Workspace::new();
    let dir = ws.path().join("from-env");
    cli()
        .args(&["save", "process", "local", "--", "echo", "hello"])
        .env("KJ_REGISTRY_DIR", dir.to_str().unwrap())
        .passes();
    assert!(dir.join("local.json").is_file());
}
