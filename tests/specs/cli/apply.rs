// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kj apply` with block files.

use crate::prelude::*;

const PROD_TOML: &str = r#"
[kubernetes_job.prod]
namespace = "prod"
image = "prefecthq/prefect:2-python3.9"
image_pull_policy = "IfNotPresent"

[kubernetes_job.prod.env]
EXTRA_PIP_PACKAGES = "s3fs"
PREFECT_LOGGING_LEVEL = "DEBUG"
"#;

const LOCAL_HCL: &str = r#"
process "local" {
  command = ["echo", "hello"]
}
"#;

#[test]
fn apply_file_saves_blocks() {
    let ws = Workspace::new();
    let path = ws.file("blocks/prod.toml", PROD_TOML);

    ws.kj()
        .args(&["apply", path.to_str().unwrap()])
        .passes()
        .stdout_has("Saved block 'prod' (kubernetes-job, revision 1)");
    assert_eq!(ws.stored("prod")["infrastructure"]["env"]["PREFECT_LOGGING_LEVEL"], "DEBUG");
}

#[test]
fn apply_directory_matches_flag_save() {
    let ws = Workspace::new();
    ws.file("blocks/prod.toml", PROD_TOML);
    ws.file("blocks/nested/local.hcl", LOCAL_HCL);
    let dir = ws.path().join("blocks");

    ws.kj().args(&["apply", dir.to_str().unwrap()]).passes();

    let other = Workspace::new();
    other.kj().args(PROD_SAVE).passes();
    assert_eq!(ws.stored("prod")["infrastructure"], other.stored("prod")["infrastructure"]);
    assert_eq!(ws.stored("local")["infrastructure"]["type"], "process");
}

#[test]
fn reapply_needs_overwrite() {
    let ws = Workspace::new();
    let path = ws.file("prod.toml", PROD_TOML);
    let path = path.to_str().unwrap();

    ws.kj().args(&["apply", path]).passes();
    ws.kj().args(&["apply", path]).fails().code(2);
    ws.kj()
        .args(&["apply", path, "--overwrite"])
        .passes()
        .stdout_has("Replaced block 'prod' (kubernetes-job, revision 2)");
}

#[test]
fn apply_rejects_unknown_fields() {
    let ws = Workspace::new();
    let path = ws.file("bad.hcl", "cron_job \"x\" {\n  image = \"busybox\"\n}\n");
    ws.kj().args(&["apply", path.to_str().unwrap()]).fails().code(1);
    ws.kj().args(&["list"]).passes().stdout_eq("No blocks saved\n");
}
