// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kj show`, `list`, `delete` and `preview`.

use crate::prelude::*;

fn with_prod() -> Workspace {
    let ws = Workspace::new();
    ws.kj().args(PROD_SAVE).passes();
    ws
}

#[test]
fn show_prints_block_fields() {
    with_prod()
        .kj()
        .args(&["show", "prod"])
        .passes()
        .stdout_has("Namespace:   prod\n")
        .stdout_has("Image:       prefecthq/prefect:2-python3.9\n")
        .stdout_has("Pull policy: IfNotPresent\n")
        .stdout_has("  EXTRA_PIP_PACKAGES=s3fs\n");
}

#[test]
fn show_json_round_trips_the_block() {
    let ws = with_prod();
    let run = ws.kj().args(&["show", "prod", "-o", "json"]).passes();
    let block = run.stdout_json();
    assert_eq!(block["name"], "prod");
    assert_eq!(block["infrastructure"], ws.stored("prod")["infrastructure"]);
}

#[test]
fn show_missing_block_exits_not_found() {
    Workspace::new().kj().args(&["show", "nope"]).fails().code(3).stderr_has("not found");
}

#[test]
fn list_empty_registry() {
    Workspace::new().kj().args(&["list"]).passes().stdout_eq("No blocks saved\n");
}

#[test]
fn list_is_sorted_by_name() {
    let ws = with_prod();
    ws.kj().args(&["save", "process", "local", "--", "echo", "hello"]).passes();

    let run = ws.kj().args(&["list", "-o", "json"]).passes();
    let names: Vec<String> = run
        .stdout_json()
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["local", "prod"]);

    let text = ws.kj().args(&["list"]).passes();
    assert!(text.stdout().starts_with("NAME "));
}

#[test]
fn delete_removes_block() {
    let ws = with_prod();
    ws.kj().args(&["delete", "prod"]).passes().stdout_has("Deleted block 'prod'");
    ws.kj().args(&["show", "prod"]).fails().code(3);
    ws.kj().args(&["delete", "prod"]).fails().code(3);
}

#[test]
fn preview_renders_job_manifest() {
    let ws = with_prod();
    let run = ws.kj().args(&["preview", "prod"]).passes();
    let manifest = run.stdout_json();

    assert_eq!(manifest["apiVersion"], "batch/v1");
    assert_eq!(manifest["kind"], "Job");
    assert_eq!(manifest["metadata"]["namespace"], "prod");
    assert_eq!(manifest["metadata"]["generateName"], "kj-job-");
    assert_eq!(manifest["spec"]["backoffLimit"], 0);
    let pod = &manifest["spec"]["template"]["spec"];
    assert_eq!(pod["restartPolicy"], "Never");
    let container = &pod["containers"][0];
    assert_eq!(container["name"], "job");
    assert_eq!(container["image"], "prefecthq/prefect:2-python3.9");
    assert_eq!(container["imagePullPolicy"], "IfNotPresent");
    assert_eq!(container["env"][0]["name"], "EXTRA_PIP_PACKAGES");
}

#[test]
fn preview_docker_container_renders_run_line() {
    let ws = Workspace::new();
    ws.kj()
        .args(&["save", "docker-container", "web", "--image", "nginx", "--auto-remove"])
        .passes();
    ws.kj()
        .args(&["preview", "web"])
        .passes()
        .stdout_has("docker run --rm --pull=missing nginx");
}
