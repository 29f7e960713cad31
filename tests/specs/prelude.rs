// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness: a throwaway registry directory and a fluent wrapper
//! around the `kj` binary.

use std::path::{Path, PathBuf};

/// `kj` with no registry configured.
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// A temporary registry directory plus scratch space for block files.
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn registry(&self) -> PathBuf {
        self.dir.path().join("registry")
    }

    /// Write a file relative to the workspace root and return its path.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `kj --registry <tmp>/registry`
    pub fn kj(&self) -> CliBuilder {
        let mut builder = CliBuilder::new();
        builder.registry = Some(self.registry());
        builder
    }

    /// Load the stored JSON document for `name` straight from disk.
    pub fn stored(&self, name: &str) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.registry().join(format!("{name}.json"))).unwrap();
        serde_json::from_str(&raw).unwrap()
    }
}

pub struct CliBuilder {
    args: Vec<String>,
    registry: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self { args: Vec::new(), registry: None, envs: Vec::new() }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("kj").unwrap();
        cmd.env_remove("KJ_REGISTRY_DIR").env_remove("KJ_LOG").env("NO_COLOR", "1");
        if let Some(registry) = &self.registry {
            cmd.arg("--registry").arg(registry);
        }
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd
    }

    fn output(&self) -> RunAssert {
        let output = self.command().output().unwrap();
        RunAssert {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Run and assert exit status 0.
    pub fn passes(self) -> RunAssert {
        let run = self.output();
        assert_eq!(run.code, Some(0), "expected success\nstdout:\n{}\nstderr:\n{}", run.stdout, run.stderr);
        run
    }

    /// Run and assert a non-zero exit status.
    pub fn fails(self) -> RunAssert {
        let run = self.output();
        assert_ne!(run.code, Some(0), "expected failure\nstdout:\n{}", run.stdout);
        run
    }
}

pub struct RunAssert {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

impl RunAssert {
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn code(self, expected: i32) -> Self {
        assert_eq!(self.code, Some(expected), "stderr:\n{}", self.stderr);
        self
    }
}

/// Flags that save the `prod` Prefect job.
pub const PROD_SAVE: &[&str] = &[
    "save",
    "kubernetes-job",
    "prod",
    "--namespace",
    "prod",
    "--image",
    "prefecthq/prefect:2-python3.9",
    "--pull-policy",
    "IfNotPresent",
    "--env",
    "EXTRA_PIP_PACKAGES=s3fs",
    "--env",
    "PREFECT_LOGGING_LEVEL=DEBUG",
];
