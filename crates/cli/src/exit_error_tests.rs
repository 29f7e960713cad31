// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use anyhow::Context;

#[test]
fn explicit_exit_error_code() {
    let err = anyhow::Error::new(ExitError::new(7, "custom"));
    assert_eq!(exit_code(&err), 7);
    assert_eq!(err.to_string(), "custom");
}

#[test]
fn already_exists_has_its_own_code() {
    let err: anyhow::Error = RegistryError::AlreadyExists { name: "prod".into() }.into();
    assert_eq!(exit_code(&err), EXIT_ALREADY_EXISTS);
}

#[test]
fn not_found_has_its_own_code() {
    let err: anyhow::Error = RegistryError::NotFound { name: "prod".into() }.into();
    assert_eq!(exit_code(&err), EXIT_NOT_FOUND);
}

#[test]
fn code_survives_context() {
    let result: Result<(), RegistryError> =
        Err(RegistryError::AlreadyExists { name: "prod".into() });
    let err = result.context("failed to save block 'prod'").unwrap_err();
    assert_eq!(exit_code(&err), EXIT_ALREADY_EXISTS);
}

#[test]
fn other_errors_are_generic_failures() {
    let err = anyhow::anyhow!("boom");
    assert_eq!(exit_code(&err), EXIT_FAILURE);

    let io: anyhow::Error = RegistryError::Io(std::io::Error::other("disk")).into();
    assert_eq!(exit_code(&io), EXIT_FAILURE);
}
