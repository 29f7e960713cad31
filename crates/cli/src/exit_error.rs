// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return errors instead of calling `std::process::exit()`
//! directly; `main()` turns them into an exit status with [`exit_code`].

use kj_storage::RegistryError;
use std::fmt;

/// Generic failure
pub const EXIT_FAILURE: i32 = 1;
/// A save was refused because the block already exists
pub const EXIT_ALREADY_EXISTS: i32 = 2;
/// The named block does not exist
pub const EXIT_NOT_FOUND: i32 = 3;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Pick the exit code for an error chain.
///
/// An explicit [`ExitError`] wins; otherwise registry conflicts and misses
/// get their own codes so scripts can tell them apart.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(exit) = cause.downcast_ref::<ExitError>() {
            return exit.code;
        }
        match cause.downcast_ref::<RegistryError>() {
            Some(RegistryError::AlreadyExists { .. }) => return EXIT_ALREADY_EXISTS,
            Some(RegistryError::NotFound { .. }) => return EXIT_NOT_FOUND,
            _ => {}
        }
    }
    EXIT_FAILURE
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
