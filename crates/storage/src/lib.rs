// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Block registry: named storage for infrastructure blocks

mod error;
mod file;
mod memory;
mod registry;


pub use error::RegistryError;
pub use file::{FileRegistry, CURRENT_SCHEMA_VERSION};
pub use memory::MemoryRegistry;
pub use registry::{Registry, StoredBlock};
