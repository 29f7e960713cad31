// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kj-blockfile: declarative block files (HCL, TOML or JSON)

mod find;
mod parser;

pub use find::{format_for_path, load_blocks, BlockFileError};
pub use parser::{parse_blocks, Block, Format, ParseError};
