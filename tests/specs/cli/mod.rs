// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod apply;
mod blocks;
mod help;
mod save;
