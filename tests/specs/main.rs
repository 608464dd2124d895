// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace-level integration specs for the pushchime binary.

mod prelude;

mod classify;
mod help;
mod hook;
mod listen;
