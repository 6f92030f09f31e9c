//! Configuration for the Hexagon core model.
//!
//! This module defines the typed configuration bound at construction. It provides:
//! 1. **Debug compatibility:** The LLDB trace-diff settings (`lldb_compat`,
//!    `lldb_stack_adjust`).
//! 2. **Privilege restriction:** The user-mode-only build guard.
//!
//! Configuration is supplied via JSON from the CLI (`--config`) or use
//! `CoreConfig::default()`.

use serde::Deserialize;

/// Configuration for one Hexagon core instance.
///
/// All fields default to the plain user-mode emulation profile; the LLDB
/// fields exist only to make raw execution traces diff cleanly against a
/// reference debugger session.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Mirror LLDB's single-stepping in register dumps: skip re-dumps while a
    /// hardware loop re-executes the same packet, and emit placeholder values
    /// for the system registers this build does not model.
    pub lldb_compat: bool,

    /// Byte offset subtracted from printed stack addresses so dumps line up
    /// with a reference LLDB session whose stack lives elsewhere. Zero
    /// disables the adjustment. Stored register values are never altered.
    pub lldb_stack_adjust: u32,

    /// Request monitor/supervisor-mode semantics.
    ///
    /// Only user mode is implemented; construction fails when this is set.
    pub privileged: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            lldb_compat: false,
            lldb_stack_adjust: 0,
            privileged: false,
        }
    }
}
