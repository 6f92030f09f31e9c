//! Error definitions for the Hexagon core model.
//!
//! This module covers programming and configuration defects only. Guest-visible
//! faults (denied memory accesses) are not Rust errors; they are classified into
//! [`crate::core::arch::trap::ExceptionCause`] values and delivered through the
//! execution collaborator's non-local exit. The errors here are:
//! 1. **Caller defects:** Register ids outside the fixed name space.
//! 2. **Lifecycle defects:** Realizing the same core twice.
//! 3. **Configuration defects:** Requesting unimplemented privileged semantics.

use thiserror::Error;

use super::constants::TOTAL_PER_THREAD_REGS;

/// Fatal, synchronously detected errors of the surrounding system.
///
/// None of these are retried; each aborts the offending call (or, for
/// configuration errors, core construction) with a descriptive cause.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A register id outside the fixed per-thread name space was used.
    ///
    /// Register reads and writes are total over ids `0..TOTAL_PER_THREAD_REGS`;
    /// anything else is a bug in the caller, not a runtime condition.
    #[error("unknown register id {0} (valid ids are 0..{TOTAL_PER_THREAD_REGS})")]
    UnknownRegister(usize),

    /// `realize` was called on a core that is already realized.
    ///
    /// Realization hands the core to the execution scheduler exactly once per
    /// process-level core instance.
    #[error("core is already realized")]
    AlreadyRealized,

    /// The configuration requested monitor/supervisor-mode semantics.
    ///
    /// Only user mode is implemented; this is a deliberate build restriction,
    /// not a runtime error path.
    #[error("privileged (monitor) mode is not implemented; user mode only")]
    PrivilegedModeUnsupported,
}
