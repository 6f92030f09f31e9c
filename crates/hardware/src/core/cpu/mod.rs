//! CPU Core Definition and Construction.
//!
//! This module defines the central `Cpu` structure, the container for one
//! thread's architectural state. It coordinates the following:
//! 1. **State Management:** Register file, predicate vector, floating-point status.
//! 2. **Lifecycle:** Constructed → reset → realized transitions ([`lifecycle`]).
//! 3. **Faults:** Classification and non-local delivery of denied accesses ([`fault`]).
//! 4. **Introspection:** The LLDB-comparable register dump ([`dump`]).

/// Register dump and stack-pointer adjustment.
pub mod dump;

/// External mutation entry points and collaborator traits.
pub mod execution;

/// Fault classification and delivery.
pub mod fault;

/// Reset and realization state machine.
pub mod lifecycle;

use crate::common::error::CoreError;
use crate::config::CoreConfig;
use crate::core::arch::fpu::FpStatus;
use crate::core::arch::reg::RegisterFile;
use crate::core::arch::trap::ExceptionCause;

use self::execution::{PrintInsn, print_insn_raw};
use self::lifecycle::LifecycleState;

/// One emulated Hexagon thread.
///
/// Owned and mutated by exactly one virtual-CPU thread of the host scheduler.
/// Reads are not internally synchronized; a monitor dumping state from another
/// thread must pause the owning thread first.
#[derive(Debug)]
pub struct Cpu {
    /// Per-thread register file (general-purpose, control, predicates).
    pub regs: RegisterFile,
    /// Floating-point status; normalized by every reset.
    pub fp_status: FpStatus,

    config: CoreConfig,
    state: LifecycleState,
    /// Stack pointer (`r29`) captured at realization; reference point for the
    /// LLDB stack-adjustment window.
    stack_start: u32,
    /// Last pc shown by `dump`, for hardware-loop de-duplication only.
    last_pc_dumped: Option<u32>,
    /// Cause recorded by the most recent access fault.
    pending_cause: Option<ExceptionCause>,
    /// Disassembler advertised to the disassembly collaborator.
    insn_printer: PrintInsn,
}

impl Cpu {
    /// Constructs a core in the `Constructed` state: registers zeroed,
    /// configuration bound.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::PrivilegedModeUnsupported`] if the configuration
    /// requests monitor-mode semantics, which this build does not implement.
    pub fn new(config: &CoreConfig) -> Result<Self, CoreError> {
        if config.privileged {
            return Err(CoreError::PrivilegedModeUnsupported);
        }
        Ok(Self {
            regs: RegisterFile::new(),
            fp_status: FpStatus::new(),
            config: config.clone(),
            state: LifecycleState::Constructed,
            stack_start: 0,
            last_pc_dumped: None,
            pending_cause: None,
            insn_printer: print_insn_raw,
        })
    }

    /// The configuration bound at construction.
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Cause recorded by the most recent access fault, if any.
    pub fn pending_cause(&self) -> Option<ExceptionCause> {
        self.pending_cause
    }

    /// Whether the core has runnable work. This core model is always ready
    /// once scheduled; the scheduler collaborator decides when it runs.
    pub fn has_work(&self) -> bool {
        true
    }
}
