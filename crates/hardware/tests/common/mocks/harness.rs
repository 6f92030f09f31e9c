//! Mock execution collaborator.
//!
//! Records scheduling requests and fault exits so tests can assert the core
//! calls each hook exactly when the lifecycle and fault contracts say it must.

use hexsim_core::core::arch::trap::ExceptionCause;
use hexsim_core::core::cpu::execution::{ExecutionHarness, FaultRedirect, TranslationUnit};

/// Execution harness that records every hook invocation.
#[derive(Debug, Default)]
pub struct RecordingHarness {
    /// Number of `schedule` calls received.
    pub schedule_calls: usize,
    /// Every `(cause, restart_pc)` pair delivered through `loop_exit`.
    pub exits: Vec<(ExceptionCause, u32)>,
}

impl RecordingHarness {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExecutionHarness for RecordingHarness {
    fn schedule(&mut self) {
        self.schedule_calls += 1;
    }

    fn loop_exit(&mut self, cause: ExceptionCause, restart_pc: u32) -> FaultRedirect {
        self.exits.push((cause, restart_pc));
        FaultRedirect::new()
    }
}

/// Translation unit with a fixed entry address.
pub struct FixedUnit(pub u32);

impl TranslationUnit for FixedUnit {
    fn entry_pc(&self) -> u32 {
        self.0
    }
}
