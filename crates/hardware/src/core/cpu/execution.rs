//! External mutation entry points and collaborator contracts.
//!
//! This module defines what the execution/translation collaborator provides to
//! the core and what the core exposes back. It covers:
//! 1. **Scheduling:** The hook invoked once at realization.
//! 2. **Fault Exit:** The non-local abort primitive for denied accesses.
//! 3. **Program Counter:** Debugger-driven control transfer and translation
//!    unit resynchronization.
//! 4. **Disassembly:** The instruction printer advertised to the disassembly
//!    collaborator; the core performs no decoding itself.

use std::fmt;

use crate::core::arch::trap::ExceptionCause;

use super::Cpu;

/// Proof that the current instruction's control flow was aborted.
///
/// Returned by [`ExecutionHarness::loop_exit`] and propagated by
/// [`Cpu::access_fault`](super::fault); the holder must return it up to the
/// execution loop instead of resuming the faulted instruction.
#[must_use = "a fault exit aborts the current instruction; propagate this to the execution loop"]
#[derive(Debug)]
pub struct FaultRedirect(());

impl FaultRedirect {
    /// Creates the abort token. Called by harness implementations from inside
    /// `loop_exit` once the exception is queued for delivery.
    pub fn new() -> Self {
        Self(())
    }
}

impl Default for FaultRedirect {
    fn default() -> Self {
        Self::new()
    }
}

/// Services the execution/translation collaborator provides to the core.
pub trait ExecutionHarness {
    /// Queues this core for execution. Invoked exactly once, from
    /// [`Cpu::realize`](super::lifecycle).
    fn schedule(&mut self);

    /// Non-local exit from the current instruction: deliver `cause` to the
    /// guest and restart execution at `restart_pc`. The core never resumes
    /// normal control flow after calling this.
    fn loop_exit(&mut self, cause: ExceptionCause, restart_pc: u32) -> FaultRedirect;
}

/// The active translation unit, as seen by the core.
///
/// Exposes the guest address the unit was translated from, used when the
/// collaborator must restart decoding mid-block.
pub trait TranslationUnit {
    /// Guest entry address of this unit.
    fn entry_pc(&self) -> u32;
}

/// Renders one instruction word to text.
///
/// The core advertises which printer to use; rendering itself belongs to the
/// disassembly collaborator.
pub type PrintInsn = fn(pc: u32, word: u32, out: &mut dyn fmt::Write) -> fmt::Result;

/// Fallback printer: renders the raw instruction word.
pub fn print_insn_raw(pc: u32, word: u32, out: &mut dyn fmt::Write) -> fmt::Result {
    write!(out, "{pc:#010x}:  .word {word:#010x}")
}

impl Cpu {
    /// Unconditionally overwrites the program counter.
    ///
    /// Debugger-driven control transfer; valid once the core is realized.
    pub fn set_pc(&mut self, value: u32) {
        self.regs.set_pc(value);
    }

    /// Resynchronizes the program counter from the active translation unit's
    /// entry address.
    pub fn synchronize_from_unit(&mut self, unit: &dyn TranslationUnit) {
        self.regs.set_pc(unit.entry_pc());
    }

    /// The instruction printer this core advertises. Defaults to
    /// [`print_insn_raw`] until a disassembler registers itself.
    pub fn insn_printer(&self) -> PrintInsn {
        self.insn_printer
    }

    /// Registers the disassembler to advertise.
    pub fn set_insn_printer(&mut self, printer: PrintInsn) {
        self.insn_printer = printer;
    }

    /// Restores the program counter from translation-unit restart data.
    ///
    /// Used by the collaborator when unwinding a partially executed unit: the
    /// first recorded word is the pc of the instruction to restart.
    pub fn restore_state_to_pc(&mut self, data: &[u32]) {
        if let Some(&pc) = data.first() {
            self.regs.set_pc(pc);
        }
    }
}
