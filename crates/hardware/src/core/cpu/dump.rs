//! Debug Introspection: the LLDB-comparable register dump.
//!
//! The main debugging technique for the surrounding emulator is single-stepping
//! while diffing register dumps against an LLDB session on reference hardware.
//! This module renders the register file in the debugger's line shape:
//! 1. **Layout:** Header, `r0`-`r31`, the fixed control-register sequence,
//!    user-mode placeholders, footer.
//! 2. **Stack Adjustment:** The emulator and the reference place stacks at
//!    different addresses; printed values near the stack base are shifted so
//!    the diff is cleaner. Stored values are never altered.
//! 3. **De-duplication:** LLDB does not step through single-cycle hardware
//!    loops the way the emulator does, so in compatibility mode repeated
//!    dumps at one pc are suppressed.

use std::fmt;

use crate::common::constants::{
    NUM_GPRS, STACK_ADJUST_ABOVE, STACK_ADJUST_BELOW, USER_MODE_CAUSE_PLACEHOLDER,
};
use crate::core::arch::reg::{REG_NAMES, id};

use super::Cpu;

/// Control registers printed after the general-purpose block, in dump order.
const DUMP_CONTROL_REGS: [usize; 11] = [
    id::SA0,
    id::LC0,
    id::SA1,
    id::LC1,
    id::M0,
    id::M1,
    id::USR,
    id::P3_0,
    id::GP,
    id::UGP,
    id::PC,
];

impl Cpu {
    /// Applies the LLDB stack-pointer compensation to a printed value.
    ///
    /// Identity when `lldb_stack_adjust` is zero. Otherwise values inside the
    /// window from 64 KiB below the recorded stack base to 4 KiB above it
    /// (inclusive) are shifted down by the configured offset.
    fn adjust_stack_ptrs(&self, addr: u32) -> u32 {
        let stack_adjust = self.config.lldb_stack_adjust;
        if stack_adjust == 0 {
            return addr;
        }

        let lo = self.stack_start.wrapping_sub(STACK_ADJUST_BELOW);
        let hi = self.stack_start.wrapping_add(STACK_ADJUST_ABOVE);
        if hi >= addr && addr >= lo {
            return addr.wrapping_sub(stack_adjust);
        }
        addr
    }

    /// Prints one register line in the debugger's `"  <name> = 0x<hex>"` shape.
    ///
    /// General-purpose values and the pc pass through the stack adjustment;
    /// `p3_0` is materialized from the predicate bytes.
    fn print_reg<W: fmt::Write>(&self, out: &mut W, reg: usize) -> fmt::Result {
        let value = match reg {
            id::P3_0 => self.regs.p3_0(),
            id::PC => self.adjust_stack_ptrs(self.regs.raw(reg)),
            r if r < NUM_GPRS => self.adjust_stack_ptrs(self.regs.raw(r)),
            r => self.regs.raw(r),
        };
        writeln!(out, "  {} = {:#x}", REG_NAMES[reg], value)
    }

    /// Renders the register dump.
    ///
    /// In LLDB compatibility mode a dump at the pc already shown is
    /// suppressed entirely (hardware loops re-execute one pc many times);
    /// any dump that does produce output records its pc for that check.
    /// This is the only state the formatter mutates.
    ///
    /// # Errors
    ///
    /// Propagates formatting errors from `out`.
    pub fn dump<W: fmt::Write>(&mut self, out: &mut W) -> fmt::Result {
        let pc = self.regs.pc();
        if self.config.lldb_compat && self.last_pc_dumped == Some(pc) {
            return Ok(());
        }
        self.last_pc_dumped = Some(pc);

        writeln!(out, "General Purpose Registers = {{")?;
        for reg in 0..NUM_GPRS {
            self.print_reg(out, reg)?;
        }
        for reg in DUMP_CONTROL_REGS {
            self.print_reg(out, reg)?;
        }

        // System registers are not modeled in the user-mode build; print the
        // reference values so diffs against a full build stay minimal.
        writeln!(out, "  cause = {USER_MODE_CAUSE_PLACEHOLDER:#x}")?;
        writeln!(out, "  badva = 0x0")?;
        writeln!(out, "  cs0 = 0x0")?;
        writeln!(out, "  cs1 = 0x0")?;
        writeln!(out, "}}")
    }

    /// Renders the register dump to a fresh `String`.
    pub fn debug_dump(&mut self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.dump(&mut out);
        out
    }
}
