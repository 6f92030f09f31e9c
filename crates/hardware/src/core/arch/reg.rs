//! Hexagon Per-Thread Register File.
//!
//! This module implements the architectural register storage for one thread.
//! It performs the following:
//! 1. **Storage:** Maintains the 32 general-purpose registers, the named
//!    control registers, and the predicate byte vector.
//! 2. **Aliasing:** Routes `p3_0` reads and writes through the predicate
//!    packing so the composite alias and the individual bytes always agree.
//! 3. **Validation:** Rejects register ids outside the fixed name space as
//!    caller defects.
//!
//! Register 31 is the program counter only by the alias mapping in
//! [`id::PC`]; storage does not special-case it.

use crate::common::constants::{NUM_GPRS, NUM_PREGS, TOTAL_PER_THREAD_REGS};
use crate::common::error::CoreError;

use super::pred;

/// Register ids for the named (non-general-purpose) per-thread registers.
///
/// General-purpose registers occupy ids `0..32`; the control registers follow
/// in the architecture's fixed order.
pub mod id {
    /// Loop 0 start address.
    pub const SA0: usize = 32;
    /// Loop 0 count.
    pub const LC0: usize = 33;
    /// Loop 1 start address.
    pub const SA1: usize = 34;
    /// Loop 1 count.
    pub const LC1: usize = 35;
    /// Packed predicate alias (`c4`).
    pub const P3_0: usize = 36;
    /// Multiplier/accumulator scratch register 0.
    pub const M0: usize = 38;
    /// Multiplier/accumulator scratch register 1.
    pub const M1: usize = 39;
    /// User status register.
    pub const USR: usize = 40;
    /// Program counter.
    pub const PC: usize = 41;
    /// User global pointer.
    pub const UGP: usize = 42;
    /// Global pointer.
    pub const GP: usize = 43;
    /// Circular start register 0.
    pub const CS0: usize = 44;
    /// Circular start register 1.
    pub const CS1: usize = 45;
    /// Packet counter (emulator-maintained).
    pub const PKT_CNT: usize = 52;
    /// Instruction counter (emulator-maintained).
    pub const INSN_CNT: usize = 53;
}

/// Architectural names for the full per-thread register space, indexed by id.
pub const REG_NAMES: [&str; TOTAL_PER_THREAD_REGS] = [
    "r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", //
    "r8", "r9", "r10", "r11", "r12", "r13", "r14", "r15", //
    "r16", "r17", "r18", "r19", "r20", "r21", "r22", "r23", //
    "r24", "r25", "r26", "r27", "r28", "r29", "r30", "r31", //
    "sa0", "lc0", "sa1", "lc1", "p3_0", "c5", "m0", "m1", //
    "usr", "pc", "ugp", "gp", "cs0", "cs1", "c14", "c15", //
    "c16", "c17", "c18", "c19", "pkt_cnt", "insn_cnt", "c22", "c23", //
    "c24", "c25", "c26", "c27", "c28", "c29", "c30", "c31",
];

/// Returns the architectural name for a register id, or `None` outside the
/// fixed name space.
pub fn reg_name(reg: usize) -> Option<&'static str> {
    REG_NAMES.get(reg).copied()
}

/// Per-thread register file.
///
/// Holds the flat word array for general-purpose and control registers plus
/// the predicate byte vector. The `p3_0` slot in the word array is unused;
/// the alias is materialized from the predicate bytes on every access.
#[derive(Debug)]
pub struct RegisterFile {
    regs: [u32; TOTAL_PER_THREAD_REGS],
    pred: [u8; NUM_PREGS],
}

impl RegisterFile {
    /// Creates a register file with every register and predicate zeroed.
    pub fn new() -> Self {
        Self {
            regs: [0; TOTAL_PER_THREAD_REGS],
            pred: [0; NUM_PREGS],
        }
    }

    /// Reads a register by id.
    ///
    /// # Arguments
    ///
    /// * `reg` - Register id within the fixed per-thread name space.
    ///
    /// # Returns
    ///
    /// The stored word, or the packed predicate bytes for [`id::P3_0`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownRegister`] for ids outside the name space.
    pub fn read(&self, reg: usize) -> Result<u32, CoreError> {
        if reg == id::P3_0 {
            Ok(pred::pack(&self.pred))
        } else if reg < TOTAL_PER_THREAD_REGS {
            Ok(self.regs[reg])
        } else {
            Err(CoreError::UnknownRegister(reg))
        }
    }

    /// Writes a register by id.
    ///
    /// Writing [`id::P3_0`] decomposes the word into the four predicate bytes;
    /// any other valid id overwrites its storage directly, with no validation
    /// beyond existence.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownRegister`] for ids outside the name space.
    pub fn write(&mut self, reg: usize, val: u32) -> Result<(), CoreError> {
        if reg == id::P3_0 {
            self.pred = pred::unpack(val);
            Ok(())
        } else if reg < TOTAL_PER_THREAD_REGS {
            self.regs[reg] = val;
            Ok(())
        } else {
            Err(CoreError::UnknownRegister(reg))
        }
    }

    /// Reads a general-purpose register without id validation; internal
    /// callers pass constant indices below 32.
    pub(crate) fn gpr(&self, idx: usize) -> u32 {
        debug_assert!(idx < NUM_GPRS);
        self.regs[idx]
    }

    /// Reads one predicate byte.
    pub fn pred(&self, idx: usize) -> Result<u8, CoreError> {
        self.pred
            .get(idx)
            .copied()
            .ok_or(CoreError::UnknownRegister(idx))
    }

    /// Writes one predicate byte.
    pub fn set_pred(&mut self, idx: usize, val: u8) -> Result<(), CoreError> {
        match self.pred.get_mut(idx) {
            Some(p) => {
                *p = val;
                Ok(())
            }
            None => Err(CoreError::UnknownRegister(idx)),
        }
    }

    /// Packed view of the predicate bytes, as read through the `p3_0` alias.
    pub fn p3_0(&self) -> u32 {
        pred::pack(&self.pred)
    }

    /// Raw word storage for a known-valid register id, bypassing the alias.
    ///
    /// Used by the dump path, which iterates the fixed name space only.
    pub(crate) fn raw(&self, reg: usize) -> u32 {
        debug_assert!(reg < TOTAL_PER_THREAD_REGS);
        self.regs[reg]
    }

    /// Current program counter.
    pub fn pc(&self) -> u32 {
        self.regs[id::PC]
    }

    /// Overwrites the program counter.
    pub(crate) fn set_pc(&mut self, val: u32) {
        self.regs[id::PC] = val;
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
