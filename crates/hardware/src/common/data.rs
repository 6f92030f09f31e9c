//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used by the fault
//! path. These types are used for the following:
//! 1. **Fault Classification:** Selecting the Hexagon exception cause for a denied access.
//! 2. **Collaborator Contract:** Reporting what kind of access the translator attempted.

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// when a user-mode access cannot be serviced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// Occurs when fetching a packet from memory for translation or execution.
    Fetch,

    /// Data read access.
    ///
    /// Occurs during load instructions when reading data from memory into registers.
    Read,

    /// Data write access.
    ///
    /// Occurs during store instructions when writing data from registers to memory.
    Write,
}
