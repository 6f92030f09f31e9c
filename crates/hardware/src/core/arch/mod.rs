//! Hexagon architectural state definitions.
//!
//! This module defines the data the rest of the system reads and writes:
//! 1. **Registers:** The per-thread register file and its fixed name space.
//! 2. **Predicates:** Packing between the four predicate bytes and the `p3_0` alias.
//! 3. **Floating Point:** The status word normalized at reset.
//! 4. **Exceptions:** The user-mode fault cause taxonomy.

/// Floating-point status (rounding, NaN policy, tininess detection).
pub mod fpu;

/// Predicate byte packing and unpacking for the `p3_0` alias.
pub mod pred;

/// Per-thread register file and register id definitions.
pub mod reg;

/// Exception causes and user-mode fault classification.
pub mod trap;

pub use fpu::FpStatus;
pub use reg::RegisterFile;
pub use trap::ExceptionCause;
