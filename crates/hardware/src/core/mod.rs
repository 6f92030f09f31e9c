//! Hexagon core: architectural definitions and the CPU state machine.

/// Architectural state definitions (registers, predicates, FP status, exception causes).
pub mod arch;

/// CPU state container, lifecycle, fault path, and debug dump.
pub mod cpu;

pub use cpu::Cpu;
