//! User-mode Hexagon DSP core model.
//!
//! This crate implements the architectural state of a single Hexagon thread with the following:
//! 1. **Register File:** 32 general-purpose registers, the named control-register space, and
//!    the predicate byte vector with its packed `p3_0` alias.
//! 2. **Lifecycle:** Construction, idempotent reset (floating-point policy), and one-shot
//!    realization that hands the core to the execution scheduler.
//! 3. **Faults:** Classification of failed user-mode memory accesses into Hexagon exception
//!    causes and the non-local exit contract for delivering them.
//! 4. **Introspection:** An LLDB-comparable register dump with stack-pointer adjustment and
//!    hardware-loop de-duplication.
//!
//! Instruction decoding, translation, and scheduling live in external collaborators; this
//! crate only defines the state they read and write and the traits they implement.

/// Common types and constants (register counts, access types, errors).
pub mod common;
/// Core configuration (LLDB compatibility, stack adjustment, privilege restriction).
pub mod config;
/// CPU core (architectural state, lifecycle, faults, dump).
pub mod core;

/// Core configuration type; use `CoreConfig::default()` or deserialize from JSON.
pub use crate::config::CoreConfig;
/// Main CPU type; holds the register file, floating-point status, and lifecycle state.
pub use crate::core::Cpu;
