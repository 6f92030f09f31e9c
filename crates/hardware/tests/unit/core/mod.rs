//! Core-model unit tests.

pub mod arch;
pub mod cpu;
