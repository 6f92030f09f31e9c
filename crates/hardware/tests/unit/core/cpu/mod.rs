//! CPU state-machine tests.

pub mod lifecycle;
