//! Architectural state tests.

pub mod pred;
