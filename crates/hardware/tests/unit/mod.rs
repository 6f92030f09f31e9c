//! Unit tests mirroring the `src/` module tree.

pub mod config;
pub mod core;
