//! Common utilities and types shared across the Hexagon core model.
//!
//! This module provides fundamental building blocks used by every component. It includes:
//! 1. **Constants:** Register-space sizes and the LLDB stack-adjustment window.
//! 2. **Memory Access:** Classification of memory operations (Fetch/Read/Write).
//! 3. **Error Handling:** Programming and configuration error definitions.

/// Common constants used throughout the core model.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for caller and configuration defects.
pub mod error;

pub use data::AccessType;
pub use error::CoreError;
