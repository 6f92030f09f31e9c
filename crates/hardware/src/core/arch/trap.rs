//! Hexagon exception causes and user-mode fault classification.
//!
//! This module defines the fixed taxonomy a denied memory access is classified
//! into before the execution collaborator's non-local exit aborts the current
//! packet. It provides:
//! 1. **Cause Codes:** The architectural exception numbers for user-mode
//!    permission faults.
//! 2. **Classification:** The total mapping from access kind to cause.
//!
//! Monitor-mode translation faults are not modeled; a configuration requesting
//! monitor mode is rejected at construction, so every classified access is a
//! user-mode access by construction.

use std::fmt;

use crate::common::data::AccessType;

/// Exception cause for a memory access denied in user mode.
///
/// The discriminants are the architectural cause codes delivered to the guest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ExceptionCause {
    /// Instruction fetch from a page with no valid user mapping.
    FetchNoUserPage = 0x012,

    /// Data load from a page not readable at user privilege.
    PrivNoUserRead = 0x024,

    /// Data store to a page not writable at user privilege.
    PrivNoUserWrite = 0x025,
}

impl ExceptionCause {
    /// Classifies a failed user-mode memory access.
    ///
    /// Total over the access kinds; fetches, loads, and stores map to three
    /// distinct causes.
    pub fn for_user_access(access: AccessType) -> Self {
        match access {
            AccessType::Fetch => Self::FetchNoUserPage,
            AccessType::Read => Self::PrivNoUserRead,
            AccessType::Write => Self::PrivNoUserWrite,
        }
    }

    /// Architectural cause code delivered to the guest.
    pub fn code(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for ExceptionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FetchNoUserPage => "FetchNoUserPage",
            Self::PrivNoUserRead => "PrivNoUserRead",
            Self::PrivNoUserWrite => "PrivNoUserWrite",
        };
        write!(f, "{}({:#05x})", name, self.code())
    }
}
