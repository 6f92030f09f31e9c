//! Fault classification and delivery.
//!
//! A memory access the translator cannot service is a frequent, expected guest
//! event, not an error of this core. This module performs the following:
//! 1. **Classification:** Maps the access kind to its user-mode exception
//!    cause (fetches, loads, and stores each get a distinct cause).
//! 2. **Recording:** Stores the chosen cause on the core.
//! 3. **Delivery:** Invokes the collaborator's non-local exit with the cause
//!    and the faulting instruction's restart address.
//!
//! Classification is synchronous on the owning thread and always ends in an
//! abort of the current instruction; there is no deferred or queued delivery.

use tracing::trace;

use crate::common::data::AccessType;
use crate::core::arch::trap::ExceptionCause;

use super::Cpu;
use super::execution::{ExecutionHarness, FaultRedirect};

impl Cpu {
    /// Handles an unserviceable user-mode memory access.
    ///
    /// Classifies `access`, records the cause, and transfers control to the
    /// collaborator's fault exit with `restart_pc` as the restart address.
    /// The returned token must be propagated out of the current instruction;
    /// normal control flow does not resume here.
    pub fn access_fault(
        &mut self,
        access: AccessType,
        restart_pc: u32,
        harness: &mut dyn ExecutionHarness,
    ) -> FaultRedirect {
        let cause = ExceptionCause::for_user_access(access);
        self.pending_cause = Some(cause);
        trace!(%cause, restart_pc, "access fault");
        harness.loop_exit(cause, restart_pc)
    }
}
