//! Core Lifecycle: reset and realization.
//!
//! This module implements the construction-to-execution state machine. It
//! performs the following:
//! 1. **Reset:** Normalizes the floating-point status; idempotent, callable
//!    any number of times, and never touches register contents.
//! 2. **Realization:** One-shot hand-off to the execution scheduler; records
//!    the stack base, schedules the core, and ends with one implicit reset.
//!
//! The parent-chained reset/realize convention of the reference implementation
//! is expressed here as this explicit two-step state machine.

use tracing::debug;

use crate::common::error::CoreError;

use super::Cpu;
use super::execution::ExecutionHarness;

/// Lifecycle position of a core instance.
///
/// `Constructed` cores may be reset freely; realization is entered at most
/// once per instance and is irreversible. Post-realization execution
/// ("running") is driven entirely by the collaborator through the entry
/// points in [`super::execution`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    /// Allocated and configured; not yet handed to the scheduler.
    Constructed,
    /// Handed to the execution scheduler; mutation entry points are live.
    Realized,
}

/// Stack-pointer register (`r29`), the reference point recorded at realization.
const STACK_POINTER_REG: usize = 29;

impl Cpu {
    /// Resets the core's floating-point behavior to the architectural policy:
    /// default-NaN mode on, tininess detected before rounding.
    ///
    /// Idempotent and total. Register contents are deliberately untouched;
    /// they are zero on a fresh core only because construction zeroes them.
    pub fn reset(&mut self) {
        self.fp_status.apply_reset_policy();
        debug!(state = ?self.state, "core reset");
    }

    /// Realizes the core: records the stack base from `r29`, asks the
    /// execution collaborator to schedule this core, and performs one
    /// implicit [`reset`](Self::reset) before entering `Realized`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::AlreadyRealized`] on a second call; the failed
    /// call leaves all core state unchanged.
    pub fn realize(&mut self, harness: &mut dyn ExecutionHarness) -> Result<(), CoreError> {
        if self.state == LifecycleState::Realized {
            return Err(CoreError::AlreadyRealized);
        }

        self.stack_start = self.regs.gpr(STACK_POINTER_REG);
        harness.schedule();
        self.reset();

        self.state = LifecycleState::Realized;
        debug!(stack_start = self.stack_start, "core realized");
        Ok(())
    }

    /// Current lifecycle position.
    pub fn lifecycle(&self) -> LifecycleState {
        self.state
    }

    /// Stack base recorded at realization; zero before that.
    pub fn stack_start(&self) -> u32 {
        self.stack_start
    }
}
