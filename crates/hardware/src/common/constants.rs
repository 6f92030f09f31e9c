//! Architectural constants for the Hexagon per-thread register space.

/// Number of general-purpose registers (`r0`-`r31`).
pub const NUM_GPRS: usize = 32;

/// Number of predicate registers (`p0`-`p3`).
pub const NUM_PREGS: usize = 4;

/// Total number of named per-thread registers (general-purpose plus control).
pub const TOTAL_PER_THREAD_REGS: usize = 64;

/// Size of the stack region below the recorded stack base that is eligible
/// for LLDB stack-pointer adjustment (64 KiB).
pub const STACK_ADJUST_BELOW: u32 = 0x10000;

/// Slack above the recorded stack base that is still eligible for LLDB
/// stack-pointer adjustment (4 KiB).
pub const STACK_ADJUST_ABOVE: u32 = 0x1000;

/// Placeholder `cause` value printed by user-mode-only builds, which do not
/// model the system cause register. Matches the reference debugger diff.
pub const USER_MODE_CAUSE_PLACEHOLDER: u32 = 0xdb;
