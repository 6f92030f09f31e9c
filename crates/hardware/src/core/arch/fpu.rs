//! Floating-point status for the Hexagon core.
//!
//! Hexagon fixes its floating-point environment at reset rather than exposing
//! it to user code as free-form state: NaN results are canonicalized
//! (default-NaN mode) and tininess is detected before rounding. This module
//! defines that status word; instruction semantics that consume it live in the
//! translation collaborator.

/// When tininess is detected relative to rounding, for underflow flagging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TininessDetection {
    /// Detect tininess on the result before it is rounded.
    BeforeRounding,
    /// Detect tininess on the rounded result.
    AfterRounding,
}

/// IEEE 754 rounding mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round to nearest, ties to even (default).
    NearestEven,
    /// Round towards zero.
    TowardZero,
    /// Round down (towards −∞).
    Down,
    /// Round up (towards +∞).
    Up,
}

/// Floating-point status word.
///
/// Not part of the named register space; established by [`reset`] and read by
/// the translation collaborator when executing FP instructions.
///
/// [`reset`]: crate::core::Cpu::reset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpStatus {
    /// Replace every NaN result with the canonical quiet NaN.
    pub default_nan_mode: bool,
    /// Tininess detection policy for underflow.
    pub tininess: TininessDetection,
    /// Current rounding mode.
    pub rounding: RoundingMode,
}

impl FpStatus {
    /// Creates a status word with the pre-reset host defaults.
    ///
    /// Reset overwrites the NaN and tininess policy unconditionally; this
    /// constructor exists so a constructed-but-unreset core has a defined
    /// value.
    pub fn new() -> Self {
        Self {
            default_nan_mode: false,
            tininess: TininessDetection::AfterRounding,
            rounding: RoundingMode::NearestEven,
        }
    }

    /// Applies the architectural reset policy: default-NaN mode on, tininess
    /// detected before rounding. Idempotent; the rounding mode is untouched.
    pub fn apply_reset_policy(&mut self) {
        self.default_nan_mode = true;
        self.tininess = TininessDetection::BeforeRounding;
    }
}

impl Default for FpStatus {
    fn default() -> Self {
        Self::new()
    }
}
