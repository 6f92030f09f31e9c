//! Mock implementations of the external collaborators.

pub mod harness;

pub use harness::{FixedUnit, RecordingHarness};
