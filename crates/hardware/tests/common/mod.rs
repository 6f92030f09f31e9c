//! Shared test infrastructure for the core-model tests.

pub mod mocks;
