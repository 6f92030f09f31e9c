//! # Lifecycle Tests
//!
//! Tests for construction, reset idempotence, and one-shot realization.

use hexsim_core::common::error::CoreError;
use hexsim_core::config::CoreConfig;
use hexsim_core::core::Cpu;
use hexsim_core::core::arch::fpu::TininessDetection;
use hexsim_core::core::cpu::lifecycle::LifecycleState;

use crate::common::mocks::{FixedUnit, RecordingHarness};

fn user_core() -> Cpu {
    Cpu::new(&CoreConfig::default()).unwrap()
}

#[test]
fn test_construction_zeroes_registers() {
    let cpu = user_core();
    for reg in 0..64 {
        assert_eq!(cpu.regs.read(reg).unwrap(), 0);
    }
    assert_eq!(cpu.lifecycle(), LifecycleState::Constructed);
}

#[test]
fn test_privileged_configuration_rejected() {
    let config = CoreConfig {
        privileged: true,
        ..CoreConfig::default()
    };
    assert_eq!(
        Cpu::new(&config).err(),
        Some(CoreError::PrivilegedModeUnsupported)
    );
}

#[test]
fn test_reset_sets_fp_policy() {
    let mut cpu = user_core();
    assert!(!cpu.fp_status.default_nan_mode);
    cpu.reset();
    assert!(cpu.fp_status.default_nan_mode);
    assert_eq!(cpu.fp_status.tininess, TininessDetection::BeforeRounding);
}

#[test]
fn test_reset_is_idempotent() {
    let mut cpu = user_core();
    cpu.reset();
    let after_first = cpu.fp_status;
    cpu.reset();
    cpu.reset();
    assert_eq!(cpu.fp_status, after_first);
}

#[test]
fn test_reset_does_not_touch_registers() {
    let mut cpu = user_core();
    cpu.regs.write(7, 0x7777).unwrap();
    cpu.regs.write(36, 0x0102_0304).unwrap(); // p3_0
    cpu.reset();
    assert_eq!(cpu.regs.read(7).unwrap(), 0x7777);
    assert_eq!(cpu.regs.read(36).unwrap(), 0x0102_0304);
}

#[test]
fn test_realize_schedules_and_resets() {
    let mut cpu = user_core();
    let mut harness = RecordingHarness::new();

    cpu.realize(&mut harness).unwrap();

    assert_eq!(harness.schedule_calls, 1);
    assert_eq!(cpu.lifecycle(), LifecycleState::Realized);
    // Realization ends with one implicit reset.
    assert!(cpu.fp_status.default_nan_mode);
    assert_eq!(cpu.fp_status.tininess, TininessDetection::BeforeRounding);
}

#[test]
fn test_realize_records_stack_base_from_r29() {
    let mut cpu = user_core();
    cpu.regs.write(29, 0x1000_0000).unwrap();
    let mut harness = RecordingHarness::new();
    cpu.realize(&mut harness).unwrap();
    assert_eq!(cpu.stack_start(), 0x1000_0000);
}

#[test]
fn test_realize_twice_fails_and_preserves_state() {
    let mut cpu = user_core();
    cpu.regs.write(5, 0x42).unwrap();
    let mut harness = RecordingHarness::new();
    cpu.realize(&mut harness).unwrap();

    let err = cpu.realize(&mut harness);
    assert_eq!(err, Err(CoreError::AlreadyRealized));
    // The failed call changed nothing.
    assert_eq!(harness.schedule_calls, 1);
    assert_eq!(cpu.regs.read(5).unwrap(), 0x42);
    assert_eq!(cpu.lifecycle(), LifecycleState::Realized);
}

#[test]
fn test_reset_still_allowed_after_realize() {
    let mut cpu = user_core();
    let mut harness = RecordingHarness::new();
    cpu.realize(&mut harness).unwrap();
    cpu.reset();
    assert!(cpu.fp_status.default_nan_mode);
}

#[test]
fn test_set_pc_after_realize() {
    let mut cpu = user_core();
    let mut harness = RecordingHarness::new();
    cpu.realize(&mut harness).unwrap();

    cpu.set_pc(0x8000_1000);
    assert_eq!(cpu.regs.pc(), 0x8000_1000);
}

#[test]
fn test_synchronize_from_translation_unit() {
    let mut cpu = user_core();
    let mut harness = RecordingHarness::new();
    cpu.realize(&mut harness).unwrap();

    let unit = FixedUnit(0x0000_5678);
    cpu.synchronize_from_unit(&unit);
    assert_eq!(cpu.regs.pc(), 0x0000_5678);
}

#[test]
fn test_restore_state_to_pc() {
    let mut cpu = user_core();
    cpu.restore_state_to_pc(&[0x1234, 0xffff]);
    assert_eq!(cpu.regs.pc(), 0x1234);
    cpu.restore_state_to_pc(&[]);
    assert_eq!(cpu.regs.pc(), 0x1234);
}

#[test]
fn test_has_work() {
    let cpu = user_core();
    assert!(cpu.has_work());
}
