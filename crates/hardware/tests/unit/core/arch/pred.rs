//! # Predicate Aliasing Tests
//!
//! Tests for packing between the four predicate bytes and the `p3_0` alias.

use hexsim_core::core::arch::pred::{pack, unpack};
use proptest::prelude::*;

#[test]
fn test_pack_byte_order() {
    // p0 is the least significant byte of the packed word.
    assert_eq!(pack(&[0xaa, 0xbb, 0xcc, 0xdd]), 0xddcc_bbaa);
}

#[test]
fn test_pack_zero() {
    assert_eq!(pack(&[0, 0, 0, 0]), 0);
}

#[test]
fn test_pack_single_bytes() {
    assert_eq!(pack(&[0x01, 0, 0, 0]), 0x0000_0001);
    assert_eq!(pack(&[0, 0x01, 0, 0]), 0x0000_0100);
    assert_eq!(pack(&[0, 0, 0x01, 0]), 0x0001_0000);
    assert_eq!(pack(&[0, 0, 0, 0x01]), 0x0100_0000);
}

#[test]
fn test_unpack_byte_order() {
    assert_eq!(unpack(0xddcc_bbaa), [0xaa, 0xbb, 0xcc, 0xdd]);
}

#[test]
fn test_pack_stays_within_32_bits() {
    // All bytes above bit 31 are zero by construction of the packed word.
    assert_eq!(pack(&[0xff, 0xff, 0xff, 0xff]), 0xffff_ffff);
}

proptest! {
    #[test]
    fn prop_unpack_inverts_pack(p0: u8, p1: u8, p2: u8, p3: u8) {
        let pred = [p0, p1, p2, p3];
        prop_assert_eq!(unpack(pack(&pred)), pred);
    }

    #[test]
    fn prop_pack_inverts_unpack(word: u32) {
        prop_assert_eq!(pack(&unpack(word)), word);
    }
}
