//! Predicate Aliasing.
//!
//! Hexagon exposes the four predicate registers both individually (`p0`-`p3`)
//! and as one packed control register (`p3_0`, also known as `c4`). This module
//! implements the packing in both directions:
//! 1. **Pack:** Concatenate the four bytes little-end first into one word.
//! 2. **Unpack:** Decompose a written word back into the four bytes, losslessly.
//!
//! Byte 0 of the packed word is `p0`, byte 1 is `p1`, byte 2 is `p2`, and
//! byte 3 is `p3`.

use crate::common::constants::NUM_PREGS;

/// Packs the four predicate bytes into the `p3_0` composite value.
///
/// # Arguments
///
/// * `pred` - The predicate byte vector, `p0` at index 0.
///
/// # Returns
///
/// The packed 32-bit control-register view, `p0` in the least significant byte.
pub fn pack(pred: &[u8; NUM_PREGS]) -> u32 {
    let mut word: u32 = 0;
    for i in (0..NUM_PREGS).rev() {
        word <<= 8;
        word |= u32::from(pred[i]);
    }
    word
}

/// Unpacks a `p3_0` composite value into the four predicate bytes.
///
/// # Arguments
///
/// * `word` - The packed 32-bit value as written to `p3_0`.
///
/// # Returns
///
/// The predicate byte vector, `p0` at index 0.
pub fn unpack(word: u32) -> [u8; NUM_PREGS] {
    let mut pred = [0u8; NUM_PREGS];
    for (i, p) in pred.iter_mut().enumerate() {
        *p = (word >> (8 * i)) as u8;
    }
    pred
}
