//! Diffusion and selector functions used by the mixing engine.
//!
//! [`l`] and [`l2`] are rotate-XOR linear transforms. [`ff`] and [`gg`] are
//! position-dependent combiners: linear (`A ^ B ^ C`) for the first three
//! quarters of the KDSB and non-linear (majority / choice) for the last quarter.

use crate::utils::bits::word_left_rotation;

/// Linear transform `x ^ rotl(x,2) ^ rotl(x,10) ^ rotl(x,18) ^ rotl(x,24)`.
#[inline]
pub(crate) fn l(x: u32) -> u32 {
    x ^ word_left_rotation(x, 2)
        ^ word_left_rotation(x, 10)
        ^ word_left_rotation(x, 18)
        ^ word_left_rotation(x, 24)
}

/// Linear transform `x ^ rotl(x,13) ^ rotl(x,23)`.
#[inline]
pub(crate) fn l2(x: u32) -> u32 {
    x ^ word_left_rotation(x, 13) ^ word_left_rotation(x, 23)
}

/// Index at which the selectors switch from linear to non-linear.
#[inline]
fn nonlinear_boundary(array_size: usize) -> usize {
    (array_size / 4) * 3
}

/// Majority selector: XOR below the 3/4 boundary, majority at or above it.
#[inline]
pub(crate) fn ff(a: u32, b: u32, c: u32, index: usize, array_size: usize) -> u32 {
    if index < nonlinear_boundary(array_size) {
        a ^ b ^ c
    } else {
        (a & b) | (a & c) | (b & c)
    }
}

/// Choice selector: XOR below the 3/4 boundary, `a ? b : c` at or above it.
#[inline]
pub(crate) fn gg(a: u32, b: u32, c: u32, index: usize, array_size: usize) -> u32 {
    if index < nonlinear_boundary(array_size) {
        a ^ b ^ c
    } else {
        (a & b) | (!a & c)
    }
}
