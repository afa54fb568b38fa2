//! Word rotation and ring-index utilities.
//!
//! Rotation amounts are always reduced mod 32, so any `u32` taken from cipher
//! state can be used directly as a rotation count. Ring indices address the
//! 128-word KDSB, where offsets such as `counter - 3` must wrap around instead
//! of underflowing.

/// Number of bits in a cipher word.
const WORD_BITS: u32 = 32;

/// Rotates a 32-bit word left by `shift mod 32` bit positions (circular).
///
/// # Parameters
/// - `value`: The word to rotate.
/// - `shift`: Rotation amount; only the low 5 bits are significant.
///
/// # Returns
/// The rotated word.
#[inline]
pub fn word_left_rotation(value: u32, shift: u32) -> u32 {
    value.rotate_left(shift % WORD_BITS)
}

/// Rotates a 32-bit word right by `shift mod 32` bit positions (circular).
///
/// # Parameters
/// - `value`: The word to rotate.
/// - `shift`: Rotation amount; only the low 5 bits are significant.
///
/// # Returns
/// The rotated word.
#[inline]
pub fn word_right_rotation(value: u32, shift: u32) -> u32 {
    value.rotate_right(shift % WORD_BITS)
}

/// Returns the ring position `k` steps behind `counter` in a ring of `size`.
///
/// Computes `(counter + size - k) % size` with `k` reduced first, so
/// `ring_back(0, 1, 128) == 127`.
///
/// # Panics
/// Panics if `size == 0`.
#[inline]
pub fn ring_back(counter: usize, k: usize, size: usize) -> usize {
    (counter % size + size - k % size) % size
}

/// Returns the ring position `k` steps ahead of `counter` in a ring of `size`.
///
/// # Panics
/// Panics if `size == 0`.
#[inline]
pub fn ring_forward(counter: usize, k: usize, size: usize) -> usize {
    (counter % size + k % size) % size
}
