//! Byte-to-word conversion utilities.
//!
//! Provides conversion between byte arrays and `u32` word arrays using
//! little-endian byte ordering, the canonical word form of the TitanWall
//! ciphers.

use crate::error::TitanWallError;

/// Number of bytes in a cipher word.
const WORD_BYTES: usize = 4;

/// Converts a byte slice to a `Vec<u32>` using little-endian byte ordering.
///
/// Each group of 4 bytes is combined into a single `u32` value where the
/// first byte occupies the least significant position.
///
/// # Parameters
/// - `input`: Byte slice whose length must be a multiple of 4.
///
/// # Returns
/// A `Vec<u32>` containing `input.len() / 4` elements.
///
/// # Errors
/// Returns [`TitanWallError::InvalidByteArrayLength`] if `input.len() % 4 != 0`.
pub fn bytes_to_words(input: &[u8]) -> Result<Vec<u32>, TitanWallError> {
    if !input.len().is_multiple_of(WORD_BYTES) {
        return Err(TitanWallError::InvalidByteArrayLength);
    }
    Ok(input
        .chunks_exact(WORD_BYTES)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// Converts a slice of `u32` values to a `Vec<u8>` using little-endian byte ordering.
///
/// # Parameters
/// - `input`: Slice of `u32` values.
///
/// # Returns
/// A `Vec<u8>` containing `input.len() * 4` bytes.
pub fn words_to_bytes(input: &[u32]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len() * WORD_BYTES);
    for &value in input {
        output.extend_from_slice(&value.to_le_bytes());
    }
    output
}

/// Writes `words` into `output` as little-endian bytes, truncating to `output.len()`.
///
/// Bytes of `output` past `words.len() * 4` are left untouched.
pub fn fill_bytes_from_words(words: &[u32], output: &mut [u8]) {
    for (chunk, word) in output.chunks_mut(WORD_BYTES).zip(words) {
        let bytes = word.to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}
