//! TitanWallBlockCipher: 256-bit block cipher over the KDSB.
//!
//! Each block is eight 32-bit words `A..H`. After key whitening of the odd
//! lanes, 62 rounds apply data-dependent rotations to the even lanes, a keyed
//! mix of the odd lanes, a fixed wire-crossing permutation and a pairwise
//! Pseudo-Hadamard Transform. Final whitening covers the even lanes.

use tracing::warn;

use crate::error::TitanWallError;
use crate::key_schedule::{KeySchedule, KDSB_WORDS};
use crate::utils::bits::{word_left_rotation, word_right_rotation};
use crate::utils::converter::{bytes_to_words, words_to_bytes};

/// Number of 32-bit words in a block.
pub const BLOCK_WORDS: usize = 8;

/// Number of bytes in a block.
pub const BLOCK_BYTES: usize = BLOCK_WORDS * 4;

/// Number of rounds; `(KDSB_WORDS - 1 - 3) / 2`, the last round reads `KDSB[127]`.
pub const ROUNDS: usize = 62;

const A: usize = 0;
const B: usize = 1;
const C: usize = 2;
const D: usize = 3;
const E: usize = 4;
const F: usize = 5;
const G: usize = 6;
const H: usize = 7;

/// Round permutation: `(F, D, B, H, A, G, E, C) <- (A, B, C, D, E, F, G, H)`.
///
/// Lane `i` of the output takes lane `PERMUTATION[i]` of the input.
const PERMUTATION: [usize; BLOCK_WORDS] = [E, C, H, B, G, A, F, D];

/// Inverse of [`PERMUTATION`]: `(A, B, C, D, E, F, G, H) <- (F, D, B, H, A, G, E, C)`.
const INVERSE_PERMUTATION: [usize; BLOCK_WORDS] = [F, D, B, H, A, G, E, C];

/// 256-bit block cipher keyed by a [`KeySchedule`].
///
/// Encryption and decryption are pure functions of the KDSB; the same
/// instance can encrypt and decrypt any number of blocks in any order.
#[derive(Debug)]
pub struct TitanWallBlockCipher {
    schedule: KeySchedule,
}

impl TitanWallBlockCipher {
    /// Creates a block cipher by running the key schedule over `key`.
    ///
    /// # Errors
    /// Returns [`TitanWallError::EmptyKey`] if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use titanwall::TitanWallBlockCipher;
    ///
    /// let cipher = TitanWallBlockCipher::new(b"secret").unwrap();
    /// let plaintext = [1u32, 2, 3, 4, 5, 6, 7, 8];
    /// let ciphertext = cipher.encrypt(&plaintext).unwrap();
    /// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
    /// ```
    pub fn new(key: &[u8]) -> Result<Self, TitanWallError> {
        Ok(Self::from_schedule(KeySchedule::new(key)?))
    }

    /// Creates a block cipher around an existing key schedule.
    pub fn from_schedule(schedule: KeySchedule) -> Self {
        TitanWallBlockCipher { schedule }
    }

    /// Encrypts a sequence of 8-word blocks.
    ///
    /// Blocks are processed independently; an empty input yields an empty output.
    ///
    /// # Errors
    /// Returns [`TitanWallError::MisalignedBlocks`] if `plaintext.len() % 8 != 0`.
    pub fn encrypt(&self, plaintext: &[u32]) -> Result<Vec<u32>, TitanWallError> {
        self.process(plaintext, Self::encrypt_block)
    }

    /// Decrypts a sequence of 8-word blocks produced by [`encrypt`](Self::encrypt).
    ///
    /// # Errors
    /// Returns [`TitanWallError::MisalignedBlocks`] if `ciphertext.len() % 8 != 0`.
    pub fn decrypt(&self, ciphertext: &[u32]) -> Result<Vec<u32>, TitanWallError> {
        self.process(ciphertext, Self::decrypt_block)
    }

    /// Encrypts bytes as little-endian words.
    ///
    /// # Errors
    /// Returns [`TitanWallError::InvalidByteArrayLength`] unless the input is a
    /// whole number of 32-byte blocks.
    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Result<Vec<u8>, TitanWallError> {
        self.process_bytes(plaintext, Self::encrypt_block)
    }

    /// Decrypts bytes produced by [`encrypt_bytes`](Self::encrypt_bytes).
    ///
    /// # Errors
    /// Returns [`TitanWallError::InvalidByteArrayLength`] unless the input is a
    /// whole number of 32-byte blocks.
    pub fn decrypt_bytes(&self, ciphertext: &[u8]) -> Result<Vec<u8>, TitanWallError> {
        self.process_bytes(ciphertext, Self::decrypt_block)
    }

    /// Encrypts a single block in place.
    pub fn encrypt_block(&self, block: &mut [u32; BLOCK_WORDS]) {
        let k = self.schedule.subkeys();
        let s = block;

        s[B] = s[B].wrapping_add(k[0]);
        s[D] = s[D].wrapping_add(k[1]);
        s[F] = s[F].wrapping_add(k[2]);
        s[H] = s[H].wrapping_add(k[3]);

        for j in 1..=ROUNDS {
            let (t, u, v, w) = taps(s);

            s[A] = word_right_rotation(s[A].wrapping_sub(t), w).wrapping_add(k[2 * j]);
            s[C] = word_right_rotation(s[C] ^ u, v).wrapping_add(k[2 * j + 1]);
            s[E] = word_right_rotation(s[E] ^ v, u).wrapping_add(k[2 * j + 2]);
            s[G] = word_right_rotation(s[G].wrapping_add(w), t).wrapping_add(k[2 * j + 3]);

            s[B] = s[B].wrapping_add(k[j % KDSB_WORDS]);
            s[D] ^= k[(j + 1) % KDSB_WORDS];
            s[F] ^= k[(j + 2) % KDSB_WORDS];
            s[H] = s[H].wrapping_sub(k[(j + 3) % KDSB_WORDS]);

            permute(s, &PERMUTATION);

            for pair in s.chunks_exact_mut(2) {
                let (a, b) = pht(pair[0], pair[1]);
                pair[0] = a;
                pair[1] = b;
            }
        }

        s[A] = s[A].wrapping_add(k[KDSB_WORDS - 4]);
        s[C] = s[C].wrapping_add(k[KDSB_WORDS - 3]);
        s[E] = s[E].wrapping_add(k[KDSB_WORDS - 2]);
        s[G] = s[G].wrapping_add(k[KDSB_WORDS - 1]);
    }

    /// Decrypts a single block in place.
    pub fn decrypt_block(&self, block: &mut [u32; BLOCK_WORDS]) {
        let k = self.schedule.subkeys();
        let s = block;

        s[G] = s[G].wrapping_sub(k[KDSB_WORDS - 1]);
        s[E] = s[E].wrapping_sub(k[KDSB_WORDS - 2]);
        s[C] = s[C].wrapping_sub(k[KDSB_WORDS - 3]);
        s[A] = s[A].wrapping_sub(k[KDSB_WORDS - 4]);

        for j in (1..=ROUNDS).rev() {
            for pair in s.chunks_exact_mut(2) {
                let (a, b) = inverse_pht(pair[0], pair[1]);
                pair[0] = a;
                pair[1] = b;
            }

            permute(s, &INVERSE_PERMUTATION);

            s[H] = s[H].wrapping_add(k[(j + 3) % KDSB_WORDS]);
            s[F] ^= k[(j + 2) % KDSB_WORDS];
            s[D] ^= k[(j + 1) % KDSB_WORDS];
            s[B] = s[B].wrapping_sub(k[j % KDSB_WORDS]);

            let (t, u, v, w) = taps(s);

            s[G] = word_left_rotation(s[G].wrapping_sub(k[2 * j + 3]), t).wrapping_sub(w);
            s[E] = word_left_rotation(s[E].wrapping_sub(k[2 * j + 2]), u) ^ v;
            s[C] = word_left_rotation(s[C].wrapping_sub(k[2 * j + 1]), v) ^ u;
            s[A] = word_left_rotation(s[A].wrapping_sub(k[2 * j]), w).wrapping_add(t);
        }

        s[H] = s[H].wrapping_sub(k[3]);
        s[F] = s[F].wrapping_sub(k[2]);
        s[D] = s[D].wrapping_sub(k[1]);
        s[B] = s[B].wrapping_sub(k[0]);
    }

    /// Applies `op` to every block of `input`, failing before any output on misalignment.
    fn process(
        &self,
        input: &[u32],
        op: fn(&Self, &mut [u32; BLOCK_WORDS]),
    ) -> Result<Vec<u32>, TitanWallError> {
        if !input.len().is_multiple_of(BLOCK_WORDS) {
            warn!(len = input.len(), "block input is not a multiple of 8 words");
            return Err(TitanWallError::MisalignedBlocks { len: input.len() });
        }

        let mut output = Vec::with_capacity(input.len());
        for chunk in input.chunks_exact(BLOCK_WORDS) {
            let mut block = [0u32; BLOCK_WORDS];
            block.copy_from_slice(chunk);
            op(self, &mut block);
            output.extend_from_slice(&block);
        }
        Ok(output)
    }

    fn process_bytes(
        &self,
        input: &[u8],
        op: fn(&Self, &mut [u32; BLOCK_WORDS]),
    ) -> Result<Vec<u8>, TitanWallError> {
        if !input.len().is_multiple_of(BLOCK_BYTES) {
            warn!(len = input.len(), "block input is not a multiple of 32 bytes");
            return Err(TitanWallError::InvalidByteArrayLength);
        }
        let words = bytes_to_words(input)?;
        Ok(words_to_bytes(&self.process(&words, op)?))
    }
}

/// Data-dependent taps `t, u, v, w` derived from lanes B, D, F, H.
#[inline]
fn taps(s: &[u32; BLOCK_WORDS]) -> (u32, u32, u32, u32) {
    let t = s[B] ^ (s[B] << 1).wrapping_add(1);
    let u = s[D] ^ (s[D] << 2).wrapping_add(1);
    let v = s[F] ^ (s[F] << 3).wrapping_add(1);
    let w = s[H] ^ (s[H] << 4).wrapping_add(1);
    (t, u, v, w)
}

/// Rearranges lanes so that output lane `i` holds input lane `table[i]`.
#[inline]
fn permute(s: &mut [u32; BLOCK_WORDS], table: &[usize; BLOCK_WORDS]) {
    let input = *s;
    for (lane, &from) in s.iter_mut().zip(table.iter()) {
        *lane = input[from];
    }
}

/// Pseudo-Hadamard Transform: `(a + b, a + 2b)`.
#[inline]
fn pht(a: u32, b: u32) -> (u32, u32) {
    (a.wrapping_add(b), a.wrapping_add(b.wrapping_mul(2)))
}

/// Inverse Pseudo-Hadamard Transform: `(2a' - b', b' - a')`.
#[inline]
fn inverse_pht(a: u32, b: u32) -> (u32, u32) {
    (a.wrapping_mul(2).wrapping_sub(b), b.wrapping_sub(a))
}
