//! KeySchedule: key preprocessing and the KDSB mixing engine.
//!
//! Owns the 128-word key-dependent substitution block (KDSB) shared by the
//! block and stream ciphers, and the three in-place mixing primitives that
//! make up the round operator:
//!
//! ```text
//! MixWithAddSubtract(c) -> RandomAccessMix(c) -> ComplexMix(c)   for c in 0..128
//!          └────────── RandomIndex (u64) threaded through every call ──────────┘
//! ```
//!
//! One sweep of four outer rounds over all 128 counters (512 round operators)
//! is the pseudo-random function used by both the schedule and the keystream.

use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::TitanWallError;
use crate::mixing::{ff, gg, l, l2};
use crate::nlfsr::nlfsr;
use crate::tables::{magic, MATH_MAGIC_NUMBERS, SUBSTITUTION_BOX_A, SUBSTITUTION_BOX_B};
use crate::utils::bits::{ring_back, ring_forward};

/// Number of 32-bit words in the KDSB (and in any State register).
pub const KDSB_WORDS: usize = 128;

/// Outer rounds per pseudo-random function sweep.
pub(crate) const OUTER_ROUNDS: usize = 4;

/// Mask of the half of a word folded with modular addition into KDSB.
pub(crate) const HIGH_HALF: u32 = 0xFFFF_0000;

/// Mask of the half of a word folded with XOR into KDSB.
pub(crate) const LOW_HALF: u32 = 0x0000_FFFF;

/// Converts key bytes into key words ("KeyBlocks").
///
/// Pads the key with zero bytes to a multiple of 4. In every group
/// `(A, B, C, D)` bytes A and B pass twice through substitution box A and
/// bytes C and D twice through box B. The substituted bytes are packed as
/// `A C B D` in little-endian order, giving the word
/// `(D << 24) | (B << 16) | (C << 8) | A` on every host.
///
/// # Examples
///
/// ```
/// use titanwall::key_schedule::key_blocks;
///
/// assert_eq!(key_blocks(&[0x01, 0x02, 0x03, 0x04, 0x05]).len(), 2);
/// assert!(key_blocks(&[0u8; 0]).is_empty());
/// ```
pub fn key_blocks(key: &[u8]) -> Vec<u32> {
    key.chunks(4)
        .map(|chunk| {
            let mut group = [0u8; 4];
            group[..chunk.len()].copy_from_slice(chunk);

            for (i, byte) in group.iter_mut().enumerate() {
                let sbox = if i < 2 {
                    &SUBSTITUTION_BOX_A
                } else {
                    &SUBSTITUTION_BOX_B
                };
                *byte = sbox[sbox[*byte as usize] as usize];
            }
            group.swap(1, 2);

            let word = u32::from_le_bytes(group);
            group.zeroize();
            word
        })
        .collect()
}

/// Key-dependent substitution block and the mixing engine that evolves it.
///
/// Built from key bytes by [`KeySchedule::new`]. The block and stream
/// ciphers own one by value; the KDSB is zeroized when it is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    kdsb: [u32; KDSB_WORDS],
}

impl std::fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeySchedule").finish_non_exhaustive()
    }
}

impl KeySchedule {
    /// Runs the key schedule over `key` and returns the populated KDSB.
    ///
    /// Key words are processed in chunks of up to 128. Each chunk is copied
    /// into the front of the KDSB and swept by the pseudo-random function.
    /// Chunks after the first are pre-mixed with the carried State register,
    /// and chunks starting at word 128 or later refresh that State, so long
    /// keys chain their passes. A single `RandomIndex`, starting at 0, threads
    /// through every pass.
    ///
    /// # Errors
    /// Returns [`TitanWallError::EmptyKey`] if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use titanwall::KeySchedule;
    ///
    /// let schedule = KeySchedule::new(b"secret").unwrap();
    /// assert_ne!(schedule.subkeys(), &[0u32; 128]);
    /// assert!(KeySchedule::new(&[0u8; 0]).is_err());
    /// ```
    pub fn new(key: &[u8]) -> Result<Self, TitanWallError> {
        if key.is_empty() {
            return Err(TitanWallError::EmptyKey);
        }

        let mut blocks = key_blocks(key);
        let mut state = [0u32; KDSB_WORDS];
        let mut schedule = Self::zeroed();
        let mut random_index: u64 = 0;
        let mut passes = 0usize;

        let mut index = 0;
        while index < blocks.len() {
            let end = (index + KDSB_WORDS).min(blocks.len());

            if index > 0 {
                for (word, &carried) in blocks[index..end].iter_mut().zip(state.iter()) {
                    *word = word.wrapping_add(carried & HIGH_HALF);
                    *word ^= carried & LOW_HALF;
                }
            }

            schedule.kdsb[..end - index].copy_from_slice(&blocks[index..end]);
            schedule.pseudo_random_function(&mut random_index);
            passes += 1;

            if index >= KDSB_WORDS {
                for ((slot, &mixed), &word) in state
                    .iter_mut()
                    .zip(schedule.kdsb.iter())
                    .zip(blocks[index..end].iter())
                {
                    *slot = mixed ^ (word & HIGH_HALF);
                    *slot = slot.wrapping_add(word & LOW_HALF);
                }
            }

            index += KDSB_WORDS;
        }

        debug!(key_words = blocks.len(), passes, "key schedule complete");

        blocks.zeroize();
        state.zeroize();
        random_index.zeroize();
        Ok(schedule)
    }

    /// Returns an all-zero schedule.
    pub(crate) fn zeroed() -> Self {
        KeySchedule {
            kdsb: [0u32; KDSB_WORDS],
        }
    }

    /// Returns the current KDSB words.
    pub fn subkeys(&self) -> &[u32; KDSB_WORDS] {
        &self.kdsb
    }

    /// Returns the KDSB for in-place feedback by the stream cipher.
    pub(crate) fn subkeys_mut(&mut self) -> &mut [u32; KDSB_WORDS] {
        &mut self.kdsb
    }

    /// Applies four outer rounds of the round operator over every counter.
    ///
    /// `random_index` is threaded through all 512 applications.
    pub(crate) fn pseudo_random_function(&mut self, random_index: &mut u64) {
        for _ in 0..OUTER_ROUNDS {
            for counter in 0..KDSB_WORDS {
                self.round_operator(counter, random_index);
            }
        }
    }

    /// MixWithAddSubtract, RandomAccessMix and ComplexMix for one counter.
    #[inline]
    pub(crate) fn round_operator(&mut self, counter: usize, random_index: &mut u64) {
        self.mix_with_add_subtract(counter, random_index);
        self.random_access_mix(counter, random_index);
        self.complex_mix(counter, random_index);
    }

    /// Folds `KDSB[c]`, `KDSB[c+1]` and two magic constants into each other
    /// and into `random_index`. Each statement reads the previous one's output.
    pub(crate) fn mix_with_add_subtract(&mut self, counter: usize, random_index: &mut u64) {
        let here = counter % KDSB_WORDS;
        let next = ring_forward(counter, 1, KDSB_WORDS);
        let c = counter as u64;
        let k = &mut self.kdsb;

        *random_index ^= u64::from(k[here].wrapping_add(MATH_MAGIC_NUMBERS[counter % 4]));
        k[here] = k[here].wrapping_add(k[next].wrapping_sub(magic(random_index.wrapping_add(c))));
        *random_index ^= u64::from(k[next].wrapping_add(magic(random_index.wrapping_sub(c))));
        k[next] = k[next].wrapping_sub(k[here].wrapping_sub(magic(random_index.wrapping_add(c))));
    }

    /// XORs in the word at `random_index % 128`, then folds a magic constant
    /// via `KDSB[c] += KDSB[c] - MAGIC[pos % 4]`.
    pub(crate) fn random_access_mix(&mut self, counter: usize, random_index: &mut u64) {
        let here = counter % KDSB_WORDS;
        let position = (*random_index % KDSB_WORDS as u64) as usize;
        let k = &mut self.kdsb;

        k[here] ^= k[position];
        k[here] = k[here].wrapping_add(k[here].wrapping_sub(MATH_MAGIC_NUMBERS[position % 4]));
    }

    /// Clocks both halves of `random_index` through the NLFSR (swapping them),
    /// combines the three preceding words through GG/FF/L, then threads the
    /// result back into `random_index`, `KDSB[c+1]` and `KDSB[c+2]`.
    pub(crate) fn complex_mix(&mut self, counter: usize, random_index: &mut u64) {
        let high = (*random_index >> 32) as u32;
        let low = *random_index as u32;
        *random_index = (u64::from(nlfsr(low)) << 32) | u64::from(nlfsr(high));

        let here = counter % KDSB_WORDS;
        let next = ring_forward(counter, 1, KDSB_WORDS);
        let next2 = ring_forward(counter, 2, KDSB_WORDS);
        let back1 = ring_back(counter, 1, KDSB_WORDS);
        let back2 = ring_back(counter, 2, KDSB_WORDS);
        let back3 = ring_back(counter, 3, KDSB_WORDS);
        let c = counter as u64;
        let k = &mut self.kdsb;

        k[here] ^= k[back2] ^ k[back1];

        let folded_index = (*random_index % u64::from(u32::MAX)) as u32;
        k[here] = k[here].wrapping_add(gg(
            counter as u32,
            k[back1],
            folded_index,
            counter,
            KDSB_WORDS,
        ));
        k[here] = k[here].wrapping_sub(ff(k[back3], l(k[back2]), k[back1], counter, KDSB_WORDS));

        *random_index ^= u64::from(l(k[here].wrapping_sub(MATH_MAGIC_NUMBERS[counter % 4])));
        k[next] = k[next].wrapping_sub(l2(k[here].wrapping_add(magic(random_index.wrapping_sub(c)))));
        *random_index ^= u64::from(l2(k[here].wrapping_sub(magic(random_index.wrapping_add(c)))));
        k[next2] = k[next2].wrapping_add(l(k[next].wrapping_add(magic(random_index.wrapping_sub(c)))));
    }
}
