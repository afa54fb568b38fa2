//! TitanWallStreamCipher: synchronous keystream generator over the KDSB.
//!
//! The cipher keeps a 128-word State register next to its KDSB. Every
//! refresh folds State into the KDSB one word at a time, sweeps the KDSB with
//! the pseudo-random function, and folds the refreshed word back into State.
//! The 512 bytes of State are the keystream for that refresh.

use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::error::TitanWallError;
use crate::key_schedule::{KeySchedule, HIGH_HALF, KDSB_WORDS, LOW_HALF};
use crate::utils::converter::fill_bytes_from_words;

/// Keystream bytes produced by a single State refresh.
pub const REFRESH_BYTES: usize = KDSB_WORDS * 4;

/// Stateful keystream generator.
///
/// The keystream advances on every call and never repeats unless the cipher
/// is re-keyed with [`initial_state`](Self::initial_state). Key material is
/// zeroized by [`reset_state`](Self::reset_state) and on drop.
///
/// # Examples
///
/// ```
/// use titanwall::TitanWallStreamCipher;
///
/// let key = b"stream key";
/// let mut data = *b"attack at dawn";
///
/// let mut encoder = TitanWallStreamCipher::new(key).unwrap();
/// encoder.apply_keystream(&mut data).unwrap();
/// assert_ne!(&data, b"attack at dawn");
///
/// let mut decoder = TitanWallStreamCipher::new(key).unwrap();
/// decoder.apply_keystream(&mut data).unwrap();
/// assert_eq!(&data, b"attack at dawn");
/// ```
pub struct TitanWallStreamCipher {
    schedule: KeySchedule,
    state: [u32; KDSB_WORDS],
    keyed: bool,
}

impl TitanWallStreamCipher {
    /// Creates a stream cipher keyed with `key` and a zero State.
    ///
    /// # Errors
    /// Returns [`TitanWallError::EmptyKey`] if `key` is empty.
    pub fn new(key: &[u8]) -> Result<Self, TitanWallError> {
        Ok(TitanWallStreamCipher {
            schedule: KeySchedule::new(key)?,
            state: [0u32; KDSB_WORDS],
            keyed: true,
        })
    }

    /// Returns `true` while a key is scheduled.
    pub fn is_keyed(&self) -> bool {
        self.keyed
    }

    /// Fills `buffer` with keystream bytes.
    ///
    /// Each 512-byte slice of the buffer consumes one State refresh; a final
    /// shorter slice takes the leading bytes of its refresh. An empty buffer
    /// leaves the cipher untouched.
    ///
    /// # Errors
    /// Returns [`TitanWallError::KeyNotScheduled`] after
    /// [`reset_state`](Self::reset_state) until the cipher is keyed again.
    pub fn generate_pseudo_random_bytes(&mut self, buffer: &mut [u8]) -> Result<(), TitanWallError> {
        if buffer.is_empty() {
            return Ok(());
        }
        if !self.keyed {
            return Err(TitanWallError::KeyNotScheduled);
        }

        for chunk in buffer.chunks_mut(REFRESH_BYTES) {
            self.refresh_state();
            fill_bytes_from_words(&self.state, chunk);
        }
        Ok(())
    }

    /// XORs keystream into `data`; applying it twice from the same key restores `data`.
    ///
    /// # Errors
    /// Returns [`TitanWallError::KeyNotScheduled`] if the cipher has no key.
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<(), TitanWallError> {
        let mut keystream = vec![0u8; data.len()];
        self.generate_pseudo_random_bytes(&mut keystream)?;
        for (byte, key_byte) in data.iter_mut().zip(keystream.iter()) {
            *byte ^= key_byte;
        }
        keystream.zeroize();
        Ok(())
    }

    /// Zeroizes KDSB and State and marks the cipher as unkeyed.
    pub fn reset_state(&mut self) {
        self.scrub();
        debug!("stream cipher state reset");
    }

    fn scrub(&mut self) {
        self.schedule.zeroize();
        self.state.zeroize();
        self.keyed = false;
    }

    /// Resets the cipher and runs the key schedule over `key`.
    ///
    /// On error the cipher stays reset.
    ///
    /// # Errors
    /// Returns [`TitanWallError::EmptyKey`] if `key` is empty.
    pub fn initial_state(&mut self, key: &[u8]) -> Result<(), TitanWallError> {
        self.reset_state();
        self.schedule = KeySchedule::new(key)?;
        self.keyed = true;
        Ok(())
    }

    /// Advances State by one refresh.
    ///
    /// `RandomIndex` starts at 0 and threads through all 128 word iterations.
    fn refresh_state(&mut self) {
        let mut random_index: u64 = 0;

        for i in 0..KDSB_WORDS {
            {
                let kdsb = self.schedule.subkeys_mut();
                kdsb[i] = kdsb[i].wrapping_add(self.state[i] & HIGH_HALF);
                kdsb[i] ^= self.state[i] & LOW_HALF;
            }

            self.schedule.pseudo_random_function(&mut random_index);

            let refreshed = self.schedule.subkeys()[i];
            self.state[i] ^= refreshed & HIGH_HALF;
            self.state[i] = self.state[i].wrapping_add(refreshed & LOW_HALF);
        }

        trace!("keystream state refreshed");
    }
}

impl std::fmt::Debug for TitanWallStreamCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitanWallStreamCipher")
            .field("keyed", &self.keyed)
            .finish_non_exhaustive()
    }
}

impl Drop for TitanWallStreamCipher {
    /// Securely clears key material on drop.
    fn drop(&mut self) {
        self.scrub();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const KEY: [u8; 8] = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0];

    #[test]
    fn test_first_refresh_known_bytes() {
        let mut cipher = TitanWallStreamCipher::new(&KEY).unwrap();
        let mut bytes = [0u8; 32];
        cipher.generate_pseudo_random_bytes(&mut bytes).unwrap();
        assert_eq!(
            bytes,
            [
                0xCD, 0x69, 0x2E, 0x5F, 0x4B, 0x3A, 0x79, 0x99, 0x72, 0x62, 0x95, 0x31, 0x65,
                0x1B, 0x75, 0x3A, 0x85, 0x24, 0x77, 0x80, 0xF8, 0x7E, 0xF9, 0xDF, 0xA2, 0xE9,
                0x8C, 0x6E, 0x56, 0x80, 0x30, 0x3A,
            ]
        );
    }

    #[test]
    fn test_empty_buffer_does_not_advance() {
        let mut a = TitanWallStreamCipher::new(&KEY).unwrap();
        let mut b = TitanWallStreamCipher::new(&KEY).unwrap();
        a.generate_pseudo_random_bytes(&mut [0u8; 0]).unwrap();

        let mut out_a = [0u8; 16];
        let mut out_b = [0u8; 16];
        a.generate_pseudo_random_bytes(&mut out_a).unwrap();
        b.generate_pseudo_random_bytes(&mut out_b).unwrap();
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn test_reset_fails_closed() {
        let mut cipher = TitanWallStreamCipher::new(&KEY).unwrap();
        cipher.reset_state();
        assert!(!cipher.is_keyed());
        assert_eq!(cipher.schedule.subkeys(), &[0u32; KDSB_WORDS]);
        assert_eq!(cipher.state, [0u32; KDSB_WORDS]);

        let mut bytes = [0u8; 8];
        assert_eq!(
            cipher.generate_pseudo_random_bytes(&mut bytes),
            Err(TitanWallError::KeyNotScheduled)
        );
        assert_eq!(bytes, [0u8; 8]);
    }

    #[test]
    fn test_initial_state_with_empty_key_stays_reset() {
        let mut cipher = TitanWallStreamCipher::new(&KEY).unwrap();
        assert_eq!(cipher.initial_state(&[]), Err(TitanWallError::EmptyKey));
        assert!(!cipher.is_keyed());
    }

    /// Counts every event dispatched while installed.
    struct EventCounter(Arc<AtomicUsize>);

    impl tracing::Subscriber for EventCounter {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }
        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}
        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}
        fn event(&self, _: &tracing::Event<'_>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
        fn enter(&self, _: &tracing::span::Id) {}
        fn exit(&self, _: &tracing::span::Id) {}
    }

    #[test]
    fn test_drop_scrubs_without_logging() {
        let events = Arc::new(AtomicUsize::new(0));
        let cipher = TitanWallStreamCipher::new(&KEY).unwrap();
        let mut other = TitanWallStreamCipher::new(&KEY).unwrap();

        tracing::subscriber::with_default(EventCounter(Arc::clone(&events)), || {
            drop(cipher);
            assert_eq!(events.load(Ordering::SeqCst), 0);

            other.reset_state();
            assert_eq!(events.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn test_scrub_clears_key_material() {
        let mut cipher = TitanWallStreamCipher::new(&KEY).unwrap();
        cipher.generate_pseudo_random_bytes(&mut [0u8; 16]).unwrap();
        cipher.scrub();
        assert!(!cipher.is_keyed());
        assert_eq!(cipher.schedule.subkeys(), &[0u32; KDSB_WORDS]);
        assert_eq!(cipher.state, [0u32; KDSB_WORDS]);
    }

    #[test]
    fn test_debug_hides_key_material() {
        let cipher = TitanWallStreamCipher::new(&KEY).unwrap();
        assert_eq!(
            format!("{:?}", cipher),
            "TitanWallStreamCipher { keyed: true, .. }"
        );
    }
}
