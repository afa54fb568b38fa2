//! TitanWall cipher family.
//!
//! TitanWall is a custom symmetric cipher family built around a 128-word
//! key-dependent substitution block (KDSB). A single key schedule feeds two
//! ciphers: a 256-bit block cipher with 62 rounds and a synchronous stream
//! cipher with a persistent 128-word feedback register.
//!
//! Keys longer than 512 bytes are consumed in chained 128-word passes.
//!
//! # Architecture
//!
//! ```text
//! NLFSR, L/L2, FF/GG   (pure word functions)
//!     ↓
//! KeySchedule          (KDSB + MixWithAddSubtract / RandomAccessMix / ComplexMix)
//!     ↓ owned by value
//! TitanWallBlockCipher (whitening + 62 rounds of rotate / permute / PHT)
//! TitanWallStreamCipher(State feedback + 4×128 round operators per word)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a 256-bit block:
//!
//! ```
//! use titanwall::TitanWallBlockCipher;
//!
//! let cipher = TitanWallBlockCipher::new(&[0x01, 0x23, 0x45, 0x67]).unwrap();
//!
//! let original = [1u32, 2, 3, 4, 5, 6, 7, 8];
//! let mut block = original;
//!
//! cipher.encrypt_block(&mut block);
//! assert_ne!(block, original);
//!
//! cipher.decrypt_block(&mut block);
//! assert_eq!(block, original);
//! ```
//!
//! Generate keystream, then re-key to reproduce it:
//!
//! ```
//! use titanwall::TitanWallStreamCipher;
//!
//! let key = [0x12, 0x34, 0x56, 0x78];
//! let mut cipher = TitanWallStreamCipher::new(&key).unwrap();
//!
//! let mut first = [0u8; 32];
//! cipher.generate_pseudo_random_bytes(&mut first).unwrap();
//!
//! cipher.initial_state(&key).unwrap();
//! let mut again = [0u8; 32];
//! cipher.generate_pseudo_random_bytes(&mut again).unwrap();
//! assert_eq!(first, again);
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod key_schedule;
pub mod utils;

mod block_cipher;
pub(crate) mod mixing;
pub(crate) mod nlfsr;
mod stream_cipher;
pub(crate) mod tables;

pub use block_cipher::{TitanWallBlockCipher, BLOCK_BYTES, BLOCK_WORDS, ROUNDS};
pub use error::TitanWallError;
pub use key_schedule::{KeySchedule, KDSB_WORDS};
pub use stream_cipher::{TitanWallStreamCipher, REFRESH_BYTES};
