//! Word-level helpers shared by the key schedule and the ciphers.

pub mod bits;
pub mod converter;
