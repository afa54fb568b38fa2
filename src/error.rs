//! Error types for the TitanWall library.

use std::fmt;

/// Errors produced by the TitanWall library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitanWallError {
    /// Key schedule requested with zero key bytes.
    EmptyKey,
    /// Block cipher input of `len` words is not a whole number of 8-word blocks.
    MisalignedBlocks {
        /// Number of words supplied.
        len: usize,
    },
    /// Byte array length is not a multiple of the required value.
    InvalidByteArrayLength,
    /// Stream cipher used after a reset without being keyed again.
    KeyNotScheduled,
}

impl fmt::Display for TitanWallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitanWallError::EmptyKey => {
                write!(f, "Key must be at least 1 byte long")
            }
            TitanWallError::MisalignedBlocks { len } => {
                write!(
                    f,
                    "Input of {} words cannot be aligned to 8-word blocks",
                    len
                )
            }
            TitanWallError::InvalidByteArrayLength => {
                write!(
                    f,
                    "Byte array length is not a multiple of the required value"
                )
            }
            TitanWallError::KeyNotScheduled => {
                write!(f, "Cipher state was reset and has no key scheduled")
            }
        }
    }
}

impl std::error::Error for TitanWallError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_key() {
        let err = TitanWallError::EmptyKey;
        assert_eq!(format!("{}", err), "Key must be at least 1 byte long");
    }

    #[test]
    fn test_display_misaligned_blocks() {
        let err = TitanWallError::MisalignedBlocks { len: 13 };
        assert_eq!(
            format!("{}", err),
            "Input of 13 words cannot be aligned to 8-word blocks"
        );
    }

    #[test]
    fn test_display_invalid_byte_array() {
        let err = TitanWallError::InvalidByteArrayLength;
        assert_eq!(
            format!("{}", err),
            "Byte array length is not a multiple of the required value"
        );
    }

    #[test]
    fn test_display_key_not_scheduled() {
        let err = TitanWallError::KeyNotScheduled;
        assert_eq!(
            format!("{}", err),
            "Cipher state was reset and has no key scheduled"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(TitanWallError::EmptyKey, TitanWallError::EmptyKey);
        assert_ne!(
            TitanWallError::MisalignedBlocks { len: 1 },
            TitanWallError::MisalignedBlocks { len: 2 }
        );
        assert_ne!(TitanWallError::EmptyKey, TitanWallError::KeyNotScheduled);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(TitanWallError::EmptyKey);
        assert_eq!(err.to_string(), "Key must be at least 1 byte long");
    }
}
