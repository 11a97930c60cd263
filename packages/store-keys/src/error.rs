//! Error types for address decoding and key composition

use thiserror::Error;

/// Failure to turn a bech32 address into raw bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Address is empty")]
    EmptyInput,

    #[error("Invalid bech32 checksum")]
    InvalidChecksum,

    #[error("Invalid character in address: {0:?}")]
    InvalidCharacter(char),

    /// Strict conversion found a leftover group of 5+ bits or non-zero padding.
    #[error("Data part does not align on a byte boundary")]
    MisalignedBits,

    /// Checksum verified but the data part holds no whole byte.
    #[error("Address carries no data")]
    EmptyData,

    #[error("Malformed address: {0}")]
    InvalidFormat(String),

    #[error("Expected '{expected}' prefix, got '{found}'")]
    UnexpectedHrp { expected: String, found: String },
}

impl From<bech32::Error> for DecodeError {
    fn from(err: bech32::Error) -> Self {
        match err {
            bech32::Error::InvalidChecksum => DecodeError::InvalidChecksum,
            bech32::Error::InvalidChar(c) => DecodeError::InvalidCharacter(c),
            bech32::Error::InvalidPadding => DecodeError::MisalignedBits,
            other => DecodeError::InvalidFormat(other.to_string()),
        }
    }
}

/// Failure to resolve or compose a key segment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("{0}")]
    Decode(#[from] DecodeError),

    #[error("Unknown namespace: {name}")]
    UnknownNamespace { name: String },

    #[error("Invalid prefix for {name}: {reason}")]
    InvalidPrefix { name: String, reason: String },

    #[error("Namespace too long: {len} bytes (max {max})")]
    NamespaceTooLong { len: usize, max: usize },

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Unknown conversion mode: {0} (expected 'strict' or 'padded')")]
    InvalidMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bech32_error_mapping() {
        assert_eq!(
            DecodeError::from(bech32::Error::InvalidChecksum),
            DecodeError::InvalidChecksum
        );
        assert_eq!(
            DecodeError::from(bech32::Error::InvalidChar('b')),
            DecodeError::InvalidCharacter('b')
        );
        assert_eq!(
            DecodeError::from(bech32::Error::InvalidPadding),
            DecodeError::MisalignedBits
        );
        assert!(matches!(
            DecodeError::from(bech32::Error::MissingSeparator),
            DecodeError::InvalidFormat(_)
        ));
        assert!(matches!(
            DecodeError::from(bech32::Error::MixedCase),
            DecodeError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_key_error_wraps_decode_error() {
        let err: KeyError = DecodeError::EmptyInput.into();
        assert_eq!(err, KeyError::Decode(DecodeError::EmptyInput));
        assert_eq!(err.to_string(), "Address is empty");
    }
}
