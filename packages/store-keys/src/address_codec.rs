//! Bech32 Address Decoding
//!
//! Turns a human-readable bech32 address (e.g. `wasm1...`, `terra1...`) into
//! the raw bytes a chain uses as the account/contract identity in its store.
//!
//! ## Bit Conversion
//!
//! The data part of a bech32 string carries 5-bit symbols. They are regrouped
//! into 8-bit bytes under one of two policies:
//!
//! - [`ConversionMode::Strict`]: BIP-173 conversion. A trailing group of 5 or
//!   more bits, or any non-zero trailing bit, is rejected.
//! - [`ConversionMode::Padded`]: trailing bits that do not fill a byte are
//!   dropped. Any data length is accepted.
//!
//! Both modes yield `floor(5 * n / 8)` bytes for `n` data symbols. An address
//! whose data part regroups to no bytes at all is rejected in either mode.

use bech32::{self, u5, FromBase32, ToBase32, Variant};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DecodeError, KeyError};

/// Longest address accepted by [`decode_address`] (BIP-173 limit)
pub const MAX_ADDRESS_LEN: usize = 90;

// ============================================================================
// Conversion Mode
// ============================================================================

/// Policy for the final, possibly incomplete, 8-bit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    #[default]
    Strict,
    Padded,
}

impl ConversionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionMode::Strict => "strict",
            ConversionMode::Padded => "padded",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionMode {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ConversionMode::Strict),
            "padded" | "pad" => Ok(ConversionMode::Padded),
            other => Err(KeyError::InvalidMode(other.to_string())),
        }
    }
}

// ============================================================================
// Address Bytes
// ============================================================================

/// Raw bytes decoded from a bech32 address, along with its human-readable part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressBytes {
    hrp: String,
    bytes: Vec<u8>,
}

impl AddressBytes {
    /// Human-readable part, lowercased (e.g. "wasm")
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hex of the raw bytes
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Re-encode as a bech32 address under the original prefix
    pub fn to_bech32(&self) -> Result<String, DecodeError> {
        encode_address(&self.hrp, &self.bytes)
    }
}

impl AsRef<[u8]> for AddressBytes {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for AddressBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hrp, hex::encode(&self.bytes))
    }
}

// ============================================================================
// Decoding / Encoding
// ============================================================================

/// Decode a bech32 address into its raw bytes.
///
/// Surrounding whitespace is trimmed first. The checksum must verify under the
/// original bech32 constant; bech32m strings are reported as
/// [`DecodeError::InvalidChecksum`]. Addresses longer than [`MAX_ADDRESS_LEN`]
/// are rejected before any checksum work.
pub fn decode_address(address: &str, mode: ConversionMode) -> Result<AddressBytes, DecodeError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    if address.len() > MAX_ADDRESS_LEN {
        return Err(DecodeError::InvalidFormat(format!(
            "address is {} characters long (max {})",
            address.len(),
            MAX_ADDRESS_LEN
        )));
    }

    let (hrp, data, variant) = bech32::decode(address)?;
    if variant != Variant::Bech32 {
        return Err(DecodeError::InvalidChecksum);
    }

    let bytes = regroup(&data, mode)?;
    if bytes.is_empty() {
        return Err(DecodeError::EmptyData);
    }

    tracing::trace!(hrp = %hrp, symbols = data.len(), len = bytes.len(), %mode, "Decoded address");

    Ok(AddressBytes { hrp, bytes })
}

/// Decode an address and require a specific human-readable prefix.
pub fn decode_address_for(
    address: &str,
    expected_hrp: &str,
    mode: ConversionMode,
) -> Result<AddressBytes, DecodeError> {
    let decoded = decode_address(address, mode)?;
    if !decoded.hrp.eq_ignore_ascii_case(expected_hrp) {
        return Err(DecodeError::UnexpectedHrp {
            expected: expected_hrp.to_string(),
            found: decoded.hrp,
        });
    }
    Ok(decoded)
}

/// Encode raw bytes as a bech32 address with the given prefix.
///
/// Bytes are regrouped 8→5 with zero padding, so for any byte-aligned address
/// `encode_address(hrp, decode_address(a)?)` reproduces `a` in lowercase.
pub fn encode_address(hrp: &str, bytes: &[u8]) -> Result<String, DecodeError> {
    Ok(bech32::encode(hrp, bytes.to_base32(), Variant::Bech32)?)
}

fn regroup(data: &[u5], mode: ConversionMode) -> Result<Vec<u8>, DecodeError> {
    match mode {
        ConversionMode::Strict => Ok(Vec::<u8>::from_base32(data)?),
        ConversionMode::Padded => {
            // Padding yields one extra partial byte; drop it.
            let mut bytes = bech32::convert_bits(data, 5, 8, true)?;
            bytes.truncate(data.len() * 5 / 8);
            Ok(bytes)
        }
    }
}
