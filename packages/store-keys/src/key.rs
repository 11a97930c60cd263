//! Storage key composition
//!
//! A storage key is the plain concatenation of its segments, in order, with no
//! separators or length markers (the same packing as `abi.encodePacked`).
//! Segment order is part of the key: `prefix ‖ contract ‖ user` and
//! `prefix ‖ user ‖ contract` are different keys.

use std::fmt;

use crate::address_codec::{decode_address, ConversionMode};
use crate::error::KeyError;
use crate::namespace::{Namespace, PrefixRegistry};
use crate::wasm::length_prefixed;

/// Byte key addressing a value in the chain's key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StorageKey(Vec<u8>);

impl StorageKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Lowercase hex, two characters per byte
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }

    /// Parse from hex (with or without 0x prefix)
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let trimmed = hex_str.trim();
        let hex_str = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = hex::decode(hex_str).map_err(|e| KeyError::InvalidHex(e.to_string()))?;
        Ok(StorageKey(bytes))
    }

    /// True if this key starts with the given segment
    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.0.starts_with(prefix.as_ref())
    }
}

impl AsRef<[u8]> for StorageKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for StorageKey {
    fn from(bytes: Vec<u8>) -> Self {
        StorageKey(bytes)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Concatenate segments in the given order.
pub fn build_key<I, S>(segments: I) -> StorageKey
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut key = Vec::new();
    for segment in segments {
        key.extend_from_slice(segment.as_ref());
    }
    StorageKey(key)
}

/// Lowercase hex rendering with no prefix or separators.
pub fn to_hex(key: impl AsRef<[u8]>) -> String {
    hex::encode(key.as_ref())
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent key builder.
///
/// Each call appends one segment; `build()` is equivalent to [`build_key`]
/// over the same segments in call order. Address and namespace segments are
/// resolved eagerly, so the first failure is returned by `build()` and no
/// partial key is ever produced.
///
/// ```
/// use store_keys::{ConversionMode, KeyBuilder, Namespace};
///
/// let key = KeyBuilder::new()
///     .namespace(Namespace::ContractStore)
///     .address(
///         "wasm1896qu2ml7ckj675ukxjhx8xn0srp4e7cdx0m6rh949q9vw88hdrqj49ypr",
///         ConversionMode::Strict,
///     )
///     .build()
///     .unwrap();
/// assert_eq!(key.len(), 33);
/// ```
#[derive(Debug, Default)]
pub struct KeyBuilder {
    segments: Vec<Vec<u8>>,
    error: Option<KeyError>,
}

impl KeyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw segment (prefix constant, literal, pre-decoded address)
    pub fn bytes(self, segment: impl AsRef<[u8]>) -> Self {
        let segment = segment.as_ref().to_vec();
        self.push(Ok(segment))
    }

    /// Append a built-in namespace prefix
    pub fn namespace(self, namespace: Namespace) -> Self {
        self.push(Ok(namespace.prefix().to_vec()))
    }

    /// Append a prefix looked up by name in `registry`
    pub fn prefix(self, registry: &PrefixRegistry, name: &str) -> Self {
        let resolved = registry.get(name).map(<[u8]>::to_vec);
        self.push(resolved)
    }

    /// Append the raw bytes of a bech32 address
    pub fn address(self, address: &str, mode: ConversionMode) -> Self {
        let decoded = decode_address(address, mode)
            .map(|a| a.into_vec())
            .map_err(KeyError::from);
        self.push(decoded)
    }

    /// Append a cw-storage-plus length-prefixed namespace
    pub fn length_prefixed(self, namespace: impl AsRef<[u8]>) -> Self {
        let encoded = length_prefixed(namespace);
        self.push(encoded)
    }

    pub fn build(self) -> Result<StorageKey, KeyError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(build_key(&self.segments)),
        }
    }

    fn push(mut self, segment: Result<Vec<u8>, KeyError>) -> Self {
        if self.error.is_some() {
            return self;
        }
        match segment {
            Ok(bytes) => self.segments.push(bytes),
            Err(err) => self.error = Some(err),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    const USER: &str = "wasm1sejq8wn2qyw0vhgk3y0ds3r6a7fssl57776aek";

    #[test]
    fn test_build_key_preserves_order() {
        let a = build_key([&b"\x01"[..], &b"ab"[..], &b"\xff"[..]]);
        let b = build_key([&b"\xff"[..], &b"ab"[..], &b"\x01"[..]]);
        assert_eq!(a.as_bytes(), b"\x01ab\xff");
        assert_ne!(a, b);
    }

    #[test]
    fn test_build_key_empty() {
        let key = build_key(Vec::<Vec<u8>>::new());
        assert!(key.is_empty());
        assert_eq!(key.to_hex(), "");
    }

    #[test]
    fn test_to_hex_lowercase() {
        assert_eq!(to_hex([0xABu8, 0x00, 0x0f]), "ab000f");
        assert_eq!(StorageKey::from(vec![0xDE, 0xAD]).to_string(), "dead");
    }

    #[test]
    fn test_from_hex() {
        let key = StorageKey::from_hex("0x000005").unwrap();
        assert_eq!(key.as_bytes(), &[0, 0, 5]);
        assert_eq!(StorageKey::from_hex("0A0b").unwrap().as_bytes(), &[10, 11]);
        assert!(matches!(
            StorageKey::from_hex("abc"),
            Err(KeyError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_builder_matches_build_key() {
        let user = decode_address(USER, ConversionMode::Padded).unwrap();
        let expected = build_key([&b"\x00\x00\x05"[..], &b"state"[..], user.as_bytes()]);

        let built = KeyBuilder::new()
            .bytes([0x00u8, 0x00, 0x05])
            .bytes("state")
            .address(USER, ConversionMode::Padded)
            .build()
            .unwrap();

        assert_eq!(built, expected);
        assert!(built.starts_with([0x00u8, 0x00, 0x05]));
    }

    #[test]
    fn test_builder_reports_first_error() {
        let result = KeyBuilder::new()
            .namespace(Namespace::ContractStore)
            .address("", ConversionMode::Strict)
            .prefix(&PrefixRegistry::with_defaults(), "no_such_namespace")
            .build();

        assert_eq!(result, Err(KeyError::Decode(DecodeError::EmptyInput)));
    }

    #[test]
    fn test_builder_registry_prefix() {
        let mut registry = PrefixRegistry::with_defaults();
        registry.insert("user_counter", vec![0x00, 0x05]).unwrap();

        let key = KeyBuilder::new()
            .prefix(&registry, "user_counter")
            .bytes("state")
            .build()
            .unwrap();
        assert_eq!(key.to_hex(), "00057374617465");
    }
}
