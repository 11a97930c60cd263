//! Store-Keys: Raw Store Key Derivation for Wasm Chains
//!
//! This crate derives the byte keys a CosmWasm chain uses in its key-value
//! store, starting from human-readable bech32 addresses:
//!
//! - **Address Decoding** - bech32 checksum validation and 5-bit → 8-bit
//!   regrouping, in strict or padded mode
//! - **Key Composition** - ordered concatenation of prefixes and address bytes
//! - **Namespaces** - built-in wasm keeper prefixes and a configurable registry
//! - **Wasm Layouts** - contract metadata, contract state, and
//!   cw-storage-plus map keys
//!
//! Everything here is a pure function over its inputs; there is no I/O and no
//! shared state.
//!
//! ## Usage
//!
//! ```
//! use store_keys::{build_key, decode_address, to_hex, ConversionMode};
//!
//! let contract = decode_address(
//!     "wasm1896qu2ml7ckj675ukxjhx8xn0srp4e7cdx0m6rh949q9vw88hdrqj49ypr",
//!     ConversionMode::Strict,
//! )
//! .unwrap();
//!
//! let key = build_key([&[0x03u8][..], contract.as_bytes()]);
//! assert_eq!(
//!     to_hex(&key),
//!     "0339740e2b7ff62d2d7a9cb1a5731cd37c061ae7d8699fbd0ee5a9405638e7bb46"
//! );
//! ```

pub mod address_codec;
pub mod error;
pub mod key;
pub mod namespace;
pub mod wasm;

pub use address_codec::{
    decode_address, decode_address_for, encode_address, AddressBytes, ConversionMode,
    MAX_ADDRESS_LEN,
};
pub use error::{DecodeError, KeyError};
pub use key::{build_key, to_hex, KeyBuilder, StorageKey};
pub use namespace::{parse_entries, Namespace, PrefixRegistry};
pub use wasm::{contract_address_key, contract_store_key, length_prefixed, map_key};
