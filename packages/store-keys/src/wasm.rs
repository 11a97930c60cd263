//! Wasm keeper key layouts
//!
//! Composers for the well-known key shapes of a wasm chain's store. All of them
//! are thin wrappers over [`build_key`]; they only fix the segment order.
//!
//! ```text
//! contract metadata:  0x02 ‖ contract_addr
//! contract state:     0x03 ‖ contract_addr ‖ store_key
//! map entry (cw-storage-plus):
//!                     len(namespace) as u16 BE ‖ namespace ‖ key
//! ```

use crate::address_codec::AddressBytes;
use crate::error::KeyError;
use crate::key::{build_key, StorageKey};
use crate::namespace::Namespace;

/// Longest namespace representable by the 2-byte length prefix
pub const MAX_NAMESPACE_LEN: usize = u16::MAX as usize;

/// Key of a contract's metadata entry: `0x02 ‖ contract`
pub fn contract_address_key(contract: &AddressBytes) -> StorageKey {
    build_key([Namespace::ContractAddress.prefix(), contract.as_bytes()])
}

/// Key of an entry in a contract's own storage: `0x03 ‖ contract ‖ store_key`
pub fn contract_store_key(contract: &AddressBytes, store_key: impl AsRef<[u8]>) -> StorageKey {
    build_key([
        Namespace::ContractStore.prefix(),
        contract.as_bytes(),
        store_key.as_ref(),
    ])
}

/// Encode a namespace with its big-endian `u16` length in front.
///
/// This is how cw-storage-plus prefixes `Map` entries, e.g. `"state"` becomes
/// `00 05 73 74 61 74 65`.
pub fn length_prefixed(namespace: impl AsRef<[u8]>) -> Result<Vec<u8>, KeyError> {
    let namespace = namespace.as_ref();
    let len = u16::try_from(namespace.len()).map_err(|_| KeyError::NamespaceTooLong {
        len: namespace.len(),
        max: MAX_NAMESPACE_LEN,
    })?;

    let mut out = Vec::with_capacity(2 + namespace.len());
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(namespace);
    Ok(out)
}

/// Key of a cw-storage-plus `Map` entry: `len(namespace) ‖ namespace ‖ key`
pub fn map_key(
    namespace: impl AsRef<[u8]>,
    key: impl AsRef<[u8]>,
) -> Result<StorageKey, KeyError> {
    let prefix = length_prefixed(namespace)?;
    Ok(build_key([prefix.as_slice(), key.as_ref()]))
}
