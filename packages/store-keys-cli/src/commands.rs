//! Command implementations
//!
//! Each command returns the text to print so it can be tested without a
//! process boundary. Errors are returned before anything is rendered.

use eyre::{Result, WrapErr};
use store_keys::{build_key, contract_address_key, contract_store_key, ConversionMode, StorageKey};
use tracing::{debug, info};

use crate::config::Config;
use crate::segment::Segment;

/// `decode`: show the raw bytes behind an address
pub fn decode_command(config: &Config, address: &str, mode: ConversionMode) -> Result<String> {
    let decoded = config.decode_address(address, mode)?;
    info!(hrp = %decoded.hrp(), len = decoded.len(), %mode, "Address decoded");

    Ok(format!(
        "hrp:    {}\nlength: {}\nhex:    {}",
        decoded.hrp(),
        decoded.len(),
        decoded.to_hex()
    ))
}

/// `key`: concatenate segments in the given order
pub fn key_command(config: &Config, segments: &[String], mode: ConversionMode) -> Result<String> {
    let parsed = segments
        .iter()
        .map(|raw| raw.parse::<Segment>())
        .collect::<Result<Vec<_>>>()?;

    let mut resolved = Vec::with_capacity(parsed.len());
    for (index, segment) in parsed.iter().enumerate() {
        let bytes = segment
            .resolve(config, mode)
            .wrap_err_with(|| format!("Segment {} ('{}')", index + 1, segments[index]))?;
        debug!(index, len = bytes.len(), "Resolved segment");
        resolved.push(bytes);
    }

    let key = build_key(&resolved);
    info!(segments = resolved.len(), len = key.len(), "Key built");
    Ok(key.to_hex())
}

/// `contract`: contract metadata key, or a contract store key when
/// `store_key_hex` is given
pub fn contract_command(
    config: &Config,
    address: &str,
    store_key_hex: Option<&str>,
    mode: ConversionMode,
) -> Result<String> {
    let contract = config.decode_address(address, mode)?;

    let key = match store_key_hex {
        Some(raw) => {
            let store_key =
                StorageKey::from_hex(raw).wrap_err("Invalid --store-key-hex value")?;
            contract_store_key(&contract, &store_key)
        }
        None => contract_address_key(&contract),
    };

    Ok(key.to_hex())
}

/// `namespaces`: list registered prefixes
pub fn namespaces_command(config: &Config) -> String {
    config
        .prefixes
        .iter()
        .map(|(name, prefix)| format!("{:<24} 0x{}", name, hex::encode(prefix)))
        .collect::<Vec<_>>()
        .join("\n")
}
