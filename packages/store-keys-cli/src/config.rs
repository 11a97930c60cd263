//! CLI configuration
//!
//! Read from the environment (and a `.env` file if present):
//!
//! - `STORE_KEYS_MODE` - default conversion mode, `strict` (default) or `padded`
//! - `STORE_KEYS_PREFIXES` - extra namespace prefixes, `name=hex,name=hex`
//! - `STORE_KEYS_HRP` - when set, addresses with another prefix are rejected

use eyre::{Result, WrapErr};
use std::env;
use store_keys::{
    decode_address, decode_address_for, AddressBytes, ConversionMode, PrefixRegistry,
};

pub const ENV_MODE: &str = "STORE_KEYS_MODE";
pub const ENV_PREFIXES: &str = "STORE_KEYS_PREFIXES";
pub const ENV_HRP: &str = "STORE_KEYS_HRP";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Conversion mode used when a command does not pass `--mode`
    pub mode: ConversionMode,
    /// Built-in namespaces plus any configured in `STORE_KEYS_PREFIXES`
    pub prefixes: PrefixRegistry,
    /// Required human-readable prefix for decoded addresses
    pub expected_hrp: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: ConversionMode::default(),
            prefixes: PrefixRegistry::with_defaults(),
            expected_hrp: None,
        }
    }
}

impl Config {
    /// Load configuration from `.env` and the environment
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded .env from {:?}", path);
        }
        Self::from_env()
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        let mode = match env::var(ENV_MODE) {
            Ok(raw) => raw
                .parse::<ConversionMode>()
                .wrap_err_with(|| format!("{} must be 'strict' or 'padded'", ENV_MODE))?,
            Err(_) => ConversionMode::default(),
        };

        let mut prefixes = PrefixRegistry::with_defaults();
        if let Ok(raw) = env::var(ENV_PREFIXES) {
            let added = prefixes
                .extend_from_str(&raw)
                .wrap_err_with(|| format!("Invalid {}", ENV_PREFIXES))?;
            tracing::debug!(count = added, "Loaded namespace prefixes from environment");
        }

        let expected_hrp = env::var(ENV_HRP)
            .ok()
            .map(|hrp| hrp.trim().to_ascii_lowercase())
            .filter(|hrp| !hrp.is_empty());

        Ok(Self {
            mode,
            prefixes,
            expected_hrp,
        })
    }

    /// The explicit mode if one was given, otherwise the configured default
    pub fn mode_or_default(&self, explicit: Option<ConversionMode>) -> ConversionMode {
        explicit.unwrap_or(self.mode)
    }

    /// Decode an address, enforcing `expected_hrp` when one is configured
    pub fn decode_address(&self, address: &str, mode: ConversionMode) -> Result<AddressBytes> {
        let decoded = match &self.expected_hrp {
            Some(hrp) => decode_address_for(address, hrp, mode),
            None => decode_address(address, mode),
        };
        decoded.wrap_err_with(|| format!("Failed to decode address '{}'", address.trim()))
    }
}
