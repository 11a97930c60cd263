//! Key segments given on the command line
//!
//! Each segment is written as `kind:value`:
//!
//! | Kind   | Value                     | Bytes                          |
//! |--------|---------------------------|--------------------------------|
//! | `ns`   | namespace name            | registered prefix              |
//! | `hex`  | hex, `0x` optional        | decoded hex                    |
//! | `str`  | any UTF-8 text            | the text's bytes               |
//! | `addr` | bech32 address            | decoded address bytes          |
//! | `len`  | cw-storage-plus namespace | `u16` BE length ‖ namespace    |

use eyre::{eyre, Result, WrapErr};
use std::str::FromStr;
use store_keys::{length_prefixed, ConversionMode, StorageKey};

use crate::config::Config;

/// One ordered piece of a storage key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Namespace(String),
    Hex(Vec<u8>),
    Text(String),
    Address(String),
    LengthPrefixed(String),
}

impl FromStr for Segment {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| eyre!("Segment '{}' must be written as kind:value", s))?;

        match kind.trim().to_ascii_lowercase().as_str() {
            "ns" => Ok(Segment::Namespace(value.to_string())),
            "hex" => {
                let bytes = StorageKey::from_hex(value)
                    .wrap_err_with(|| format!("Invalid hex segment '{}'", value))?;
                Ok(Segment::Hex(bytes.into_vec()))
            }
            "str" => Ok(Segment::Text(value.to_string())),
            "addr" => Ok(Segment::Address(value.to_string())),
            "len" => Ok(Segment::LengthPrefixed(value.to_string())),
            other => Err(eyre!(
                "Unknown segment kind '{}' (expected ns, hex, str, addr, len)",
                other
            )),
        }
    }
}

impl Segment {
    /// Resolve to raw bytes using the configured registry and address policy
    pub fn resolve(&self, config: &Config, mode: ConversionMode) -> Result<Vec<u8>> {
        match self {
            Segment::Namespace(name) => Ok(config.prefixes.get(name)?.to_vec()),
            Segment::Hex(bytes) => Ok(bytes.clone()),
            Segment::Text(text) => Ok(text.as_bytes().to_vec()),
            Segment::Address(address) => Ok(config.decode_address(address, mode)?.into_vec()),
            Segment::LengthPrefixed(namespace) => Ok(length_prefixed(namespace)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segments() {
        assert_eq!(
            "ns:contract_store".parse::<Segment>().unwrap(),
            Segment::Namespace("contract_store".to_string())
        );
        assert_eq!(
            "hex:0x000005".parse::<Segment>().unwrap(),
            Segment::Hex(vec![0, 0, 5])
        );
        assert_eq!(
            "str:a:b".parse::<Segment>().unwrap(),
            Segment::Text("a:b".to_string())
        );
        assert_eq!(
            "LEN:state".parse::<Segment>().unwrap(),
            Segment::LengthPrefixed("state".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("state".parse::<Segment>().is_err());
        assert!("raw:00".parse::<Segment>().is_err());
        assert!("hex:xyz".parse::<Segment>().is_err());
    }

    #[test]
    fn test_resolve() {
        let config = Config::default();
        let mode = ConversionMode::Strict;

        let ns: Segment = "ns:contract_address".parse().unwrap();
        assert_eq!(ns.resolve(&config, mode).unwrap(), vec![0x02]);

        let len: Segment = "len:state".parse().unwrap();
        assert_eq!(len.resolve(&config, mode).unwrap(), b"\x00\x05state".to_vec());

        let addr: Segment = "addr:wasm1sejq8wn2qyw0vhgk3y0ds3r6a7fssl57776aek"
            .parse()
            .unwrap();
        assert_eq!(
            hex::encode(addr.resolve(&config, mode).unwrap()),
            "866403ba6a011cf65d16891ed8447aef93087e9e"
        );

        let unknown: Segment = "ns:balances".parse().unwrap();
        assert!(unknown.resolve(&config, mode).is_err());
    }

    #[test]
    fn test_resolve_enforces_expected_hrp() {
        let config = Config {
            expected_hrp: Some("terra".to_string()),
            ..Config::default()
        };
        let addr: Segment = "addr:wasm1sejq8wn2qyw0vhgk3y0ds3r6a7fssl57776aek"
            .parse()
            .unwrap();
        assert!(addr.resolve(&config, ConversionMode::Strict).is_err());
    }
}
