//! Namespace prefixes
//!
//! Every logical namespace in the store is identified by a fixed prefix. The
//! built-in [`Namespace`] values are the wasm keeper's top-level prefixes;
//! [`PrefixRegistry`] maps names to prefixes and accepts caller-supplied
//! entries (e.g. the prefix of a contract's own state map).
//!
//! ## Built-in Prefixes
//!
//! | Name                    | Prefix |
//! |-------------------------|--------|
//! | `code`                  | `0x01` |
//! | `contract_address`      | `0x02` |
//! | `contract_store`        | `0x03` |
//! | `sequence`              | `0x04` |
//! | `contract_code_history` | `0x05` |
//! | `contract_by_code_id`   | `0x06` |
//! | `pinned_code_index`     | `0x07` |
//! | `tx_counter`            | `0x08` |
//! | `contracts_by_creator`  | `0x09` |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;

/// Wasm keeper top-level namespaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    Code,
    ContractAddress,
    ContractStore,
    Sequence,
    ContractCodeHistory,
    ContractByCodeId,
    PinnedCodeIndex,
    TxCounter,
    ContractsByCreator,
}

impl Namespace {
    pub const ALL: [Namespace; 9] = [
        Namespace::Code,
        Namespace::ContractAddress,
        Namespace::ContractStore,
        Namespace::Sequence,
        Namespace::ContractCodeHistory,
        Namespace::ContractByCodeId,
        Namespace::PinnedCodeIndex,
        Namespace::TxCounter,
        Namespace::ContractsByCreator,
    ];

    /// Fixed prefix bytes for this namespace
    pub fn prefix(&self) -> &'static [u8] {
        match self {
            Namespace::Code => &[0x01],
            Namespace::ContractAddress => &[0x02],
            Namespace::ContractStore => &[0x03],
            Namespace::Sequence => &[0x04],
            Namespace::ContractCodeHistory => &[0x05],
            Namespace::ContractByCodeId => &[0x06],
            Namespace::PinnedCodeIndex => &[0x07],
            Namespace::TxCounter => &[0x08],
            Namespace::ContractsByCreator => &[0x09],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Code => "code",
            Namespace::ContractAddress => "contract_address",
            Namespace::ContractStore => "contract_store",
            Namespace::Sequence => "sequence",
            Namespace::ContractCodeHistory => "contract_code_history",
            Namespace::ContractByCodeId => "contract_by_code_id",
            Namespace::PinnedCodeIndex => "pinned_code_index",
            Namespace::TxCounter => "tx_counter",
            Namespace::ContractsByCreator => "contracts_by_creator",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_name(s);
        Namespace::ALL
            .into_iter()
            .find(|ns| ns.as_str() == name)
            .ok_or(KeyError::UnknownNamespace { name })
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Name → prefix mapping used to resolve key segments by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixRegistry {
    prefixes: BTreeMap<String, Vec<u8>>,
}

impl PrefixRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in [`Namespace`]
    pub fn with_defaults() -> Self {
        let prefixes = Namespace::ALL
            .into_iter()
            .map(|ns| (ns.as_str().to_string(), ns.prefix().to_vec()))
            .collect();
        Self { prefixes }
    }

    /// Add or replace a prefix. Returns the previous prefix for `name`, if any.
    pub fn insert(
        &mut self,
        name: impl AsRef<str>,
        prefix: Vec<u8>,
    ) -> Result<Option<Vec<u8>>, KeyError> {
        let name = normalize_name(name.as_ref());
        if name.is_empty() {
            return Err(KeyError::InvalidPrefix {
                name,
                reason: "namespace name is empty".to_string(),
            });
        }
        if prefix.is_empty() {
            return Err(KeyError::InvalidPrefix {
                name,
                reason: "prefix is empty".to_string(),
            });
        }

        let previous = self.prefixes.insert(name.clone(), prefix);
        if previous.is_some() {
            tracing::debug!(namespace = %name, "Overriding namespace prefix");
        }
        Ok(previous)
    }

    pub fn get(&self, name: &str) -> Result<&[u8], KeyError> {
        let name = normalize_name(name);
        self.prefixes
            .get(&name)
            .map(Vec::as_slice)
            .ok_or(KeyError::UnknownNamespace { name })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.prefixes.contains_key(&normalize_name(name))
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.prefixes
            .iter()
            .map(|(name, prefix)| (name.as_str(), prefix.as_slice()))
    }

    /// Merge entries from a `name=hex,name=hex` string into this registry.
    ///
    /// Hex values may carry a `0x` prefix. Entries are separated by commas or
    /// semicolons; blank entries are skipped. Nothing is inserted if any entry
    /// is malformed.
    pub fn extend_from_str(&mut self, entries: &str) -> Result<usize, KeyError> {
        let parsed = parse_entries(entries)?;
        let count = parsed.len();
        for (name, prefix) in parsed {
            self.insert(name, prefix)?;
        }
        Ok(count)
    }
}

/// Parse `name=hex` pairs separated by `,` or `;`.
pub fn parse_entries(entries: &str) -> Result<Vec<(String, Vec<u8>)>, KeyError> {
    let mut parsed = Vec::new();

    for entry in entries.split([',', ';']) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (name, value) = entry.split_once('=').ok_or_else(|| KeyError::InvalidPrefix {
            name: entry.to_string(),
            reason: "expected name=hex".to_string(),
        })?;

        let name = normalize_name(name);
        if name.is_empty() {
            return Err(KeyError::InvalidPrefix {
                name,
                reason: "namespace name is empty".to_string(),
            });
        }
        let prefix = parse_prefix_hex(&name, value)?;
        parsed.push((name, prefix));
    }

    Ok(parsed)
}

fn parse_prefix_hex(name: &str, value: &str) -> Result<Vec<u8>, KeyError> {
    let value = value.trim();
    let hex_str = value.strip_prefix("0x").unwrap_or(value);
    if hex_str.is_empty() {
        return Err(KeyError::InvalidPrefix {
            name: name.to_string(),
            reason: "prefix is empty".to_string(),
        });
    }
    hex::decode(hex_str).map_err(|e| KeyError::InvalidPrefix {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}
