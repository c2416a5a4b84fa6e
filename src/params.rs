//! Network parameters: the header bytes that tag keys and addresses.

use serde::{Deserialize, Serialize};

use crate::crypto::AddressDigest;
use crate::error::{ArkcoinError, Result};

/// Header bytes accepted on WIF import.
///
/// `primary` is the byte written by `PrivateKey::to_wif`; `alternates` are
/// additionally accepted when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKeyHeaders {
    pub primary: u8,
    #[serde(default)]
    pub alternates: Vec<u8>,
}

impl PrivateKeyHeaders {
    pub fn new(primary: u8) -> Self {
        Self {
            primary,
            alternates: Vec::new(),
        }
    }

    pub fn contains(&self, header: u8) -> bool {
        self.primary == header || self.alternates.contains(&header)
    }
}

/// Header bytes for one coin/network.
///
/// Built once by the caller and shared read-only by every key and address
/// operation. No check is made that the headers are distinct across roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkParameters {
    pub private_key_headers: PrivateKeyHeaders,
    pub address_header: u8,
    pub script_header: u8,
    pub extended_private_header: [u8; 4],
    pub extended_public_header: [u8; 4],
    #[serde(default)]
    pub address_digest: AddressDigest,
}

impl NetworkParameters {
    /// Bitcoin mainnet header bytes.
    pub fn bitcoin() -> Self {
        Self {
            private_key_headers: PrivateKeyHeaders::new(0x80),
            address_header: 0x00,
            script_header: 0x05,
            extended_private_header: [0x04, 0x88, 0xAD, 0xE4],
            extended_public_header: [0x04, 0x88, 0xB2, 0x1E],
            address_digest: AddressDigest::default(),
        }
    }

    /// Bitcoin testnet header bytes.
    pub fn testnet() -> Self {
        Self {
            private_key_headers: PrivateKeyHeaders::new(0xEF),
            address_header: 0x6F,
            script_header: 0xC4,
            extended_private_header: [0x04, 0x35, 0x83, 0x94],
            extended_public_header: [0x04, 0x35, 0x87, 0xCF],
            address_digest: AddressDigest::default(),
        }
    }

    /// Load parameters from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)
            .map_err(|e| ArkcoinError::InvalidParameters(e.to_string()))?;
        tracing::debug!(
            address_header = params.address_header,
            script_header = params.script_header,
            address_digest = ?params.address_digest,
            "loaded network parameters"
        );
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ArkcoinError::InvalidParameters(e.to_string()))
    }

    pub fn with_address_digest(mut self, address_digest: AddressDigest) -> Self {
        self.address_digest = address_digest;
        self
    }
}
