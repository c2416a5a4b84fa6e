//! Header-tagged base58 encoding shared by WIF keys and addresses
//!
//! The wire form is `base58(header || payload)`. Unlike Base58Check there is
//! no hash checksum: a corrupted string that still uses only alphabet
//! characters decodes to different bytes without any error.

use crate::error::{ArkcoinError, Result};

/// Encode raw bytes with the base58 alphabet.
///
/// Each leading `0x00` byte becomes one leading `'1'`.
pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decode a base58 string into raw bytes.
pub fn base58_decode(s: &str) -> Result<Vec<u8>> {
    bs58::decode(s)
        .into_vec()
        .map_err(|e| ArkcoinError::InvalidBase58Character(e.to_string()))
}

/// Encode `payload` prefixed by its role/network `header` byte.
pub fn encode_with_header(header: u8, payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(payload.len() + 1);
    buf.push(header);
    buf.extend_from_slice(payload);
    base58_encode(&buf)
}

/// Decode a header-tagged string.
///
/// The returned bytes still start with the header; callers strip and
/// validate it for their own role.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    base58_decode(s)
}
