//! Digest pipeline for key derivation and addresses
//!
//! Provides:
//! - SHA256 (password-derived private keys)
//! - RIPEMD160 and hash160 (address payloads)
//! - `AddressDigest`, the per-network choice of address pipeline
//!
//! Every hasher is fed through its `std::io::Write` implementation so that a
//! failed write surfaces as `ArkcoinError::InternalHashFailure` instead of
//! aborting the process.

use std::io::Write;

use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::digest::Output;
use sha2::{Digest, Sha256};

use crate::error::{ArkcoinError, Result};

/// Length of a hash160 digest and of every address payload.
pub const HASH160_LEN: usize = 20;

/// Which digest chain turns a public key or script into an address payload.
///
/// Deployed arkcoin addresses were produced with a single RIPEMD160 pass over
/// the serialized key; the conventional `RIPEMD160(SHA256(x))` chain is
/// available for networks that never shipped the single-hash form. The two
/// yield different, incompatible addresses for the same key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressDigest {
    /// `RIPEMD160(x)`
    #[default]
    Ripemd160,
    /// `RIPEMD160(SHA256(x))`
    Sha256Ripemd160,
}

impl AddressDigest {
    /// Run the selected pipeline over `data`.
    pub fn digest(self, data: &[u8]) -> Result<[u8; HASH160_LEN]> {
        match self {
            AddressDigest::Ripemd160 => hash160(data),
            AddressDigest::Sha256Ripemd160 => ripemd160(&sha256(data)?),
        }
    }
}

fn write_digest<D: Digest + Write>(data: &[u8]) -> Result<Output<D>> {
    let mut hasher = D::new();
    hasher
        .write_all(data)
        .map_err(|e| ArkcoinError::InternalHashFailure(e.to_string()))?;
    Ok(hasher.finalize())
}

/// Compute SHA256 hash
pub fn sha256(data: &[u8]) -> Result<[u8; 32]> {
    let hash = write_digest::<Sha256>(data)?;
    let mut out = [0u8; 32];
    out.copy_from_slice(&hash);
    Ok(out)
}

/// Compute RIPEMD160 hash
pub fn ripemd160(data: &[u8]) -> Result<[u8; HASH160_LEN]> {
    let hash = write_digest::<Ripemd160>(data)?;
    let mut out = [0u8; HASH160_LEN];
    out.copy_from_slice(&hash);
    Ok(out)
}

/// The 160-bit address digest.
///
/// This is a single RIPEMD160 pass with no SHA256 pre-hash, matching the
/// addresses already on the network. Use [`AddressDigest::Sha256Ripemd160`]
/// for the conventional double hash.
pub fn hash160(data: &[u8]) -> Result<[u8; HASH160_LEN]> {
    ripemd160(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATOR_COMPRESSED: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    #[test]
    fn test_sha256() {
        let hash = sha256(b"correct horse battery staple").unwrap();
        assert_eq!(
            hex::encode(hash),
            "c4bbcb1fbec99d65bf59d85c8cb62ee2db963f0fe106f483d9afa73bd4e39a8a"
        );
    }

    #[test]
    fn test_ripemd160() {
        let hash = ripemd160(b"abc").unwrap();
        assert_eq!(hex::encode(hash), "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc");
    }

    #[test]
    fn test_hash160_is_single_ripemd160() {
        let pubkey = hex::decode(GENERATOR_COMPRESSED).unwrap();
        assert_eq!(hash160(&pubkey).unwrap(), ripemd160(&pubkey).unwrap());
        assert_eq!(
            hex::encode(hash160(&pubkey).unwrap()),
            "e1c903c0d8d2b6458ffbe8e936cf395ef18b9c89"
        );
    }

    #[test]
    fn test_address_digest_pipelines() {
        let pubkey = hex::decode(GENERATOR_COMPRESSED).unwrap();

        let single = AddressDigest::Ripemd160.digest(&pubkey).unwrap();
        assert_eq!(single, hash160(&pubkey).unwrap());

        // Well-known Bitcoin hash160 of the generator point
        let double = AddressDigest::Sha256Ripemd160.digest(&pubkey).unwrap();
        assert_eq!(hex::encode(double), "751e76e8199196d454941c45d1b3a323f1433bd6");

        assert_ne!(single, double);
    }

    #[test]
    fn test_address_digest_serde() {
        assert_eq!(AddressDigest::default(), AddressDigest::Ripemd160);
        let json = serde_json::to_string(&AddressDigest::Sha256Ripemd160).unwrap();
        assert_eq!(json, "\"sha256_ripemd160\"");
    }
}
