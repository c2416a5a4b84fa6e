//! secp256k1 key pairs
//!
//! Provides:
//! - Private key construction (random, password, raw bytes, WIF)
//! - WIF export
//! - Public key import and serialization
//! - ECDSA signing and verification over 32-byte message hashes
//!
//! A `PublicKey` borrows the `NetworkParameters` it was created with, so the
//! parameters must outlive every key built from them.

use std::fmt;

use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::address;
use crate::base58;
use crate::crypto::{self, HASH160_LEN};
use crate::error::{ArkcoinError, Result};
use crate::params::NetworkParameters;

/// Length of a serialized private scalar.
pub const PRIVATE_KEY_LEN: usize = 32;
/// Length of a SEC1 compressed public key.
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;
/// Length of a SEC1 uncompressed public key.
pub const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;

/// Trailing WIF byte marking a key whose public key is serialized compressed.
const WIF_COMPRESSED_FLAG: u8 = 0x01;

/// A secp256k1 public key together with its serialization flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey<'p> {
    key: VerifyingKey,
    compressed: bool,
    params: &'p NetworkParameters,
}

impl<'p> PublicKey<'p> {
    /// Parse a SEC1-encoded public key.
    ///
    /// A 33-byte input is treated as compressed, anything else the curve
    /// accepts as uncompressed.
    pub fn from_slice(bytes: &[u8], params: &'p NetworkParameters) -> Result<Self> {
        let key = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| ArkcoinError::CurveParseFailure(e.to_string()))?;
        Ok(Self {
            key,
            compressed: bytes.len() == COMPRESSED_PUBLIC_KEY_LEN,
            params,
        })
    }

    /// Parse a hex-encoded SEC1 public key (0x prefix optional).
    pub fn from_hex(pubkey_hex: &str, params: &'p NetworkParameters) -> Result<Self> {
        let bytes = hex::decode(pubkey_hex.trim_start_matches("0x"))
            .map_err(|e| ArkcoinError::CurveParseFailure(e.to_string()))?;
        Self::from_slice(&bytes, params)
    }

    /// SEC1 encoding: 33 bytes if compressed, 65 bytes otherwise.
    pub fn serialize(&self) -> Vec<u8> {
        self.key.to_encoded_point(self.compressed).as_bytes().to_vec()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.serialize())
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn params(&self) -> &'p NetworkParameters {
        self.params
    }

    /// The 20-byte address payload for this key.
    pub fn address_bytes(&self) -> Result<[u8; HASH160_LEN]> {
        self.params.address_digest.digest(&self.serialize())
    }

    /// The network-tagged address for this key.
    pub fn address(&self) -> Result<String> {
        address::address_from_public_key(self)
    }

    /// Verify a DER signature over a 32-byte message hash.
    ///
    /// High-S signatures are accepted.
    pub fn verify(&self, signature: &[u8], message_hash: &[u8; 32]) -> Result<()> {
        let signature = Signature::from_der(signature)
            .map_err(|e| ArkcoinError::MalformedSignature(e.to_string()))?;
        let signature = signature.normalize_s().unwrap_or(signature);

        self.key
            .verify_prehash(message_hash, &signature)
            .map_err(|_| ArkcoinError::SignatureInvalid)
    }

    fn with_compression(self, compressed: bool) -> Self {
        Self { compressed, ..self }
    }
}

/// A secp256k1 private key and the public key derived from it.
///
/// The public key is computed once at construction and is never set
/// independently of the scalar.
pub struct PrivateKey<'p> {
    key: SigningKey,
    public_key: PublicKey<'p>,
}

impl<'p> PrivateKey<'p> {
    fn from_signing_key(key: SigningKey, compressed: bool, params: &'p NetworkParameters) -> Self {
        let public_key = PublicKey {
            key: *key.verifying_key(),
            compressed,
            params,
        };
        Self { key, public_key }
    }

    /// Generate a random key from the operating system's entropy source.
    ///
    /// The public key is serialized compressed.
    pub fn generate(params: &'p NetworkParameters) -> Result<Self> {
        let mut bytes = [0u8; PRIVATE_KEY_LEN];
        loop {
            OsRng
                .try_fill_bytes(&mut bytes)
                .map_err(|e| ArkcoinError::RandomnessUnavailable(e.to_string()))?;

            // Out-of-range draws are astronomically rare; draw again
            if let Ok(key) = SigningKey::from_bytes((&bytes[..]).into()) {
                tracing::trace!("generated private key");
                return Ok(Self::from_signing_key(key, true, params));
            }
        }
    }

    /// Derive a key from `SHA256(password)`.
    ///
    /// There is no salt and no key stretching, so any guessable password
    /// yields a key that can be brute forced. This is not a substitute for
    /// [`PrivateKey::generate`].
    pub fn from_password(password: &str, params: &'p NetworkParameters) -> Result<Self> {
        let hash = crypto::sha256(password.as_bytes())?;
        Self::from_raw_bytes(&hash, params)
    }

    /// Use 32 bytes directly as the private scalar.
    ///
    /// Fails with `InvalidScalar` on the wrong length, on zero, and on values
    /// not below the curve order. The public key is serialized compressed.
    pub fn from_raw_bytes(bytes: &[u8], params: &'p NetworkParameters) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(ArkcoinError::InvalidScalar);
        }
        let key = SigningKey::from_bytes(bytes.into()).map_err(|_| ArkcoinError::InvalidScalar)?;
        Ok(Self::from_signing_key(key, true, params))
    }

    /// Import a key from Wallet Import Format.
    ///
    /// The decoded bytes are `header || scalar` (33 bytes, uncompressed) or
    /// `header || scalar || 0x01` (34 bytes, compressed). The header must be
    /// one of the network's private key headers.
    pub fn from_wif(wif: &str, params: &'p NetworkParameters) -> Result<Self> {
        let data = base58::decode(wif)?;
        let (&header, body) = data
            .split_first()
            .ok_or(ArkcoinError::MalformedWif { len: 0 })?;

        if !params.private_key_headers.contains(header) {
            return Err(ArkcoinError::UnrecognizedHeader(header));
        }

        let compressed = match (data.len(), body.last()) {
            (33, _) => false,
            (34, Some(&WIF_COMPRESSED_FLAG)) => true,
            (len, _) => return Err(ArkcoinError::MalformedWif { len }),
        };
        tracing::debug!(header, compressed, "decoded WIF private key");

        let key = Self::from_raw_bytes(&body[..PRIVATE_KEY_LEN], params)?;
        Ok(key.with_compression(compressed))
    }

    /// Export in Wallet Import Format using the network's primary header.
    pub fn to_wif(&self) -> String {
        let mut payload = Vec::with_capacity(PRIVATE_KEY_LEN + 1);
        payload.extend_from_slice(&self.to_bytes());
        if self.public_key.compressed {
            payload.push(WIF_COMPRESSED_FLAG);
        }
        base58::encode_with_header(self.params().private_key_headers.primary, &payload)
    }

    /// The same scalar with the given public key serialization.
    pub fn with_compression(self, compressed: bool) -> Self {
        Self {
            key: self.key,
            public_key: self.public_key.with_compression(compressed),
        }
    }

    /// Sign a 32-byte message hash, returning a DER-encoded signature.
    ///
    /// Nonces are deterministic (RFC 6979) and `s` is normalized low.
    pub fn sign(&self, message_hash: &[u8; 32]) -> Result<Vec<u8>> {
        let signature: Signature = self
            .key
            .sign_prehash(message_hash)
            .map_err(|e| ArkcoinError::SigningFailure(e.to_string()))?;
        Ok(signature.to_der().as_bytes().to_vec())
    }

    /// Big-endian private scalar.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LEN] {
        let mut out = [0u8; PRIVATE_KEY_LEN];
        out.copy_from_slice(&self.key.to_bytes());
        out
    }

    pub fn public_key(&self) -> &PublicKey<'p> {
        &self.public_key
    }

    pub fn is_compressed(&self) -> bool {
        self.public_key.compressed
    }

    pub fn params(&self) -> &'p NetworkParameters {
        self.public_key.params
    }

    pub fn address(&self) -> Result<String> {
        self.public_key.address()
    }
}

impl fmt::Debug for PrivateKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}
