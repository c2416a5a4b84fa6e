//! Arkcoin Core Library
//!
//! Key pairs, Wallet Import Format and address derivation for
//! arkcoin-style UTXO coins:
//! - Network parameters (header bytes per coin/network)
//! - Digest pipeline (RIPEMD160 address payloads)
//! - Header-tagged base58 encoding for keys and addresses
//! - secp256k1 key pairs with ECDSA signing
//!
//! Encoded strings carry no checksum. A mistyped address or WIF that only
//! uses base58 characters decodes to different bytes without error.
//!
//! # Example
//!
//! ```rust
//! use arkcoin_core::{decode_address, NetworkParameters, PrivateKey};
//!
//! let params = NetworkParameters::bitcoin();
//! let key = PrivateKey::generate(&params).unwrap();
//!
//! let wif = key.to_wif();
//! let restored = PrivateKey::from_wif(&wif, &params).unwrap();
//! assert_eq!(restored.to_bytes(), key.to_bytes());
//!
//! let address = key.address().unwrap();
//! let digest = decode_address(&address).unwrap();
//! assert_eq!(digest, key.public_key().address_bytes().unwrap());
//! ```

pub mod address;
pub mod base58;
pub mod crypto;
pub mod error;
pub mod keys;
pub mod params;

pub use address::*;
pub use crypto::*;
pub use error::*;
pub use keys::*;
pub use params::*;
