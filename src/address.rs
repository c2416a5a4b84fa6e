//! Address derivation from public keys and redeem scripts.

use crate::base58;
use crate::crypto::{hash160, HASH160_LEN};
use crate::error::{ArkcoinError, Result};
use crate::keys::PublicKey;
use crate::params::NetworkParameters;

/// Decoded length of an address: header byte plus digest.
pub const ADDRESS_LEN: usize = HASH160_LEN + 1;

/// Pay-to-pubkey-hash style address for `public_key`.
///
/// Hashes the key in its own serialization, so the compressed and
/// uncompressed forms of one key give two different addresses.
pub fn address_from_public_key(public_key: &PublicKey<'_>) -> Result<String> {
    let digest = public_key.address_bytes()?;
    Ok(base58::encode_with_header(
        public_key.params().address_header,
        &digest,
    ))
}

/// Script-hash address: `header || hash160(script)`.
///
/// Callers normally pass `NetworkParameters::script_header`.
pub fn address_from_redeem_script(script: &[u8], header: u8) -> Result<String> {
    let digest = hash160(script)?;
    Ok(base58::encode_with_header(header, &digest))
}

/// Script-hash address using the network's script header and address digest.
pub fn script_address(script: &[u8], params: &NetworkParameters) -> Result<String> {
    let digest = params.address_digest.digest(script)?;
    Ok(base58::encode_with_header(params.script_header, &digest))
}

/// Decode an address into its header byte and 20-byte digest.
pub fn decode_address_with_header(addr: &str) -> Result<(u8, [u8; HASH160_LEN])> {
    let data = base58::decode(addr)?;
    if data.len() != ADDRESS_LEN {
        return Err(ArkcoinError::InvalidAddress { len: data.len() });
    }

    let mut digest = [0u8; HASH160_LEN];
    digest.copy_from_slice(&data[1..]);
    Ok((data[0], digest))
}

/// Decode an address into its 20-byte digest, dropping the header.
pub fn decode_address(addr: &str) -> Result<[u8; HASH160_LEN]> {
    decode_address_with_header(addr).map(|(_, digest)| digest)
}
