//! Error types for arkcoin-core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArkcoinError {
    #[error("Entropy source unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("Invalid private key scalar")]
    InvalidScalar,

    #[error("Malformed WIF: decoded {len} bytes, expected 33 or 34")]
    MalformedWif { len: usize },

    #[error("Unrecognized header byte: {0:#04x}")]
    UnrecognizedHeader(u8),

    #[error("Invalid base58 string: {0}")]
    InvalidBase58Character(String),

    #[error("Invalid address: decoded {len} bytes, expected 21")]
    InvalidAddress { len: usize },

    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    #[error("Signature is invalid")]
    SignatureInvalid,

    #[error("Signing failed: {0}")]
    SigningFailure(String),

    #[error("Invalid public key: {0}")]
    CurveParseFailure(String),

    #[error("Hash computation failed: {0}")]
    InternalHashFailure(String),

    #[error("Invalid network parameters: {0}")]
    InvalidParameters(String),
}

pub type Result<T> = std::result::Result<T, ArkcoinError>;
