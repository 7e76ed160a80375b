//! Textual encodings for keys and addresses.

use crate::crypto::hash::double_sha256;
use crate::error::{Error, Result};

/// Encode bytes as Base58Check: version || payload || 4-byte checksum.
pub fn base58check_encode(version: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(version.len() + payload.len() + 4);
    data.extend_from_slice(version);
    data.extend_from_slice(payload);

    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..4]);

    bs58::encode(data).into_string()
}

/// Decode a Base58Check string, verifying the checksum.
///
/// Returns (version byte, payload) for the single-version-byte layout used
/// by addresses.
pub fn base58check_decode(encoded: &str) -> Result<(u8, Vec<u8>)> {
    let data = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| Error::Encoding(format!("invalid base58: {}", e)))?;

    if data.len() < 5 {
        return Err(Error::Encoding("base58check payload too short".to_string()));
    }

    let (payload, checksum) = data.split_at(data.len() - 4);
    let computed = double_sha256(payload);
    if checksum != &computed[..4] {
        return Err(Error::Encoding("base58check checksum mismatch".to_string()));
    }

    Ok((payload[0], payload[1..].to_vec()))
}

/// Encode a SegWit address.
///
/// Bech32 for witness version 0, Bech32m for version 1 and above, per
/// BIP173/BIP350.
pub fn segwit_encode(hrp: &str, witness_version: u8, program: &[u8]) -> Result<String> {
    let hrp = bech32::Hrp::parse(hrp)
        .map_err(|e| Error::Encoding(format!("invalid hrp: {}", e)))?;
    let version = bech32::Fe32::try_from(witness_version)
        .map_err(|e| Error::Encoding(format!("invalid witness version: {}", e)))?;

    bech32::segwit::encode(hrp, version, program)
        .map_err(|e| Error::Encoding(format!("segwit encoding failed: {}", e)))
}

/// Decode a SegWit address into (hrp, witness version, witness program).
pub fn segwit_decode(encoded: &str) -> Result<(String, u8, Vec<u8>)> {
    let (hrp, version, program) = bech32::segwit::decode(encoded)
        .map_err(|e| Error::Encoding(format!("segwit decoding failed: {}", e)))?;

    Ok((hrp.to_string(), version.to_u8(), program))
}
