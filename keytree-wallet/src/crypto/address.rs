//! Address encoding per script type
//!
//! Converts a compressed public key into the textual address format dictated
//! by a profile's script type. Network-specific prefixes are data, not logic:
//! everything coin-specific lives in [`NetworkParams`].

use secp256k1::{PublicKey, Scalar, Secp256k1};

use crate::crypto::encoding::{base58check_encode, segwit_encode};
use crate::crypto::hash::{hash160, tagged_hash};
use crate::crypto::keys::profile::ScriptType;
use crate::error::{Error, Result};

/// Network prefixes consumed by address encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct NetworkParams {
    /// Base58Check version byte for P2PKH addresses
    pub p2pkh_version: u8,
    /// Base58Check version byte for P2SH addresses
    pub p2sh_version: u8,
    /// Bech32 human-readable part for witness addresses
    pub hrp: &'static str,
}

/// Bitcoin mainnet prefixes.
pub const BITCOIN: NetworkParams = NetworkParams {
    p2pkh_version: 0x00,
    p2sh_version: 0x05,
    hrp: "bc",
};

/// Encode a compressed public key as an address of the given script type.
pub fn encode_address(
    pubkey: &[u8],
    script_type: ScriptType,
    params: &NetworkParams,
) -> Result<String> {
    if pubkey.len() != 33 {
        return Err(Error::InvalidInput(format!(
            "expected 33-byte compressed public key, got {} bytes",
            pubkey.len()
        )));
    }

    match script_type {
        ScriptType::P2pkh => Ok(base58check_encode(
            &[params.p2pkh_version],
            &hash160(pubkey),
        )),
        ScriptType::P2shP2wpkh => {
            // P2SH over the witness program OP_0 PUSH20 <hash160(pubkey)>
            let mut redeem_script = Vec::with_capacity(22);
            redeem_script.extend_from_slice(&[0x00, 0x14]);
            redeem_script.extend_from_slice(&hash160(pubkey));
            Ok(base58check_encode(
                &[params.p2sh_version],
                &hash160(&redeem_script),
            ))
        }
        ScriptType::P2wpkh => segwit_encode(params.hrp, 0, &hash160(pubkey)),
        ScriptType::P2tr => {
            let output_key = taproot_output_key(pubkey)?;
            segwit_encode(params.hrp, 1, &output_key)
        }
    }
}

/// Compute the BIP341 no-script-path output key:
/// `internal + SHA256_TapTweak(internal) * G`, x-only.
fn taproot_output_key(pubkey: &[u8]) -> Result<[u8; 32]> {
    let public_key = PublicKey::from_slice(pubkey)
        .map_err(|e| Error::InvalidInput(format!("invalid public key: {}", e)))?;
    let (internal_key, _) = public_key.x_only_public_key();

    let tweak = tagged_hash("TapTweak", &internal_key.serialize());
    let tweak = Scalar::from_be_bytes(tweak)
        .map_err(|_| Error::Encoding("taproot tweak not below curve order".to_string()))?;

    let secp = Secp256k1::new();
    let (output_key, _) = internal_key
        .add_tweak(&secp, &tweak)
        .map_err(|e| Error::Encoding(format!("taproot tweak failed: {}", e)))?;

    Ok(output_key.serialize())
}
