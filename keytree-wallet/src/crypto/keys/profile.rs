//! Purpose derivation profiles (BIP44/49/84/86)
//!
//! Each profile is an immutable record fully parameterizing one derivation
//! scheme: purpose index, coin type, script type, and the version bytes used
//! for extended-key serialization. The closed set of four profiles replaces
//! per-scheme branching everywhere else in the crate.

use std::ops::Range;

use crate::crypto::keys::node::{HdNode, HARDENED_OFFSET};
use crate::crypto::seed::Seed;
use crate::error::{Error, Result};

/// Output script family an address commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScriptType {
    /// Legacy pay-to-public-key-hash
    P2pkh,
    /// SegWit pay-to-witness-public-key-hash nested in P2SH
    P2shP2wpkh,
    /// Native SegWit pay-to-witness-public-key-hash
    P2wpkh,
    /// Taproot pay-to-taproot (x-only tweaked key)
    P2tr,
}

/// Static per-scheme derivation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PurposeProfile {
    /// Scheme name, e.g. "BIP84"
    pub name: &'static str,
    /// Human-readable address family, e.g. "Native SegWit P2WPKH"
    pub description: &'static str,
    /// BIP43 purpose index (derived hardened)
    pub purpose: u32,
    /// BIP44 coin type index (derived hardened)
    pub coin_type: u32,
    /// Address encoding rule for leaf nodes
    pub script_type: ScriptType,
    /// Version bytes for extended private key serialization
    pub private_version: [u8; 4],
    /// Version bytes for extended public key serialization
    pub public_version: [u8; 4],
}

/// Legacy P2PKH profile (xprv/xpub).
pub const BIP44: PurposeProfile = PurposeProfile {
    name: "BIP44",
    description: "Legacy P2PKH",
    purpose: 44,
    coin_type: 0,
    script_type: ScriptType::P2pkh,
    private_version: [0x04, 0x88, 0xAD, 0xE4],
    public_version: [0x04, 0x88, 0xB2, 0x1E],
};

/// Nested SegWit profile (yprv/ypub).
pub const BIP49: PurposeProfile = PurposeProfile {
    name: "BIP49",
    description: "Nested SegWit P2SH",
    purpose: 49,
    coin_type: 0,
    script_type: ScriptType::P2shP2wpkh,
    private_version: [0x04, 0x9D, 0x78, 0x78],
    public_version: [0x04, 0x9D, 0x7C, 0xB2],
};

/// Native SegWit profile (zprv/zpub).
pub const BIP84: PurposeProfile = PurposeProfile {
    name: "BIP84",
    description: "Native SegWit P2WPKH",
    purpose: 84,
    coin_type: 0,
    script_type: ScriptType::P2wpkh,
    private_version: [0x04, 0xB2, 0x43, 0x0C],
    public_version: [0x04, 0xB2, 0x47, 0x46],
};

/// Taproot profile. BIP86 reuses the xprv/xpub version bytes.
pub const BIP86: PurposeProfile = PurposeProfile {
    name: "BIP86",
    description: "Taproot P2TR",
    purpose: 86,
    coin_type: 0,
    script_type: ScriptType::P2tr,
    private_version: [0x04, 0x88, 0xAD, 0xE4],
    public_version: [0x04, 0x88, 0xB2, 0x1E],
};

/// The closed set of supported profiles, in export order.
pub const PROFILES: [PurposeProfile; 4] = [BIP44, BIP49, BIP84, BIP86];

/// Derive the account-level node `m / purpose' / coin_type' / account'`.
pub fn derive_account_chain(
    seed: &Seed,
    profile: &PurposeProfile,
    account: u32,
) -> Result<HdNode> {
    if account >= HARDENED_OFFSET {
        return Err(Error::InvalidInput(format!(
            "account index {} out of range",
            account
        )));
    }

    HdNode::master_from_seed(seed)?
        .derive_child(profile.purpose + HARDENED_OFFSET)?
        .derive_child(profile.coin_type + HARDENED_OFFSET)?
        .derive_child(account + HARDENED_OFFSET)
}

/// Derive the change-level node: non-hardened child 0 (external receive
/// branch) or 1 (internal change branch).
pub fn derive_change(account_node: &HdNode, internal: bool) -> Result<HdNode> {
    account_node.derive_child(internal as u32)
}

/// Derive a leaf address node at a non-hardened index.
///
/// Indices at or above 2^31 would silently become hardened and are rejected
/// instead of coerced.
pub fn derive_address_node(change_node: &HdNode, index: u32) -> Result<HdNode> {
    if index >= HARDENED_OFFSET {
        return Err(Error::InvalidInput(format!(
            "address index {} would be hardened",
            index
        )));
    }
    change_node.derive_child(index)
}

/// Lazily derive leaf nodes over an index range.
///
/// Nothing is computed until the iterator is advanced; each item is an
/// independent pure derivation.
pub fn address_nodes(
    change_node: &HdNode,
    indices: Range<u32>,
) -> impl Iterator<Item = Result<HdNode>> + '_ {
    indices.map(move |index| derive_address_node(change_node, index))
}
